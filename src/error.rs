//! Error types for dictionary loading, comparison and feedback rounds.

use crate::config::{MAX_TRIES, WORD_SIZE};
use thiserror::Error;

/// Errors raised while building or loading a dictionary. All of them are
/// fatal to startup.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A word does not have exactly `WORD_SIZE` letters.
    #[error("word {word:?} has {len} letters, expected {}", WORD_SIZE)]
    WordLengthMismatch { word: String, len: usize },

    /// A word contains a character outside `a..=z`.
    #[error("word {word:?} contains invalid character {ch:?}")]
    InvalidAlphabetCharacter { word: String, ch: char },

    /// The dictionary would hold more words than configured.
    #[error("dictionary too large: more than {max} words")]
    DictionaryTooLarge { max: usize },

    /// The dictionary source could not be read.
    #[error("failed to read dictionary")]
    Io(#[from] std::io::Error),
}

/// Errors raised when comparing a guess to a reference word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The guess is not a dictionary word; the player should try another.
    #[error("{0} is not in dictionary, try again")]
    GuessNotInDictionary(String),
}

/// Errors raised while folding a feedback round into a constraint model.
///
/// The model is left untouched when any of these is returned, and the
/// message is suitable to show to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round is not exactly `WORD_SIZE` pairs, encoded data is not a whole
    /// number of rounds, or it holds more than `MAX_TRIES` rounds.
    #[error(
        "invalid data string format: {pairs} feedback pairs is not a whole number of \
         {}-letter rounds within {} attempts",
        WORD_SIZE,
        MAX_TRIES
    )]
    MalformedRoundLength { pairs: usize },

    /// A feedback code is not one of exact, wrong or absent.
    #[error("invalid code {0:?} in data")]
    InvalidCode(String),

    /// A letter is outside `a..=z`.
    #[error("invalid letter {0:?} in data")]
    InvalidLetter(char),

    /// Two different letters were both reported at the same exact position.
    #[error("conflicting letters at the same exact location: {letter:?} at position {position}")]
    ConflictingExactPosition { letter: char, position: usize },

    /// A letter known at an exact position is reported absent there.
    #[error("letter {letter:?} at exact location {position} is also given as not in word")]
    ExactPositionMarkedAbsent { letter: char, position: usize },

    /// A letter known at an exact position is reported as misplaced there.
    #[error(
        "the same letter {letter:?} at position {position} is given both as exact and wrong position"
    )]
    WrongPositionConflictsExact { letter: char, position: usize },

    /// More distinct misplaced letters than a word can hold.
    #[error("too many different letters given as at wrong position")]
    TooManyRequiredLetters,
}

//! Feedback calculation for Wordle guesses.
//!
//! This module handles computing the feedback pattern (exact/wrong/absent)
//! for a guess against a reference word, with each reference letter
//! consumed at most once so that repeated letters come out right.

use crate::config::WORD_SIZE;
use crate::dictionary::Dictionary;
use crate::error::{CompareError, RoundError};
use crate::word::Word;
use std::str::FromStr;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Exact,
    /// Letter in the word but at another position (yellow)
    WrongPosition,
    /// No further instance of this letter in the word (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Exact => '🟩',
            Feedback::WrongPosition => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Compact code used in encoded rounds: `r` (right position),
    /// `w` (wrong position) and `n` (not in word).
    pub fn code(self) -> char {
        match self {
            Feedback::Exact => 'r',
            Feedback::WrongPosition => 'w',
            Feedback::Absent => 'n',
        }
    }

    /// Parse from a character. Accepts the compact codes as well as the
    /// color shorthands g=green, y=yellow, b/x=black.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' | 'g' | '2' => Some(Feedback::Exact),
            'w' | 'y' | '1' => Some(Feedback::WrongPosition),
            'n' | 'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

impl FromStr for Feedback {
    type Err = RoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(Feedback::Exact),
            "wrong" => Ok(Feedback::WrongPosition),
            "absent" => Ok(Feedback::Absent),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        Feedback::from_char(c).ok_or_else(|| RoundError::InvalidCode(s.to_string()))
                    }
                    _ => Err(RoundError::InvalidCode(s.to_string())),
                }
            }
        }
    }
}

/// A complete feedback pattern for a guess, one code per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub [Feedback; WORD_SIZE]);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_EXACT: Self = Self([Feedback::Exact; WORD_SIZE]);

    pub fn new(feedbacks: [Feedback; WORD_SIZE]) -> Self {
        Self(feedbacks)
    }

    /// Calculate the feedback pattern for a guess against a reference word.
    ///
    /// Both words are copied and matched in two passes:
    /// - Exact: same letter at the same position; both letters are blanked
    /// - WrongPosition: the letter is still somewhere in what is left of the
    ///   reference; that one occurrence is blanked
    /// - Absent: everything else
    pub fn calculate(reference: &Word, guess: &Word) -> Self {
        let mut reference_left = *reference.as_bytes();
        let mut guess_left = *guess.as_bytes();
        let mut feedback = [Feedback::Absent; WORD_SIZE];

        for i in 0..WORD_SIZE {
            if guess_left[i] == reference_left[i] {
                feedback[i] = Feedback::Exact;
                guess_left[i] = BLANK;
                reference_left[i] = BLANK;
            }
        }

        for i in 0..WORD_SIZE {
            if guess_left[i] == BLANK {
                continue;
            }
            if let Some(found) = reference_left.iter_mut().find(|b| **b == guess_left[i]) {
                feedback[i] = Feedback::WrongPosition;
                *found = BLANK;
            }
        }

        Self(feedback)
    }

    pub fn feedbacks(&self) -> &[Feedback; WORD_SIZE] {
        &self.0
    }

    /// Check if this pattern represents a win (all exact)
    pub fn is_win(self) -> bool {
        self == Self::ALL_EXACT
    }

    /// Number of exact positions.
    pub fn exact_count(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Exact).count()
    }

    /// Parse a pattern from a string like "gybbb", "rwnnn" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_SIZE {
            return None;
        }
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let arr: [Feedback; WORD_SIZE] = feedbacks?.try_into().ok()?;
        Some(Self(arr))
    }

    /// Pair each code with the letter of `guess` at the same position.
    pub fn round(&self, guess: &Word) -> [(Feedback, char); WORD_SIZE] {
        std::array::from_fn(|i| (self.0[i], guess.letter(i)))
    }

    /// Compact code string, e.g. `nnwrr`.
    pub fn to_code_string(self) -> String {
        self.0.iter().map(|f| f.code()).collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

const BLANK: u8 = b' ';

/// Parse `guess` as a dictionary word.
pub fn dictionary_guess(dictionary: &Dictionary, guess: &str) -> Result<Word, CompareError> {
    Word::parse(guess)
        .ok()
        .filter(|w| dictionary.contains(w))
        .ok_or_else(|| CompareError::GuessNotInDictionary(guess.to_string()))
}

/// Compare `guess` to the trusted `reference`, rejecting guesses that are not
/// dictionary words.
pub fn compare(dictionary: &Dictionary, reference: &Word, guess: &str) -> Result<FeedbackPattern, CompareError> {
    let guess = dictionary_guess(dictionary, guess)?;
    Ok(FeedbackPattern::calculate(reference, &guess))
}

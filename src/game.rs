//! A player's game against a hidden word of the dictionary.

use crate::config::{ALPHABET_SIZE, MAX_TRIES};
use crate::dictionary::{Dictionary, WordId};
use crate::error::CompareError;
use crate::feedback::{dictionary_guess, Feedback, FeedbackPattern};
use crate::word::Word;
use rand::Rng;

/// Best feedback seen so far for a letter, as shown on a keyboard.
/// Ordered so that a key is only ever upgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum KeyState {
    #[default]
    Unknown,
    Absent,
    WrongPosition,
    Exact,
}

impl From<Feedback> for KeyState {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Exact => KeyState::Exact,
            Feedback::WrongPosition => KeyState::WrongPosition,
            Feedback::Absent => KeyState::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    /// All attempts used without finding the word.
    Lost,
}

#[derive(Debug, Clone)]
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    number: WordId,
    reference: Word,
    attempts: Vec<(Word, FeedbackPattern)>,
    keys: [KeyState; ALPHABET_SIZE],
}

impl<'d> Game<'d> {
    /// Play game `number`, the dictionary word at that index.
    pub fn new(dictionary: &'d Dictionary, number: WordId) -> Option<Self> {
        let reference = *dictionary.word_at(number)?;
        Some(Self {
            dictionary,
            number,
            reference,
            attempts: Vec::with_capacity(MAX_TRIES),
            keys: [KeyState::Unknown; ALPHABET_SIZE],
        })
    }

    /// Play a game picked at random. `None` for an empty dictionary.
    pub fn random<R: Rng + ?Sized>(dictionary: &'d Dictionary, rng: &mut R) -> Option<Self> {
        if dictionary.is_empty() {
            return None;
        }
        Self::new(dictionary, rng.gen_range(0..dictionary.len()))
    }

    /// Submit a guess. Words outside the dictionary do not use an attempt.
    /// Guesses after the game is over return the last feedback again.
    pub fn guess(&mut self, word: &str) -> Result<FeedbackPattern, CompareError> {
        let guess = dictionary_guess(self.dictionary, word)?;
        if self.status() != GameStatus::InProgress {
            if let Some(&(_, last)) = self.attempts.last() {
                return Ok(last);
            }
        }

        let pattern = FeedbackPattern::calculate(&self.reference, &guess);
        for (position, feedback) in pattern.feedbacks().iter().enumerate() {
            let key = &mut self.keys[guess.letter_index(position)];
            *key = (*key).max(KeyState::from(*feedback));
        }
        self.attempts.push((guess, pattern));
        Ok(pattern)
    }

    pub fn status(&self) -> GameStatus {
        match self.attempts.last() {
            Some((_, pattern)) if pattern.is_win() => GameStatus::Won,
            _ if self.attempts.len() >= MAX_TRIES => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    pub fn number(&self) -> WordId {
        self.number
    }

    pub fn attempts(&self) -> &[(Word, FeedbackPattern)] {
        &self.attempts
    }

    pub fn remaining_attempts(&self) -> usize {
        MAX_TRIES.saturating_sub(self.attempts.len())
    }

    /// Keyboard state of `letter` (`a..=z`).
    pub fn key(&self, letter: u8) -> KeyState {
        self.keys[(letter - b'a') as usize]
    }

    pub fn keys(&self) -> &[KeyState; ALPHABET_SIZE] {
        &self.keys
    }

    /// The hidden word, once the game is over.
    pub fn reveal(&self) -> Option<&Word> {
        (self.status() != GameStatus::InProgress).then_some(&self.reference)
    }
}

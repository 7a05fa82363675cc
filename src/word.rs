//! Fixed-size words and letter sets.

use crate::config::{ALPHABET_SIZE, WORD_SIZE};
use crate::error::DictionaryError;
use std::fmt;
use std::str::FromStr;

/// A word of exactly `WORD_SIZE` lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_SIZE]);

impl Word {
    /// Validate and build a word from a string slice.
    pub fn parse(s: &str) -> Result<Self, DictionaryError> {
        if let Some(ch) = s.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(DictionaryError::InvalidAlphabetCharacter {
                word: s.to_string(),
                ch,
            });
        }
        let bytes: [u8; WORD_SIZE] =
            s.as_bytes()
                .try_into()
                .map_err(|_| DictionaryError::WordLengthMismatch {
                    word: s.to_string(),
                    len: s.len(),
                })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_SIZE] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII lowercase bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Letter at `position`, as `char`.
    pub fn letter(&self, position: usize) -> char {
        self.0[position] as char
    }

    /// Alphabet index (`0..26`) of the letter at `position`.
    pub fn letter_index(&self, position: usize) -> usize {
        (self.0[position] - b'a') as usize
    }

    /// Set of distinct letters in this word.
    pub fn letters(&self) -> LetterSet {
        self.0.iter().fold(LetterSet::EMPTY, |set, &b| set.with(b))
    }

    /// Number of times `letter` occurs in this word.
    pub fn count(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&b| b == letter).count()
    }

    /// Pack each letter in 5 bits. Distinct words give distinct keys.
    pub fn hash_key(&self) -> u32 {
        self.0
            .iter()
            .fold(0u32, |key, &b| (key << 5) | u32::from(b - b'a'))
    }

    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl FromStr for Word {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A set of letters of the alphabet, one bit per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    /// Build a set from any string; bytes outside `a..=z` are ignored.
    pub fn from_letters(letters: &str) -> Self {
        letters
            .bytes()
            .filter(u8::is_ascii_lowercase)
            .fold(Self::EMPTY, |set, b| set.with(b))
    }

    pub fn with(self, letter: u8) -> Self {
        Self(self.0 | bit(letter))
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..ALPHABET_SIZE as u8)
            .map(|i| b'a' + i)
            .filter(move |&b| self.contains(b))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_lowercase());
    1 << (letter - b'a')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_key_packs_five_bits_per_letter() {
        let word = Word::parse("abcde").unwrap();
        assert_eq!(word.hash_key(), (1 << 15) | (2 << 10) | (3 << 5) | 4);
        assert!(Word::parse("ab").is_err());
    }

    #[test]
    fn letter_set_ignores_non_letters() {
        let set = LetterSet::from_letters("a-b c!");
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "abc");
    }
}

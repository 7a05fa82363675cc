//! Letter-position statistics and suggestion ranking.
//!
//! A word scores the sum, over its positions, of how many words in a set
//! carry the same letter at the same position. The best scoring candidate
//! is not necessarily the answer, but it is the guess whose letters are the
//! most likely to land exactly.

use crate::config::{ALPHABET_SIZE, WORD_SIZE};
use crate::dictionary::Dictionary;
use crate::filter::CandidateSet;
use crate::word::Word;
use std::fmt;

/// Number of words carrying each letter at each position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPositionCounts {
    counts: [[u32; WORD_SIZE]; ALPHABET_SIZE],
    words: usize,
}

impl Default for LetterPositionCounts {
    fn default() -> Self {
        Self {
            counts: [[0; WORD_SIZE]; ALPHABET_SIZE],
            words: 0,
        }
    }
}

impl LetterPositionCounts {
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut stats = Self::default();
        for word in words {
            stats.add(word);
        }
        stats
    }

    pub fn add(&mut self, word: &Word) {
        for position in 0..WORD_SIZE {
            self.counts[word.letter_index(position)][position] += 1;
        }
        self.words += 1;
    }

    /// Words carrying `letter` at `position`.
    pub fn count(&self, letter: u8, position: usize) -> u32 {
        self.counts[(letter - b'a') as usize][position]
    }

    /// Number of words counted.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Sum of the position counts of the word's own letters.
    pub fn score(&self, word: &Word) -> u32 {
        (0..WORD_SIZE)
            .map(|position| self.counts[word.letter_index(position)][position])
            .sum()
    }

    /// Letters present at `position`, most frequent first. Equal counts keep
    /// alphabetical order.
    pub fn ranked_at(&self, position: usize) -> Vec<(char, u32)> {
        let mut ranked: Vec<(char, u32)> = (0..ALPHABET_SIZE)
            .map(|i| ((b'a' + i as u8) as char, self.counts[i][position]))
            .filter(|&(_, n)| n > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Per-letter counts summed over all positions, most frequent first.
    pub fn ranked_global(&self) -> Vec<(char, u32)> {
        let mut ranked: Vec<(char, u32)> = (0..ALPHABET_SIZE)
            .map(|i| ((b'a' + i as u8) as char, self.counts[i].iter().sum::<u32>()))
            .filter(|&(_, n)| n > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Pick the candidate whose letters best match the letter-position
/// frequencies of the whole set.
///
/// Returns `None` for two candidates or fewer: there is either no choice or
/// nothing to prefer one over the other. Otherwise a single word is always
/// returned; equal scores keep the first one in iteration order.
pub fn select_best<'d>(candidates: &CandidateSet<'d>) -> Option<&'d Word> {
    if candidates.len() <= 2 {
        return None;
    }
    let stats = LetterPositionCounts::from_words(candidates.iter());

    let mut best: Option<(&'d Word, u32)> = None;
    for word in candidates.iter() {
        let score = stats.score(word);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((word, score));
        }
    }
    best.map(|(word, _)| word)
}

/// Highest number of times a letter repeats inside a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRepeat {
    pub letter: char,
    /// Instances of the letter in each of those words.
    pub times: usize,
    /// Words reaching that many instances.
    pub words: usize,
    pub example: Word,
}

/// Letter statistics of a whole dictionary.
#[derive(Debug, Clone)]
pub struct LetterReport {
    pub counts: LetterPositionCounts,
    /// Letters repeated at least twice in some word, alphabetically.
    pub repeats: Vec<LetterRepeat>,
}

impl LetterReport {
    pub fn new(dictionary: &Dictionary) -> Self {
        let counts = LetterPositionCounts::from_words(dictionary.iter());

        let mut repeats = Vec::new();
        for letter in b'a'..=b'z' {
            let mut top: Option<LetterRepeat> = None;
            for word in dictionary.iter() {
                let times = word.count(letter);
                let replace = match &mut top {
                    Some(repeat) if repeat.times == times => {
                        repeat.words += 1;
                        false
                    }
                    Some(repeat) => repeat.times < times,
                    None => true,
                };
                if replace {
                    top = Some(LetterRepeat {
                        letter: letter as char,
                        times,
                        words: 1,
                        example: *word,
                    });
                }
            }
            repeats.extend(top.filter(|repeat| repeat.times > 1));
        }

        Self { counts, repeats }
    }
}

impl fmt::Display for LetterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = self.counts.words().max(1) as f64;
        writeln!(f, "{} words in dictionary", self.counts.words())?;

        for position in 0..WORD_SIZE {
            writeln!(f, "Frequency of letters appearing in position {}:", position)?;
            for (letter, n) in self.counts.ranked_at(position) {
                writeln!(f, "  {}: {:.2}%", letter, n as f64 * 100.0 / words)?;
            }
            writeln!(f)?;
        }

        let global = self.counts.ranked_global();
        let total = global.iter().map(|&(_, n)| n).sum::<u32>().max(1) as f64;
        writeln!(f, "Global frequencies:")?;
        for (letter, n) in global {
            writeln!(f, "  {}: {:.2}%", letter, n as f64 * 100.0 / total)?;
        }

        writeln!(f)?;
        writeln!(f, "Max repeats:")?;
        for repeat in &self.repeats {
            writeln!(
                f,
                " letter {} appears {} times in {} word(s) (e.g. {})",
                repeat.letter, repeat.times, repeat.words, repeat.example
            )?;
        }
        Ok(())
    }
}

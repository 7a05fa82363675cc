//! Immutable dictionary of words with hashed membership and stable indices.
//!
//! Every word is stored once, in insertion order, so that a word can be
//! addressed by a [`WordId`]. Membership goes through a chained hash table
//! keyed by [`Word::hash_key`]: the key is exact, so the bucket count only
//! changes chain lengths, never results.

use crate::config::DictionaryConfig;
use crate::error::DictionaryError;
use crate::word::{LetterSet, Word};
use std::io::Read;
use std::path::Path;

/// Stable insertion index of a word in a [`Dictionary`].
pub type WordId = usize;

/// Collision statistics of the hash table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collisions {
    /// Buckets holding more than one word.
    pub buckets: usize,
    /// Longest number of extra words chained in a single bucket.
    pub max_chain: usize,
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    keys: Vec<u32>,
    /// First word of each bucket.
    heads: Vec<Option<WordId>>,
    /// Next word in the same bucket, per word.
    chain: Vec<Option<WordId>>,
    config: DictionaryConfig,
}

impl Dictionary {
    /// Build a dictionary with the default configuration.
    pub fn build<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(words, DictionaryConfig::default())
    }

    /// Build a dictionary. Fails on the first malformed word, or when more
    /// than `config.max_words` distinct words are given. Repeated words are
    /// kept once, at their first index.
    pub fn build_with<I, S>(words: I, config: DictionaryConfig) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let buckets = config.hash_entries.max(1);
        let mut dictionary = Self {
            words: Vec::new(),
            keys: Vec::new(),
            heads: vec![None; buckets],
            chain: Vec::new(),
            config,
        };
        for word in words {
            let word = Word::parse(word.as_ref())?;
            if dictionary.contains(&word) {
                continue;
            }
            if dictionary.words.len() >= config.max_words {
                return Err(DictionaryError::DictionaryTooLarge {
                    max: config.max_words,
                });
            }
            dictionary.insert(word);
        }
        Ok(dictionary)
    }

    /// Read whitespace-separated words from `reader`.
    pub fn from_reader<R: Read>(mut reader: R, config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::build_with(text.split_whitespace(), config)
    }

    /// Load a dictionary file with the default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        log::debug!("loading dictionary from {}", path.display());
        let file = std::fs::File::open(path)?;
        let dictionary = Self::from_reader(std::io::BufReader::new(file), DictionaryConfig::default())?;
        log::debug!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    fn bucket(&self, key: u32) -> usize {
        key as usize % self.heads.len()
    }

    fn insert(&mut self, word: Word) {
        let id = self.words.len();
        let key = word.hash_key();
        let bucket = self.bucket(key);
        self.words.push(word);
        self.keys.push(key);
        self.chain.push(self.heads[bucket]);
        self.heads[bucket] = Some(id);
    }

    /// Index of `word`, if present.
    pub fn lookup(&self, word: &Word) -> Option<WordId> {
        let key = word.hash_key();
        let mut cursor = self.heads[self.bucket(key)];
        while let Some(id) = cursor {
            if self.keys[id] == key {
                return Some(id);
            }
            cursor = self.chain[id];
        }
        None
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.lookup(word).is_some()
    }

    /// Membership test for unvalidated input; malformed words are simply
    /// not in the dictionary.
    pub fn contains_str(&self, word: &str) -> bool {
        Word::parse(word).map_or(false, |w| self.contains(&w))
    }

    /// The word at insertion index `index`.
    pub fn word_at(&self, index: WordId) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn config(&self) -> DictionaryConfig {
        self.config
    }

    /// Lazily yield the words sharing no letter with `excluded`.
    /// The iterator can be cloned to restart from the current point.
    pub fn words_excluding_letters(
        &self,
        excluded: LetterSet,
    ) -> impl Iterator<Item = (WordId, &Word)> + Clone + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(move |(_, word)| !word.letters().intersects(excluded))
    }

    pub fn collisions(&self) -> Collisions {
        let mut collisions = Collisions::default();
        for head in &self.heads {
            let mut chain = 0;
            let mut cursor = *head;
            while let Some(id) = cursor {
                chain += 1;
                cursor = self.chain[id];
            }
            if chain > 1 {
                collisions.buckets += 1;
                collisions.max_chain = collisions.max_chain.max(chain - 1);
            }
        }
        collisions
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bucket_still_resolves_by_key() {
        let config = DictionaryConfig::default().with_hash_entries(1);
        let dictionary = Dictionary::build_with(["crane", "slate", "trace"], config).unwrap();

        let collisions = dictionary.collisions();
        assert_eq!(collisions.buckets, 1);
        assert_eq!(collisions.max_chain, 2);
        assert_eq!(dictionary.lookup(&Word::parse("slate").unwrap()), Some(1));
        assert!(!dictionary.contains_str("stale"));
    }
}

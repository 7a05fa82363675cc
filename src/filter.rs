//! Candidate filter: every dictionary word consistent with a constraint model.

use crate::config::{ALPHABET_SIZE, WORD_SIZE};
use crate::constraints::ConstraintModel;
use crate::dictionary::{Dictionary, WordId};
use crate::word::Word;

/// Dictionary words that satisfy a [`ConstraintModel`], in dictionary order.
/// Words are borrowed from the dictionary through their index.
#[derive(Debug, Clone)]
pub struct CandidateSet<'d> {
    dictionary: &'d Dictionary,
    ids: Vec<WordId>,
}

impl<'d> CandidateSet<'d> {
    /// Every word of the dictionary.
    pub fn all(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            ids: (0..dictionary.len()).collect(),
        }
    }

    pub fn from_ids(dictionary: &'d Dictionary, ids: Vec<WordId>) -> Self {
        Self { dictionary, ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[WordId] {
        &self.ids
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub fn get(&self, index: usize) -> Option<&'d Word> {
        self.ids
            .get(index)
            .and_then(|&id| self.dictionary.word_at(id))
    }

    pub fn first(&self) -> Option<&'d Word> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'d Word> + '_ {
        let dictionary = self.dictionary;
        self.ids.iter().filter_map(move |&id| dictionary.word_at(id))
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.iter().any(|w| w == word)
    }

    /// Keep only the candidates that satisfy `model`.
    pub fn retain(&mut self, model: &ConstraintModel) {
        let dictionary = self.dictionary;
        self.ids
            .retain(|&id| dictionary.word_at(id).map_or(false, |w| matches(model, w)));
    }

    /// Candidates in alphabetical order, for presentation.
    pub fn sorted(&self) -> Vec<&'d Word> {
        let mut words: Vec<&'d Word> = self.iter().collect();
        words.sort();
        words
    }
}

/// Scan `dictionary` for every word consistent with `model`.
pub fn filter<'d>(model: &ConstraintModel, dictionary: &'d Dictionary) -> CandidateSet<'d> {
    let ids = dictionary
        .iter()
        .enumerate()
        .filter(|(_, word)| matches(model, word))
        .map(|(id, _)| id)
        .collect();
    CandidateSet::from_ids(dictionary, ids)
}

/// Whether `word` is consistent with `model`.
///
/// Positions are walked left to right. A letter at a known position must be
/// the known letter. Elsewhere, a letter excluded at that position rejects
/// the word; a still-owed letter is consumed; a letter with no instance
/// left rejects the word. Every owed instance must be consumed by the end.
pub fn matches(model: &ConstraintModel, word: &Word) -> bool {
    let mut owed: [u8; ALPHABET_SIZE] = *model.required_counts();
    let absent = model.absent();

    for position in 0..WORD_SIZE {
        let letter = word.as_bytes()[position];
        if let Some(known) = model.known(position) {
            if known != letter {
                return false;
            }
            continue;
        }
        if model.excluded_at(position).contains(letter) {
            return false;
        }
        let slot = &mut owed[(letter - b'a') as usize];
        if *slot > 0 {
            *slot -= 1;
            continue;
        }
        if absent.contains(letter) {
            return false;
        }
    }

    owed.iter().all(|&count| count == 0)
}

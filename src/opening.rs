//! Opening-sequence search.
//!
//! Proposes sequences of first guesses that never reuse a letter, ranked by
//! the global letter-position frequencies of the dictionary. At each level
//! the `width` best words are kept; each of them is followed by the best
//! words sharing no letter with the sequence so far, down to `depth` levels.

use crate::dictionary::{Dictionary, WordId};
use crate::stats::LetterPositionCounts;
use crate::word::{LetterSet, Word};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

/// One opening word choice, with the choices that can follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningNode {
    pub word: WordId,
    pub weight: u32,
    pub follow: Vec<OpeningNode>,
}

/// Tree of opening sequences over a dictionary.
#[derive(Debug, Clone)]
pub struct OpeningTree<'d> {
    dictionary: &'d Dictionary,
    roots: Vec<OpeningNode>,
    display_depth: usize,
}

/// A path from a root of the tree, with the summed weight of its words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningSequence<'d> {
    pub words: Vec<&'d Word>,
    pub weight: u32,
}

/// Build the opening tree, scoring words with the statistics of the whole
/// dictionary.
pub fn build_opening_report(dictionary: &Dictionary, depth: usize, width: usize) -> OpeningTree<'_> {
    let stats = LetterPositionCounts::from_words(dictionary.iter());
    let roots = best_openings(dictionary, &stats, LetterSet::EMPTY, depth, width);
    OpeningTree {
        dictionary,
        roots,
        display_depth: depth,
    }
}

fn best_openings(
    dictionary: &Dictionary,
    stats: &LetterPositionCounts,
    used: LetterSet,
    depth: usize,
    width: usize,
) -> Vec<OpeningNode> {
    if depth == 0 || width == 0 {
        return Vec::new();
    }

    // min-heap on (weight, earlier id first): the root is the weakest kept
    let mut heap: BinaryHeap<Reverse<(u32, Reverse<WordId>)>> = BinaryHeap::with_capacity(width + 1);
    for (id, word) in dictionary.words_excluding_letters(used) {
        let entry = Reverse((stats.score(word), Reverse(id)));
        if heap.len() < width {
            heap.push(entry);
        } else if heap.peek().map_or(false, |weakest| entry < *weakest) {
            heap.pop();
            heap.push(entry);
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .filter_map(|Reverse((weight, Reverse(id)))| {
            let word = dictionary.word_at(id)?;
            Some(OpeningNode {
                word: id,
                weight,
                follow: best_openings(dictionary, stats, used.union(word.letters()), depth - 1, width),
            })
        })
        .collect()
}

impl<'d> OpeningTree<'d> {
    pub fn roots(&self) -> &[OpeningNode] {
        &self.roots
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Limit the number of levels shown by `Display`.
    pub fn with_display_depth(mut self, depth: usize) -> Self {
        self.display_depth = depth;
        self
    }

    /// Every root-to-leaf sequence, best branches first.
    pub fn sequences(&self) -> Vec<OpeningSequence<'d>> {
        let mut sequences = Vec::new();
        let mut path = Vec::new();
        self.collect_sequences(&self.roots, &mut path, 0, &mut sequences);
        sequences
    }

    fn collect_sequences(
        &self,
        nodes: &[OpeningNode],
        path: &mut Vec<&'d Word>,
        weight: u32,
        out: &mut Vec<OpeningSequence<'d>>,
    ) {
        for node in nodes {
            let Some(word) = self.dictionary.word_at(node.word) else {
                continue;
            };
            path.push(word);
            if node.follow.is_empty() {
                out.push(OpeningSequence {
                    words: path.clone(),
                    weight: weight + node.weight,
                });
            } else {
                self.collect_sequences(&node.follow, path, weight + node.weight, out);
            }
            path.pop();
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, nodes: &[OpeningNode], weight: u32, depth: usize) -> fmt::Result {
        if depth == self.display_depth {
            return write!(f, " total weight: {}", weight);
        }
        for node in nodes {
            let word = self.dictionary.word_at(node.word).map_or("?????", Word::as_str);
            write!(f, "\n{:indent$}  {} (weight {})", "", word, node.weight, indent = 2 * depth)?;
            if node.follow.is_empty() {
                write!(f, " total weight: {} (sequence complete)", weight + node.weight)?;
            } else {
                self.render(f, &node.follow, weight + node.weight, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for OpeningTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Best starting words:")?;
        self.render(f, &self.roots, 0, 0)
    }
}

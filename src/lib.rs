//! # Wordle Sieve
//!
//! Filters a dictionary of five-letter words against the feedback of
//! successive Wordle guesses and suggests the next guess.
//!
//! Feedback rounds are folded into a [`ConstraintModel`], which the
//! [`filter`] uses to rescan the [`Dictionary`]. The remaining candidates
//! are ranked by letter-position frequency with [`select_best`]. Repeated
//! letters are handled the way the game reports them: every letter of the
//! hidden word is matched at most once.
//!
//! ```
//! use wordle_sieve::{filter, select_best, ConstraintModel, Dictionary};
//!
//! let dictionary = Dictionary::build(["crane", "slate", "tenor", "trace", "chore"]).unwrap();
//! let mut model = ConstraintModel::new();
//! // "slate" guessed: t and e misplaced, nothing else in the word
//! model.apply_encoded("nsnlnawtwe").unwrap();
//! let candidates = filter(&model, &dictionary);
//! assert_eq!(candidates.len(), 1);
//! assert_eq!(candidates.first().unwrap().as_str(), "tenor");
//! assert!(select_best(&candidates).is_none());
//! ```

pub mod config;
pub mod constraints;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod game;
pub mod opening;
pub mod solver;
pub mod stats;
pub mod word;

pub use config::{DictionaryConfig, ALPHABET_SIZE, MAX_TRIES, WORD_SIZE};
pub use constraints::{parse_encoded, parse_round, ConstraintModel, RoundPair};
pub use dictionary::{Collisions, Dictionary, WordId};
pub use error::{CompareError, DictionaryError, RoundError};
pub use feedback::{compare, dictionary_guess, Feedback, FeedbackPattern};
pub use filter::{filter, matches, CandidateSet};
pub use game::{Game, GameStatus, KeyState};
pub use opening::{build_opening_report, OpeningNode, OpeningSequence, OpeningTree};
pub use solver::{benchmark_guess_distribution, Benchmark, Suggestion, WordleSolver};
pub use stats::{select_best, LetterPositionCounts, LetterReport};
pub use word::{LetterSet, Word};

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::build(include_str!("../dictionary/dictionary.txt").split_whitespace())
}

//! Game constants and runtime configuration.
//!
//! The constants mirror the rules of the game. Environment overrides are
//! only read by the binary, never by the library algorithms.

/// Number of letters in a word.
pub const WORD_SIZE: usize = 5;

/// Number of letters in the alphabet (`a..=z`).
pub const ALPHABET_SIZE: usize = 26;

/// Maximum number of guesses in a game, and of feedback rounds in a session.
pub const MAX_TRIES: usize = 6;

/// Default upper bound on the number of dictionary words.
pub const MAX_WORD_NUMBER: usize = 10_000;

/// Default number of hash buckets (prime, about 3% collisions for 10k words).
pub const MAX_WORD_HASH_ENTRIES: usize = 65_521;

/// Default depth of the opening-sequence search.
pub const MAX_SEARCH_DEPTH: usize = 5;

/// Default number of words kept at each level of the opening search.
pub const MAX_SEARCH_WIDTH: usize = 3;

/// Default number of levels printed from an opening tree.
pub const MAX_SEQUENCE_DEPTH: usize = 3;

/// Environment variable naming a dictionary file to use instead of the
/// embedded one.
pub const DICTIONARY_ENV: &str = "WORDLE_DICTIONARY";

/// Sizing of a [`Dictionary`](crate::Dictionary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Build fails once this many words would be exceeded.
    pub max_words: usize,
    /// Number of hash buckets, zero meaning one. The size only affects chain
    /// lengths.
    pub hash_entries: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_WORD_NUMBER,
            hash_entries: MAX_WORD_HASH_ENTRIES,
        }
    }
}

impl DictionaryConfig {
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_hash_entries(mut self, hash_entries: usize) -> Self {
        self.hash_entries = hash_entries.max(1);
        self
    }
}

/// Read `RAYON_NUM_THREADS` and build the global pool from it. Tolerates an
/// already-initialized pool. Returns the thread count in use.
pub fn init_rayon_threads() -> usize {
    let requested = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0);

    if let Some(num_threads) = requested {
        if rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .is_err()
        {
            log::debug!("rayon pool already initialized");
        }
    }
    rayon::current_num_threads()
}

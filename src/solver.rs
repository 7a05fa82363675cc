//! Solving sessions built on the constraint model.
//!
//! A session owns one [`ConstraintModel`] and borrows the shared dictionary.
//! Sessions never share mutable state, so any number of them can run side
//! by side over the same dictionary, which is what the benchmark does.

use crate::config::MAX_TRIES;
use crate::constraints::{ConstraintModel, RoundPair};
use crate::dictionary::Dictionary;
use crate::error::RoundError;
use crate::feedback::FeedbackPattern;
use crate::filter::{filter, CandidateSet};
use crate::stats::select_best;
use crate::word::Word;
use rayon::prelude::*;

/// Suggested next guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion<'d> {
    pub word: &'d Word,
    /// Picked by letter-position frequency, rather than as the only (or
    /// first of two) remaining candidates.
    pub ranked: bool,
}

/// The main Wordle solver
#[derive(Debug, Clone)]
pub struct WordleSolver<'d> {
    dictionary: &'d Dictionary,
    model: ConstraintModel,
    candidates: CandidateSet<'d>,
}

impl<'d> WordleSolver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            model: ConstraintModel::new(),
            candidates: CandidateSet::all(dictionary),
        }
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub fn model(&self) -> &ConstraintModel {
        &self.model
    }

    pub fn candidates(&self) -> &CandidateSet<'d> {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn reset(&mut self) {
        self.model.reset();
        self.candidates = CandidateSet::all(self.dictionary);
    }

    /// Fold one round and narrow the candidates. The session is unchanged
    /// if the round is rejected.
    pub fn apply_round(&mut self, round: &[RoundPair]) -> Result<(), RoundError> {
        self.model.apply_round(round)?;
        self.candidates.retain(&self.model);
        Ok(())
    }

    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) -> Result<(), RoundError> {
        self.apply_round(&pattern.round(guess))
    }

    /// Fold compact rounds such as `rsnlwawtne`, then rescan the dictionary.
    pub fn apply_encoded(&mut self, data: &str) -> Result<(), RoundError> {
        self.model.apply_encoded(data)?;
        self.candidates = filter(&self.model, self.dictionary);
        Ok(())
    }

    /// Best next guess: the ranked candidate when there are three or more,
    /// otherwise the first remaining candidate.
    pub fn suggest(&self) -> Option<Suggestion<'d>> {
        match select_best(&self.candidates) {
            Some(word) => Some(Suggestion { word, ranked: true }),
            None => self.candidates.first().map(|word| Suggestion { word, ranked: false }),
        }
    }

    /// Solve a Wordle puzzle automatically, given a function that provides feedback
    /// Returns the sequence of guesses made
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Vec<(Word, FeedbackPattern)>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut guesses = Vec::new();

        for _ in 0..MAX_TRIES {
            let best = match self.suggest() {
                Some(s) => *s.word,
                None => break,
            };

            let pattern = get_feedback(&best);
            guesses.push((best, pattern));

            if pattern.is_win() || self.apply_feedback(&best, pattern).is_err() {
                break;
            }
        }

        guesses
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> Vec<(Word, FeedbackPattern)> {
        self.solve_with_feedback(|guess| FeedbackPattern::calculate(target, guess))
    }
}

/// Outcome of solving every dictionary word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Benchmark {
    /// `(guesses, words)` pairs, ascending by guess count.
    pub distribution: Vec<(usize, usize)>,
    /// Words not found within `MAX_TRIES` guesses.
    pub failures: usize,
    pub total: usize,
}

impl Benchmark {
    /// Average guess count over the solved words.
    pub fn average_guesses(&self) -> f64 {
        let solved = self.total - self.failures;
        if solved == 0 {
            return 0.0;
        }
        let guesses: usize = self.distribution.iter().map(|(g, c)| g * c).sum();
        guesses as f64 / solved as f64
    }
}

/// Solve every word of the dictionary with its own session, in parallel.
pub fn benchmark_guess_distribution(dictionary: &Dictionary) -> Benchmark {
    let outcomes: Vec<Option<usize>> = dictionary
        .words()
        .par_iter()
        .map(|target| {
            let mut solver = WordleSolver::new(dictionary);
            let guesses = solver.solve_for_target(target);
            match guesses.last() {
                Some((_, pattern)) if pattern.is_win() => Some(guesses.len()),
                _ => None,
            }
        })
        .collect();

    let solved: Vec<usize> = outcomes.iter().flatten().copied().collect();
    let max_guesses = solved.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0usize; max_guesses + 1];
    for guesses in &solved {
        counts[*guesses] += 1;
    }

    Benchmark {
        distribution: counts
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect(),
        failures: outcomes.len() - solved.len(),
        total: outcomes.len(),
    }
}

//! Accumulation of feedback rounds into a single constraint model.
//!
//! Each round is a list of `(code, letter)` pairs, one per position of the
//! guessed word. The model keeps four orthogonal pieces of knowledge:
//!
//! - `known`: the letter proven at each exact position
//! - `required`: how many more instances of a letter are still owed,
//!   somewhere outside the known positions. A round showing a letter `n`
//!   times (exact or misplaced) proves at least `n` instances; the highest
//!   such count across rounds, minus the positions where the letter is
//!   known, is what remains owed
//! - `excluded_at`: letters proven not to be at a given position
//! - `absent`: letters with no instance beyond those already accounted for
//!
//! A letter can be both required and absent: guessing "canal" against
//! "afoul" reports the first `a` misplaced and the second one absent, which
//! means exactly one `a`, not at position 1 nor 3.

use crate::config::{ALPHABET_SIZE, MAX_TRIES, WORD_SIZE};
use crate::error::RoundError;
use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::{LetterSet, Word};
use std::fmt;

/// One `(code, letter)` pair of a round.
pub type RoundPair = (Feedback, char);

/// Accumulated knowledge from zero or more feedback rounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstraintModel {
    known: [Option<u8>; WORD_SIZE],
    /// Highest number of instances of each letter shown by a single round.
    confirmed: [u8; ALPHABET_SIZE],
    /// Instances still owed outside the known positions.
    required: [u8; ALPHABET_SIZE],
    excluded_at: [LetterSet; WORD_SIZE],
    absent: LetterSet,
    rounds: usize,
}

impl ConstraintModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every round.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one round into the model. On error the model is unchanged.
    pub fn apply_round(&mut self, round: &[RoundPair]) -> Result<(), RoundError> {
        let mut next = self.clone();
        next.fold_round(round)?;
        *self = next;
        Ok(())
    }

    /// Fold several rounds, all or nothing.
    pub fn apply_rounds<R: AsRef<[RoundPair]>>(&mut self, rounds: &[R]) -> Result<(), RoundError> {
        let mut next = self.clone();
        for round in rounds {
            next.fold_round(round.as_ref())?;
        }
        *self = next;
        Ok(())
    }

    /// Fold the feedback `pattern` obtained for `guess`.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) -> Result<(), RoundError> {
        self.apply_round(&pattern.round(guess))
    }

    /// Fold rounds given in the compact form, e.g. `rsnlwawtne` for one
    /// guess of "slate". All or nothing.
    pub fn apply_encoded(&mut self, data: &str) -> Result<(), RoundError> {
        let rounds = parse_encoded(data)?;
        self.apply_rounds(&rounds)
    }

    fn fold_round(&mut self, round: &[RoundPair]) -> Result<(), RoundError> {
        if round.len() != WORD_SIZE || self.rounds >= MAX_TRIES {
            return Err(RoundError::MalformedRoundLength {
                pairs: self.rounds * WORD_SIZE + round.len(),
            });
        }

        // misplaced instances anywhere in the round, before or after an absent pair
        let mut misplaced = [0u8; ALPHABET_SIZE];
        for &(code, ch) in round {
            if code == Feedback::WrongPosition && ch.is_ascii_lowercase() {
                misplaced[(ch as u8 - b'a') as usize] += 1;
            }
        }

        // instances confirmed by this round, exact or misplaced
        let mut tally = [0u8; ALPHABET_SIZE];
        for (position, &(code, ch)) in round.iter().enumerate() {
            let letter = letter_byte(ch)?;
            let index = (letter - b'a') as usize;
            match code {
                Feedback::Exact => {
                    match self.known[position] {
                        Some(known) if known == letter => {}
                        Some(_) => {
                            return Err(RoundError::ConflictingExactPosition { letter: ch, position });
                        }
                        None if self.excluded_at[position].contains(letter) => {
                            return Err(RoundError::WrongPositionConflictsExact { letter: ch, position });
                        }
                        None => self.known[position] = Some(letter),
                    }
                    tally[index] += 1;
                }
                Feedback::Absent => {
                    if self.known[position] == Some(letter) {
                        return Err(RoundError::ExactPositionMarkedAbsent { letter: ch, position });
                    }
                    if misplaced[index] > 0 {
                        self.excluded_at[position].insert(letter);
                    }
                    self.absent.insert(letter);
                }
                Feedback::WrongPosition => {
                    if self.known[position] == Some(letter) {
                        return Err(RoundError::WrongPositionConflictsExact { letter: ch, position });
                    }
                    self.excluded_at[position].insert(letter);
                    tally[index] += 1;
                }
            }
        }

        for (confirmed, &count) in self.confirmed.iter_mut().zip(tally.iter()) {
            *confirmed = (*confirmed).max(count);
        }
        let mut placed = [0u8; ALPHABET_SIZE];
        for letter in self.known.iter().flatten() {
            placed[(letter - b'a') as usize] += 1;
        }
        for index in 0..ALPHABET_SIZE {
            self.required[index] = self.confirmed[index].saturating_sub(placed[index]);
        }
        if self.required_letters().len() > WORD_SIZE {
            return Err(RoundError::TooManyRequiredLetters);
        }

        self.rounds += 1;
        Ok(())
    }

    /// Letter proven at `position`.
    pub fn known(&self, position: usize) -> Option<u8> {
        self.known[position]
    }

    /// Minimum number of further instances of `letter` owed outside the
    /// known positions.
    pub fn required_count(&self, letter: u8) -> u8 {
        self.required[(letter - b'a') as usize]
    }

    /// Per-letter required counts, indexed by alphabet position.
    pub fn required_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.required
    }

    pub fn required_letters(&self) -> LetterSet {
        self.required
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .fold(LetterSet::EMPTY, |set, (i, _)| set.with(b'a' + i as u8))
    }

    pub fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded_at[position]
    }

    pub fn absent(&self) -> LetterSet {
        self.absent
    }

    /// Number of rounds folded in so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for ConstraintModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: String = self
            .known
            .iter()
            .map(|k| k.map_or('-', char::from))
            .collect();
        write!(f, "known = {}, required =", known)?;
        for letter in self.required_letters().iter() {
            write!(f, " {}x{}", letter as char, self.required_count(letter))?;
        }
        writeln!(f, ", absent = {}", self.absent)?;
        for (position, excluded) in self.excluded_at.iter().enumerate() {
            if !excluded.is_empty() {
                writeln!(f, "position {}: not {}", position, excluded)?;
            }
        }
        Ok(())
    }
}

fn letter_byte(ch: char) -> Result<u8, RoundError> {
    if ch.is_ascii_lowercase() {
        Ok(ch as u8)
    } else {
        Err(RoundError::InvalidLetter(ch))
    }
}

/// Parse a round given as named codes: `exact`, `wrong` or `absent`
/// (or their one-letter forms).
pub fn parse_round(pairs: &[(&str, char)]) -> Result<Vec<RoundPair>, RoundError> {
    pairs
        .iter()
        .map(|&(code, ch)| -> Result<RoundPair, RoundError> { Ok((code.parse::<Feedback>()?, ch)) })
        .collect()
}

/// Split compact data such as `rsnlwawtnersntwanrrt` into rounds. Codes are
/// `r` (exact), `w` (wrong position) and `n` (not in word), each followed by
/// its letter.
pub fn parse_encoded(data: &str) -> Result<Vec<Vec<RoundPair>>, RoundError> {
    let chars: Vec<char> = data.trim().chars().collect();
    let pairs = chars.len() / 2;
    if chars.len() % (2 * WORD_SIZE) != 0 || pairs > MAX_TRIES * WORD_SIZE {
        return Err(RoundError::MalformedRoundLength { pairs });
    }

    chars
        .chunks(2 * WORD_SIZE)
        .map(|round| {
            round
                .chunks(2)
                .map(|pair| -> Result<RoundPair, RoundError> {
                    let (code, ch) = (pair[0], pair[1]);
                    letter_byte(ch)?;
                    let code = match code {
                        'r' => Feedback::Exact,
                        'w' => Feedback::WrongPosition,
                        'n' => Feedback::Absent,
                        other => return Err(RoundError::InvalidCode(other.to_string())),
                    };
                    Ok((code, ch))
                })
                .collect::<Result<Vec<RoundPair>, RoundError>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_pairs_are_split_per_round() {
        let rounds = parse_encoded("rsnlwawtnersntwanrrt").unwrap();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0][0], (Feedback::Exact, 's'));
        assert_eq!(rounds[1][4], (Feedback::Exact, 't'));
    }

    #[test]
    fn odd_length_data_is_malformed() {
        assert_eq!(
            parse_encoded("rsnlwawtn"),
            Err(RoundError::MalformedRoundLength { pairs: 4 })
        );
    }

    #[test]
    fn letter_is_checked_before_code() {
        assert_eq!(parse_encoded("rSnlwawtne"), Err(RoundError::InvalidLetter('S')));
        assert_eq!(
            parse_encoded("xsnlwawtne"),
            Err(RoundError::InvalidCode("x".to_string()))
        );
    }
}

use wordle_sieve::{compare, dictionary_guess, CompareError, Dictionary, Feedback, FeedbackPattern, RoundError, Word};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn calculate(reference: &str, guess: &str) -> [Feedback; 5] {
    *FeedbackPattern::calculate(&word(reference), &word(guess)).feedbacks()
}

use Feedback::{Absent as A, Exact as E, WrongPosition as W};

#[test]
fn test_all_correct() {
    let pattern = FeedbackPattern::calculate(&word("crane"), &word("crane"));
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::ALL_EXACT);
    assert_eq!(pattern.exact_count(), 5);
}

#[test]
fn test_all_absent() {
    assert_eq!(calculate("dream", "quick"), [A, A, A, A, A]);
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(calculate("charm", "crane"), [E, W, E, A, A]);
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(calculate("creep", "speed"), [A, W, E, E, A]);
}

#[test]
fn test_duplicate_letters_in_target() {
    assert_eq!(calculate("creep", "arose"), [A, E, A, A, W]);
}

#[test]
fn test_duplicate_guess_limited_target() {
    assert_eq!(calculate("creep", "geese"), [A, W, E, A, A]);
}

#[test]
fn test_exact_match_consumes_reference_letter_first() {
    // the a at position 4 is exact, so only one a remains for position 0
    assert_eq!(calculate("mamma", "aroma"), [W, A, A, E, E]);
}

#[test]
fn test_specific_wordle_cases() {
    assert_eq!(calculate("those", "sores"), [W, W, A, W, A]);
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackPattern::parse("gybbb").unwrap();
    assert_eq!(pattern.feedbacks(), &[E, W, A, A, A]);

    assert_eq!(FeedbackPattern::parse("21000"), Some(pattern));
    assert_eq!(FeedbackPattern::parse("rwnnn"), Some(pattern));
}

#[test]
fn test_pattern_parse_invalid() {
    assert!(FeedbackPattern::parse("gybbb1").is_none());
    assert!(FeedbackPattern::parse("gybb").is_none());
    assert!(FeedbackPattern::parse("gybzb").is_none());
}

#[test]
fn test_feedback_from_str() {
    assert_eq!("exact".parse::<Feedback>(), Ok(E));
    assert_eq!("wrong".parse::<Feedback>(), Ok(W));
    assert_eq!("absent".parse::<Feedback>(), Ok(A));
    assert_eq!("y".parse::<Feedback>(), Ok(W));
    assert_eq!(
        "maybe".parse::<Feedback>(),
        Err(RoundError::InvalidCode("maybe".to_string()))
    );
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new([E, W, A, A, E]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(pattern.to_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(pattern.to_code_string(), "rwnnr");
}

#[test]
fn test_round_pairs_codes_with_guess_letters() {
    let pattern = FeedbackPattern::new([W, A, A, E, E]);
    let round = pattern.round(&word("aroma"));
    assert_eq!(round, [(W, 'a'), (A, 'r'), (A, 'o'), (E, 'm'), (E, 'a')]);
}

#[test]
fn test_compare_against_dictionary() {
    let dictionary = Dictionary::build(["mamma", "aroma", "crane"]).unwrap();
    let reference = word("mamma");

    let pattern = compare(&dictionary, &reference, "aroma").unwrap();
    assert_eq!(pattern.feedbacks(), &[W, A, A, E, E]);

    assert!(compare(&dictionary, &reference, "mamma").unwrap().is_win());
}

#[test]
fn test_compare_rejects_unknown_guess() {
    let dictionary = Dictionary::build(["mamma", "aroma"]).unwrap();
    let reference = word("mamma");

    for guess in ["crane", "ab", "MAMMA"] {
        assert_eq!(
            compare(&dictionary, &reference, guess),
            Err(CompareError::GuessNotInDictionary(guess.to_string()))
        );
    }
    assert_eq!(
        CompareError::GuessNotInDictionary("crane".to_string()).to_string(),
        "crane is not in dictionary, try again"
    );
}

#[test]
fn test_dictionary_guess() {
    let dictionary = Dictionary::build(["mamma", "aroma"]).unwrap();
    assert_eq!(dictionary_guess(&dictionary, "aroma"), Ok(word("aroma")));
    assert_eq!(
        dictionary_guess(&dictionary, "zzzzz"),
        Err(CompareError::GuessNotInDictionary("zzzzz".to_string()))
    );
}

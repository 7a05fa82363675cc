use wordle_sieve::{
    build_opening_report, select_best, CandidateSet, Dictionary, LetterPositionCounts, LetterReport,
};

fn small_dictionary() -> Dictionary {
    Dictionary::build(["crane", "slate", "mound", "fight", "pupil"]).unwrap()
}

#[test]
fn test_letter_position_counts() {
    let dictionary = small_dictionary();
    let counts = LetterPositionCounts::from_words(&dictionary);

    assert_eq!(counts.words(), 5);
    assert_eq!(counts.count(b'a', 2), 2);
    assert_eq!(counts.count(b'e', 4), 2);
    assert_eq!(counts.count(b'a', 0), 0);

    let scores: Vec<u32> = dictionary.iter().map(|w| counts.score(w)).collect();
    assert_eq!(scores, vec![8, 7, 6, 5, 5]);

    assert_eq!(counts.ranked_at(2)[0], ('a', 2));
    // equal totals keep alphabetical order
    assert_eq!(counts.ranked_global()[0], ('a', 2));
}

#[test]
fn test_select_best() {
    let dictionary = Dictionary::build([
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
    .unwrap();
    let candidates = CandidateSet::all(&dictionary);
    assert_eq!(select_best(&candidates).map(|w| w.as_str()), Some("crate"));
}

#[test]
fn test_select_best_tie_keeps_first() {
    let dictionary = Dictionary::build(["trace", "crane", "slate"]).unwrap();
    let candidates = CandidateSet::all(&dictionary);
    assert_eq!(select_best(&candidates).map(|w| w.as_str()), Some("trace"));
}

#[test]
fn test_select_best_needs_three_candidates() {
    let dictionary = Dictionary::build(["trace", "crane", "slate"]).unwrap();

    let two = CandidateSet::from_ids(&dictionary, vec![1, 2]);
    assert!(select_best(&two).is_none());
    let none = CandidateSet::from_ids(&dictionary, Vec::new());
    assert!(select_best(&none).is_none());
}

#[test]
fn test_letter_report() {
    let dictionary = small_dictionary();
    let report = LetterReport::new(&dictionary);

    assert_eq!(report.repeats.len(), 1);
    let repeat = report.repeats[0];
    assert_eq!((repeat.letter, repeat.times, repeat.words), ('p', 2, 1));
    assert_eq!(repeat.example.as_str(), "pupil");

    let text = report.to_string();
    assert!(text.starts_with("5 words in dictionary\n"));
    assert!(text.contains("Frequency of letters appearing in position 2:\n  a: 40.00%\n"));
    assert!(text.contains(" letter p appears 2 times in 1 word(s) (e.g. pupil)"));
}

#[test]
fn test_opening_tree() {
    let dictionary = small_dictionary();
    let tree = build_opening_report(&dictionary, 2, 2);

    let roots: Vec<(usize, u32)> = tree.roots().iter().map(|n| (n.word, n.weight)).collect();
    assert_eq!(roots, vec![(0, 8), (1, 7)]);

    // ties keep the earlier word
    let follow: Vec<(usize, u32)> = tree.roots()[0].follow.iter().map(|n| (n.word, n.weight)).collect();
    assert_eq!(follow, vec![(3, 5), (4, 5)]);

    let sequences: Vec<(Vec<&str>, u32)> = tree
        .sequences()
        .into_iter()
        .map(|s| (s.words.into_iter().map(|w| w.as_str()).collect(), s.weight))
        .collect();
    assert_eq!(
        sequences,
        vec![
            (vec!["crane", "fight"], 13),
            (vec!["crane", "pupil"], 13),
            (vec!["slate", "mound"], 13),
        ]
    );
}

#[test]
fn test_opening_sequences_never_reuse_letters() {
    let dictionary = wordle_sieve::load_dictionary().unwrap();
    let tree = build_opening_report(&dictionary, 3, 2);

    let sequences = tree.sequences();
    assert!(!sequences.is_empty());
    for sequence in sequences {
        let mut seen = wordle_sieve::LetterSet::EMPTY;
        for word in &sequence.words {
            assert!(!seen.intersects(word.letters()), "{:?}", sequence.words);
            seen = seen.union(word.letters());
        }
    }
}

#[test]
fn test_opening_tree_display() {
    let dictionary = small_dictionary();
    let tree = build_opening_report(&dictionary, 2, 2);

    assert_eq!(
        tree.to_string(),
        "Best starting words:\n  crane (weight 8)\n    fight (weight 5) total weight: 13 (sequence complete)\n    pupil (weight 5) total weight: 13 (sequence complete)\n  slate (weight 7)\n    mound (weight 6) total weight: 13 (sequence complete)"
    );

    let shallow = tree.with_display_depth(1);
    assert_eq!(
        shallow.to_string(),
        "Best starting words:\n  crane (weight 8) total weight: 8\n  slate (weight 7) total weight: 7"
    );
}

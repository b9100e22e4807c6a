//! End-to-end lookups against fixture dictionaries.

use keytrie_dict::{Dictionary, TrieWriter};
use keytrie_suggest::{InputCodes, ResultSet, SuggestOptions, Suggester};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// One row per string; each string lists the alternatives for that position.
fn rows(spec: &[&str]) -> InputCodes {
    InputCodes::from_rows(spec.iter().map(|alts| units(alts)))
}

fn typed(s: &str) -> InputCodes {
    InputCodes::from_typed(&units(s))
}

fn texts(results: &ResultSet) -> Vec<String> {
    results.iter().map(|s| s.text()).collect()
}

fn build(words: &[(&str, u8)]) -> Vec<u8> {
    let mut w = TrieWriter::default();
    for &(word, freq) in words {
        w.insert_str(word, freq);
    }
    w.to_bytes()
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn ambiguous_middle_key_ranks_by_weighted_frequency() {
    let data = build(&[("cat", 100), ("car", 90), ("cot", 80)]);
    let mut s = Suggester::new(Dictionary::new(&data).unwrap());
    s.set_options(SuggestOptions {
        typed_letter_weight: 2,
        full_word_weight: 3,
        max_alternatives: 2,
        include_typed_word: true,
        ..SuggestOptions::default()
    });

    let results = s.suggest(&rows(&["c", "ao", "t"])).unwrap();
    assert_eq!(texts(&results), vec!["cat", "cot"]);
    assert_eq!(results.as_slice()[0].frequency, 100 * 2 * 2 * 2 * 3);
    assert_eq!(results.as_slice()[1].frequency, 80 * 2 * 2 * 3);
}

#[test]
fn literal_typed_word_is_suppressed_by_default() {
    let data = build(&[("cat", 100), ("cats", 60), ("cot", 80)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());

    let results = s.suggest(&typed("cat")).unwrap();
    assert_eq!(texts(&results), vec!["cats"]);
}

#[test]
fn alternatives_beyond_the_limit_are_ignored() {
    let data = build(&[("ab", 10), ("ac", 10), ("ad", 10)]);
    let mut s = Suggester::new(Dictionary::new(&data).unwrap());
    s.set_max_alternatives(3);

    // Only x, b and c are considered at the second position.
    let results = s.suggest(&rows(&["a", "xbcd"])).unwrap();
    assert_eq!(texts(&results), vec!["ab", "ac"]);
}

#[test]
fn capacity_keeps_only_the_best() {
    let data = build(&[("ta", 10), ("tb", 50), ("tc", 30), ("td", 40)]);
    let mut s = Suggester::new(Dictionary::new(&data).unwrap());
    s.set_max_words(2);

    let results = s.suggest(&typed("t")).unwrap();
    assert_eq!(texts(&results), vec!["tb", "td"]);
}

// ---------------------------------------------------------------------------
// Completion and pruning
// ---------------------------------------------------------------------------

#[test]
fn every_descendant_within_the_depth_cap_is_completed() {
    let data = build(&[
        ("pa", 1),
        ("pat", 2),
        ("pal", 3),
        ("pan", 4),
        ("pane", 5),
        ("panel", 6),
        ("pe", 7),
    ]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());

    let mut found = texts(&s.suggest(&typed("pa")).unwrap());
    found.sort();
    // "pa" itself is the typed word; depth cap is 3 * 2 = 6 units.
    assert_eq!(found, vec!["pal", "pan", "pane", "panel", "pat"]);
}

#[test]
fn depth_cap_is_three_times_the_input() {
    let data = build(&[("ab", 1), ("abc", 1), ("abcd", 1), ("abcde", 1)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());

    let mut found = texts(&s.suggest(&typed("a")).unwrap());
    found.sort();
    assert_eq!(found, vec!["ab", "abc", "abcd"]);
}

#[test]
fn words_must_fit_the_output_slot() {
    let data = build(&[("ab", 1), ("abc", 1), ("abcd", 1)]);
    let mut s = Suggester::new(Dictionary::new(&data).unwrap());
    s.set_max_word_length(4);

    let mut found = texts(&s.suggest(&typed("a")).unwrap());
    found.sort();
    assert_eq!(found, vec!["ab", "abc"]);
}

#[test]
fn input_longer_than_any_word_finds_nothing() {
    let data = build(&[("to", 5)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());
    assert!(s.suggest(&typed("toad")).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Apostrophes
// ---------------------------------------------------------------------------

#[test]
fn apostrophe_is_matched_without_being_typed() {
    let data = build(&[("don't", 100), ("dont", 1)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());

    let results = s.suggest(&typed("dont")).unwrap();
    assert_eq!(texts(&results), vec!["don't"]);
    // Four primary keys and a full-word match; the apostrophe adds no weight.
    assert_eq!(results.as_slice()[0].frequency, 100 * 16 * 2);
}

#[test]
fn typed_apostrophe_matches_normally() {
    let data = build(&[("don't", 100)]);
    let mut s = Suggester::new(Dictionary::new(&data).unwrap());
    s.set_include_typed_word(true);

    let results = s.suggest(&typed("don't")).unwrap();
    assert_eq!(texts(&results), vec!["don't"]);
    assert_eq!(results.as_slice()[0].frequency, 100 * 32 * 2);
}

// ---------------------------------------------------------------------------
// Case folding and diacritics
// ---------------------------------------------------------------------------

#[test]
fn word_initial_capital_matches_lowercase_key() {
    let data = build(&[("Athens", 50)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());
    assert_eq!(texts(&s.suggest(&typed("athens")).unwrap()), vec!["Athens"]);
    assert_eq!(texts(&s.suggest(&typed("ath")).unwrap()), vec!["Athens"]);
}

#[test]
fn inner_capital_does_not_fold() {
    let data = build(&[("iPhone", 50)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());
    assert!(s.suggest(&typed("iphone")).unwrap().is_empty());

    let mut s = s;
    s.set_include_typed_word(true);
    assert_eq!(texts(&s.suggest(&typed("iPhone")).unwrap()), vec!["iPhone"]);
}

#[test]
fn greek_accents_are_matched_by_base_letters() {
    let data = build(&[("καλά", 50), ("Αθήνα", 40), ("κάλος", 10)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());

    assert_eq!(texts(&s.suggest(&typed("καλα")).unwrap()), vec!["καλά"]);
    assert_eq!(texts(&s.suggest(&typed("αθηνα")).unwrap()), vec!["Αθήνα"]);

    // ά (U+03AC) sorts before α (U+03B1).
    let mut both = texts(&s.suggest(&typed("κα")).unwrap());
    both.sort();
    assert_eq!(both, vec!["κάλος", "καλά"]);
}

#[test]
fn escaped_characters_are_searchable() {
    let data = build(&[("кот", 9), ("кит", 3)]);
    let s = Suggester::new(Dictionary::new(&data).unwrap());
    assert_eq!(texts(&s.suggest(&typed("ко")).unwrap()), vec!["кот"]);
    assert_eq!(texts(&s.suggest(&rows(&["к", "ои"])).unwrap()), vec!["кот", "кит"]);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn truncated_dictionary_reports_an_error() {
    let mut data = build(&[("cat", 100), ("cot", 80)]);
    data.truncate(data.len() - 2);
    let s = Suggester::new(Dictionary::new(&data).unwrap());
    assert!(s.suggest(&typed("co")).is_err());
}

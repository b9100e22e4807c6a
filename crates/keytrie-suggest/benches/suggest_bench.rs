// Criterion benchmarks for keytrie-suggest.
//
// Uses a synthetic dictionary built in memory. Set KEYTRIE_DICT_PATH to a
// directory containing main.dict to also benchmark against a real dictionary.
//
// Run:
//   cargo bench -p keytrie-suggest
//   KEYTRIE_DICT_PATH=/path/to/dict cargo bench -p keytrie-suggest

use criterion::{Criterion, criterion_group, criterion_main};
use keytrie_dict::{Dictionary, TrieWriter};
use keytrie_suggest::{InputCodes, Suggester};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const LETTERS: &[u8] = b"etaoinshrdlucmfwyp";

/// Deterministic word list: every string of 2..=7 letters reachable by a
/// simple LCG, about 20k entries.
fn synthetic_words() -> Vec<(String, u8)> {
    let mut state: u32 = 0x2545_F491;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        state >> 8
    };
    (0..20_000)
        .map(|_| {
            let len = 2 + (next() % 6) as usize;
            let word: String = (0..len)
                .map(|_| LETTERS[(next() as usize) % LETTERS.len()] as char)
                .collect();
            let freq = 1 + (next() % 255) as u8;
            (word, freq)
        })
        .collect()
}

fn synthetic_dictionary() -> Vec<u8> {
    let mut w = TrieWriter::default();
    for (word, freq) in synthetic_words() {
        w.insert_str(&word, freq);
    }
    w.to_bytes()
}

/// Each typed letter also stands for its neighbours in `LETTERS`.
fn fuzzy_input(typed: &str) -> InputCodes {
    InputCodes::from_rows(typed.bytes().map(|b| {
        let i = LETTERS.iter().position(|&l| l == b).unwrap_or(0);
        let prev = LETTERS[(i + LETTERS.len() - 1) % LETTERS.len()];
        let next = LETTERS[(i + 1) % LETTERS.len()];
        [u16::from(b), u16::from(prev), u16::from(next)]
    }))
}

fn find_main_dict() -> Option<std::path::PathBuf> {
    let dir = std::env::var("KEYTRIE_DICT_PATH").ok()?;
    let path = std::path::PathBuf::from(dir).join("main.dict");
    path.exists().then_some(path)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_exact_prefix(c: &mut Criterion) {
    let data = synthetic_dictionary();
    let suggester = Suggester::new(Dictionary::new(&data).expect("dictionary"));
    let inputs: Vec<InputCodes> = ["th", "tha", "ser", "nord", "alu"]
        .iter()
        .map(|w| InputCodes::from_typed(&w.encode_utf16().collect::<Vec<_>>()))
        .collect();

    c.bench_function("suggest_exact_prefix", |b| {
        b.iter(|| {
            for input in &inputs {
                std::hint::black_box(suggester.suggest(input).expect("suggest"));
            }
        });
    });
}

fn bench_fuzzy(c: &mut Criterion) {
    let data = synthetic_dictionary();
    let suggester = Suggester::new(Dictionary::new(&data).expect("dictionary"));
    let inputs: Vec<InputCodes> = ["th", "tha", "ser", "nord", "alu"]
        .iter()
        .map(|w| fuzzy_input(w))
        .collect();

    c.bench_function("suggest_three_alternatives", |b| {
        b.iter(|| {
            for input in &inputs {
                std::hint::black_box(suggester.suggest(input).expect("suggest"));
            }
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let data = synthetic_dictionary();
    let dict = Dictionary::new(&data).expect("dictionary");
    c.bench_function("validate_synthetic", |b| {
        b.iter(|| std::hint::black_box(dict.validate().expect("valid")));
    });
}

fn bench_real_dictionary(c: &mut Criterion) {
    let Some(path) = find_main_dict() else {
        eprintln!("[bench_real_dictionary] main.dict not found, skipping (set KEYTRIE_DICT_PATH)");
        c.bench_function("suggest_real (skipped)", |b| b.iter(|| {}));
        return;
    };
    let data = std::fs::read(&path).expect("failed to read main.dict");
    let suggester = Suggester::new(Dictionary::new(&data).expect("dictionary"));
    let input = InputCodes::from_typed(&"καλ".encode_utf16().collect::<Vec<_>>());

    c.bench_function("suggest_real", |b| {
        b.iter(|| std::hint::black_box(suggester.suggest(&input).expect("suggest")));
    });
}

criterion_group!(
    benches,
    bench_exact_prefix,
    bench_fuzzy,
    bench_validate,
    bench_real_dictionary,
);
criterion_main!(benches);

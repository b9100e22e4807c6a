// keytrie-suggest: Fuzzy word suggestions for key patterns.
//
// Each input is a key pattern: plain characters are single keys, and a
// bracket group lists the alternatives for one position, primary first.
// Reads patterns from stdin (one per line) when none are given.
//
// Usage:
//   keytrie-suggest [-d DICT_PATH] [OPTIONS] [PATTERN...]
//
// Example:
//   keytrie-suggest -n 5 'c[ao]t' 'καλ'

use std::io::{self, BufRead, Write};

use clap::Parser;
use keytrie_cli::{CliError, DictArgs, LoadedDictionary, LookupRecord};
use keytrie_suggest::options::{
    DEFAULT_FULL_WORD_WEIGHT, DEFAULT_MAX_ALTERNATIVES, DEFAULT_MAX_WORD_LENGTH,
    DEFAULT_MAX_WORDS, DEFAULT_TYPED_LETTER_WEIGHT,
};
use keytrie_suggest::{SuggestOptions, Suggester};

#[derive(Parser)]
#[command(name = "keytrie-suggest", about = "Fuzzy word suggestions for key patterns")]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,
    /// Maximum number of suggestions
    #[arg(short = 'n', long = "max-words", default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,
    /// Longest word returned, in UTF-16 units, plus one
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LENGTH)]
    max_word_length: usize,
    /// Alternatives considered per position
    #[arg(long, default_value_t = DEFAULT_MAX_ALTERNATIVES)]
    max_alternatives: usize,
    /// Weight of a primary key match
    #[arg(long = "typed-weight", default_value_t = DEFAULT_TYPED_LETTER_WEIGHT)]
    typed_weight: u32,
    /// Weight of a match consuming every position
    #[arg(long = "full-word-weight", default_value_t = DEFAULT_FULL_WORD_WEIGHT)]
    full_word_weight: u32,
    /// Also report the word spelled exactly by the primary keys
    #[arg(long = "include-typed")]
    include_typed: bool,
    /// Print one JSON object per pattern
    #[arg(long)]
    json: bool,
    /// Key patterns, e.g. c[ao]t
    patterns: Vec<String>,
}

impl Cli {
    fn options(&self) -> SuggestOptions {
        SuggestOptions {
            max_words: self.max_words,
            max_word_length: self.max_word_length,
            max_alternatives: self.max_alternatives,
            typed_letter_weight: self.typed_weight,
            full_word_weight: self.full_word_weight,
            include_typed_word: self.include_typed,
        }
    }
}

fn suggest_one(
    pattern: &str,
    suggester: &Suggester<'_>,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let input = keytrie_cli::parse_pattern(pattern)?;
    let results = suggester.suggest(&input)?;

    if json {
        serde_json::to_writer(&mut *out, &LookupRecord::new(pattern, &results))?;
        writeln!(out)?;
    } else if results.is_empty() {
        writeln!(out, "{pattern}: (no suggestions)")?;
    } else {
        writeln!(out, "{pattern}:")?;
        for s in &results {
            writeln!(out, "  {} {}", s.text(), s.frequency)?;
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let loaded = LoadedDictionary::load(&cli.dict)?;
    let mut suggester = Suggester::new(loaded.dictionary(true)?);
    suggester.set_options(cli.options());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.patterns.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let pattern = line.trim();
            if pattern.is_empty() {
                continue;
            }
            match suggest_one(pattern, &suggester, cli.json, &mut out) {
                Err(e @ CliError::Pattern { .. }) => eprintln!("error: {e}"),
                other => other?,
            }
        }
    } else {
        for pattern in &cli.patterns {
            suggest_one(pattern, &suggester, cli.json, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    keytrie_cli::init_tracing(cli.dict.verbose);
    if let Err(e) = run(&cli) {
        keytrie_cli::fatal(e);
    }
}

// keytrie-check: Exact dictionary membership for words.
//
// Output format:
//   C: word    (in the dictionary)
//   W: word    (not in the dictionary)
//
// Usage:
//   keytrie-check [-d DICT_PATH] [WORD...]

use std::io::{self, BufRead, Write};

use clap::Parser;
use keytrie_cli::{CliError, DictArgs, LoadedDictionary};
use keytrie_dict::Dictionary;

#[derive(Parser)]
#[command(name = "keytrie-check", about = "Check words against a keytrie dictionary")]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,
    /// Words to check; read from stdin (one per line) when omitted
    words: Vec<String>,
}

fn check_one(word: &str, dict: &Dictionary<'_>, out: &mut impl Write) -> Result<(), CliError> {
    let units: Vec<u16> = word.encode_utf16().collect();
    let tag = if dict.is_valid_word(&units)? { 'C' } else { 'W' };
    writeln!(out, "{tag}: {word}")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let loaded = LoadedDictionary::load(&cli.dict)?;
    let dict = loaded.dictionary(false)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                check_one(word, &dict, &mut out)?;
            }
        }
    } else {
        for word in &cli.words {
            check_one(word, &dict, &mut out)?;
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

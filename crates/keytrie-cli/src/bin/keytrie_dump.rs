// keytrie-dump: Validate a dictionary and list its contents.
//
// Prints every word with its stored frequency, tab-separated, in trie order.
// With --stats, prints the structural summary instead.
//
// Usage:
//   keytrie-dump [-d DICT_PATH] [--stats] [--json]

use std::io::{self, Write};

use clap::Parser;
use keytrie_cli::{CliError, DictArgs, LoadedDictionary};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "keytrie-dump", about = "List the words of a keytrie dictionary")]
struct Cli {
    #[command(flatten)]
    dict: DictArgs,
    /// Print list, entry and word counts instead of the words
    #[arg(long)]
    stats: bool,
    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct StatsRecord {
    bytes: usize,
    lists: usize,
    entries: usize,
    words: usize,
    max_depth: usize,
}

#[derive(Serialize)]
struct WordRecord {
    word: String,
    frequency: u8,
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let loaded = LoadedDictionary::load(&cli.dict)?;
    let dict = loaded.dictionary(false)?;
    let stats = dict.validate().map_err(|source| CliError::Dictionary {
        path: loaded.path.clone(),
        source,
    })?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.stats {
        let record = StatsRecord {
            bytes: loaded.data.len(),
            lists: stats.lists,
            entries: stats.entries,
            words: stats.words,
            max_depth: stats.max_depth,
        };
        if cli.json {
            serde_json::to_writer_pretty(&mut out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "file:      {}", loaded.path.display())?;
            writeln!(out, "codepage:  {}", loaded.codepage.name())?;
            writeln!(out, "bytes:     {}", record.bytes)?;
            writeln!(out, "lists:     {}", record.lists)?;
            writeln!(out, "entries:   {}", record.entries)?;
            writeln!(out, "words:     {}", record.words)?;
            writeln!(out, "max depth: {}", record.max_depth)?;
        }
    } else {
        for (word, frequency) in dict.words()? {
            let word = String::from_utf16_lossy(&word);
            if cli.json {
                serde_json::to_writer(&mut out, &WordRecord { word, frequency })?;
                writeln!(out)?;
            } else {
                writeln!(out, "{word}\t{frequency}")?;
            }
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

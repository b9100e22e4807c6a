// keytrie-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use keytrie_core::Codepage;
use keytrie_dict::{DictError, Dictionary};
use keytrie_suggest::{InputCodes, ResultSet};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Dictionary file name looked up in each search directory.
pub const DICT_FILE: &str = "main.dict";

/// Per-user dictionary directory under `$HOME`.
const USER_DICT_DIR: &str = ".keytrie";

/// Environment variable naming a dictionary directory.
pub const DICT_PATH_ENV: &str = "KEYTRIE_DICT_PATH";

/// Error type for the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("could not find main.dict in any of the search paths:\n{searched}")]
    NotFound { searched: String },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Dictionary { path: PathBuf, source: DictError },
    #[error("unknown codepage: {0}")]
    UnknownCodepage(String),
    #[error("invalid key pattern {pattern:?}: {reason}")]
    Pattern {
        pattern: String,
        reason: &'static str,
    },
    #[error(transparent)]
    Search(#[from] DictError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Dictionary selection flags shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct DictArgs {
    /// Dictionary file, or a directory containing main.dict
    #[arg(short = 'd', long = "dict-path", value_name = "PATH")]
    pub dict_path: Option<PathBuf>,
    /// Codepage of single-byte characters in the dictionary
    #[arg(long, default_value = "iso-8859-7", value_name = "NAME")]
    pub codepage: String,
    /// Log verbosity; repeat for more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DictArgs {
    pub fn codepage(&self) -> Result<&'static Codepage, CliError> {
        Codepage::by_name(&self.codepage)
            .ok_or_else(|| CliError::UnknownCodepage(self.codepage.clone()))
    }
}

/// A dictionary file read into memory.
#[derive(Debug)]
pub struct LoadedDictionary {
    pub path: PathBuf,
    pub data: Vec<u8>,
    pub codepage: &'static Codepage,
}

impl LoadedDictionary {
    /// Locate and read the dictionary selected by `args`.
    pub fn load(args: &DictArgs) -> Result<Self, CliError> {
        let codepage = args.codepage()?;
        let path = find_dictionary(args.dict_path.as_deref())?;
        let data = std::fs::read(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = data.len(), codepage = codepage.name(), "dictionary loaded");
        Ok(Self {
            path,
            data,
            codepage,
        })
    }

    /// Wrap the buffer, optionally running the structural check first.
    pub fn dictionary(&self, validate: bool) -> Result<Dictionary<'_>, CliError> {
        let wrap = |source| CliError::Dictionary {
            path: self.path.clone(),
            source,
        };
        let dict = Dictionary::with_codepage(&self.data, self.codepage).map_err(wrap)?;
        if validate {
            let stats = dict.validate().map_err(wrap)?;
            debug!(
                lists = stats.lists,
                words = stats.words,
                max_depth = stats.max_depth,
                "dictionary validated"
            );
        }
        Ok(dict)
    }
}

/// Search for the dictionary file.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory containing `main.dict`)
/// 2. `KEYTRIE_DICT_PATH` environment variable
/// 3. `~/.keytrie`
/// 4. Current working directory
pub fn find_dictionary(dict_path: Option<&Path>) -> Result<PathBuf, CliError> {
    if let Some(p) = dict_path.filter(|p| p.is_file()) {
        return Ok(p.to_path_buf());
    }
    let search_paths = build_search_paths(dict_path);
    for dir in &search_paths {
        let candidate = dir.join(DICT_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(CliError::NotFound {
        searched: search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Build the list of directories to search for the dictionary file.
fn build_search_paths(dict_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(p.to_path_buf());
    }
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DICT_DIR));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the
/// verbosity count.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

/// Parse a key pattern into per-position alternatives.
///
/// A plain character is one position with a single key. A bracket group
/// lists the alternatives for one position, primary first: `c[ao]t` is
/// three positions, the middle one `a` or `o`.
pub fn parse_pattern(pattern: &str) -> Result<InputCodes, CliError> {
    let err = |reason| CliError::Pattern {
        pattern: pattern.to_string(),
        reason,
    };
    let unit = |c: char| -> Result<u16, CliError> {
        let mut buf = [0u16; 2];
        match c.encode_utf16(&mut buf) {
            [u] => Ok(*u),
            _ => Err(err("characters outside the Basic Multilingual Plane are not supported")),
        }
    };

    let mut rows: Vec<Vec<u16>> = Vec::new();
    let mut group: Option<Vec<u16>> = None;
    for c in pattern.chars() {
        match c {
            '[' if group.is_some() => return Err(err("nested '['")),
            '[' => group = Some(Vec::new()),
            ']' => {
                let alts = group.take().ok_or_else(|| err("unmatched ']'"))?;
                if alts.is_empty() {
                    return Err(err("empty alternative group"));
                }
                rows.push(alts);
            }
            c => {
                let u = unit(c)?;
                match group.as_mut() {
                    Some(alts) => alts.push(u),
                    None => rows.push(vec![u]),
                }
            }
        }
    }
    if group.is_some() {
        return Err(err("unclosed '['"));
    }
    Ok(InputCodes::from_rows(rows))
}

/// One suggestion as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct SuggestionRecord {
    pub word: String,
    pub frequency: u32,
}

/// One lookup as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct LookupRecord<'a> {
    pub input: &'a str,
    pub suggestions: Vec<SuggestionRecord>,
}

impl<'a> LookupRecord<'a> {
    pub fn new(input: &'a str, results: &ResultSet) -> Self {
        Self {
            input,
            suggestions: results
                .iter()
                .map(|s| SuggestionRecord {
                    word: s.text(),
                    frequency: s.frequency,
                })
                .collect(),
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

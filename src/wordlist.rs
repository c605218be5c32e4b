use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::Rng;
use reqwest::blocking::get;

use crate::word::Word;

const WORDLIST_URL: &str = "https://raw.githubusercontent.com/tabatkins/wordle-list/main/words";
const WORDLIST_FILE: &str = "words.txt";

const FALLBACK_HEAD: Word = Word::from_lowercase(['a', 'p', 'p', 'l', 'e']);

const FALLBACK_WORDS: &[&str] = &[
    "apple", "angle", "brave", "crane", "dwell", "eerie", "flock", "ghost", "house", "irony",
    "jolly", "knelt", "lemon", "magic", "noble", "ocean", "plumb", "quart", "raise", "slate",
    "stone", "thumb", "unzip", "vivid", "world", "xenon", "yacht", "zesty",
];

/// Where secret words come from.
pub trait WordSource: Send + Sync {
    fn pick(&self) -> Word;
}

/// A non-empty list of candidate secret words.
#[derive(Debug, Clone)]
pub struct WordList {
    head: Word,
    tail: Vec<Word>,
}

impl WordList {
    /// One word per line. Lines that are not five letters are skipped.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut words = text
            .lines()
            .filter_map(|line| Word::parse(line.trim()).ok())
            .filter(|w| seen.insert(*w));

        let head = words
            .next()
            .ok_or_else(|| anyhow::anyhow!("no 5-letter words available"))?;

        Ok(Self {
            head,
            tail: words.collect(),
        })
    }

    pub fn fallback() -> Self {
        Self {
            head: FALLBACK_HEAD,
            tail: FALLBACK_WORDS
                .iter()
                .filter_map(|w| Word::parse(w).ok())
                .filter(|w| *w != FALLBACK_HEAD)
                .collect(),
        }
    }

    /// Reads the list at `path`, downloading it first if it is missing and
    /// `allow_download` is set. Falls back to the built-in list on failure.
    pub fn load(path: &Path, allow_download: bool) -> Self {
        match Self::try_load(path, allow_download) {
            Ok(list) => {
                tracing::info!(words = list.len(), path = %path.display(), "Loaded word list");
                list
            }
            Err(e) => {
                tracing::warn!("Using built-in word list: {e:#}");
                Self::fallback()
            }
        }
    }

    fn try_load(path: &Path, allow_download: bool) -> Result<Self> {
        if allow_download {
            ensure_wordlist(path)?;
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read wordlist {}", path.display()))?;

        Self::from_text(&text)
    }

    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl WordSource for WordList {
    fn pick(&self) -> Word {
        let n = rand::rng().random_range(0..self.len());
        n.checked_sub(1)
            .and_then(|i| self.tail.get(i))
            .copied()
            .unwrap_or(self.head)
    }
}

/// Always yields the same word.
#[derive(Debug, Clone, Copy)]
pub struct FixedWord(pub Word);

impl WordSource for FixedWord {
    fn pick(&self) -> Word {
        self.0
    }
}

/// `<data dir>/wordle-server/words.txt`, or `./words.txt` if the platform has no data dir.
pub fn default_wordlist_path() -> PathBuf {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push("wordle-server");
            path.push(WORDLIST_FILE);
            path
        }
        None => PathBuf::from(WORDLIST_FILE),
    }
}

fn ensure_wordlist(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    tracing::info!(url = WORDLIST_URL, "Downloading word list");
    let text = get(WORDLIST_URL)?.error_for_status()?.text()?;

    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

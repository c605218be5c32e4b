use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wordle-server", version, about = "HTTP server for five-letter word guessing games")]
pub struct Args {
    /// Address to bind
    #[arg(long, env = "WORDLE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "WORDLE_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Word list to draw secret words from, one word per line
    #[arg(long, env = "WORDLE_WORDS", value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Never download the word list
    #[arg(long, env = "WORDLE_OFFLINE")]
    pub offline: bool,

    /// Also write daily-rotated logs to this directory
    #[arg(long, env = "WORDLE_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Number of HTTP worker threads
    #[arg(long, env = "WORDLE_WORKERS")]
    pub workers: Option<usize>,
}

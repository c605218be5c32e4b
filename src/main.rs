use std::sync::Arc;

use actix_web::web;
use anyhow::{Context, Result};
use clap::Parser;

use wordle_server::{
    args::Args,
    server::{self, AppState},
    telemetry,
    wordlist::{WordList, default_wordlist_path},
};

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = telemetry::init_tracing(args.log_dir.as_deref());

    // The list may be downloaded with a blocking client, so load it before
    // the HTTP runtime starts.
    let path = args.words.clone().unwrap_or_else(default_wordlist_path);
    let words = WordList::load(&path, !args.offline);

    let state = web::Data::new(AppState::new(Arc::new(words)));

    actix_web::rt::System::new()
        .block_on(server::run(&args, state))
        .context("server failed")
}

mod cli;
mod commands;
mod format;
mod output;

use clap::Parser;
use commands::AppContext;
use markshelf::{config, utils, BookmarkStore, MarkshelfError, Result, SqliteStore};
use std::process::ExitCode;

fn run(args: cli::Cli) -> Result<()> {
    let db_path = match &args.db {
        Some(path) => path.clone(),
        None => utils::get_default_db_path(),
    };

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let backend = SqliteStore::init(&db_path)?;
    let mut store = BookmarkStore::open(backend)?;
    log::debug!("Loaded {} bookmark(s) from {:?}", store.len(), db_path);

    // Load configuration
    let cfg = match &args.config {
        Some(config_path) => config::Config::load_from_path(config_path).map_err(|e| {
            MarkshelfError::Config(format!("{}: {}", config_path.display(), e))
        })?,
        None => config::Config::load(),
    };

    let mut ctx = AppContext {
        store: &mut store,
        config: &cfg,
    };
    cli::handle_args(args, &mut ctx)
}

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // Initialize logger: RUST_LOG applies unless --debug is given
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if args.version {
        println!("markshelf {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! # CLI Layer
//!
//! `run()` is the only entry point: it parses arguments, sets up logging,
//! loads the configuration, opens the notebook and dispatches to a handler.
//! Handlers call the `TvApi` and hand the `CmdResult` to `render`.
//!
//! Logging goes through `env_logger`: warnings by default, debug with `-v`,
//! and `RUST_LOG` wins over both.
//!
//! Problems the notebook reports while scanning or reading notes are collected
//! and printed as warnings (on stderr) once the command has run, whether or not
//! it succeeded.

use super::render::{print_messages, render_note_list, render_paths};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tvnotes::api::{diagnostic_messages, ConfigAction, TvApi};
use tvnotes::commands;
use tvnotes::config::TvConfig;
use tvnotes::diagnostics::CollectedDiagnostics;
use tvnotes::editor::{get_editor, open_in_editor};
use tvnotes::error::{NotebookError, Result};
use tvnotes::notebook::NoteBook;

/// Environment variable that overrides where `config.json` lives.
const CONFIG_DIR_ENV: &str = "TVNOTES_CONFIG_DIR";

struct AppContext {
    api: TvApi,
    config: TvConfig,
    diagnostics: Arc<CollectedDiagnostics>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = config_dir()?;
    debug!("Using config directory {}", config_dir.display());

    // Config doesn't need a notebook; a broken notes dir must still be fixable.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config_dir)?;

    let outcome = match cli.command {
        Some(Commands::List { query }) => handle_list(&ctx, query),
        Some(Commands::New { title }) => handle_new(&mut ctx, title),
        Some(Commands::Open { query }) => handle_open(&mut ctx, query),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Path { selectors }) => handle_paths(&ctx, selectors),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_list(&ctx, Vec::new()),
    };

    report_diagnostics(&ctx);
    outcome
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "tvnotes")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NotebookError::Api("Could not determine a config directory".into()))
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let mut config = TvConfig::load(config_dir)?;
    if let Some(dir) = &cli.notes_dir {
        config.notes_dir = dir.clone();
    }
    if let Some(ext) = &cli.extension {
        config.set_extension(ext);
    }

    let diagnostics = Arc::new(CollectedDiagnostics::new());
    let notebook =
        NoteBook::open(config.notebook_options().with_diagnostics(diagnostics.clone()))?;
    debug!(
        "Opened notebook at {} with {} notes",
        notebook.root().display(),
        notebook.len()
    );

    Ok(AppContext {
        api: TvApi::new(notebook),
        config,
        diagnostics,
    })
}

fn report_diagnostics(ctx: &AppContext) {
    print_messages(&diagnostic_messages(&ctx.diagnostics.reports()));
}

fn handle_list(ctx: &AppContext, query: Vec<String>) -> Result<()> {
    let result = ctx.api.list_notes(&query.join(" "))?;
    print!("{}", render_note_list(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext, title: Vec<String>) -> Result<()> {
    let result = ctx.api.create_note(&title.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_open(ctx: &mut AppContext, query: Vec<String>) -> Result<()> {
    let result = ctx.api.open_note(&query.join(" "))?;
    print_messages(&result.messages);

    if let Some(path) = result.note_paths.first() {
        let editor = get_editor(ctx.config.editor.as_deref())?;
        open_in_editor(&editor, path)?;
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.note_paths(&selectors)?;
    print!("{}", render_paths(&result.note_paths));
    Ok(())
}

fn handle_config(config_dir: PathBuf, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::Get(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&config_dir, action)?;
    print_messages(&result.messages);
    Ok(())
}

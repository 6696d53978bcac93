//! CLI entrypoint for parley
//!
//! Wires the layers together using dependency injection: the console
//! surface (UI bridge) is handed to the Lua engine at construction, the
//! engine to the chat session, the session to the REPL. There is no
//! global bridge accessor anywhere.

use anyhow::{bail, Context, Result};
use clap::Parser;
use parley_application::{ChatSession, TranscriptLoggerPort, UiBridgePort};
use parley_domain::{script::parse_description, ScriptSource};
use parley_infrastructure::{ConfigLoader, FsMediaLibrary, JsonlTranscriptLogger, LuaChatEngine};
use parley_presentation::{ChatRepl, Cli, ConsoleSurface};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("configuration error: {}", e))?
    };

    // Validate the script up front for a clean error message
    let script = ScriptSource::new(cli.script.clone())?;
    if !script.path().is_file() {
        bail!("script not found: {}", script.path().display());
    }
    let source = std::fs::read_to_string(script.path())
        .with_context(|| format!("failed to read {}", script.path().display()))?;
    let description = parse_description(&source);

    info!(script = %script.path().display(), "starting parley");

    // === Dependency Injection ===
    let library_root = cli.library.unwrap_or(config.library.root.clone());
    let library = Arc::new(FsMediaLibrary::new(
        library_root,
        config.library.extensions.clone(),
    ));

    let mut surface = ConsoleSurface::new(library);
    if let Some(width) = cli.image_width {
        surface = surface.with_image_width(width);
    }
    let bridge: Arc<dyn UiBridgePort> = Arc::new(surface);

    let engine = Arc::new(LuaChatEngine::new(bridge)?);

    let mut session = ChatSession::new(engine);
    if config.transcript.enabled && !cli.no_transcript {
        if let Some(logger) = make_transcript_logger(config.transcript.dir.clone(), &script) {
            info!(path = %logger.path().display(), "transcript enabled");
            let logger: Arc<dyn TranscriptLoggerPort> = Arc::new(logger);
            session = session.with_logger(logger);
        }
    }

    let repl = ChatRepl::new(session, script)
        .with_description(description)
        .with_prompt(config.repl.prompt.clone())
        .with_banner(config.repl.banner && !cli.quiet);

    repl.run().await?;

    Ok(())
}

/// Build the per-session transcript logger, best-effort.
fn make_transcript_logger(
    dir: Option<PathBuf>,
    script: &ScriptSource,
) -> Option<JsonlTranscriptLogger> {
    let dir = dir.or_else(|| dirs::data_dir().map(|d| d.join("parley").join("transcripts")))?;
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    JsonlTranscriptLogger::new(dir.join(format!("{}-{}.jsonl", script.name(), stamp)))
}

mod app;
mod args;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod highscore;
mod render;
mod util;
use crate::app::App;
use crate::args::Arguments;
use crate::config::Config;
use crate::game::{Grid, IntervalTimer, Session};
use crate::render::TerminalRenderer;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let r = match Arguments::from_env() {
        Ok(Arguments::Run { config, log_file }) => run(config.as_deref(), log_file.as_deref()),
        Ok(Arguments::Help) => writeln!(io::stdout().lock(), "{}", Arguments::usage().trim_end())
            .map_err(Into::into),
        Ok(Arguments::Version) => writeln!(
            io::stdout().lock(),
            "{} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
        .map_err(Into::into),
        Err(e) => Err(anyhow::Error::new(e).context("invalid command line")),
    };
    exit(r)
}

fn run(config: Option<&Path>, log_file: Option<&Path>) -> anyhow::Result<()> {
    let cfg = match config {
        Some(path) => Config::load(path, false),
        None => Config::default_path()
            .map_or_else(|_| Ok(Config::default()), |path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    if let Some(path) = log_file.or(cfg.files.log_file.as_deref()) {
        init_logging(path)?;
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting up");
    let store = cfg.high_score_store();
    match store.path() {
        Some(path) => tracing::debug!(path = %path.display(), "Using high score file"),
        None => tracing::debug!("High score persistence disabled"),
    }
    let session = Session::new(
        Grid::new(cfg.game.grid_size),
        cfg.game.difficulty,
        IntervalTimer::new(),
        store,
        rand::rng(),
    )?;
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(session, TerminalRenderer::new(terminal)).run());
    let _ = execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    r.map_err(Into::into)
}

/// Send log messages to `path`, appending to anything already there.  The
/// level can be adjusted with `RUST_LOG`.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e:#}", env!("CARGO_PKG_NAME"));
            ExitCode::from(2)
        }
    }
}

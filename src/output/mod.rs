// Output module.
// Chooses between JSON, saved text, and console listing, then renders.

pub mod render;
pub mod terminal;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::Config;
use crate::error::{GhtrendError, Result};
use crate::github::Repository;
use crate::source::Fetched;

pub use render::{Line, Span, Tone};
pub use terminal::Terminal;

/// How results are emitted. Only one mode applies per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON to stdout, or to the file when a save path is set.
    Json { save: Option<PathBuf> },
    /// Plain-text report written to a file.
    SaveText(PathBuf),
    Console,
}

impl OutputMode {
    /// JSON wins over saving text, which wins over the console.
    pub fn select(config: &Config) -> Self {
        if config.json {
            OutputMode::Json {
                save: config.save.clone(),
            }
        } else if let Some(path) = &config.save {
            OutputMode::SaveText(path.clone())
        } else {
            OutputMode::Console
        }
    }
}

/// Append `.ext` unless the path already has that extension (case-insensitive).
pub fn with_extension(path: &Path, ext: &str) -> PathBuf {
    let has_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));
    if has_ext {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Write `content` to `path` with the extension enforced. Returns the final path.
pub fn save_to_file(path: &Path, ext: &str, content: &str) -> Result<PathBuf> {
    let target = with_extension(path, ext);
    fs::write(&target, content)?;
    Ok(target)
}

/// Open a URL in the default browser.
pub fn open_in_browser(url: &str) -> Result<()> {
    open::that(url).map_err(|e| GhtrendError::Browser(e.to_string()))
}

fn emit(term: &Terminal, save: Option<&Path>, ext: &str, content: &str) {
    match save {
        None => print!("{}", content),
        Some(path) => match save_to_file(path, ext, content) {
            Ok(target) => term.success(format!("Saved → {}", target.display())),
            Err(e) => term.error(format!("Failed to save file: {}", e)),
        },
    }
}

fn open_top(term: &Terminal, repos: &[Repository], opener: impl Fn(&str) -> Result<()>) {
    let Some(top) = repos.first() else {
        return;
    };
    debug!("Opening {}", top.html_url);
    match opener(&top.html_url) {
        Ok(()) => term.success(format!("Opened → {}", top.full_name)),
        Err(e) => term.error(e.to_string()),
    }
}

/// Render ranked results according to `config`.
pub fn present(fetched: &Fetched, config: &Config, now: DateTime<Utc>) {
    present_with(fetched, config, now, open_in_browser);
}

/// [`present`] with a custom URL opener for `--open`.
pub fn present_with(
    fetched: &Fetched,
    config: &Config,
    now: DateTime<Utc>,
    opener: impl Fn(&str) -> Result<()>,
) {
    let term = Terminal::new(config.color);
    let repos = &fetched.repos;

    match OutputMode::select(config) {
        OutputMode::Json { save } => match render::json_report(repos) {
            Ok(json) => emit(&term, save.as_deref(), "json", &format!("{}\n", json)),
            Err(e) => term.error(format!("Failed to encode JSON: {}", e)),
        },
        OutputMode::SaveText(path) => {
            emit(&term, Some(path.as_path()), "txt", &render::text_report(repos, now));
        }
        OutputMode::Console => {
            term.print(&[render::status_line(fetched.origin, now)]);
            term.print(&render::listing(repos, now));
        }
    }

    if config.open {
        open_top(&term, repos, opener);
    }
}

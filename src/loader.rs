//! Content load orchestration.
//!
//! One [`Loader`] drives one page view: fetch the content document from a
//! [`ContentSource`], parse it, validate it per section, then invoke the
//! render entry points in a fixed order — site metadata, navigation, the
//! home sections (only when the caller says this is the home page), footer.
//! The order matters: navigation rendering appends the fixed agent-portal
//! entry that later page wiring depends on.
//!
//! Failure policy:
//!
//! - fetch or parse failure aborts the whole load; nothing renders and the
//!   page keeps its statically-authored markup (graceful degradation)
//! - a section that fails validation is skipped and logged; everything else
//!   still renders (partial rendering)
//! - whether the page is the home page is a signal supplied by the caller,
//!   never computed here
//!
//! The loader is single-use: a second `load` call on the same instance is
//! ignored.

use crate::page::PageShell;
use crate::render;
use crate::validate::{self, ValidationFailure};
use log::{error, warn};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Where the content document comes from. The production site fetches over
/// HTTP; the crate ships a file-backed source and tests use an in-memory one.
pub trait ContentSource {
    fn fetch(&self) -> Result<String, FetchError>;
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content unavailable: {0}")]
    Unavailable(String),
}

/// Reads the content document from a file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl ContentSource for FileSource {
    fn fetch(&self) -> Result<String, FetchError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// In-memory source, for tests and embedding.
pub struct StaticSource(pub String);

impl ContentSource for StaticSource {
    fn fetch(&self) -> Result<String, FetchError> {
        Ok(self.0.clone())
    }
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Result of a [`Loader::load`] call.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The document rendered; `skipped` lists sections that failed
    /// validation and were left at their static fallback.
    Loaded { skipped: Vec<ValidationFailure> },
    /// Fetch or parse failed; the page was not touched.
    Failed(LoadError),
    /// The loader had already run (or is running); call ignored.
    Ignored,
}

/// Per-page-view load state machine: `Idle → Loading → (Loaded | Failed)`.
pub struct Loader {
    state: LoadState,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Run the load once. `is_home` gates the home-section renderers and is
    /// supplied by the hosting page.
    pub fn load(
        &mut self,
        source: &dyn ContentSource,
        page: &mut PageShell,
        is_home: bool,
    ) -> LoadOutcome {
        if self.state != LoadState::Idle {
            warn!("load requested while in state {:?}; ignored", self.state);
            return LoadOutcome::Ignored;
        }
        self.state = LoadState::Loading;

        let body = match source.fetch() {
            Ok(body) => body,
            Err(err) => {
                error!("content fetch failed: {err}");
                self.state = LoadState::Failed;
                return LoadOutcome::Failed(err.into());
            }
        };

        let raw: serde_json::Value = match serde_json::from_str(&body) {
            Ok(raw) => raw,
            Err(err) => {
                error!("content parse failed: {err}");
                self.state = LoadState::Failed;
                return LoadOutcome::Failed(err.into());
            }
        };

        let doc = validate::validate(&raw);
        for failure in &doc.failures {
            warn!("skipping section: {failure}");
        }

        if let Some(site) = &doc.site {
            render::render_site_metadata(page, site);
        }
        if let Some(nav) = &doc.navigation {
            render::render_navigation(page, nav);
        }
        if is_home && let Some(home) = &doc.home {
            render::render_slider(page, &home.slider);
            render::render_about(page, home.about.as_ref());
            render::render_features(page, &home.features);
            render::render_projects(page, home.projects.as_ref());
            render::render_values(page, home.values.as_ref());
        }
        if let Some(footer) = &doc.footer {
            render::render_footer(page, footer);
        }

        self.state = LoadState::Loaded;
        LoadOutcome::Loaded {
            skipped: doc.failures,
        }
    }
}

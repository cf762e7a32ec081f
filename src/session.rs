//! Analysis session: the loaded dataset plus the placeholder login state.
//!
//! A `Session` is an explicit value owned by the caller and handed to the
//! presentation layer. Nothing here is process-wide.

use crate::config::{AuthConfig, IngestConfig};
use crate::core::normalizer::{self, Dataset};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What makes two loads "the same upload".
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileIdentity {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl FileIdentity {
    fn of(path: &Path) -> AppResult<Self> {
        let meta = fs::metadata(path)?;
        Ok(Self {
            path: fs::canonicalize(path)?,
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

#[derive(Debug, Default)]
pub struct Session {
    authenticated_as: Option<String>,
    cached: Option<(FileIdentity, IngestConfig, Dataset)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `username`/`password` against the configured placeholder account.
    pub fn login(&mut self, username: &str, password: &str, auth: &AuthConfig) -> AppResult<()> {
        if username == auth.username && password == auth.password {
            self.authenticated_as = Some(username.to_string());
            Ok(())
        } else {
            self.authenticated_as = None;
            Err(AppError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        self.authenticated_as = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated_as.is_some()
    }

    /// Passes when the gate is disabled or the session is logged in.
    pub fn require_login(&self, auth: &AuthConfig) -> AppResult<()> {
        if !auth.required || self.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::LoginRequired)
        }
    }

    /// Load (or reuse) the normalized dataset for `path`.
    ///
    /// The normalizer output is memoized on the file identity and the ingest
    /// settings; a failed load leaves no dataset behind.
    pub fn load(&mut self, path: &Path, ingest: &IngestConfig) -> AppResult<&Dataset> {
        let identity = FileIdentity::of(path)?;

        let hit = matches!(&self.cached, Some((id, cfg, _)) if *id == identity && cfg == ingest);
        if hit {
            log::debug!("reusing normalized dataset for {}", path.display());
        } else {
            self.cached = None;
            let dataset = normalizer::load_file(path, ingest)?;
            self.cached = Some((identity, ingest.clone(), dataset));
        }

        self.dataset()
            .ok_or_else(|| AppError::Other("dataset not loaded".into()))
    }

    /// Dataset of the last successful load, if any.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.cached.as_ref().map(|(_, _, d)| d)
    }
}

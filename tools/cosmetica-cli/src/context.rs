//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use cosmetica_auth::{AuthError, SessionGate};
use cosmetica_cache::FileBackend;
use cosmetica_catalog::CatalogStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

const CORRUPT_CATALOG_HINT: &str =
    "The catalog can't be read. Run `cosmetica catalog reset` to restore the sample catalog";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, `None` for built-in defaults.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    data_dir: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        data_dir: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let data_dir = match data_dir {
            Some(dir) => resolve(&cwd, &dir),
            None => {
                let base = config_path
                    .as_deref()
                    .and_then(Path::parent)
                    .unwrap_or(&cwd);
                resolve(base, &config.storage.data_dir)
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    ///
    /// A config file that exists but doesn't parse is an error rather than
    /// being skipped.
    fn find_config(start: &Path) -> Result<Option<(PathBuf, CliConfig)>> {
        for dir in start.ancestors() {
            for name in CONFIG_FILE_NAMES {
                let path = dir.join(name);
                if path.is_file() {
                    let config = CliConfig::load(&path)?;
                    return Ok(Some((path, config)));
                }
            }
        }
        Ok(None)
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Open the storage backend shared by the catalog and the session.
    pub fn backend(&self) -> Result<FileBackend> {
        self.output
            .debug(&format!("Using data directory {}", self.data_dir.display()));
        FileBackend::open(&self.data_dir).with_context(|| {
            format!("Failed to open data directory {}", self.data_dir.display())
        })
    }

    /// Open the catalog, seeding it on first use.
    pub fn open_store(&self) -> Result<CatalogStore<FileBackend>> {
        match CatalogStore::open(self.backend()?) {
            Ok(store) => Ok(store),
            Err(e) if e.is_corrupt() => Err(anyhow::Error::new(e).context(CORRUPT_CATALOG_HINT)),
            Err(e) => Err(e).context("Failed to open catalog"),
        }
    }

    /// Restore the logged-in session.
    pub fn open_session(&self) -> Result<SessionGate<FileBackend>> {
        match SessionGate::restore(self.backend()?) {
            Ok(gate) => Ok(gate),
            Err(e @ AuthError::CorruptSession(_)) => Err(anyhow::Error::new(e)
                .context("The saved session can't be read. Run `cosmetica logout` to clear it")),
            Err(e) => Err(e).context("Failed to restore session"),
        }
    }

    /// Restore the session, clearing it first if it can't be read.
    pub fn open_session_or_discard(&self) -> Result<SessionGate<FileBackend>> {
        let backend = self.backend()?;
        match SessionGate::restore(backend.clone()) {
            Ok(gate) => Ok(gate),
            Err(AuthError::CorruptSession(reason)) => {
                self.output
                    .warn(&format!("Discarding unreadable session ({})", reason));
                SessionGate::discard(backend).context("Failed to clear session")
            }
            Err(e) => Err(e).context("Failed to restore session"),
        }
    }
}

/// Resolve `path` against `base` unless it is already absolute.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

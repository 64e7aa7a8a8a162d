//! Persistent memory notes for the assistant
//!
//! The assistant's context is seeded from a per-project markdown file the
//! user curates by hand or through `memory add`. The store creates the file
//! from a small skeleton on first use and appends timestamped notes.
//!
//! ## Crash Resistance
//!
//! Uses atomic writes: write to a temp file in the same directory, then
//! rename. The notes file is never left in a corrupted state.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Skeleton written when the notes file does not exist yet
const TEMPLATE: &str = "\
# Project Memory

Notes in this file are sent along with every assistant request.
Edit freely; `memory add` appends below.

## Notes
";

/// Memory store error types
#[derive(Debug)]
pub enum MemoryError {
    Io(io::Error),
}

impl std::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for MemoryError {
    fn from(e: io::Error) -> Self {
        MemoryError::Io(e)
    }
}

/// Persistent markdown notes file
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build a store from configuration, falling back to `default_path`
    /// when no notes path is configured.
    pub fn from_config(config: &Config, default_path: PathBuf) -> Self {
        let path = config.memory.path.clone().unwrap_or(default_path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the notes file, creating it from the skeleton on first use
    pub fn load_or_init(&self) -> Result<String, MemoryError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Creating memory file at {:?}", self.path);
                self.write_atomic(TEMPLATE)?;
                Ok(TEMPLATE.to_string())
            }
            Err(e) => Err(MemoryError::Io(e)),
        }
    }

    /// Current file text, for inclusion in an outgoing request
    pub fn contents(&self) -> Result<String, MemoryError> {
        self.load_or_init()
    }

    /// Append a timestamped note and persist
    pub fn append(&self, text: &str) -> Result<(), MemoryError> {
        let mut contents = self.load_or_init()?;
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M");
        contents.push_str(&format!("- [{}] {}\n", stamp, text.trim_end()));
        self.write_atomic(&contents)?;
        tracing::debug!("Appended note to {:?}", self.path);
        Ok(())
    }

    // Write atomically: temp file + rename
    fn write_atomic(&self, contents: &str) -> Result<(), MemoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = self.path.with_extension("md.tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> MemoryStore {
        MemoryStore::new(dir.path().join("memory.md"))
    }

    #[test]
    fn test_template_created_on_first_use() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let text = store.load_or_init().unwrap();
        assert!(text.starts_with("# Project Memory"));
        assert!(text.contains("## Notes"));
        assert!(store.path().exists());
    }

    #[test]
    fn test_append_survives_reload() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append("prefer explicit lifetimes").unwrap();
        store.append("tests live next to the code").unwrap();

        let reloaded = store_in(&dir).contents().unwrap();
        assert!(reloaded.contains("prefer explicit lifetimes"));
        assert!(reloaded.contains("tests live next to the code"));
        // appended after the skeleton's notes section
        let notes_at = reloaded.find("## Notes").unwrap();
        let first_at = reloaded.find("prefer explicit").unwrap();
        assert!(first_at > notes_at);
    }

    #[test]
    fn test_append_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = MemoryStore::new(dir.path().join("nested/deeper/memory.md"));
        store.append("note").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append("note").unwrap();
        assert!(!dir.path().join("memory.md.tmp").exists());
    }

    #[test]
    fn test_existing_file_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("memory.md");
        std::fs::write(&path, "# Mine\n\ncustom contents\n").unwrap();
        let text = MemoryStore::new(&path).load_or_init().unwrap();
        assert_eq!(text, "# Mine\n\ncustom contents\n");
    }

    #[test]
    fn test_from_config_prefers_configured_path() {
        let mut config = Config::default();
        config.memory.path = Some(PathBuf::from("/tmp/custom.md"));
        let store = MemoryStore::from_config(&config, PathBuf::from("/tmp/default.md"));
        assert_eq!(store.path(), Path::new("/tmp/custom.md"));

        let store = MemoryStore::from_config(&Config::default(), PathBuf::from("/tmp/default.md"));
        assert_eq!(store.path(), Path::new("/tmp/default.md"));
    }
}

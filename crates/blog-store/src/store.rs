//! Blog data file storage with XDG path support.
//!
//! The blog data is stored as a single JSON document holding posts, comments
//! and categories. By default it lives at `~/.local/share/blogq/posts.json`
//! on Linux (the platform data directory elsewhere).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::BlogData;

/// Default data filename.
const DATA_FILENAME: &str = "posts.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "blogq";

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine the platform data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read data file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write data file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create data directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistent JSON storage for blog data.
///
/// # Example
///
/// ```no_run
/// use blog_store_rs::PostStore;
///
/// let store = PostStore::new()?;
///
/// // Load existing data or start empty
/// let mut data = store.load_or_default()?;
/// data.posts.retain(|p| p.estado == "publicado");
///
/// store.save(&data)?;
/// # Ok::<(), blog_store_rs::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PostStore {
    /// Path to the data file.
    path: PathBuf,
}

impl PostStore {
    /// Creates a new `PostStore` with the default data path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `PostStore` with a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default data file path.
    ///
    /// On Linux: `~/.local/share/blogq/posts.json`
    /// On macOS: `~/Library/Application Support/blogq/posts.json`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(StoreError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(DATA_FILENAME))
    }

    /// Returns the path to the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the data file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the blog data from disk.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` if the file cannot be read.
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub fn load(&self) -> Result<BlogData> {
        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let data: BlogData = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            posts = data.posts.len(),
            comments = data.comments.len(),
            categories = data.categories.len(),
            "loaded blog data"
        );
        Ok(data)
    }

    /// Loads the blog data, returning empty data if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` for I/O errors other than "file not found".
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub fn load_or_default(&self) -> Result<BlogData> {
        match self.load() {
            Ok(data) => Ok(data),
            Err(StoreError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                debug!(path = %self.path.display(), "no data file, starting empty");
                Ok(BlogData::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Saves the blog data to disk atomically.
    ///
    /// Creates the parent directory if needed and writes through a temporary
    /// file that is then renamed over the target.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::CreateDirError` if the directory cannot be created.
    /// - Returns `StoreError::WriteError` if the file cannot be written.
    /// - Returns `StoreError::Json` if serialization fails.
    pub fn save(&self, data: &BlogData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), posts = data.posts.len(), "saved blog data");
        Ok(())
    }
}

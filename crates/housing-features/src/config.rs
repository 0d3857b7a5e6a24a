//! Project paths and constants for the feature pipeline.
//!
//! All data directories hang off a single project root. By default that root
//! is the crate directory, fixed at build time, so the binary always finds
//! `data/raw` next to its sources no matter where it is launched from.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Seed shared with downstream consumers (model training, CV splits).
/// Nothing in this crate draws random numbers.
pub const RANDOM_STATE: u64 = 42;

/// Name of the data directory under the project root.
pub const DATA_DIR: &str = "data";

/// Directory locations used by the pipeline.
///
/// Use [`ProjectPaths::default()`] for the fixed project layout, or
/// [`ProjectPaths::builder()`] to point at another root (tests, CLI).
///
/// # Example
///
/// ```rust,ignore
/// use housing_features::config::ProjectPaths;
///
/// let paths = ProjectPaths::builder()
///     .root("/srv/housing")
///     .build();
/// assert_eq!(paths.raw, std::path::PathBuf::from("/srv/housing/data/raw"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    /// Project root directory.
    pub root: PathBuf,

    /// Raw CSV inputs (`train.csv`, `test.csv`).
    pub raw: PathBuf,

    /// Scratch area for intermediate artifacts. Unused by the cleaning pipeline.
    pub interim: PathBuf,

    /// Cleaned Parquet outputs.
    pub processed: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::from_root(default_project_root())
    }
}

impl ProjectPaths {
    /// Create a new paths builder.
    pub fn builder() -> ProjectPathsBuilder {
        ProjectPathsBuilder::default()
    }

    /// Derive the standard `data/{raw,interim,processed}` layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data = root.join(DATA_DIR);
        Self {
            raw: data.join("raw"),
            interim: data.join("interim"),
            processed: data.join("processed"),
            root,
        }
    }

    /// Path of the raw CSV for a split stem (e.g. `"train"`).
    pub fn raw_file(&self, stem: &str) -> PathBuf {
        self.raw.join(format!("{stem}.csv"))
    }

    /// Path of the processed Parquet file for a split stem.
    pub fn processed_file(&self, stem: &str) -> PathBuf {
        self.processed.join(format!("{stem}.parquet"))
    }
}

/// The fixed project root compiled into the binary.
pub fn default_project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

/// Builder for [`ProjectPaths`] with fluent API.
///
/// Unset directories are derived from the root.
#[derive(Debug, Default)]
pub struct ProjectPathsBuilder {
    root: Option<PathBuf>,
    raw: Option<PathBuf>,
    interim: Option<PathBuf>,
    processed: Option<PathBuf>,
}

impl ProjectPathsBuilder {
    /// Set the project root.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Override the raw-data directory.
    pub fn raw_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw = Some(path.into());
        self
    }

    /// Override the interim-data directory.
    pub fn interim_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.interim = Some(path.into());
        self
    }

    /// Override the processed-data directory.
    pub fn processed_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.processed = Some(path.into());
        self
    }

    /// Build the paths.
    pub fn build(self) -> ProjectPaths {
        let base = ProjectPaths::from_root(self.root.unwrap_or_else(default_project_root));
        ProjectPaths {
            raw: self.raw.unwrap_or(base.raw),
            interim: self.interim.unwrap_or(base.interim),
            processed: self.processed.unwrap_or(base.processed),
            root: base.root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = ProjectPaths::default();
        assert_eq!(paths.root, default_project_root());
        assert!(paths.raw.ends_with("data/raw"));
        assert!(paths.interim.ends_with("data/interim"));
        assert!(paths.processed.ends_with("data/processed"));
    }

    #[test]
    fn test_from_root() {
        let paths = ProjectPaths::from_root("/tmp/project");
        assert_eq!(paths.raw, PathBuf::from("/tmp/project/data/raw"));
        assert_eq!(paths.processed, PathBuf::from("/tmp/project/data/processed"));
    }

    #[test]
    fn test_builder_overrides() {
        let paths = ProjectPaths::builder()
            .root("/tmp/project")
            .processed_dir("/tmp/out")
            .build();

        assert_eq!(paths.raw, PathBuf::from("/tmp/project/data/raw"));
        assert_eq!(paths.interim, PathBuf::from("/tmp/project/data/interim"));
        assert_eq!(paths.processed, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_builder_overrides_every_directory() {
        let paths = ProjectPaths::builder()
            .root("/tmp/project")
            .raw_dir("/mnt/kaggle/house-prices")
            .interim_dir("/tmp/scratch")
            .processed_dir("/tmp/out")
            .build();

        assert_eq!(paths.root, PathBuf::from("/tmp/project"));
        assert_eq!(paths.raw, PathBuf::from("/mnt/kaggle/house-prices"));
        assert_eq!(paths.interim, PathBuf::from("/tmp/scratch"));
        assert_eq!(paths.processed, PathBuf::from("/tmp/out"));
        assert_eq!(
            paths.raw_file("train"),
            PathBuf::from("/mnt/kaggle/house-prices/train.csv")
        );
    }

    #[test]
    fn test_file_helpers() {
        let paths = ProjectPaths::from_root("/p");
        assert_eq!(paths.raw_file("train"), PathBuf::from("/p/data/raw/train.csv"));
        assert_eq!(
            paths.processed_file("test"),
            PathBuf::from("/p/data/processed/test.parquet")
        );
    }

    #[test]
    fn test_random_state() {
        assert_eq!(RANDOM_STATE, 42);
    }

    #[test]
    fn test_paths_serialization() {
        let paths = ProjectPaths::from_root("/p");
        let json = serde_json::to_string(&paths).unwrap();
        let deserialized: ProjectPaths = serde_json::from_str(&json).unwrap();
        assert_eq!(paths, deserialized);
    }
}

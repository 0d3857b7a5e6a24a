use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One of the two dataset partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    /// Labelled partition; carries `SalePrice`.
    Train,
    /// Held-out partition; target withheld.
    Test,
}

impl Split {
    /// Both splits, in processing order.
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    /// File stem used for both the raw CSV and the processed Parquet file.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }

    pub fn is_train(&self) -> bool {
        matches!(self, Self::Train)
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for Split {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Self::Train),
            "test" => Ok(Self::Test),
            other => Err(FeatureError::InvalidSplit(other.to_string())),
        }
    }
}

/// What happened to one split during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSummary {
    pub split: Split,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns_before: usize,
    pub columns_after: usize,
    pub added_columns: Vec<String>,
    pub processing_steps: Vec<String>,
}

/// Result of a full `clean_and_write` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub splits: Vec<SplitSummary>,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn split(&self, split: Split) -> Option<&SplitSummary> {
        self.splits.iter().find(|s| s.split == split)
    }

    /// Output files in processing order.
    pub fn output_paths(&self) -> Vec<&PathBuf> {
        self.splits.iter().map(|s| &s.output_path).collect()
    }
}

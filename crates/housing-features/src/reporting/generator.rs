use crate::error::Result;
use crate::types::{RunSummary, SplitSummary};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// File name of the run report inside the processed directory.
pub const REPORT_FILE_NAME: &str = "cleaning_report.json";

/// JSON document describing one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Total execution time in milliseconds
    pub duration_ms: u64,
    /// Per-split details, in processing order
    pub splits: Vec<SplitSummary>,
}

impl From<&RunSummary> for CleaningReport {
    fn from(summary: &RunSummary) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            duration_ms: summary.duration_ms,
            splits: summary.splits.clone(),
        }
    }
}

/// Writes run reports next to the processed data.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the report for a run and return its path.
    pub fn write_report(&self, summary: &RunSummary) -> Result<PathBuf> {
        let report = CleaningReport::from(summary);

        fs::create_dir_all(&self.output_dir)?;
        let report_path = self.output_dir.join(REPORT_FILE_NAME);
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(&report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Split;
    use tempfile::TempDir;

    fn summary() -> RunSummary {
        let split = |split: Split, rows| SplitSummary {
            split,
            input_path: PathBuf::from(format!("raw/{split}.csv")),
            output_path: PathBuf::from(format!("processed/{split}.parquet")),
            rows,
            columns_before: 81,
            columns_after: 85,
            added_columns: vec!["TotalSF".to_string()],
            processing_steps: vec!["Derived 'TotalSF'".to_string()],
        };
        RunSummary {
            splits: vec![split(Split::Train, 1460), split(Split::Test, 1459)],
            duration_ms: 12,
        }
    }

    #[test]
    fn test_write_report() {
        let dir = TempDir::new().unwrap();
        let generator = ReportGenerator::new(dir.path().join("processed"));

        let path = generator.write_report(&summary()).unwrap();

        assert!(path.ends_with(REPORT_FILE_NAME));
        let content = fs::read_to_string(&path).unwrap();
        let parsed: CleaningReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.splits.len(), 2);
        assert_eq!(parsed.splits[0].split, Split::Train);
        assert_eq!(parsed.splits[1].rows, 1459);
        assert_eq!(parsed.duration_ms, 12);
    }

    #[test]
    fn test_report_uses_snake_case_split_names() {
        let report = CleaningReport::from(&summary());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["splits"][0]["split"], "train");
        assert_eq!(json["splits"][1]["split"], "test");
    }
}

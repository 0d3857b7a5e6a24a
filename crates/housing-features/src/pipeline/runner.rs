//! End-to-end batch run: load both splits, clean them, write Parquet.

use crate::cleaner::transform;
use crate::config::ProjectPaths;
use crate::error::{Result, ResultExt};
use crate::loader::load_raw;
use crate::types::{RunSummary, Split, SplitSummary};
use crate::utils::{added_columns, column_names};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// A split that has been loaded and transformed but not yet written.
struct CleanedSplit {
    split: Split,
    df: DataFrame,
    summary: SplitSummary,
}

/// The batch feature pipeline over a project layout.
///
/// # Example
///
/// ```rust,ignore
/// use housing_features::{FeaturePipeline, ProjectPaths};
///
/// let summary = FeaturePipeline::new(ProjectPaths::default()).run()?;
/// for path in summary.output_paths() {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FeaturePipeline {
    paths: ProjectPaths,
}

static_assertions::assert_impl_all!(FeaturePipeline: Send, Sync);

impl FeaturePipeline {
    pub fn new(paths: ProjectPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Load, transform and write both splits.
    ///
    /// Both splits are transformed before anything is written, and both files
    /// are staged before either is moved into place, so a missing input or a
    /// failed write leaves no partial output behind.
    pub fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();

        let mut cleaned = Vec::with_capacity(Split::ALL.len());
        for split in Split::ALL {
            cleaned.push(self.clean_split(split)?);
        }

        fs::create_dir_all(&self.paths.processed).context(format!(
            "Creating processed directory {}",
            self.paths.processed.display()
        ))?;

        // Stage every file before moving any into place
        let mut staged: Vec<(Split, PathBuf, SplitSummary)> = Vec::with_capacity(cleaned.len());
        for CleanedSplit {
            split,
            mut df,
            summary,
        } in cleaned
        {
            let staging = staging_path(&summary.output_path);
            if let Err(e) = write_parquet(&mut df, &staging) {
                let mut written: Vec<&Path> = staged.iter().map(|(_, p, _)| p.as_path()).collect();
                written.push(&staging);
                discard_staged(&written);
                return Err(e);
            }
            staged.push((split, staging, summary));
        }

        let mut splits = Vec::with_capacity(staged.len());
        for (split, staging, summary) in staged {
            fs::rename(&staging, &summary.output_path)
                .context(format!("Moving {} into place", summary.output_path.display()))?;
            info!(
                "Wrote {} split ({} rows x {} columns) to {}",
                split,
                summary.rows,
                summary.columns_after,
                summary.output_path.display()
            );
            splits.push(summary);
        }

        Ok(RunSummary {
            splits,
            duration_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    /// Load and transform one split in memory.
    fn clean_split(&self, split: Split) -> Result<CleanedSplit> {
        let raw = load_raw(&self.paths, split)?;
        let columns_before = column_names(&raw);

        let (df, processing_steps) =
            transform(raw, split.is_train()).context(format!("Cleaning {} split", split))?;

        let summary = SplitSummary {
            split,
            input_path: self.paths.raw_file(split.file_stem()),
            output_path: self.paths.processed_file(split.file_stem()),
            rows: df.height(),
            columns_before: columns_before.len(),
            columns_after: df.width(),
            added_columns: added_columns(&columns_before, &df),
            processing_steps,
        };

        Ok(CleanedSplit { split, df, summary })
    }
}

/// Run the pipeline over the default project layout.
pub fn clean_and_write() -> Result<RunSummary> {
    FeaturePipeline::new(ProjectPaths::default()).run()
}

/// Temporary sibling of an output file, e.g. `train.parquet.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard_staged(paths: &[&Path]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            debug!("Could not remove staged file {}: {}", path.display(), e);
        }
    }
}

/// Write a frame to a Parquet file, replacing any existing file.
pub fn write_parquet(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).context(format!("Creating {}", path.display()))?;
    ParquetWriter::new(file)
        .finish(df)
        .context(format!("Writing {}", path.display()))?;
    Ok(())
}

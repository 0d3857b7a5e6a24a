//! Cleaning and feature engineering for the housing dataset.
//!
//! The cleaning pass is an ordered table of [`TransformStep`]s:
//! 1. Cast the building class code to a label
//! 2. Fill absent categorical features with `"None"`
//! 3. Fill absent quantities with zero
//! 4. Fill `LotFrontage` from neighborhood, then global, medians
//! 5. Ordinal-encode the quality ratings
//! 6. Derive `TotalSF`, `AgeAtSale`, `YearsSinceRemod`, `IsRemodeled`
//! 7. Add `SalePrice_log` (train split only)
//!
//! A step whose required columns are not all present is skipped. Absent
//! columns are never an error.

pub mod columns;
mod derived;
mod encoding;
mod imputers;

pub use derived::FeatureDeriver;
pub use encoding::OrdinalEncoder;
pub use imputers::HousingImputer;

use crate::error::{FeatureError, Result};
use crate::utils::missing_columns;
use columns::*;
use polars::prelude::*;
use tracing::{debug, info};

/// Signature shared by every transform step.
pub type StepFn = fn(&mut DataFrame, &mut Vec<String>) -> Result<()>;

/// One entry of the cleaning table.
#[derive(Clone, Copy)]
pub struct TransformStep {
    /// Short identifier used in logs and errors.
    pub name: &'static str,
    /// Columns that must all exist for the step to run.
    pub requires: &'static [&'static str],
    /// Only run on the training split.
    pub train_only: bool,
    apply: StepFn,
}

impl TransformStep {
    const fn new(name: &'static str, requires: &'static [&'static str], apply: StepFn) -> Self {
        Self {
            name,
            requires,
            train_only: false,
            apply,
        }
    }

    const fn train_only(mut self) -> Self {
        self.train_only = true;
        self
    }

    /// Whether this step would run on `df`.
    pub fn applies_to(&self, df: &DataFrame, is_train: bool) -> bool {
        (is_train || !self.train_only) && missing_columns(df, self.requires).is_empty()
    }

    /// Run the step, or skip it when it does not apply. Returns whether it ran.
    pub fn run(
        &self,
        df: &mut DataFrame,
        is_train: bool,
        processing_steps: &mut Vec<String>,
    ) -> Result<bool> {
        if self.train_only && !is_train {
            debug!("Skipping '{}': training split only", self.name);
            return Ok(false);
        }

        let missing = missing_columns(df, self.requires);
        if !missing.is_empty() {
            debug!("Skipping '{}': missing columns {:?}", self.name, missing);
            return Ok(false);
        }

        (self.apply)(df, processing_steps).map_err(|e| FeatureError::TransformFailed {
            step: self.name.to_string(),
            reason: e.to_string(),
        })?;
        debug!("Applied '{}'", self.name);
        Ok(true)
    }
}

impl std::fmt::Debug for TransformStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformStep")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .field("train_only", &self.train_only)
            .finish()
    }
}

/// The cleaning table, in application order.
pub const CLEANING_STEPS: [TransformStep; 10] = [
    TransformStep::new(
        "normalize_building_class",
        &[MS_SUB_CLASS],
        HousingImputer::normalize_building_class,
    ),
    TransformStep::new(
        "impute_categorical_none",
        &[],
        HousingImputer::impute_categorical_none,
    ),
    TransformStep::new("impute_numeric_zero", &[], HousingImputer::impute_numeric_zero),
    TransformStep::new(
        "impute_lot_frontage",
        &[LOT_FRONTAGE],
        HousingImputer::impute_lot_frontage,
    ),
    TransformStep::new(
        "encode_ordinals",
        &[],
        OrdinalEncoder::encode_quality_columns,
    ),
    TransformStep::new(
        "derive_total_sf",
        &[TOTAL_BSMT_SF, FIRST_FLR_SF, SECOND_FLR_SF],
        FeatureDeriver::total_sf,
    ),
    TransformStep::new(
        "derive_age_at_sale",
        &[YR_SOLD, YEAR_BUILT],
        FeatureDeriver::age_at_sale,
    ),
    TransformStep::new(
        "derive_years_since_remod",
        &[YR_SOLD, YEAR_REMOD_ADD],
        FeatureDeriver::years_since_remod,
    ),
    TransformStep::new(
        "derive_is_remodeled",
        &[YEAR_REMOD_ADD, YEAR_BUILT],
        FeatureDeriver::is_remodeled,
    ),
    TransformStep::new(
        "stabilize_target",
        &[SALE_PRICE],
        FeatureDeriver::sale_price_log,
    )
    .train_only(),
];

/// Apply the cleaning table to a raw split.
///
/// `is_train` enables target stabilization. Returns the transformed frame and
/// a human-readable list of what was done.
pub fn transform(df: DataFrame, is_train: bool) -> Result<(DataFrame, Vec<String>)> {
    let mut df = df;
    let mut processing_steps = Vec::new();

    info!(
        "Transforming {} split: {:?}",
        if is_train { "train" } else { "test" },
        df.shape()
    );

    let mut applied = 0usize;
    for step in &CLEANING_STEPS {
        if step.run(&mut df, is_train, &mut processing_steps)? {
            applied += 1;
        }
    }

    info!(
        "Applied {}/{} steps, result shape: {:?}",
        applied,
        CLEANING_STEPS.len(),
        df.shape()
    );

    Ok((df, processing_steps))
}

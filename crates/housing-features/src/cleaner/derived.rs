//! Engineered features and target stabilization.
//!
//! Every function here assumes its inputs exist; the step table in the parent
//! module only calls it when they do.

use super::columns::{
    AGE_AT_SALE, FIRST_FLR_SF, IS_REMODELED, SALE_PRICE, SALE_PRICE_LOG, SECOND_FLR_SF,
    TOTAL_BSMT_SF, TOTAL_SF, YEAR_BUILT, YEAR_REMOD_ADD, YEARS_SINCE_REMOD, YR_SOLD,
};
use crate::error::Result;
use crate::utils::column_series;
use polars::prelude::*;

/// Adds derived columns to a housing frame.
pub struct FeatureDeriver;

impl FeatureDeriver {
    /// `TotalSF = TotalBsmtSF + 1stFlrSF + 2ndFlrSF`
    pub fn total_sf(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        let basement = column_series(df, TOTAL_BSMT_SF)?;
        let first = column_series(df, FIRST_FLR_SF)?;
        let second = column_series(df, SECOND_FLR_SF)?;

        let total = (&(&basement + &first)? + &second)?;
        Self::add(df, total, TOTAL_SF, processing_steps)
    }

    /// `AgeAtSale = YrSold - YearBuilt`
    pub fn age_at_sale(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        let age = (&column_series(df, YR_SOLD)? - &column_series(df, YEAR_BUILT)?)?;
        Self::add(df, age, AGE_AT_SALE, processing_steps)
    }

    /// `YearsSinceRemod = YrSold - YearRemodAdd`
    pub fn years_since_remod(
        df: &mut DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let years = (&column_series(df, YR_SOLD)? - &column_series(df, YEAR_REMOD_ADD)?)?;
        Self::add(df, years, YEARS_SINCE_REMOD, processing_steps)
    }

    /// `IsRemodeled = 1` when `YearRemodAdd > YearBuilt`, else 0.
    ///
    /// Ties and null comparisons are 0.
    pub fn is_remodeled(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        let remod = column_series(df, YEAR_REMOD_ADD)?;
        let built = column_series(df, YEAR_BUILT)?;

        let later = remod.gt(&built)?;
        let flags: Int64Chunked = later
            .into_iter()
            .map(|flag| Some(i64::from(flag.unwrap_or(false))))
            .collect();

        Self::add(df, flags.into_series(), IS_REMODELED, processing_steps)
    }

    /// `SalePrice_log = ln(SalePrice + 1)`; nulls stay null.
    pub fn sale_price_log(df: &mut DataFrame, processing_steps: &mut Vec<String>) -> Result<()> {
        let price = column_series(df, SALE_PRICE)?.cast(&DataType::Float64)?;
        let logged: Float64Chunked = price
            .f64()?
            .into_iter()
            .map(|v| v.map(f64::ln_1p))
            .collect();

        Self::add(df, logged.into_series(), SALE_PRICE_LOG, processing_steps)
    }

    fn add(
        df: &mut DataFrame,
        series: Series,
        name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        df.with_column(series.with_name(name.into()))?;
        processing_steps.push(format!("Derived '{}'", name));
        Ok(())
    }
}

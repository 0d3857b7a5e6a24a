//! Ordinal encoding of the quality-rating columns.

use super::columns::{NONE_LABEL, ORDINAL_QUALITY, quality_rank};
use crate::error::Result;
use crate::utils::{column_series, has_column};
use polars::prelude::*;
use tracing::debug;

/// Maps Ex/Gd/TA/Fa/Po ratings onto 5..1, everything else onto 0.
pub struct OrdinalEncoder;

impl OrdinalEncoder {
    /// Encode every present quality column in place as Int64.
    pub fn encode_quality_columns(
        df: &mut DataFrame,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let mut encoded = Vec::new();

        for col_name in ORDINAL_QUALITY {
            if !has_column(df, col_name) {
                continue;
            }
            let series = column_series(df, col_name)?;
            df.replace(col_name, Self::encode_series(&series)?)?;
            encoded.push(col_name);
        }

        if !encoded.is_empty() {
            debug!("Ordinal-encoded {} columns", encoded.len());
            processing_steps.push(format!(
                "Ordinal-encoded quality columns: {}",
                encoded.join(", ")
            ));
        }
        Ok(())
    }

    /// Encode one Series. Nulls count as `"None"` and so rank 0.
    pub fn encode_series(series: &Series) -> PolarsResult<Series> {
        let labels = series.cast(&DataType::String)?;
        let ranks: Int64Chunked = labels
            .str()?
            .into_iter()
            .map(|label| Some(quality_rank(label.unwrap_or(NONE_LABEL))))
            .collect();

        Ok(ranks.with_name(series.name().clone()).into_series())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i64_values(series: &Series) -> Vec<Option<i64>> {
        series.i64().unwrap().into_iter().collect()
    }

    #[test]
    fn test_encode_series_full_scale() {
        let series = Series::new("ExterQual".into(), &["Ex", "Gd", "TA", "Fa", "Po"]);
        let encoded = OrdinalEncoder::encode_series(&series).unwrap();

        assert_eq!(encoded.dtype(), &DataType::Int64);
        assert_eq!(
            i64_values(&encoded),
            vec![Some(5), Some(4), Some(3), Some(2), Some(1)]
        );
    }

    #[test]
    fn test_encode_series_unmapped_and_missing() {
        let series = Series::new(
            "PoolQC".into(),
            &[Some("None"), None, Some("Excellent"), Some("gd")],
        );
        let encoded = OrdinalEncoder::encode_series(&series).unwrap();

        assert_eq!(i64_values(&encoded), vec![Some(0), Some(0), Some(0), Some(0)]);
    }

    #[test]
    fn test_encode_series_all_null_numeric() {
        let series = Series::new("PoolQC".into(), &[Option::<f64>::None, None]);
        let encoded = OrdinalEncoder::encode_series(&series).unwrap();

        assert_eq!(i64_values(&encoded), vec![Some(0), Some(0)]);
    }

    #[test]
    fn test_encode_quality_columns() {
        let mut df = df![
            "KitchenQual" => [Some("Gd"), Some("TA"), None],
            "HeatingQC" => ["Ex", "Fa", "Po"],
            "Street" => ["Pave", "Grvl", "Pave"],
        ]
        .unwrap();
        let mut steps = Vec::new();

        OrdinalEncoder::encode_quality_columns(&mut df, &mut steps).unwrap();

        let kitchen = df.column("KitchenQual").unwrap().as_materialized_series();
        assert_eq!(i64_values(kitchen), vec![Some(4), Some(3), Some(0)]);
        let heating = df.column("HeatingQC").unwrap().as_materialized_series();
        assert_eq!(i64_values(heating), vec![Some(5), Some(2), Some(1)]);
        assert_eq!(df.column("Street").unwrap().dtype(), &DataType::String);

        assert_eq!(steps.len(), 1);
        assert!(steps[0].contains("HeatingQC"));
        assert!(steps[0].contains("KitchenQual"));
    }

    #[test]
    fn test_encode_quality_columns_none_present() {
        let mut df = df!["LotArea" => [8450]].unwrap();
        let mut steps = Vec::new();

        OrdinalEncoder::encode_quality_columns(&mut df, &mut steps).unwrap();
        assert!(steps.is_empty());
    }
}

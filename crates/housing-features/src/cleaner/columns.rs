//! Column names and static lookup tables for the housing schema.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Building class code. Nominal, never a magnitude.
pub const MS_SUB_CLASS: &str = "MSSubClass";
pub const LOT_FRONTAGE: &str = "LotFrontage";
pub const NEIGHBORHOOD: &str = "Neighborhood";

pub const TOTAL_BSMT_SF: &str = "TotalBsmtSF";
pub const FIRST_FLR_SF: &str = "1stFlrSF";
pub const SECOND_FLR_SF: &str = "2ndFlrSF";
pub const YR_SOLD: &str = "YrSold";
pub const YEAR_BUILT: &str = "YearBuilt";
pub const YEAR_REMOD_ADD: &str = "YearRemodAdd";
pub const SALE_PRICE: &str = "SalePrice";

pub const TOTAL_SF: &str = "TotalSF";
pub const AGE_AT_SALE: &str = "AgeAtSale";
pub const YEARS_SINCE_REMOD: &str = "YearsSinceRemod";
pub const IS_REMODELED: &str = "IsRemodeled";
pub const SALE_PRICE_LOG: &str = "SalePrice_log";

/// Fill value for a categorical feature that the house does not have.
pub const NONE_LABEL: &str = "None";

/// Categorical columns where a null means the feature is absent.
pub const CAT_NONE: [&str; 15] = [
    "Alley",
    "BsmtQual",
    "BsmtCond",
    "BsmtExposure",
    "BsmtFinType1",
    "BsmtFinType2",
    "FireplaceQu",
    "GarageType",
    "GarageFinish",
    "GarageQual",
    "GarageCond",
    "PoolQC",
    "Fence",
    "MiscFeature",
    "MasVnrType",
];

/// Numeric columns where a null means a zero quantity.
pub const NUM_ZERO: [&str; 9] = [
    "MasVnrArea",
    "BsmtFullBath",
    "BsmtHalfBath",
    "BsmtFinSF1",
    "BsmtFinSF2",
    "BsmtUnfSF",
    "TotalBsmtSF",
    "GarageCars",
    "GarageArea",
];

/// Columns holding a quality rating on the shared Ex..Po scale.
pub const ORDINAL_QUALITY: [&str; 10] = [
    "ExterQual",
    "ExterCond",
    "BsmtQual",
    "BsmtCond",
    "HeatingQC",
    "KitchenQual",
    "FireplaceQu",
    "GarageQual",
    "GarageCond",
    "PoolQC",
];

/// Shared quality scale. Anything not listed ranks 0.
pub static ORD_MAP: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([("Ex", 5), ("Gd", 4), ("TA", 3), ("Fa", 2), ("Po", 1)])
});

/// Rank of a quality label on the shared scale.
#[inline]
pub fn quality_rank(label: &str) -> i64 {
    ORD_MAP.get(label).copied().unwrap_or(0)
}

//! Fixed lookup tables keyed by country or virus name.

pub mod tables;

pub use tables::{
    comorbidity_factors, geographic_scope, seasonal_pattern, LookupTable,
    GENERIC_COMORBIDITIES, GENERIC_GEOGRAPHIC_SCOPE, GENERIC_SEASONAL_PATTERN,
};

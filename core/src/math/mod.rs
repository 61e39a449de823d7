pub mod format;
pub mod rates;

pub use format::fixed;
pub use rates::{
    confidence, estimated_duration, hospitalization_rate, mortality_rate, resource_requirements,
    scale_population, transmission_rate, ScaleFactor,
};

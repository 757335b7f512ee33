//! Growth classification
//!
//! Converts age, sex, height and weight into a height-for-age Z-score,
//! BMI and stunting status.

pub mod classifier;
pub mod reference;
pub mod types;

pub use classifier::{classify, GrowthClassifier};
pub use reference::ReferenceTable;
pub use types::{
    ClassificationResult, Gender, GrowthInput, HeightRange, ReferencePoint, RiskLevel,
    StuntingStatus,
};

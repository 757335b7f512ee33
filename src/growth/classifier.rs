//! Height-for-age classification
//!
//! Pure functions over a validated `GrowthInput`. Nothing here rounds; the
//! report layer rounds at the output boundary.

use super::reference::ReferenceTable;
use super::types::{ClassificationResult, Gender, GrowthInput, HeightRange, StuntingStatus};

/// Body-mass index: kg / m^2
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Standard deviations between `height_cm` and the reference median
pub fn height_for_age_z(height_cm: f64, median_height_cm: f64, sd_cm: f64) -> f64 {
    (height_cm - median_height_cm) / sd_cm
}

/// Fixed heuristic band of two half-widths around the expected height
pub fn expected_height_range(expected_height: f64, gender: Gender) -> HeightRange {
    let spread = 2.0 * gender.range_half_width();
    HeightRange {
        min: expected_height - spread,
        max: expected_height + spread,
    }
}

/// Stateless classifier bound to a reference table
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthClassifier {
    table: ReferenceTable,
}

impl GrowthClassifier {
    pub fn new(table: ReferenceTable) -> Self {
        Self { table }
    }

    pub fn classify(&self, input: &GrowthInput) -> ClassificationResult {
        let reference = self.table.nearest(input.gender(), input.age_months());
        let z_score = height_for_age_z(
            input.height_cm(),
            reference.median_height_cm,
            reference.sd_cm,
        );
        let status = StuntingStatus::from_z_score(z_score);
        let expected_height = reference.median_height_cm;

        ClassificationResult {
            z_score,
            expected_height,
            expected_height_range: expected_height_range(expected_height, input.gender()),
            bmi: bmi(input.height_cm(), input.weight_kg()),
            status,
            risk_level: status.risk_level(),
            risk_percentage: status.risk_percentage(),
            reference,
        }
    }
}

/// Classify against the built-in WHO reference table
pub fn classify(input: &GrowthInput) -> ClassificationResult {
    GrowthClassifier::new(ReferenceTable::who_simplified()).classify(input)
}

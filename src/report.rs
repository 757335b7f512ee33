//! JSON output documents
//!
//! Rounding happens here and nowhere else: two decimals for the Z-score and
//! BMI, one decimal for heights.

use crate::errors::{ErrorKind, GrowthError};
use crate::growth::{ClassificationResult, RiskLevel, StuntingStatus};
use crate::narrative::NarrativeResult;
use serde::{Deserialize, Serialize};

/// Round to `decimals` places; exact halves go to the even digit
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Successful screening document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub stunting_status: StuntingStatus,
    pub risk_level: RiskLevel,
    pub risk_percentage: u8,
    pub height_for_age_z: f64,
    pub bmi: f64,
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub growth_metrics: GrowthMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub expected_height: f64,
    pub expected_height_range: RangeOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeOutput {
    pub min: f64,
    pub max: f64,
}

impl GrowthReport {
    pub fn new(result: &ClassificationResult, narrative: NarrativeResult) -> Self {
        Self {
            stunting_status: result.status,
            risk_level: result.risk_level,
            risk_percentage: result.risk_percentage,
            height_for_age_z: round_to(result.z_score, 2),
            bmi: round_to(result.bmi, 2),
            analysis: narrative.analysis_text,
            recommendations: narrative.recommendations,
            growth_metrics: GrowthMetrics {
                expected_height: round_to(result.expected_height, 1),
                expected_height_range: RangeOutput {
                    min: round_to(result.expected_height_range.min, 1),
                    max: round_to(result.expected_height_range.max, 1),
                },
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Single-line error document for fatal failures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub error_kind: ErrorKind,
}

impl From<&GrowthError> for ErrorEnvelope {
    fn from(err: &GrowthError) -> Self {
        Self {
            error: err.to_string(),
            error_kind: err.kind(),
        }
    }
}

impl ErrorEnvelope {
    pub fn to_json(&self) -> String {
        // Two plain string fields cannot fail to serialize
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"error":"unserializable error","error_kind":"internal"}"#.to_string()
        })
    }
}

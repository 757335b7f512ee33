//! Core screening types
//!
//! A `GrowthInput` can only be built from validated measurements, so the
//! classifier never sees a zero height or a negative age.

use crate::errors::{GrowthError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Child's sex as used by the reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Half-width of the heuristic expected-height spread (cm)
    pub fn range_half_width(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => 4.5,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(format!(
                "gender must be 'Male' or 'Female', got '{}'",
                other
            )),
        }
    }
}

/// Plausible measurement bounds. Values outside them would push BMI or the
/// Z-score to infinity.
pub const MIN_HEIGHT_CM: f64 = 1.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Validated measurements for one child
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthInput {
    age_months: u32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
}

impl GrowthInput {
    /// Build an input, rejecting non-physical values
    pub fn new(age_months: i64, gender: Gender, height_cm: f64, weight_kg: f64) -> Result<Self> {
        if age_months < 0 {
            return Err(GrowthError::InvalidInput(format!(
                "age_months must be a non-negative integer, got {}",
                age_months
            )));
        }
        let age_months = u32::try_from(age_months).map_err(|_| {
            GrowthError::InvalidInput(format!("age_months out of range, got {}", age_months))
        })?;

        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(GrowthError::InvalidInput(format!(
                "height_cm must be a positive number, got {}",
                height_cm
            )));
        }
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
            return Err(GrowthError::InvalidInput(format!(
                "height_cm out of range ({}-{} cm), got {}",
                MIN_HEIGHT_CM, MAX_HEIGHT_CM, height_cm
            )));
        }

        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(GrowthError::InvalidInput(format!(
                "weight_kg must be a positive number, got {}",
                weight_kg
            )));
        }
        if weight_kg > MAX_WEIGHT_KG {
            return Err(GrowthError::InvalidInput(format!(
                "weight_kg out of range (at most {} kg), got {}",
                MAX_WEIGHT_KG, weight_kg
            )));
        }

        Ok(Self {
            age_months,
            gender,
            height_cm,
            weight_kg,
        })
    }

    pub fn age_months(&self) -> u32 {
        self.age_months
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Height-for-age classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StuntingStatus {
    #[serde(rename = "Not stunted")]
    Normal,
    #[serde(rename = "Stunted")]
    Stunted,
    #[serde(rename = "Severely stunted")]
    SeverelyStunted,
}

impl StuntingStatus {
    /// Strict thresholds, first match wins: z < -3, then z < -2
    pub fn from_z_score(z: f64) -> Self {
        if z < -3.0 {
            StuntingStatus::SeverelyStunted
        } else if z < -2.0 {
            StuntingStatus::Stunted
        } else {
            StuntingStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StuntingStatus::Normal => "Not stunted",
            StuntingStatus::Stunted => "Stunted",
            StuntingStatus::SeverelyStunted => "Severely stunted",
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            StuntingStatus::Normal => RiskLevel::Low,
            StuntingStatus::Stunted => RiskLevel::Medium,
            StuntingStatus::SeverelyStunted => RiskLevel::High,
        }
    }

    pub fn risk_percentage(&self) -> u8 {
        match self {
            StuntingStatus::Normal => 15,
            StuntingStatus::Stunted => 50,
            StuntingStatus::SeverelyStunted => 85,
        }
    }
}

impl fmt::Display for StuntingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Inclusive expected-height band (cm)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    pub min: f64,
    pub max: f64,
}

/// Reference row the classification was computed against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub age_months: u32,
    pub median_height_cm: f64,
    pub sd_cm: f64,
}

/// Unrounded classification output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationResult {
    pub z_score: f64,
    pub expected_height: f64,
    pub expected_height_range: HeightRange,
    pub bmi: f64,
    pub status: StuntingStatus,
    pub risk_level: RiskLevel,
    pub risk_percentage: u8,
    pub reference: ReferencePoint,
}

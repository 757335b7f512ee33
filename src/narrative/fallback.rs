//! Deterministic narrative templates
//!
//! Used whenever the generative service fails. Nothing in here can fail.

use crate::growth::{ClassificationResult, GrowthInput, StuntingStatus};

/// Below this BMI an older child is flagged as possibly underweight
pub const BMI_LOW: f64 = 14.0;
/// Above this BMI an older child is flagged as high
pub const BMI_HIGH: f64 = 18.0;
/// BMI remarks apply only past this age (months)
pub const BMI_RELEVANT_AFTER_MONTHS: u32 = 24;
/// Breastfeeding guidance applies below this age (months)
pub const BREASTFEEDING_BEFORE_MONTHS: u32 = 24;

const BREASTFEEDING: &str =
    "Continue breastfeeding alongside complementary foods as recommended by WHO";
const ENERGY_DENSE: &str = "Focus on energy-dense foods while maintaining nutritional quality";
const MORE_ACTIVITY: &str = "Encourage more physical activity and limit highly processed foods";

/// Template analysis keyed on status, with a BMI remark for older children
pub fn analysis(input: &GrowthInput, result: &ClassificationResult) -> String {
    let gender = input.gender().as_str().to_lowercase();
    let age = input.age_months();
    let height = input.height_cm();
    let expected = result.expected_height;
    let z = result.z_score;

    let mut text = match result.status {
        StuntingStatus::SeverelyStunted => format!(
            "The child's height is significantly below the expected range for their age, \
             with a Z-score of {z:.2}. This indicates severe stunting, which can affect \
             physical development and cognitive function. The expected height for a {gender} \
             child at {age} months is around {expected:.1} cm, while this child measures \
             {height} cm. A gap this large needs prompt attention from a healthcare provider."
        ),
        StuntingStatus::Stunted => format!(
            "The child's height falls below the expected range for their age, with a Z-score \
             of {z:.2}. This indicates moderate stunting, which may affect their growth \
             trajectory. At {age} months a {gender} child typically measures around \
             {expected:.1} cm, while this child is {height} cm tall. This difference \
             should be discussed with a healthcare provider soon."
        ),
        StuntingStatus::Normal => format!(
            "The child's height is within the normal range for their age, with a Z-score of \
             {z:.2}. At {age} months the expected height for a {gender} child is around \
             {expected:.1} cm, and this child measures {height} cm. Their growth appears \
             to be tracking well against WHO standards for their age group."
        ),
    };

    if age > BMI_RELEVANT_AFTER_MONTHS {
        text.push(' ');
        text.push_str(&bmi_remark(result.bmi));
    }

    text
}

fn bmi_remark(bmi: f64) -> String {
    if bmi < BMI_LOW {
        format!(
            "Their BMI of {bmi:.1} suggests they may be underweight. Adequate caloric intake \
             from nutrient-dense foods is important."
        )
    } else if bmi > BMI_HIGH {
        format!(
            "Their BMI of {bmi:.1} is high for their age. Balanced nutrition and regular \
             physical activity are recommended."
        )
    } else {
        format!("Their BMI of {bmi:.1} is within the expected range for their age.")
    }
}

/// Canned recommendation list for `status`, before age and BMI additions
pub fn base_recommendations(status: StuntingStatus) -> Vec<String> {
    let lines: [&str; 5] = match status {
        StuntingStatus::SeverelyStunted => [
            "Consult with a pediatrician or nutritionist immediately",
            "Focus on high-protein, nutrient-dense foods appropriate for your child's age",
            "Consider nutritional supplements as advised by healthcare professionals",
            "Increase meal frequency with smaller, nutrient-rich portions",
            "Monitor growth weekly and keep your healthcare provider updated",
        ],
        StuntingStatus::Stunted => [
            "Schedule a check-up with a pediatrician within the next month",
            "Incorporate more protein-rich foods in daily meals",
            "Ensure adequate intake of calcium, vitamin D, and zinc",
            "Establish consistent meal times with balanced nutrition",
            "Track growth monthly and maintain a growth journal",
        ],
        StuntingStatus::Normal => [
            "Continue regular check-ups with your healthcare provider",
            "Maintain a balanced diet with adequate proteins and nutrients",
            "Encourage physical activity appropriate for age",
            "Ensure adequate sleep and regular meal times",
            "Monitor growth quarterly to ensure consistent progress",
        ],
    };
    lines.iter().map(|line| line.to_string()).collect()
}

/// Template recommendations with age and BMI additions appended
pub fn recommendations(status: StuntingStatus, age_months: u32, bmi: f64) -> Vec<String> {
    let mut recs = base_recommendations(status);

    if age_months < BREASTFEEDING_BEFORE_MONTHS
        && !recs.iter().any(|r| r.contains("Continue breastfeeding"))
    {
        recs.push(BREASTFEEDING.to_string());
    }

    if age_months > BMI_RELEVANT_AFTER_MONTHS {
        if bmi < BMI_LOW {
            recs.push(ENERGY_DENSE.to_string());
        } else if bmi > BMI_HIGH {
            recs.push(MORE_ACTIVITY.to_string());
        }
    }

    recs
}

/// Add age and BMI guidance to a generated list when no line already covers it
pub fn fill_missing_guidance(recs: &mut Vec<String>, age_months: u32, bmi: f64) {
    if age_months < BREASTFEEDING_BEFORE_MONTHS && !mentions(recs, &["breastfeed", "breast milk"]) {
        recs.push(BREASTFEEDING.to_string());
    }

    if age_months > BMI_RELEVANT_AFTER_MONTHS {
        if bmi < BMI_LOW && !mentions(recs, &["calori", "energy"]) {
            recs.push(ENERGY_DENSE.to_string());
        } else if bmi > BMI_HIGH && !mentions(recs, &["activity", "active"]) {
            recs.push(MORE_ACTIVITY.to_string());
        }
    }
}

fn mentions(recs: &[String], words: &[&str]) -> bool {
    recs.iter().any(|r| {
        let lower = r.to_lowercase();
        words.iter().any(|w| lower.contains(w))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::{classify, Gender};

    fn screen(age: i64, gender: Gender, height: f64, weight: f64) -> (GrowthInput, ClassificationResult) {
        let input = GrowthInput::new(age, gender, height, weight).unwrap();
        let result = classify(&input);
        (input, result)
    }

    #[test]
    fn test_analysis_mentions_z_and_heights() {
        let (input, result) = screen(24, Gender::Male, 70.0, 8.0);
        let text = analysis(&input, &result);
        assert!(text.contains("severe stunting"));
        assert!(text.contains("-5.03"));
        assert!(text.contains("87.1 cm"));
        assert!(text.contains("measures 70 cm"));
        assert!(text.contains("male child"));
        assert!(!text.contains("BMI"));
    }

    #[test]
    fn test_analysis_keeps_measured_height_verbatim() {
        let (input, result) = screen(24, Gender::Male, 87.15, 12.0);
        let text = analysis(&input, &result);
        assert!(text.contains("measures 87.15 cm"), "{}", text);

        let (input, result) = screen(24, Gender::Female, 78.05, 9.0);
        let text = analysis(&input, &result);
        assert!(text.contains("is 78.05 cm tall"), "{}", text);
    }

    #[test]
    fn test_analysis_bmi_remark_after_two_years() {
        // 36 months, 94.9 cm: BMI 10 / 0.9006 = 11.1
        let (input, result) = screen(36, Gender::Male, 94.9, 10.0);
        let text = analysis(&input, &result);
        assert!(text.contains("within the normal range"));
        assert!(text.contains("underweight"));

        // BMI 22.2
        let (input, result) = screen(36, Gender::Male, 94.9, 20.0);
        assert!(analysis(&input, &result).contains("high for their age"));

        // BMI 16.1
        let (input, result) = screen(36, Gender::Female, 93.9, 14.2);
        assert!(analysis(&input, &result).contains("within the expected range"));
    }

    #[test]
    fn test_no_bmi_remark_at_exactly_24_months() {
        let (input, result) = screen(24, Gender::Female, 85.7, 20.0);
        assert!(!analysis(&input, &result).contains("BMI"));
    }

    #[test]
    fn test_stunted_analysis() {
        let (input, result) = screen(12, Gender::Female, 67.0, 7.5);
        let text = analysis(&input, &result);
        assert!(text.contains("moderate stunting"));
        assert!(text.contains("female child"));
    }

    #[test]
    fn test_infant_gets_breastfeeding_line() {
        let recs = recommendations(StuntingStatus::Stunted, 10, 15.0);
        assert_eq!(recs.len(), 6);
        assert!(recs.last().unwrap().contains("breastfeeding"));
    }

    #[test]
    fn test_older_child_bmi_lines() {
        let low = recommendations(StuntingStatus::Normal, 36, 12.5);
        assert_eq!(low.len(), 6);
        assert!(low.last().unwrap().contains("energy-dense"));

        let high = recommendations(StuntingStatus::Normal, 36, 19.0);
        assert!(high.last().unwrap().contains("physical activity"));

        let typical = recommendations(StuntingStatus::SeverelyStunted, 36, 15.0);
        assert_eq!(typical.len(), 5);
    }

    #[test]
    fn test_24_months_gets_no_additions() {
        let recs = recommendations(StuntingStatus::Normal, 24, 25.0);
        assert_eq!(recs, base_recommendations(StuntingStatus::Normal));
    }

    #[test]
    fn test_every_status_has_five_base_lines() {
        for status in [
            StuntingStatus::Normal,
            StuntingStatus::Stunted,
            StuntingStatus::SeverelyStunted,
        ] {
            assert_eq!(base_recommendations(status).len(), 5);
        }
    }

    #[test]
    fn test_fill_missing_guidance_respects_existing_lines() {
        let mut recs = vec![
            "Keep breastfeeding on demand".to_string(),
            "Offer mashed vegetables".to_string(),
            "Weigh monthly".to_string(),
        ];
        fill_missing_guidance(&mut recs, 8, 16.0);
        assert_eq!(recs.len(), 3);

        let mut recs = vec!["Offer mashed vegetables".to_string()];
        fill_missing_guidance(&mut recs, 8, 16.0);
        assert_eq!(recs.len(), 2);
        assert!(recs[1].contains("breastfeeding"));
    }

    #[test]
    fn test_fill_missing_guidance_bmi() {
        let mut recs = vec!["Add extra calories with nut butters".to_string()];
        fill_missing_guidance(&mut recs, 40, 13.0);
        assert_eq!(recs.len(), 1);

        let mut recs = vec!["Serve vegetables".to_string()];
        fill_missing_guidance(&mut recs, 40, 19.5);
        assert!(recs.last().unwrap().contains("physical activity"));
    }
}

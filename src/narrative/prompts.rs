//! Prompt construction for the generative service

use crate::growth::{ClassificationResult, Gender, GrowthInput, StuntingStatus};

/// Prompt for the free-text growth analysis
pub fn analysis_prompt(input: &GrowthInput, result: &ClassificationResult) -> String {
    format!(
        r#"You are a pediatric nutrition expert reviewing a child's growth measurements.

- Age: {age} months
- Gender: {gender}
- Height: {height} cm
- Weight: {weight} kg
- Height-for-age Z-score: {z:.2}
- BMI: {bmi:.2}
- Stunting status: {status}
- Expected height for age and gender: {expected:.1} cm

Write 3-4 sentences that:
1. Summarize the child's growth status.
2. Explain what the Z-score means.
3. Compare the child's height with the expected height.
{bmi_line}
Use plain, professional language a parent can follow. Stay under 150 words."#,
        age = input.age_months(),
        gender = input.gender(),
        height = input.height_cm(),
        weight = input.weight_kg(),
        z = result.z_score,
        bmi = result.bmi,
        status = result.status,
        expected = result.expected_height,
        bmi_line = if input.age_months() > 24 {
            "4. Briefly assess the BMI.\n"
        } else {
            ""
        },
    )
}

/// Prompt for the bulleted recommendation list
pub fn recommendations_prompt(
    status: StuntingStatus,
    age_months: u32,
    bmi: f64,
    gender: Gender,
) -> String {
    format!(
        r#"You are a pediatric nutritionist advising the caregivers of this child:

- Age: {age_months} months
- Gender: {gender}
- BMI: {bmi:.2}
- Stunting status: {status}

Give 5 specific, actionable recommendations that address the child's growth status.
If the child is under 24 months, include breastfeeding guidance where appropriate.
If the BMI is below 14, include advice on safely increasing caloric intake.
If the BMI is above 18, include advice on balanced nutrition and physical activity.

Answer with a bulleted list, one short recommendation per line, and nothing else."#
    )
}

//! Integration tests for stuntcheck
//!
//! Runs the screening pipeline end to end against an in-process stub of the
//! Gemini API, including the unreachable-service fallback.

mod common;

use std::time::Duration;
use stuntcheck::{
    execution,
    gemini::{GeminiClient, GeminiConfig},
    growth::{classify, Gender, GrowthInput, RiskLevel, StuntingStatus},
    narrative::{fallback, NarrativeSource, Narrator, TextGenerator},
    NarrativeError,
};

fn client_for(base_url: &str) -> GeminiClient {
    let mut config = GeminiConfig::new("test-key");
    config.base_url = base_url.to_string();
    config.timeout = Duration::from_secs(5);
    GeminiClient::new(config).unwrap()
}

#[tokio::test]
async fn test_generated_report() {
    let server = common::serve(vec![
        (200, common::gemini_body("The child is growing normally. Z-score 0.00.")),
        (
            200,
            common::gemini_body("- Offer varied meals\n- Keep check-ups\n- Play outside\n- Sleep well"),
        ),
    ])
    .await;

    let narrator = Narrator::new(Box::new(client_for(&server.base_url)));
    let input = GrowthInput::new(24, Gender::Male, 87.1, 12.0).unwrap();
    let report = execution::screen(&input, &narrator).await;

    assert_eq!(report.stunting_status, StuntingStatus::Normal);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(report.risk_percentage, 15);
    assert_eq!(report.height_for_age_z, 0.0);
    assert_eq!(report.bmi, 15.82);
    assert_eq!(report.analysis, "The child is growing normally. Z-score 0.00.");
    assert_eq!(
        report.recommendations,
        vec!["Offer varied meals", "Keep check-ups", "Play outside", "Sleep well"]
    );

    let requests = server.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0]
        .head
        .starts_with("POST /v1beta/models/gemini-2.0-flash:generateContent"));
    assert!(requests[0].head.to_lowercase().contains("x-goog-api-key: test-key"));
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Height-for-age Z-score: 0.00"));
}

#[tokio::test]
async fn test_api_error_status() {
    let server = common::serve(vec![(403, r#"{"error": {"message": "API key not valid"}}"#.to_string())]).await;
    let client = client_for(&server.base_url);

    match client.generate("hello").await {
        Err(NarrativeError::Api { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let server = common::serve(vec![(200, "not json".to_string())]).await;
    let client = client_for(&server.base_url);
    assert!(matches!(
        client.generate("hello").await,
        Err(NarrativeError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    let base_url = common::unreachable_base_url().await;
    let narrator = Narrator::new(Box::new(client_for(&base_url)));
    let input = GrowthInput::new(24, Gender::Male, 70.0, 8.0).unwrap();
    let result = classify(&input);

    let narrative = narrator.narrate(&input, &result).await;
    assert_eq!(narrative.analysis_source, NarrativeSource::Template);
    assert_eq!(narrative.recommendations_source, NarrativeSource::Template);
    assert!(!narrative.analysis_text.is_empty());
    assert!(narrative.recommendations.len() >= 3);
    assert_eq!(
        narrative.recommendations,
        fallback::recommendations(StuntingStatus::SeverelyStunted, 24, result.bmi)
    );
}

#[tokio::test]
async fn test_short_generated_list_uses_template() {
    let server = common::serve(vec![
        (200, common::gemini_body("Analysis text.")),
        (200, common::gemini_body("- Only one line")),
    ])
    .await;

    let narrator = Narrator::new(Box::new(client_for(&server.base_url)));
    let input = GrowthInput::new(8, Gender::Female, 62.0, 6.5).unwrap();
    let report = execution::screen(&input, &narrator).await;

    assert_eq!(report.analysis, "Analysis text.");
    assert_eq!(report.recommendations.len(), 6);
    assert!(report.recommendations[5].contains("breastfeeding"));
}

#[tokio::test]
async fn test_severely_stunted_scenario_offline() {
    let input = GrowthInput::new(24, Gender::Male, 70.0, 8.0).unwrap();
    let report = execution::screen(&input, &Narrator::offline()).await;

    assert_eq!(report.stunting_status, StuntingStatus::SeverelyStunted);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert_eq!(report.risk_percentage, 85);
    assert_eq!(report.height_for_age_z, -5.03);
    assert_eq!(report.growth_metrics.expected_height, 87.1);
    assert_eq!(report.growth_metrics.expected_height_range.min, 77.1);
    assert_eq!(report.growth_metrics.expected_height_range.max, 97.1);
    assert!(report.analysis.contains("-5.03"));
}

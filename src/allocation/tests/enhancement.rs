use super::common::*;
use crate::allocation::enhancer::RecommendationEnhancer;
use crate::allocation::{Criterion, InstitutionRecord};

fn basic() -> Vec<String> {
    vec![
        "Improve infrastructure (current score: 3.0/10)".to_string(),
        "Consider enhancing faculty (current score: 6.0/10)".to_string(),
    ]
}

#[test]
fn passthrough_returns_input_unchanged() {
    let enhancer = RecommendationEnhancer::passthrough();
    let record = uniform_record("No Credentials", 4.0);

    let enhanced = enhancer.enhance(&record, &weights(), basic());

    assert_eq!(enhanced, basic());
    assert!(!enhancer.is_configured());
}

#[test]
fn reply_is_split_into_trimmed_non_empty_lines() {
    let stub = ScriptedEnhancer::replying(
        "  - Invest in lab refurbishment\n\n\n- Budget $250,000 for faculty development  \n",
    );
    let enhancer = RecommendationEnhancer::new(Some(Box::new(stub)), "Rs.");
    let record = uniform_record("Enhanced Institute", 4.0);

    let enhanced = enhancer.enhance(&record, &weights(), basic());

    assert_eq!(
        enhanced,
        vec![
            "- Invest in lab refurbishment".to_string(),
            "- Budget Rs.250,000 for faculty development".to_string(),
        ]
    );
}

#[test]
fn currency_marker_is_configurable() {
    let stub = ScriptedEnhancer::replying("Allocate $1M to hostels");
    let enhancer = RecommendationEnhancer::new(Some(Box::new(stub)), "INR ");
    let record = uniform_record("Marker Institute", 4.0);

    let enhanced = enhancer.enhance(&record, &weights(), basic());

    assert_eq!(enhanced, vec!["Allocate INR 1M to hostels".to_string()]);
}

#[test]
fn collaborator_failure_falls_back_to_basic() {
    let stub = ScriptedEnhancer::failing();
    let enhancer = RecommendationEnhancer::new(Some(Box::new(stub)), "Rs.");
    let record = uniform_record("Offline Institute", 4.0);

    let enhanced = enhancer.enhance(&record, &weights(), basic());

    assert_eq!(enhanced, basic());
}

#[test]
fn prompt_carries_scores_and_basic_recommendations() {
    let stub = ScriptedEnhancer::replying("- Do the work");
    let handle = stub.clone();
    let enhancer = RecommendationEnhancer::new(Some(Box::new(stub)), "Rs.");
    let record = InstitutionRecord::new("Prompted Institute")
        .with_metric(Criterion::Infrastructure, 3.0)
        .with_metric(Criterion::Faculty, 6.0);

    enhancer.enhance(&record, &weights(), basic());

    let captured = handle.captured();
    assert_eq!(captured.len(), 1);
    let prompt = &captured[0];
    assert_eq!(prompt.institution, "Prompted Institute");
    assert_eq!(prompt.basic_recommendations, basic());
    assert_eq!(prompt.currency_marker, "Rs.");

    let rendered = prompt.render();
    assert!(rendered.contains("Institution Name: Prompted Institute"));
    assert!(rendered.contains("- Infrastructure: 3.0/10"));
    assert!(rendered.contains("- Faculty: 6.0/10"));
    assert!(rendered.contains("- Research: N/A/10"));
    assert!(rendered.contains("always use \"Rs.\""));
    assert!(rendered.contains("Improve infrastructure (current score: 3.0/10)"));
}

#[test]
fn unnamed_record_prompts_with_placeholder() {
    let stub = ScriptedEnhancer::replying("- Do the work");
    let handle = stub.clone();
    let enhancer = RecommendationEnhancer::new(Some(Box::new(stub)), "Rs.");
    let record = InstitutionRecord::unnamed().with_metric(Criterion::Research, 4.0);

    enhancer.enhance(&record, &weights(), Vec::new());

    let captured = handle.captured();
    assert_eq!(captured[0].institution, "Unknown Institution");
    assert!(captured[0].render().contains("Basic Recommendations:\nNone"));
}

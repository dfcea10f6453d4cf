use super::*;
use crate::model::activity::Activity;

fn p(activity: Activity, confidence: f64) -> Prediction {
    Prediction {
        activity,
        confidence,
    }
}

fn sample_report(predictions: Vec<Prediction>) -> Report {
    Report {
        tool_name: "eo-activity".to_string(),
        tool_version: "0.1.0".to_string(),
        seed: Some(42),
        jitter_half_width: 7.5,
        report_above: 5.0,
        inputs: (0..10)
            .map(|i| InputEntry {
                label: format!("Chemical Parameter {}", i + 1),
                value: i as f64,
                clamped: i == 3,
            })
            .collect(),
        predictions,
    }
}

#[test]
fn test_group_by_tier_boundaries() {
    let groups = group_by_tier(&[
        p(Activity::Antibacterial, 50.0),
        p(Activity::Antiviral, 49.9),
        p(Activity::Analgesic, 20.0),
        p(Activity::Sedative, 19.9),
    ]);
    assert_eq!(groups.high, vec![p(Activity::Antibacterial, 50.0)]);
    assert_eq!(
        groups.medium,
        vec![p(Activity::Antiviral, 49.9), p(Activity::Analgesic, 20.0)]
    );
    assert_eq!(groups.low, vec![p(Activity::Sedative, 19.9)]);
    assert!(!groups.is_empty());
}

#[test]
fn test_text_report_sections() {
    let report = sample_report(vec![
        p(Activity::Antibacterial, 76.3),
        p(Activity::Sedative, 12.0),
    ]);
    let text = render(&report, ReportMode::Text).unwrap();
    assert!(text.starts_with("Essential Oil Activity Prediction Report\n"));
    assert!(text.contains("\neo-activity 0.1.0\n"));
    assert!(text.contains("Jitter: +/-7.5, seed 42"));
    assert!(text.contains("Chemical Parameter 4: 3.0 (clamped)"));
    assert!(text.contains("Chemical Parameter 10: 9.0\n"));
    assert!(text.contains("High confidence (>= 50%)\n  antibacterial"));
    assert!(text.contains("76.3%  [strong]"));
    assert!(text.contains("12.0%  [marginal]"));
    assert!(!text.contains("Medium confidence (20-49%)\n  "));
    assert!(text.contains("3. Interpretation guide"));
}

#[test]
fn test_text_report_empty_predictions() {
    let mut report = sample_report(Vec::new());
    report.jitter_half_width = 0.0;
    report.seed = None;
    let text = text::render_report_text(&report);
    assert!(text.contains("Jitter: disabled (deterministic)"));
    assert!(text.contains("No activity scored above the 5.0% reporting floor."));
}

#[test]
fn test_json_report_fields() {
    let report = sample_report(vec![
        p(Activity::AntiInflammatory, 64.2),
        p(Activity::Antiseptic, 33.0),
    ]);
    let out = render(&report, ReportMode::Json).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["tool"], "eo-activity");
    assert_eq!(v["seed"], 42);
    assert_eq!(v["inputs"].as_array().unwrap().len(), 10);
    assert_eq!(v["inputs"][3]["clamped"], true);
    assert_eq!(v["predictions"][0]["activity"], "anti-inflammatory");
    assert_eq!(v["predictions"][0]["confidence"], 64.2);
    assert_eq!(v["predictions"][0]["tier"], "high");
    assert_eq!(v["predictions"][0]["band"], "moderate");
    assert_eq!(v["predictions"][1]["tier"], "medium");
    assert_eq!(v["tiers"]["high"][0], "anti-inflammatory");
    assert!(v["tiers"]["low"].as_array().unwrap().is_empty());
}

#[test]
fn test_format_f64_1() {
    assert_eq!(format_f64_1(72.7), "72.7");
    assert_eq!(format_f64_1(5.0), "5.0");
}

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_zero_input_scores_zero() {
    let scores = base_scores(&[0.0; 10]);
    assert_eq!(scores.len(), N_ACTIVITIES);
    assert!(scores.iter().all(|s| s.base == 0.0));
}

#[test]
fn test_scores_follow_table_order() {
    let scores = base_scores(&[1.0; 10]);
    let defs = builtin_activities();
    for (s, d) in scores.iter().zip(defs.iter()) {
        assert_eq!(s.activity, d.activity);
    }
}

#[test]
fn test_full_input_weighted_mean() {
    let scores = base_scores(&[10.0; 10]);
    let antibacterial = scores
        .iter()
        .find(|s| s.activity == Activity::Antibacterial)
        .unwrap();
    assert!(approx(antibacterial.base, 229.0 / 3.0));
    let sedative = scores
        .iter()
        .find(|s| s.activity == Activity::Sedative)
        .unwrap();
    assert!(approx(sedative.base, 202.0 / 3.0));
}

#[test]
fn test_single_position_reaches_only_its_activities() {
    let mut input = [0.0; 10];
    input[0] = 3.0;
    let scores = base_scores(&input);
    for s in &scores {
        let expected = match s.activity {
            Activity::Antimicrobial => 8.5,
            Activity::Antifungal => 6.5,
            Activity::Sedative => 5.5,
            _ => 0.0,
        };
        assert!(approx(s.base, expected), "{}", s.activity);
    }
}

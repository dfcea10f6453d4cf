use super::*;

#[test]
fn test_tier_boundaries() {
    assert_eq!(ConfidenceTier::of(95.0), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::of(50.0), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::of(49.9), ConfidenceTier::Medium);
    assert_eq!(ConfidenceTier::of(20.0), ConfidenceTier::Medium);
    assert_eq!(ConfidenceTier::of(19.9), ConfidenceTier::Low);
    assert_eq!(ConfidenceTier::of(5.1), ConfidenceTier::Low);
}

#[test]
fn test_band_boundaries() {
    assert_eq!(ConfidenceBand::of(70.0), ConfidenceBand::Strong);
    assert_eq!(ConfidenceBand::of(69.9), ConfidenceBand::Moderate);
    assert_eq!(ConfidenceBand::of(50.0), ConfidenceBand::Moderate);
    assert_eq!(ConfidenceBand::of(30.0), ConfidenceBand::Weak);
    assert_eq!(ConfidenceBand::of(29.9), ConfidenceBand::Marginal);
}

#[test]
fn test_tier_order_high_first() {
    assert_eq!(
        tier_order(),
        &[ConfidenceTier::High, ConfidenceTier::Medium, ConfidenceTier::Low]
    );
}

use crate::domain::project::Project;
use crate::domain::risk::RiskTier;

/// Maps a forecast margin percentage onto a risk tier.
///
/// Thresholds are fixed: below 12 is red, 12 up to (not including) 18 is
/// yellow, 18 and above is green. Defined for all finite inputs, including
/// negative and >100 margins.
pub fn classify(forecast_margin_pct: f64) -> RiskTier {
    if forecast_margin_pct < 12.0 {
        RiskTier::Red
    } else if forecast_margin_pct < 18.0 {
        RiskTier::Yellow
    } else {
        RiskTier::Green
    }
}

/// Tier for a whole project record. A project with no forecast margin on
/// file cannot be flagged, so it ranks as green.
pub fn project_tier(project: &Project) -> RiskTier {
    project
        .forecast_margin_pct
        .map(classify)
        .unwrap_or(RiskTier::Green)
}

/// Monetary shortfall implied by the gap between target and forecast
/// margin, scaled by contract value and rounded to whole currency units
/// (half away from zero).
///
/// A project meeting or beating its target signals no loss. Missing inputs
/// degrade to zero; these fields are optional on hosted rows and a
/// dashboard figure should read "no loss known" rather than fail.
pub fn estimate_loss(
    target_margin_pct: Option<f64>,
    forecast_margin_pct: Option<f64>,
    contract_amount: Option<i64>,
) -> i64 {
    let (Some(target), Some(forecast), Some(amount)) =
        (target_margin_pct, forecast_margin_pct, contract_amount)
    else {
        return 0;
    };

    let diff = target - forecast;
    if diff <= 0.0 {
        return 0;
    }
    (amount as f64 * diff / 100.0).round() as i64
}

/// Convenience wrapper over a project record.
pub fn project_loss(project: &Project) -> i64 {
    estimate_loss(
        project.target_margin_pct,
        project.forecast_margin_pct,
        project.contract_amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries_are_exact() {
        assert_eq!(classify(11.999), RiskTier::Red);
        assert_eq!(classify(12.0), RiskTier::Yellow);
        assert_eq!(classify(17.999), RiskTier::Yellow);
        assert_eq!(classify(18.0), RiskTier::Green);
    }

    #[test]
    fn classify_is_total_over_extreme_inputs() {
        assert_eq!(classify(-40.0), RiskTier::Red);
        assert_eq!(classify(0.0), RiskTier::Red);
        assert_eq!(classify(250.0), RiskTier::Green);
    }

    #[test]
    fn classify_severity_never_increases_with_margin() {
        let samples = [-10.0, 0.0, 5.0, 11.9, 12.0, 15.0, 17.9, 18.0, 21.0, 99.0];
        for pair in samples.windows(2) {
            assert!(
                classify(pair[0]) <= classify(pair[1]),
                "tier regressed between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn estimate_loss_matches_sample_scenario() {
        // P001: 20% target, 9% forecast, 5,835,168 contract.
        assert_eq!(estimate_loss(Some(20.0), Some(9.0), Some(5_835_168)), 641_868);
    }

    #[test]
    fn estimate_loss_is_zero_at_or_above_target() {
        assert_eq!(estimate_loss(Some(18.0), Some(18.0), Some(4_200_000)), 0);
        assert_eq!(estimate_loss(Some(18.0), Some(21.0), Some(4_200_000)), 0);
        assert_eq!(estimate_loss(Some(20.0), Some(22.0), Some(2_380_000)), 0);
    }

    #[test]
    fn estimate_loss_degrades_to_zero_on_missing_inputs() {
        assert_eq!(estimate_loss(None, Some(9.0), Some(1_000_000)), 0);
        assert_eq!(estimate_loss(Some(20.0), None, Some(1_000_000)), 0);
        assert_eq!(estimate_loss(Some(20.0), Some(9.0), None), 0);
    }

    #[test]
    fn estimate_loss_rounds_to_whole_units() {
        // 1001 * 0.125 = 125.125
        assert_eq!(estimate_loss(Some(20.0), Some(7.5), Some(1_001)), 125);
        // 1000 * 0.0005 = 0.5 rounds away from zero
        assert_eq!(estimate_loss(Some(10.05), Some(10.0), Some(1_000)), 1);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = estimate_loss(Some(20.0), Some(9.0), Some(5_835_168));
        let second = estimate_loss(Some(20.0), Some(9.0), Some(5_835_168));
        assert_eq!(first, second);
        assert_eq!(classify(9.0), classify(9.0));
    }
}

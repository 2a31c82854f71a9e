//! Decision rules that turn a comparison into advice
//!
//! Rules are checked in order and the first match wins. Dollar figures are
//! rounded only inside the generated text.

use super::buy::BuyingAnalysis;
use super::compare::{Advantage, ComparisonAnalysis};
use super::rent::RentingAnalysis;
use crate::assumptions::DecisionThresholds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub decision: Advantage,
    /// 0 to 100
    pub confidence: u8,
    pub primary_reason: String,
    pub considerations: Vec<String>,
}

impl RecommendationResult {
    /// One-line summary suitable for sharing
    pub fn share_text(&self) -> String {
        let verdict = match self.decision {
            Advantage::Buy => "buying",
            Advantage::Rent => "renting",
            Advantage::Neutral => "both options are similar",
        };
        format!("My rent vs buy analysis recommends {}. {}", verdict, self.primary_reason)
    }
}

/// Decision, confidence and reasons derived from the 5 and 10-year advantages
pub fn generate(
    buying: &BuyingAnalysis,
    _renting: &RentingAnalysis,
    comparison: &ComparisonAnalysis,
    thresholds: &DecisionThresholds,
) -> RecommendationResult {
    let five = comparison.five_year_advantage;
    let ten = comparison.ten_year_advantage;

    let (decision, confidence, primary_reason) = if five == Advantage::Buy && ten == Advantage::Buy {
        (
            Advantage::Buy,
            thresholds.confidence_consistent,
            format!(
                "Buying provides significant financial advantages in both 5 and 10-year scenarios, \
                 with potential savings of {} over 10 years.",
                format_dollars(comparison.ten_year_savings.abs())
            ),
        )
    } else if five == Advantage::Rent && ten == Advantage::Rent {
        (
            Advantage::Rent,
            thresholds.confidence_consistent,
            format!(
                "Renting is more cost-effective in both short and long-term scenarios, \
                 potentially saving {} over 10 years.",
                format_dollars(comparison.ten_year_savings.abs())
            ),
        )
    } else if ten == Advantage::Buy && comparison.ten_year_savings.abs() > thresholds.strong_long_term_savings {
        (
            Advantage::Buy,
            thresholds.confidence_long_term_buy,
            "While renting may be cheaper initially, buying becomes significantly more \
             advantageous over the long term."
                .to_string(),
        )
    } else if five == Advantage::Rent && comparison.monthly_difference > thresholds.rent_monthly_difference {
        (
            Advantage::Rent,
            thresholds.confidence_short_term_rent,
            format!(
                "Renting provides immediate monthly savings of {} and short-term financial flexibility.",
                format_dollars(comparison.monthly_difference.abs())
            ),
        )
    } else {
        (
            Advantage::Neutral,
            thresholds.confidence_neutral,
            "Both options have similar financial outcomes. Your personal circumstances and \
             preferences should guide the decision."
                .to_string(),
        )
    };

    let mut considerations = Vec::new();
    if comparison.monthly_difference > thresholds.notable_monthly_difference {
        considerations.push(format!(
            "Buying requires {} more per month",
            format_dollars(comparison.monthly_difference.abs())
        ));
    }
    if buying.initial_cash_outlay > thresholds.notable_initial_outlay {
        considerations.push(format!(
            "Significant upfront investment required: {}",
            format_dollars(buying.initial_cash_outlay)
        ));
    }
    if ten == Advantage::Buy {
        considerations.push("Long-term wealth building potential through home equity".to_string());
    }
    if five == Advantage::Rent {
        considerations.push("Greater flexibility and lower maintenance responsibilities with renting".to_string());
    }

    RecommendationResult {
        decision,
        confidence: confidence.min(100),
        primary_reason,
        considerations,
    }
}

/// Whole dollars with thousands separators, e.g. `$1,234,568`
pub fn format_dollars(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ScenarioInput;
    use crate::projection::{buy, compare::compare, rent};
    use proptest::prelude::*;

    fn comparison(five: Advantage, ten: Advantage, ten_savings: f64, monthly: f64) -> ComparisonAnalysis {
        ComparisonAnalysis {
            monthly_difference: monthly,
            cash_outlay_difference: 0.0,
            five_year_advantage: five,
            ten_year_advantage: ten,
            five_year_savings: 0.0,
            ten_year_savings: ten_savings,
        }
    }

    fn analyses() -> (BuyingAnalysis, RentingAnalysis) {
        let input = ScenarioInput::default();
        (buy::analyze(&input).unwrap(), rent::analyze(&input))
    }

    fn run(c: &ComparisonAnalysis) -> RecommendationResult {
        let (b, r) = analyses();
        generate(&b, &r, c, &DecisionThresholds::default())
    }

    #[test]
    fn test_consistent_buy() {
        let rec = run(&comparison(Advantage::Buy, Advantage::Buy, 60_000.4, 100.0));
        assert_eq!(rec.decision, Advantage::Buy);
        assert_eq!(rec.confidence, 85);
        assert!(rec.primary_reason.contains("$60,000 over 10 years"));
    }

    #[test]
    fn test_consistent_rent() {
        let rec = run(&comparison(Advantage::Rent, Advantage::Rent, -25_000.0, 100.0));
        assert_eq!(rec.decision, Advantage::Rent);
        assert_eq!(rec.confidence, 85);
        assert!(rec.primary_reason.contains("$25,000"));
    }

    #[test]
    fn test_long_term_buy_needs_large_savings() {
        let strong = run(&comparison(Advantage::Rent, Advantage::Buy, 50_001.0, 100.0));
        assert_eq!((strong.decision, strong.confidence), (Advantage::Buy, 70));

        let weak = run(&comparison(Advantage::Neutral, Advantage::Buy, 50_000.0, 100.0));
        assert_eq!((weak.decision, weak.confidence), (Advantage::Neutral, 60));
    }

    #[test]
    fn test_short_term_rent_needs_monthly_gap() {
        let wide = run(&comparison(Advantage::Rent, Advantage::Neutral, 0.0, 500.01));
        assert_eq!((wide.decision, wide.confidence), (Advantage::Rent, 75));
        assert!(wide.primary_reason.contains("$500 "));

        let narrow = run(&comparison(Advantage::Rent, Advantage::Neutral, 0.0, 500.0));
        assert_eq!(narrow.decision, Advantage::Neutral);
    }

    #[test]
    fn test_considerations_in_order() {
        // Default outlay is 88,000
        let rec = run(&comparison(Advantage::Rent, Advantage::Buy, 10_000.0, 301.0));
        assert_eq!(
            rec.considerations,
            vec![
                "Buying requires $301 more per month".to_string(),
                "Significant upfront investment required: $88,000".to_string(),
                "Long-term wealth building potential through home equity".to_string(),
                "Greater flexibility and lower maintenance responsibilities with renting".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_considerations() {
        let (mut b, r) = analyses();
        b.initial_cash_outlay = 20_000.0;
        let c = comparison(Advantage::Neutral, Advantage::Neutral, 0.0, -200.0);
        let rec = generate(&b, &r, &c, &DecisionThresholds::default());
        assert!(rec.considerations.is_empty());
    }

    #[test]
    fn test_default_scenario_recommends_renting() {
        let (b, r) = analyses();
        let c = compare(&b, &r, &DecisionThresholds::default());
        let rec = generate(&b, &r, &c, &DecisionThresholds::default());

        assert_eq!(rec.decision, Advantage::Rent);
        assert_eq!(rec.confidence, 85);
        assert_eq!(rec.considerations.len(), 3);
        assert_eq!(rec, generate(&b, &r, &c, &DecisionThresholds::default()));
    }

    #[test]
    fn test_share_text() {
        let rec = run(&comparison(Advantage::Neutral, Advantage::Neutral, 0.0, 0.0));
        assert!(rec.share_text().starts_with("My rent vs buy analysis recommends both options are similar. Both"));
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(999.5), "$1,000");
        assert_eq!(format_dollars(1_234_567.89), "$1,234,568");
        assert_eq!(format_dollars(-4_500.0), "-$4,500");
        assert_eq!(format_dollars(123_456.0), "$123,456");
    }

    fn advantage() -> impl Strategy<Value = Advantage> {
        prop_oneof![Just(Advantage::Buy), Just(Advantage::Rent), Just(Advantage::Neutral)]
    }

    proptest! {
        #[test]
        fn prop_confidence_in_range(
            five in advantage(),
            ten in advantage(),
            savings in -200_000.0..200_000.0f64,
            monthly in -2_000.0..2_000.0f64,
        ) {
            let rec = run(&comparison(five, ten, savings, monthly));
            prop_assert!(rec.confidence <= 100);
            prop_assert!(!rec.primary_reason.is_empty());
        }
    }
}

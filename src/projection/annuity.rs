//! Rate conversion and annuity future value
//!
//! Closed-form helpers used by the yearly projection step.

use serde::{Deserialize, Serialize};

/// Number of contribution periods in a projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// When within each period a contribution is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnuityTiming {
    /// Ordinary annuity: paid at the end of each period
    #[default]
    End,
    /// Annuity due: paid at the start of each period
    Begin,
}

/// Convert an effective annual rate to the equivalent effective monthly rate
///
/// Compounding the result twelve times reproduces `annual_rate` exactly,
/// unlike a naive `annual_rate / 12`.
pub fn effective_monthly_rate(annual_rate: f64) -> f64 {
    if annual_rate == 0.0 {
        return 0.0;
    }
    (1.0 + annual_rate).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

/// Future value of `periods` equal payments compounded at `rate` per period
///
/// # Arguments
/// * `rate` - Periodic rate as a decimal
/// * `periods` - Number of payments
/// * `payment` - Amount of each payment
/// * `timing` - Whether payments fall at the end or the start of each period
pub fn future_value_of_annuity(
    rate: f64,
    periods: u32,
    payment: f64,
    timing: AnnuityTiming,
) -> f64 {
    if rate == 0.0 {
        return payment * periods as f64;
    }

    let ordinary = payment * ((1.0 + rate).powi(periods as i32) - 1.0) / rate;
    match timing {
        AnnuityTiming::End => ordinary,
        AnnuityTiming::Begin => ordinary * (1.0 + rate),
    }
}

/// Cumulative price-level factor after `years` of inflation at `annual_rate`
pub fn inflation_factor(annual_rate: f64, years: u32) -> f64 {
    (1.0 + annual_rate).powi(years as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate_compounds_to_annual() {
        let monthly = effective_monthly_rate(0.08);
        assert_relative_eq!(monthly, 0.006434030110003, epsilon = 1e-12);
        assert_relative_eq!((1.0 + monthly).powi(12), 1.08, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_rate_below_naive_division() {
        assert!(effective_monthly_rate(0.12) < 0.01);
    }

    #[test]
    fn test_zero_rate_annuity_is_sum_of_payments() {
        let fv = future_value_of_annuity(0.0, 12, 5_000.0, AnnuityTiming::End);
        assert_eq!(fv, 60_000.0);

        let due = future_value_of_annuity(0.0, 12, 5_000.0, AnnuityTiming::Begin);
        assert_eq!(due, 60_000.0);
    }

    #[test]
    fn test_ordinary_annuity_matches_closed_form() {
        let rate = effective_monthly_rate(0.08);
        let fv = future_value_of_annuity(rate, 12, 5_000.0, AnnuityTiming::End);
        // payment * ((1+r)^12 - 1) / r with (1+r)^12 = 1.08
        assert_relative_eq!(fv, 5_000.0 * 0.08 / rate, epsilon = 1e-6);
        assert_relative_eq!(fv, 62_169.432402576, epsilon = 1e-6);
    }

    #[test]
    fn test_ordinary_annuity_matches_period_by_period_sum() {
        let rate = 0.01;
        let expected: f64 = (0..12).map(|k| 100.0 * (1.0_f64 + rate).powi(11 - k)).sum();
        let fv = future_value_of_annuity(rate, 12, 100.0, AnnuityTiming::End);
        assert_relative_eq!(fv, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_annuity_due_earns_one_extra_period() {
        let rate = 0.005;
        let end = future_value_of_annuity(rate, 12, 1_000.0, AnnuityTiming::End);
        let begin = future_value_of_annuity(rate, 12, 1_000.0, AnnuityTiming::Begin);
        assert_relative_eq!(begin, end * 1.005, epsilon = 1e-9);
    }

    #[test]
    fn test_inflation_factor() {
        assert_eq!(inflation_factor(0.0, 30), 1.0);
        assert_relative_eq!(inflation_factor(0.04, 1), 1.04);
        assert_relative_eq!(inflation_factor(0.04, 2), 1.0816, epsilon = 1e-12);
    }
}

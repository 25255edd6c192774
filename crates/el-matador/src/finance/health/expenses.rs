use std::collections::BTreeMap;

use super::profile::coerce_amount;

/// Sums a category → amount map. Non-finite or negative entries count as zero.
pub fn total_monthly_expenses(expenses: &BTreeMap<String, f64>) -> f64 {
    expenses.values().copied().map(coerce_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_totals_zero() {
        assert_eq!(total_monthly_expenses(&BTreeMap::new()), 0.0);
    }

    #[test]
    fn skips_values_that_are_not_amounts() {
        let expenses = BTreeMap::from([
            ("housing".to_string(), 1500.0),
            ("food".to_string(), 400.0),
            ("other".to_string(), f64::NAN),
            ("refund".to_string(), -80.0),
        ]);
        assert_eq!(total_monthly_expenses(&expenses), 1900.0);
    }
}

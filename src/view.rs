//! The derived-view pipeline: filtering, sorting and totaling expense records.
//!
//! Everything in this module is a pure function of its inputs. The ledger's canonical
//! collection is never mutated; each stage produces a new sequence, so re-running a
//! stage with the same inputs yields the same output.

use crate::model::{Amount, Categories, Expense};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The active filter configuration: a category filter, a month filter, both, or
/// neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Retain only expenses in this category, by category id.
    pub category: Option<i64>,
    /// Retain only expenses dated in this month (1-12), in any year.
    pub month: Option<u32>,
}

/// The available sort orders for a listing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep the records in the order the store returned them.
    #[default]
    None,
    /// Cheapest first.
    AmountAsc,
    /// Most expensive first.
    AmountDesc,
    /// Oldest first.
    DateAsc,
    /// Newest first.
    DateDesc,
}

serde_plain::derive_display_from_serialize!(SortMode);
serde_plain::derive_fromstr_from_deserialize!(SortMode);

/// A complete view configuration: filters plus sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewConfig {
    pub filter: FilterConfig,
    pub sort: SortMode,
}

/// Applies the active filters, retaining expenses that satisfy all of them.
///
/// The category filter resolves the configured id to a display name through the
/// registry and matches each record's resolved `category_name` case-insensitively;
/// an id unknown to the registry matches nothing. The month filter compares the
/// parsed date's month; an expense whose date is missing or unparseable fails the
/// comparison. Filtering is stable: survivors keep their relative order.
pub fn filter(records: &[Expense], categories: &Categories, cfg: &FilterConfig) -> Vec<Expense> {
    // None = no category filter; Some(None) = an id that resolved to no category.
    let want_name: Option<Option<String>> = cfg
        .category
        .map(|id| categories.name_of(id).map(str::to_lowercase));

    records
        .iter()
        .filter(|e| {
            let category_ok = match &want_name {
                None => true,
                Some(None) => false,
                Some(Some(want)) => e.category_name().to_lowercase() == *want,
            };
            let month_ok = match cfg.month {
                None => true,
                Some(month) => e.date().map(|d| d.month() == month).unwrap_or(false),
            };
            category_ok && month_ok
        })
        .cloned()
        .collect()
}

/// Orders the records per `mode`. `SortMode::None` leaves the input order unchanged.
///
/// The sort is stable, so records with equal keys keep the relative order the filter
/// stage handed over. Missing or unparseable dates order as the earliest possible
/// date, which keeps the date comparators total.
pub fn sort(mut records: Vec<Expense>, mode: SortMode) -> Vec<Expense> {
    match mode {
        SortMode::None => {}
        SortMode::AmountAsc => records.sort_by_key(|e| e.amount().value()),
        SortMode::AmountDesc => {
            records.sort_by(|a, b| b.amount().value().cmp(&a.amount().value()))
        }
        SortMode::DateAsc => records.sort_by_key(date_key),
        SortMode::DateDesc => records.sort_by(|a, b| date_key(b).cmp(&date_key(a))),
    }
    records
}

/// The key used by the date comparators.
fn date_key(e: &Expense) -> NaiveDate {
    e.date().unwrap_or(NaiveDate::MIN)
}

/// Sums the amounts of the given records.
///
/// Sorting never changes the result: the total of a view depends only on which
/// records survived the filter stage.
pub fn total(records: &[Expense]) -> Amount {
    let sum: Decimal = records.iter().map(|e| e.amount().value()).sum();
    Amount::new(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ExpenseRecord};
    use std::str::FromStr;

    fn registry() -> Categories {
        Categories::new(vec![Category::new(1, "Food"), Category::new(2, "Transport")])
    }

    fn expense(id: i64, category_name: &str, amount: &str, date: &str) -> Expense {
        ExpenseRecord {
            id,
            category: None,
            category_name: Some(category_name.to_string()),
            description: format!("expense {id}"),
            amount: Amount::from_str(amount).unwrap(),
            date: date.to_string(),
        }
        .normalize(&registry())
    }

    fn scenario() -> Vec<Expense> {
        vec![
            expense(5, "Food", "20", "2024-03-01"),
            expense(6, "Food", "5", "2024-05-01"),
        ]
    }

    fn ids(records: &[Expense]) -> Vec<i64> {
        records.iter().map(Expense::id).collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let records = scenario();
        let out = filter(&records, &registry(), &FilterConfig::default());
        assert_eq!(out, records);
    }

    #[test]
    fn test_category_filter_retains_matches() {
        let mut records = scenario();
        records.push(expense(7, "Transport", "12.50", "2024-03-15"));
        let cfg = FilterConfig {
            category: Some(1),
            month: None,
        };
        let out = filter(&records, &registry(), &cfg);
        assert_eq!(ids(&out), vec![5, 6]);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let records = vec![expense(1, "FOOD", "3", "2024-01-05")];
        let cfg = FilterConfig {
            category: Some(1),
            month: None,
        };
        let out = filter(&records, &registry(), &cfg);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_unknown_category_id_matches_nothing() {
        let records = scenario();
        let cfg = FilterConfig {
            category: Some(99),
            month: None,
        };
        assert!(filter(&records, &registry(), &cfg).is_empty());
    }

    #[test]
    fn test_month_filter() {
        let records = scenario();
        let cfg = FilterConfig {
            category: None,
            month: Some(3),
        };
        let out = filter(&records, &registry(), &cfg);
        assert_eq!(ids(&out), vec![5]);
    }

    #[test]
    fn test_filters_compose_with_and() {
        let mut records = scenario();
        records.push(expense(7, "Transport", "12.50", "2024-03-15"));
        let cfg = FilterConfig {
            category: Some(1),
            month: Some(3),
        };
        let out = filter(&records, &registry(), &cfg);
        assert_eq!(ids(&out), vec![5]);
    }

    #[test]
    fn test_unparseable_date_fails_month_filter() {
        let records = vec![
            expense(1, "Food", "3", "not-a-date"),
            expense(2, "Food", "4", ""),
            expense(3, "Food", "5", "2024-03-09"),
        ];
        let cfg = FilterConfig {
            category: None,
            month: Some(3),
        };
        let out = filter(&records, &registry(), &cfg);
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn test_filter_output_is_subset_in_input_order() {
        let records = vec![
            expense(1, "Food", "1", "2024-03-01"),
            expense(2, "Transport", "2", "2024-03-02"),
            expense(3, "Food", "3", "2024-03-03"),
            expense(4, "Food", "4", "2024-04-04"),
        ];
        let cfg = FilterConfig {
            category: Some(1),
            month: Some(3),
        };
        let out = filter(&records, &registry(), &cfg);
        assert_eq!(ids(&out), vec![1, 3]);
        for e in &out {
            assert!(records.contains(e));
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let cfg = FilterConfig {
            category: Some(1),
            month: Some(3),
        };
        assert!(filter(&[], &registry(), &cfg).is_empty());
    }

    #[test]
    fn test_sort_none_is_identity() {
        let records = scenario();
        assert_eq!(sort(records.clone(), SortMode::None), records);
    }

    #[test]
    fn test_sort_amount_desc() {
        let out = sort(scenario(), SortMode::AmountDesc);
        assert_eq!(ids(&out), vec![5, 6]);
    }

    #[test]
    fn test_sort_amount_asc() {
        let out = sort(scenario(), SortMode::AmountAsc);
        assert_eq!(ids(&out), vec![6, 5]);
    }

    #[test]
    fn test_sort_date_desc() {
        let out = sort(scenario(), SortMode::DateDesc);
        assert_eq!(ids(&out), vec![6, 5]);
    }

    #[test]
    fn test_sort_invalid_date_goes_first_ascending() {
        let records = vec![
            expense(1, "Food", "1", "2024-03-01"),
            expense(2, "Food", "2", "garbled"),
        ];
        let out = sort(records, SortMode::DateAsc);
        assert_eq!(ids(&out), vec![2, 1]);
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let records = vec![
            expense(1, "Food", "3", "2024-01-01"),
            expense(2, "Food", "1", "2024-02-01"),
            expense(3, "Food", "2", "2024-03-01"),
        ];
        for mode in [
            SortMode::None,
            SortMode::AmountAsc,
            SortMode::AmountDesc,
            SortMode::DateAsc,
            SortMode::DateDesc,
        ] {
            let out = sort(records.clone(), mode);
            let mut sorted_ids = ids(&out);
            sorted_ids.sort_unstable();
            assert_eq!(sorted_ids, vec![1, 2, 3], "mode {mode}");
        }
    }

    #[test]
    fn test_sort_equal_keys_keep_relative_order() {
        let records = vec![
            expense(1, "Food", "5", "2024-03-01"),
            expense(2, "Food", "5", "2024-03-01"),
            expense(3, "Food", "5", "2024-03-01"),
        ];
        for mode in [SortMode::AmountAsc, SortMode::AmountDesc, SortMode::DateAsc] {
            let out = sort(records.clone(), mode);
            assert_eq!(ids(&out), vec![1, 2, 3], "mode {mode}");
        }
    }

    #[test]
    fn test_total_of_empty_is_zero() {
        assert_eq!(total(&[]).to_string(), "0.00");
    }

    #[test]
    fn test_total_sums_amounts() {
        assert_eq!(total(&scenario()).to_string(), "25.00");
    }

    #[test]
    fn test_total_unchanged_by_sorting() {
        let records = scenario();
        let expected = total(&records);
        for mode in [
            SortMode::None,
            SortMode::AmountAsc,
            SortMode::AmountDesc,
            SortMode::DateAsc,
            SortMode::DateDesc,
        ] {
            assert_eq!(total(&sort(records.clone(), mode)), expected);
        }
    }

    #[test]
    fn test_full_pipeline_scenario() {
        // Category 1 resolves to "Food"; both records match, the more expensive one
        // sorts first, and the view totals 25.00.
        let records = scenario();
        let cfg = FilterConfig {
            category: Some(1),
            month: None,
        };
        let filtered = filter(&records, &registry(), &cfg);
        assert_eq!(ids(&filtered), vec![5, 6]);
        let sorted = sort(filtered, SortMode::AmountDesc);
        assert_eq!(ids(&sorted), vec![5, 6]);
        assert_eq!(total(&sorted).to_string(), "25.00");
    }

    #[test]
    fn test_sort_mode_round_trips_as_text() {
        assert_eq!(SortMode::AmountDesc.to_string(), "amount-desc");
        assert_eq!(
            "date-asc".parse::<SortMode>().unwrap(),
            SortMode::DateAsc
        );
    }
}

//! Dataset Module
//! Immutable, date-sorted transaction records and the filter domains derived from them.

use chrono::NaiveDate;
use std::collections::BTreeSet;

/// One transaction row of the source CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub region: String,
    pub customer_type: String,
    pub average_price: f64,
    pub total_volume: f64,
}

/// Dropdown entry for a customer type: raw value plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTypeOption {
    pub value: String,
    pub label: String,
}

impl CustomerTypeOption {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: display_case(value),
        }
    }
}

/// All records, sorted ascending by date. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, sorting by date. The sort is stable so rows sharing a
    /// date keep their file order.
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// The degenerate dataset used when the source file is missing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct regions.
    pub fn regions(&self) -> Vec<String> {
        Self::distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    /// Sorted distinct customer types with display labels.
    pub fn customer_types(&self) -> Vec<CustomerTypeOption> {
        Self::distinct(self.records.iter().map(|r| r.customer_type.as_str()))
            .iter()
            .map(|t| CustomerTypeOption::new(t))
            .collect()
    }

    /// Earliest and latest record dates, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.date, last.date))
    }

    /// Sorted distinct dates, used to populate the date range pickers.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.records.iter().map(|r| r.date).collect();
        dates.dedup();
        dates
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        values
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Title-case a raw value for display: the first letter of every alphabetic
/// run is uppercased and the rest lowercased ("organic" -> "Organic").
pub fn display_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, region: &str, customer_type: &str) -> Record {
        Record {
            date: d,
            region: region.into(),
            customer_type: customer_type.into(),
            average_price: 1.0,
            total_volume: 100.0,
        }
    }

    #[test]
    fn new_sorts_by_date_and_keeps_ties_in_order() {
        let ds = Dataset::new(vec![
            record(date(2015, 1, 11), "Albany", "organic"),
            record(date(2015, 1, 4), "Chicago", "organic"),
            record(date(2015, 1, 4), "Albany", "conventional"),
        ]);

        let regions: Vec<_> = ds.records().iter().map(|r| r.region.as_str()).collect();
        assert_eq!(regions, ["Chicago", "Albany", "Albany"]);
        assert_eq!(ds.records()[1].customer_type, "conventional");
    }

    #[test]
    fn domains_are_sorted_and_distinct() {
        let ds = Dataset::new(vec![
            record(date(2015, 1, 4), "Chicago", "organic"),
            record(date(2015, 1, 4), "Albany", "conventional"),
            record(date(2015, 1, 11), "Albany", "organic"),
        ]);

        assert_eq!(ds.regions(), ["Albany", "Chicago"]);
        let types = ds.customer_types();
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].value, "conventional");
        assert_eq!(types[0].label, "Conventional");
        assert_eq!(types[1].label, "Organic");
        assert_eq!(ds.dates(), [date(2015, 1, 4), date(2015, 1, 11)]);
    }

    #[test]
    fn date_bounds_span_first_and_last() {
        let ds = Dataset::new(vec![
            record(date(2016, 3, 6), "Albany", "organic"),
            record(date(2015, 1, 4), "Albany", "organic"),
        ]);
        assert_eq!(ds.date_bounds(), Some((date(2015, 1, 4), date(2016, 3, 6))));
        assert_eq!(Dataset::empty().date_bounds(), None);
    }

    #[test]
    fn display_case_matches_title_rules() {
        assert_eq!(display_case("organic"), "Organic");
        assert_eq!(display_case("CONVENTIONAL"), "Conventional");
        assert_eq!(display_case("semi-organic mix"), "Semi-Organic Mix");
        assert_eq!(display_case(""), "");
    }
}

//! Filter Selection Module
//! The four filter values picked in the menu and the row selection rule.

use crate::config::DashboardConfig;
use crate::data::{Dataset, Record};
use chrono::NaiveDate;

/// Current region / customer type / date range filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub region: String,
    pub customer_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterSelection {
    pub fn new(
        region: impl Into<String>,
        customer_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            region: region.into(),
            customer_type: customer_type.into(),
            start_date,
            end_date,
        }
    }

    /// Initial selection for a dataset: the configured default region and
    /// type when the dataset has them (first available otherwise), over the
    /// full date range. `None` for an empty dataset.
    pub fn initial(dataset: &Dataset, config: &DashboardConfig) -> Option<Self> {
        let (start_date, end_date) = dataset.date_bounds()?;

        let regions = dataset.regions();
        let region = regions
            .iter()
            .find(|r| **r == config.default_region)
            .or_else(|| regions.first())?
            .clone();

        let types = dataset.customer_types();
        let customer_type = types
            .iter()
            .find(|t| t.value == config.default_customer_type)
            .or_else(|| types.first())?
            .value
            .clone();

        Some(Self {
            region,
            customer_type,
            start_date,
            end_date,
        })
    }

    /// Whether a record passes the filter. Both date bounds are inclusive;
    /// an inverted range matches nothing.
    pub fn matches(&self, record: &Record) -> bool {
        record.region == self.region
            && record.customer_type == self.customer_type
            && self.start_date <= record.date
            && record.date <= self.end_date
    }

    /// Matching records in dataset order (date ascending).
    pub fn select<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        dataset.records().iter().filter(move |r| self.matches(r))
    }
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
            average_price: 1.5,
            total_volume: 2000.0,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            record(date(2015, 1, 4), "Albany", "organic"),
            record(date(2015, 1, 4), "Boston", "conventional"),
            record(date(2015, 1, 11), "Boston", "organic"),
            record(date(2015, 2, 1), "Albany", "organic"),
        ])
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let sel = FilterSelection::new("Albany", "organic", date(2015, 1, 4), date(2015, 2, 1));
        assert_eq!(sel.select(&sample()).count(), 2);

        let sel = FilterSelection::new("Albany", "organic", date(2015, 1, 5), date(2015, 1, 31));
        assert_eq!(sel.select(&sample()).count(), 0);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let sel = FilterSelection::new("Albany", "organic", date(2015, 2, 1), date(2015, 1, 4));
        assert_eq!(sel.select(&sample()).count(), 0);
    }

    #[test]
    fn initial_prefers_configured_defaults() {
        let config = DashboardConfig::default();
        let sel = FilterSelection::initial(&sample(), &config).unwrap();
        assert_eq!(sel.region, "Albany");
        assert_eq!(sel.customer_type, "organic");
        assert_eq!(sel.start_date, date(2015, 1, 4));
        assert_eq!(sel.end_date, date(2015, 2, 1));
    }

    #[test]
    fn initial_falls_back_to_first_available() {
        let ds = Dataset::new(vec![record(date(2017, 6, 4), "Denver", "conventional")]);
        let sel = FilterSelection::initial(&ds, &DashboardConfig::default()).unwrap();
        assert_eq!(sel.region, "Denver");
        assert_eq!(sel.customer_type, "conventional");
    }

    #[test]
    fn initial_is_none_for_empty_dataset() {
        assert!(FilterSelection::initial(&Dataset::empty(), &DashboardConfig::default()).is_none());
    }
}

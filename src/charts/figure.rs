//! Chart Figure Module
//! Declarative chart descriptions and the filter-and-render callback that builds them.

use crate::config::{PRICE_COLOR, VOLUME_COLOR};
use crate::data::{Dataset, FilterSelection, Record};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tracing::debug;

pub const PRICE_CHART_ID: &str = "price-chart";
pub const VOLUME_CHART_ID: &str = "volume-chart";
pub const PRICE_CHART_TITLE: &str = "Average Transaction Amount";
pub const VOLUME_CHART_TITLE: &str = "Transaction Amounts";

/// How y values are shown on the axis and in hover labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Plain,
    /// `$` tick prefix, hover label with two decimals.
    Currency,
}

impl ValueFormat {
    pub fn tick_label(self, value: f64) -> String {
        match self {
            ValueFormat::Plain => format_number(value),
            ValueFormat::Currency => format!("${}", format_number(value)),
        }
    }

    pub fn hover_label(self, value: f64) -> String {
        match self {
            ValueFormat::Plain => format_number(value),
            ValueFormat::Currency => format!("${:.2}", value),
        }
    }

    fn tick_prefix(self) -> Option<&'static str> {
        match self {
            ValueFormat::Plain => None,
            ValueFormat::Currency => Some("$"),
        }
    }

    fn hover_template(self) -> Option<&'static str> {
        match self {
            ValueFormat::Plain => None,
            ValueFormat::Currency => Some("$%{y:.2f}<extra></extra>"),
        }
    }
}

/// Whole numbers without a fractional part, everything else with up to
/// two decimals.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// One line chart: series plus display hints.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub points: Vec<(NaiveDate, f64)>,
    pub value_format: ValueFormat,
    /// Hex colour of the line, e.g. `#17B897`.
    pub color: &'static str,
    /// Axes cannot be zoomed or panned.
    pub fixed_range: bool,
}

impl ChartSpec {
    fn from_records<'a>(
        id: &'static str,
        title: &'static str,
        records: impl Iterator<Item = &'a Record>,
        value: impl Fn(&Record) -> f64,
        value_format: ValueFormat,
        color: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            points: records.map(|r| (r.date, value(r))).collect(),
            value_format,
            color,
            fixed_range: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_values(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|(x, _)| *x).collect()
    }

    pub fn y_values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, y)| *y).collect()
    }

    /// Plotly-style figure (`data` + `layout`) describing this chart.
    pub fn to_figure(&self) -> Value {
        let x: Vec<String> = self
            .points
            .iter()
            .map(|(d, _)| d.format("%Y-%m-%d").to_string())
            .collect();

        let mut trace = json!({
            "x": x,
            "y": self.y_values(),
            "type": "lines",
        });
        if let Some(template) = self.value_format.hover_template() {
            trace["hovertemplate"] = json!(template);
        }

        let mut yaxis = json!({ "fixedrange": self.fixed_range });
        if let Some(prefix) = self.value_format.tick_prefix() {
            yaxis["tickprefix"] = json!(prefix);
        }

        json!({
            "data": [trace],
            "layout": {
                "title": { "text": self.title, "x": 0.05, "xanchor": "left" },
                "xaxis": { "fixedrange": self.fixed_range },
                "yaxis": yaxis,
                "colorway": [self.color],
            },
        })
    }
}

/// Select the rows matching `selection` and describe the price and volume
/// charts for them. Pure: the same inputs always give the same pair.
pub fn render(dataset: &Dataset, selection: &FilterSelection) -> (ChartSpec, ChartSpec) {
    let price = ChartSpec::from_records(
        PRICE_CHART_ID,
        PRICE_CHART_TITLE,
        selection.select(dataset),
        |r| r.average_price,
        ValueFormat::Currency,
        PRICE_COLOR,
    );
    let volume = ChartSpec::from_records(
        VOLUME_CHART_ID,
        VOLUME_CHART_TITLE,
        selection.select(dataset),
        |r| r.total_volume,
        ValueFormat::Plain,
        VOLUME_COLOR,
    );

    debug!(
        region = %selection.region,
        customer_type = %selection.customer_type,
        start = %selection.start_date,
        end = %selection.end_date,
        matched = price.points.len(),
        "Rendered charts"
    );

    (price, volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        let row = |d, region: &str, price, volume| Record {
            date: d,
            region: region.into(),
            customer_type: "organic".into(),
            average_price: price,
            total_volume: volume,
        };
        Dataset::new(vec![
            row(date(2015, 1, 11), "Albany", 1.22, 12000.0),
            row(date(2015, 1, 4), "Albany", 1.34, 10000.0),
            row(date(2015, 1, 4), "Chicago", 1.05, 99000.0),
        ])
    }

    #[test]
    fn charts_carry_display_hints() {
        let sel = FilterSelection::new("Albany", "organic", date(2015, 1, 1), date(2015, 1, 31));
        let (price, volume) = render(&dataset(), &sel);

        assert_eq!(price.title, "Average Transaction Amount");
        assert_eq!(price.color, "#17B897");
        assert_eq!(price.value_format, ValueFormat::Currency);
        assert!(price.fixed_range);

        assert_eq!(volume.title, "Transaction Amounts");
        assert_eq!(volume.color, "#E12D39");
        assert_eq!(volume.value_format, ValueFormat::Plain);
        assert!(volume.fixed_range);
    }

    #[test]
    fn series_follow_date_order() {
        let sel = FilterSelection::new("Albany", "organic", date(2015, 1, 1), date(2015, 1, 31));
        let (price, volume) = render(&dataset(), &sel);

        assert_eq!(price.x_values(), [date(2015, 1, 4), date(2015, 1, 11)]);
        assert_eq!(price.y_values(), [1.34, 1.22]);
        assert_eq!(volume.y_values(), [10000.0, 12000.0]);
    }

    #[test]
    fn empty_selection_gives_empty_charts() {
        let sel = FilterSelection::new("Nowhere", "organic", date(2015, 1, 1), date(2015, 1, 31));
        let (price, volume) = render(&dataset(), &sel);
        assert!(price.is_empty());
        assert!(volume.is_empty());
    }

    #[test]
    fn labels_follow_value_format() {
        assert_eq!(ValueFormat::Currency.hover_label(1.3), "$1.30");
        assert_eq!(ValueFormat::Currency.tick_label(1.5), "$1.5");
        assert_eq!(ValueFormat::Plain.tick_label(12000.0), "12000");
        assert_eq!(ValueFormat::Plain.hover_label(0.25), "0.25");
    }

    #[test]
    fn price_figure_has_currency_layout() {
        let sel = FilterSelection::new("Albany", "organic", date(2015, 1, 1), date(2015, 1, 31));
        let (price, volume) = render(&dataset(), &sel);

        let fig = price.to_figure();
        assert_eq!(fig["data"][0]["x"][0], "2015-01-04");
        assert_eq!(fig["data"][0]["hovertemplate"], "$%{y:.2f}<extra></extra>");
        assert_eq!(fig["layout"]["yaxis"]["tickprefix"], "$");
        assert_eq!(fig["layout"]["xaxis"]["fixedrange"], true);
        assert_eq!(fig["layout"]["colorway"][0], "#17B897");
        assert_eq!(fig["layout"]["title"]["xanchor"], "left");

        let fig = volume.to_figure();
        assert!(fig["data"][0].get("hovertemplate").is_none());
        assert!(fig["layout"]["yaxis"].get("tickprefix").is_none());
        assert_eq!(fig["data"][0]["y"][1], 12000.0);
    }
}

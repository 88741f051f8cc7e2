//! CSV Data Loader Module
//! Reads the transaction CSV with Polars and turns it into a typed, date-sorted Dataset.

use crate::data::{Dataset, Record};
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub const DATE_COL: &str = "Date";
pub const REGION_COL: &str = "region";
pub const TYPE_COL: &str = "type";
pub const PRICE_COL: &str = "AveragePrice";
pub const VOLUME_COL: &str = "Total Volume";

/// Pattern of the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const REQUIRED_COLUMNS: [&str; 5] = [DATE_COL, REGION_COL, TYPE_COL, PRICE_COL, VOLUME_COL];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing column '{0}'")]
    MissingColumn(String),
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },
}

/// Loads the transaction CSV.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file into a [`Dataset`].
    ///
    /// A missing file is not an error: it is logged and yields an empty
    /// dataset. Anything wrong with the contents of an existing file
    /// (unparseable dates, absent columns, nulls) is returned as an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "File not found, dashboard will be empty");
            return Ok(Dataset::empty());
        }

        let df = Self::read_frame(path)?;
        let records = Self::frame_to_records(&df)?;
        let dataset = Dataset::new(records);

        info!(
            path = %path.display(),
            rows = dataset.len(),
            regions = dataset.regions().len(),
            "Loaded transaction data"
        );
        Ok(dataset)
    }

    /// Column types forced at read time, so inference over the leading rows
    /// cannot pick an integer type for a column that later holds decimals.
    fn schema_overwrite() -> SchemaRef {
        let fields = [
            Field::new(DATE_COL.into(), DataType::String),
            Field::new(REGION_COL.into(), DataType::String),
            Field::new(TYPE_COL.into(), DataType::String),
            Field::new(PRICE_COL.into(), DataType::Float64),
            Field::new(VOLUME_COL.into(), DataType::Float64),
        ];
        Arc::new(Schema::from_iter(fields))
    }

    /// Read the required columns, parsing dates strictly. The numeric
    /// columns are read as f64 regardless of what the first rows look like.
    fn read_frame(path: &Path) -> Result<DataFrame, LoaderError> {
        let mut lazy = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .with_dtype_overwrite(Some(Self::schema_overwrite()))
            .finish()?;

        let schema = lazy.collect_schema()?;
        for name in REQUIRED_COLUMNS {
            if schema.get(name).is_none() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }

        let date_options = StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            strict: true,
            exact: true,
            cache: true,
        };

        let df = lazy
            .select([
                col(DATE_COL).str().to_date(date_options),
                col(REGION_COL),
                col(TYPE_COL),
                col(PRICE_COL),
                col(VOLUME_COL),
            ])
            .collect()?;

        Ok(df)
    }

    fn frame_to_records(df: &DataFrame) -> Result<Vec<Record>, LoaderError> {
        let dates = df.column(DATE_COL)?.date()?;
        let regions = df.column(REGION_COL)?.str()?;
        let types = df.column(TYPE_COL)?.str()?;
        let prices = df.column(PRICE_COL)?.f64()?;
        let volumes = df.column(VOLUME_COL)?.f64()?;

        let missing = |column: &str, row: usize| LoaderError::MissingValue {
            column: column.to_string(),
            row,
        };

        let epoch: NaiveDate = chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.date_naive();
        let mut records = Vec::with_capacity(df.height());

        for i in 0..df.height() {
            let days = dates.get(i).ok_or_else(|| missing(DATE_COL, i))?;
            records.push(Record {
                date: epoch + chrono::Duration::days(days as i64),
                region: regions.get(i).ok_or_else(|| missing(REGION_COL, i))?.to_string(),
                customer_type: types.get(i).ok_or_else(|| missing(TYPE_COL, i))?.to_string(),
                average_price: prices.get(i).ok_or_else(|| missing(PRICE_COL, i))?,
                total_volume: volumes.get(i).ok_or_else(|| missing(VOLUME_COL, i))?,
            });
        }

        Ok(records)
    }
}

//! Data module - CSV parsing and transforms

mod aggregate;
mod table;
mod trend;

pub use aggregate::{category_series, drill_down, CategoryCount};
pub use table::{CsvTable, ParseError};
pub use trend::{TrendData, TrendSeries};

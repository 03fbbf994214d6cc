pub mod csv_export;

pub use csv_export::{to_csv_string, write_csv, ReportError};

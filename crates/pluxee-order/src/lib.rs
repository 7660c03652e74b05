//! Order row construction and PLANSIP3C workbook output.

pub mod builder;
pub mod workbook;

pub use builder::{BuildConfig, BuildOutcome, build_rows, credit_date};
pub use workbook::{WorkbookError, output_file_name, write_workbook};

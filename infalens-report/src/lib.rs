//! # infalens-report
//!
//! Tabular sink for extracted logic records and the output formats that
//! render it: console for review, JSON for machines, XLSX for download.

pub mod reporters;
pub mod table;

pub use reporters::{available_formats, create_reporter, ReportOutput, Reporter};
pub use table::LogicTable;

//! JSON reporter — structured output for downstream tooling.

use serde_json::json;

use infalens_core::errors::ReportError;

use super::{ReportOutput, Reporter};
use crate::table::{LogicTable, COLUMNS};

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, table: &LogicTable) -> Result<ReportOutput, ReportError> {
        let records: Vec<serde_json::Value> = table
            .rows()
            .iter()
            .map(|r| {
                json!({
                    "transformation_type": r[0],
                    "transformation_name": r[1],
                    "field": r[2],
                    "logic": r[3],
                })
            })
            .collect();

        let output = json!({
            "columns": COLUMNS,
            "record_count": table.len(),
            "records": records,
        });

        serde_json::to_string_pretty(&output)
            .map(ReportOutput::Text)
            .map_err(|e| ReportError::Serialization {
                message: e.to_string(),
            })
    }
}

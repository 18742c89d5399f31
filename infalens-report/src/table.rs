//! The in-memory logic table.

use infalens_core::types::LogicRecord;

/// Column headers, fixed for every output format.
pub const COLUMNS: [&str; 4] = [
    "Transformation Type",
    "Transformation Name",
    "Field",
    "Logic",
];

/// The flat review table: one row per logic record, four fixed columns.
#[derive(Debug, Clone, Default)]
pub struct LogicTable {
    rows: Vec<[String; 4]>,
}

impl LogicTable {
    /// Build the table from extracted records, preserving their order.
    pub fn from_records(records: &[LogicRecord]) -> Self {
        let rows = records
            .iter()
            .map(|r| {
                [
                    r.kind.name().to_string(),
                    r.transformation.clone(),
                    r.field.clone(),
                    r.logic.clone(),
                ]
            })
            .collect();
        Self { rows }
    }

    pub fn header(&self) -> &'static [&'static str; 4] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[[String; 4]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

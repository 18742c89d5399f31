//! Console reporter — human-readable table for terminal review.

use infalens_core::errors::ReportError;

use super::{ReportOutput, Reporter};
use crate::table::LogicTable;

/// Longest logic text shown before truncation. Full text is for the
/// machine formats; the console is for skimming.
const MAX_LOGIC_WIDTH: usize = 80;

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub max_logic_width: usize,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self {
            max_logic_width: MAX_LOGIC_WIDTH,
        }
    }
}

impl ConsoleReporter {
    fn truncate(&self, logic: &str) -> String {
        // Newlines inside SQL would break row alignment.
        let flat: String = logic
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if flat.chars().count() <= self.max_logic_width {
            return flat;
        }
        let truncated: String = flat.chars().take(self.max_logic_width - 1).collect();
        format!("{truncated}…")
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, table: &LogicTable) -> Result<ReportOutput, ReportError> {
        let display_rows: Vec<[String; 4]> = table
            .rows()
            .iter()
            .map(|r| [r[0].clone(), r[1].clone(), r[2].clone(), self.truncate(&r[3])])
            .collect();

        // Column widths sized to content, headers included.
        let mut widths: Vec<usize> = table.header().iter().map(|h| h.chars().count()).collect();
        for row in &display_rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut output = String::new();
        output.push_str("Transformation Logic\n");

        for (i, header) in table.header().iter().enumerate() {
            output.push_str(&format!("{:<width$}  ", header, width = widths[i]));
        }
        output.push('\n');
        for width in &widths {
            output.push_str(&"─".repeat(*width));
            output.push_str("  ");
        }
        output.push('\n');

        for row in &display_rows {
            for (i, cell) in row.iter().enumerate() {
                output.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
            output.push('\n');
        }

        output.push_str(&format!("─── {} records ───\n", table.len()));

        Ok(ReportOutput::Text(output))
    }
}

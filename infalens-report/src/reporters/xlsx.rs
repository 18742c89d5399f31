//! XLSX reporter — the downloadable spreadsheet.

use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use infalens_core::errors::ReportError;

use super::{ReportOutput, Reporter};
use crate::table::LogicTable;

/// Sheet name in the generated workbook.
pub const SHEET_NAME: &str = "Transformation Logic";

/// Default filename for any download surface.
pub const DEFAULT_XLSX_FILENAME: &str = "infa_transformation_logic.xlsx";

/// MIME type for the generated bytes.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// XLSX reporter producing an in-memory workbook byte stream.
pub struct XlsxReporter;

impl Reporter for XlsxReporter {
    fn name(&self) -> &'static str {
        "xlsx"
    }

    fn generate(&self, table: &LogicTable) -> Result<ReportOutput, ReportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).map_err(spreadsheet_error)?;

        for (col, header) in table.header().iter().enumerate() {
            sheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(spreadsheet_error)?;
        }

        for (row, cells) in table.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                sheet
                    .write_string((row + 1) as u32, col as u16, cell.as_str())
                    .map_err(spreadsheet_error)?;
            }
        }

        let bytes = workbook.save_to_buffer().map_err(spreadsheet_error)?;
        debug!(rows = table.len(), bytes = bytes.len(), "workbook serialized");
        Ok(ReportOutput::Binary(bytes))
    }
}

fn spreadsheet_error(e: rust_xlsxwriter::XlsxError) -> ReportError {
    ReportError::Spreadsheet {
        message: e.to_string(),
    }
}

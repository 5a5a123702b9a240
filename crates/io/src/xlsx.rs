// Excel export of comparison results.
//
// One worksheet: header row, then one row per golden test. The
// "Report TestResult" cell carries a solid fill from the palette.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook as XlsxWorkbook, Worksheet};
use verdict_recon::model::{ComparisonRow, Reconciliation};
use verdict_recon::style::{Palette, Rgb};

use crate::sink::{write_atomic, ReportSink, HEADERS};

pub const SHEET_NAME: &str = "Comparison";

/// Column widths in Excel character units, in header order.
const COLUMN_WIDTHS: [f64; 5] = [6.0, 24.0, 20.0, 20.0, 60.0];

const REPORT_RESULT_COL: u16 = 3;

#[derive(Debug, Clone, Default)]
pub struct XlsxSink {
    palette: Palette,
}

impl XlsxSink {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn fill_format(&self, row: &ComparisonRow) -> Format {
        let format = Format::new().set_border(FormatBorder::Thin);
        match self.palette.fill_for(row.category) {
            Some(Rgb(rgb)) => format.set_background_color(Color::RGB(rgb)),
            None => format,
        }
    }

    fn write_rows(&self, worksheet: &mut Worksheet, result: &Reconciliation) -> Result<(), String> {
        let plain = Format::new().set_border(FormatBorder::Thin);

        for (i, row) in result.rows.iter().enumerate() {
            let r = (i + 1) as u32;
            let cell_err = |col: u16, e: rust_xlsxwriter::XlsxError| {
                format!("Failed to write cell ({}, {}): {}", r, col, e)
            };

            worksheet
                .write_number_with_format(r, 0, row.sequence_number as f64, &plain)
                .map_err(|e| cell_err(0, e))?;
            worksheet
                .write_string_with_format(r, 1, row.test_id_text(), &plain)
                .map_err(|e| cell_err(1, e))?;
            worksheet
                .write_string_with_format(r, 2, row.golden_text(), &plain)
                .map_err(|e| cell_err(2, e))?;
            worksheet
                .write_string_with_format(r, REPORT_RESULT_COL, row.report_result.as_str(), &self.fill_format(row))
                .map_err(|e| cell_err(REPORT_RESULT_COL, e))?;
            worksheet
                .write_string_with_format(r, 4, &row.remark, &plain)
                .map_err(|e| cell_err(4, e))?;
        }

        Ok(())
    }
}

impl ReportSink for XlsxSink {
    fn write(&self, result: &Reconciliation, path: &Path) -> Result<(), String> {
        let mut workbook = XlsxWorkbook::new();
        let worksheet = workbook
            .add_worksheet()
            .set_name(SHEET_NAME)
            .map_err(|e| format!("Failed to create sheet '{}': {}", SHEET_NAME, e))?;

        let header = Format::new().set_bold().set_border(FormatBorder::Thin);
        for (col, title) in HEADERS.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *title, &header)
                .map_err(|e| format!("Failed to write header '{}': {}", title, e))?;
        }
        for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
            worksheet
                .set_column_width(col as u16, *width)
                .map_err(|e| format!("Failed to set column width: {}", e))?;
        }
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(|e| format!("Failed to freeze header row: {}", e))?;

        self.write_rows(worksheet, result)?;

        if !result.rows.is_empty() {
            worksheet
                .autofilter(0, 0, result.rows.len() as u32, (HEADERS.len() - 1) as u16)
                .map_err(|e| format!("Failed to set autofilter: {}", e))?;
        }

        let bytes = workbook
            .save_to_buffer()
            .map_err(|e| format!("Failed to save XLSX file: {}", e))?;
        write_atomic(path, &bytes).map_err(|e| format!("Failed to save XLSX file: {}", e))?;

        log::debug!("wrote {} rows to {}", result.rows.len(), path.display());
        Ok(())
    }
}

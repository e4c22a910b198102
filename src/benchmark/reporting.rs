use super::types::ReportRow;
use std::fmt::Write as _;
use std::io;

/// Header line of the semicolon-delimited report.
pub const REPORT_HEADER: &str = "type;n;algo;threshold;time_ms";

/// `<distribution>;<n>;<algo>;<threshold-or-0>;<avg-ms>`
pub fn format_row(row: &ReportRow) -> String {
    format!(
        "{};{};{};{};{}",
        row.distribution.label(),
        row.n,
        row.algorithm.name(),
        row.algorithm.threshold(),
        row.avg_ms
    )
}

/// Write the header and every row, in the order given.
pub fn write_report<W: io::Write>(rows: &[ReportRow], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

/// The whole report as one string.
pub fn report_to_text(rows: &[ReportRow]) -> String {
    let mut text = String::new();
    writeln!(text, "{}", REPORT_HEADER).unwrap();
    for row in rows {
        writeln!(text, "{}", format_row(row)).unwrap();
    }
    text
}

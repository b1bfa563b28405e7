use crate::report::constants::{INDEX_HEADER, NO_DATA_MESSAGE};
use crate::report::types::{AverageReportRow, ReportKind, UserAgentReportRow};
use clap::ValueEnum;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A rendered cell. Numbers are right-aligned, text is left-aligned.
#[derive(Debug, Clone, PartialEq)]
pub enum TableCell {
    Text(String),
    Number(String),
}

impl TableCell {
    fn as_str(&self) -> &str {
        match self {
            TableCell::Text(s) | TableCell::Number(s) => s,
        }
    }

    fn right_aligned(&self) -> bool {
        matches!(self, TableCell::Number(_))
    }
}

pub trait TableRow {
    const KIND: ReportKind;

    /// Cells in the order of `KIND.headers()`.
    fn cells(&self) -> Vec<TableCell>;
}

impl TableRow for AverageReportRow {
    const KIND: ReportKind = ReportKind::Average;

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::Text(self.endpoint.clone()),
            TableCell::Number(self.request_count.to_string()),
            TableCell::Number(self.average_response_time.to_string()),
        ]
    }
}

impl TableRow for UserAgentReportRow {
    const KIND: ReportKind = ReportKind::UserAgents;

    fn cells(&self) -> Vec<TableCell> {
        vec![
            TableCell::Text(self.user_agent.clone()),
            TableCell::Number(self.count.to_string()),
        ]
    }
}

/// Renders rows as an aligned plain-text table with a 1-based index column.
///
/// An empty slice renders [`NO_DATA_MESSAGE`] instead of a header-only table.
pub fn render_table<R: TableRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let headers: Vec<&str> = std::iter::once(INDEX_HEADER)
        .chain(R::KIND.headers().iter().copied())
        .collect();

    let body: Vec<Vec<TableCell>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![TableCell::Number((i + 1).to_string())];
            cells.extend(row.cells());
            cells
        })
        .collect();

    let right: Vec<bool> = body[0].iter().map(TableCell::right_aligned).collect();

    // display columns, so wide glyphs in user agents keep the table aligned
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for cells in &body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.as_str().width());
        }
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_line(headers.iter().copied(), &widths, &right));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for cells in &body {
        lines.push(format_line(
            cells.iter().map(TableCell::as_str),
            &widths,
            &right,
        ));
    }

    lines.join("\n")
}

fn format_line<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right: &[bool],
) -> String {
    let line = cells
        .zip(widths)
        .zip(right)
        .map(|((cell, &width), &align_right)| {
            let pad = " ".repeat(width.saturating_sub(cell.width()));
            if align_right {
                format!("{pad}{cell}")
            } else {
                format!("{cell}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    line.trim_end().to_string()
}

/// Pretty JSON array of rows. Empty input renders `[]`.
pub fn render_json<R: Serialize>(rows: &[R]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

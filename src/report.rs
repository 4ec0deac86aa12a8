//! Plain-text reporting for schedules.
//!
//! Read-only formatting of [`Timetable`]s: an entry-per-row table in
//! simulator commit order and a per-machine load summary. Machines are
//! labeled `M1..Mn` for display; indices stay 0-based in the data.
//!
//! The library does no printing of its own; callers decide where the
//! rendered strings go.

use crate::models::Timetable;

/// Formats a timetable as an aligned text table, one row per operation in
/// commit order: machine, job/operation, start, end, duration.
pub fn format_timetable(timetable: &Timetable) -> String {
    let rows: Vec<Vec<String>> = timetable
        .entries
        .iter()
        .map(|e| {
            vec![
                format!("M{}", e.machine + 1),
                format!("{}/{}", e.job_id, e.operation_id),
                format!("{:.2}", e.start),
                format!("{:.2}", e.end),
                format!("{:.2}", e.duration()),
            ]
        })
        .collect();
    render_table(
        &["Machine", "Job/Operation", "Start", "End", "Duration"],
        &rows,
    )
}

/// Formats a per-machine summary: operation count, busy time, utilization.
pub fn format_machine_summary(timetable: &Timetable, machine_count: usize) -> String {
    let rows: Vec<Vec<String>> = (0..machine_count)
        .map(|m| {
            vec![
                format!("M{}", m + 1),
                timetable.entries_for_machine(m).len().to_string(),
                format!("{:.2}", timetable.machine_busy_time(m)),
                format!("{:.1}%", timetable.machine_utilization(m) * 100.0),
            ]
        })
        .collect();
    render_table(&["Machine", "Operations", "Busy", "Utilization"], &rows)
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.len());
        }
    }

    let last = headers.len() - 1;
    let mut out = String::new();

    for (col, header) in headers.iter().enumerate() {
        if col > 0 {
            out.push_str("  ");
        }
        if col == last {
            out.push_str(header);
        } else {
            out.push_str(&format!("{:<width$}", header, width = widths[col]));
        }
    }
    out.push('\n');

    for (col, width) in widths.iter().enumerate() {
        if col > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');

    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                out.push_str("  ");
            }
            if col == last {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{:<width$}", cell, width = widths[col]));
            }
        }
        out.push('\n');
    }

    out
}

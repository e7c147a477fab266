//! Console rendering of the snapshot history.
//!
//! Shows the first `show` rows plus the final two, with a gap marker in
//! between when rows are elided.  Column widths are sized to the rendered
//! data, not hard-coded.

use court_core::Discipline;
use court_sim::Snapshot;

const HEADERS: [&str; 13] = [
    "it", "event", "clock_min", "court", "on_court", "shared_q", "basket_q", "game_end",
    "cond_end", "next_H", "next_F", "next_B", "served H/F/B",
];

fn fmt_min(v: f64) -> String {
    format!("{v:.2}")
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(fmt_min).unwrap_or_default()
}

fn cells(index: usize, snap: &Snapshot) -> Vec<String> {
    vec![
        index.to_string(),
        snap.event.label(),
        fmt_min(snap.clock),
        snap.court.label(),
        snap.tags(&snap.on_court),
        snap.tags(&snap.shared_queue),
        snap.tags(&snap.basketball_queue),
        fmt_opt(snap.game_end_at),
        fmt_opt(snap.conditioning_end_at),
        fmt_min(snap.arrivals[Discipline::Handball].next_at),
        fmt_min(snap.arrivals[Discipline::Football].next_at),
        fmt_min(snap.arrivals[Discipline::Basketball].next_at),
        format!(
            "{}/{}/{}",
            snap.stats[Discipline::Handball].served,
            snap.stats[Discipline::Football].served,
            snap.stats[Discipline::Basketball].served
        ),
    ]
}

/// Render the history as a plain-text table.
///
/// When the history is longer than `show + 2` rows, the middle is elided
/// and replaced by a single `…` row; the last two rows are always shown.
pub fn render_history(history: &[Snapshot], show: usize) -> String {
    let mut body: Vec<Option<Vec<String>>> = Vec::new(); // None = gap marker

    if history.len() <= show + 2 {
        body.extend(history.iter().enumerate().map(|(i, s)| Some(cells(i, s))));
    } else {
        body.extend(
            history[..show]
                .iter()
                .enumerate()
                .map(|(i, s)| Some(cells(i, s))),
        );
        body.push(None);
        let tail = history.len() - 2;
        body.extend(
            history[tail..]
                .iter()
                .enumerate()
                .map(|(i, s)| Some(cells(tail + i, s))),
        );
    }

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
    for row in body.iter().flatten() {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let render_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!("{cell:>w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    out.push_str(&render_line(&header));
    out.push('\n');
    out.push_str(&"─".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');

    for row in &body {
        match row {
            Some(cells) => out.push_str(&render_line(cells)),
            None => out.push('…'),
        }
        out.push('\n');
    }
    out
}

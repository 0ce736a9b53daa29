use color_eyre::Result;
use std::fmt::Write;

use crate::domain::ViewMode;
use crate::figure::{build_figure, Figure};
use crate::view::Dashboard;

/// Prints the figure for `mode` without the terminal UI.
///
/// An empty `select` falls back to the view's default selection.
pub fn run_headless(dashboard: &Dashboard, mode: ViewMode, select: &[String], json: bool) -> Result<()> {
    let view = dashboard.view(mode);
    let requested = if select.is_empty() {
        view.default_selection()
    } else {
        select.to_vec()
    };

    let figure = build_figure(view, &requested)?;
    if figure.traces.len() < requested.len() {
        tracing::warn!(
            requested = requested.len(),
            plotted = figure.traces.len(),
            "some requested entities are not in this view"
        );
    }

    if json {
        println!("{}", figure.to_plotly_json()?);
    } else {
        print!("{}", render_headless_text(mode, &figure)?);
    }

    Ok(())
}

pub fn render_headless_text(mode: ViewMode, figure: &Figure) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let title = mode.label();
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;

    if figure.is_empty() {
        writeln!(out, "(nothing selected)")?;
        return Ok(out);
    }

    let (low, high) = figure.options.radial_range;
    writeln!(out, "Radial range: {low}-{high}")?;

    for styled in &figure.traces {
        let trace = &styled.trace;
        writeln!(out, "\n{} ({})", trace.name, styled.color)?;
        for (label, value) in trace.labels.iter().zip(&trace.values).take(trace.axis_count()) {
            writeln!(out, "- {label}: {value}")?;
        }
    }

    Ok(out)
}

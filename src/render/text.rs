// ABOUTME: Plain-text rendering of the page state for the command line client
// ABOUTME: Prints the error or the per-lift attempt table with the estimated total

use crate::page::PageState;
use attempt_core::models::Lift;
use std::fmt::Write;

/// Render the page state as a terminal report
#[must_use]
pub fn render_text(state: &PageState) -> String {
    let mut out = String::new();

    if let Some(error) = state.error() {
        let _ = writeln!(out, "Error: {error}");
        return out;
    }

    let Some(recommendation) = state.recommendations() else {
        let _ = writeln!(out, "No prediction available.");
        return out;
    };

    let _ = writeln!(out, "Recommended Attempts (kg)");
    for lift in Lift::ALL {
        let _ = writeln!(out, "\n{lift}");
        for (label, kg) in recommendation.attempts(lift).labelled() {
            let _ = writeln!(out, "  {label}: {kg} kg");
        }
    }
    let _ = writeln!(
        out,
        "\nEstimated Total: {} kg",
        recommendation.formatted_total()
    );

    if let Some(visualizations) = state.visible_visualizations() {
        let _ = writeln!(out, "\nVisualizations");
        for (kind, payload) in visualizations.plots() {
            let _ = writeln!(
                out,
                "  {}: {} bytes of base64 PNG",
                kind.alt_label(),
                payload.len()
            );
        }
    }

    out
}

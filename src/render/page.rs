// ABOUTME: Server-rendered HTML for the prediction page
// ABOUTME: Renders the form, busy state, error, recommendation cards, reveal button, and charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::page::PageState;
use crate::utils::html::{escape_html_attribute, escape_text};
use attempt_core::constants::{endpoints, labels};
use attempt_core::models::{AttemptSet, Division, Lift, Recommendation, Sex, VisualSet};

/// Seconds between re-polls while a submission is in flight
const REFRESH_SECONDS: u8 = 1;

/// Render the full page for one session
#[must_use]
pub fn render_page(state: &PageState) -> String {
    let refresh = if state.is_loading() {
        format!(r#"<meta http-equiv="refresh" content="{REFRESH_SECONDS}">"#)
    } else {
        String::new()
    };

    let form = render_form(state);
    let recommendations = state
        .recommendations()
        .map(render_recommendations)
        .unwrap_or_default();
    let reveal = if state.can_reveal() {
        render_reveal_button()
    } else {
        String::new()
    };
    let visualizations = state
        .visible_visualizations()
        .map(render_visualizations)
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    {refresh}
    <title>ML Powerlifting Attempt Predictor</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background-color: #134e4a; color: #f3f4f6; }}
        h1, h2, h3 {{ text-align: center; color: #99f6e4; }}
        .prediction-form {{ max-width: 400px; margin: 0 auto; padding: 20px; background-color: #115e59; border-radius: 8px; }}
        .form-group {{ margin-bottom: 15px; }}
        label {{ display: block; margin-bottom: 5px; font-weight: bold; }}
        select {{ width: 100%; padding: 8px; border-radius: 4px; }}
        button {{ background-color: #14b8a6; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }}
        button:disabled {{ opacity: 0.6; cursor: wait; }}
        .error {{ color: #fca5a5; text-align: center; }}
        .cards {{ display: flex; gap: 20px; justify-content: center; flex-wrap: wrap; }}
        .recommendation-card {{ background-color: #115e59; padding: 15px; border-radius: 8px; min-width: 200px; }}
        .total, .reveal {{ text-align: center; margin-top: 20px; }}
        .visualizations img {{ width: 100%; max-width: 900px; display: block; margin: 20px auto; border-radius: 8px; }}
    </style>
</head>
<body>
    <h1>ML Powerlifting Attempt Predictor</h1>
{form}{recommendations}{reveal}{visualizations}</body>
</html>
"#
    )
}

fn render_form(state: &PageState) -> String {
    let form = state.form();

    let division_options: String = Division::ALL
        .iter()
        .map(|division| {
            option(
                division.as_str(),
                division.as_str(),
                form.division() == Some(*division),
            )
        })
        .collect();

    let sex_options: String = Sex::ALL
        .iter()
        .map(|sex| {
            option(
                &sex.code().to_string(),
                sex.label(),
                form.sex() == Some(*sex),
            )
        })
        .collect();

    let bodyweight_options: String = form
        .bodyweight_options()
        .iter()
        .map(|class| {
            option(
                &class.label(),
                &class.to_string(),
                form.bodyweight() == Some(*class),
            )
        })
        .collect();

    let bodyweight_disabled = if form.bodyweight_enabled() {
        ""
    } else {
        " disabled"
    };
    let predict_button = if state.is_loading() {
        r#"<button type="submit" name="action" value="predict" disabled aria-busy="true"><span class="spinner">Predicting...</span></button>"#
    } else {
        r#"<button type="submit" name="action" value="predict">Predict</button>"#
    };
    let error = state
        .error()
        .map(|message| format!("        <p class=\"error\">{}</p>\n", escape_text(message)))
        .unwrap_or_default();
    let division_placeholder = placeholder("Select a division", form.division().is_none());
    let sex_placeholder = placeholder("Select sex", form.sex().is_none());
    let bodyweight_placeholder = placeholder("Select a bodyweight", form.bodyweight().is_none());
    let action = endpoints::PAGE;

    format!(
        r#"    <form class="prediction-form" method="post" action="{action}">
        <div class="form-group">
            <label for="division">Division:</label>
            <select id="division" name="division" required>
                {division_placeholder}{division_options}
            </select>
        </div>
        <div class="form-group">
            <label for="sex">Sex:</label>
            <select id="sex" name="sex" required onchange="this.form.submit()">
                {sex_placeholder}{sex_options}
            </select>
        </div>
        <div class="form-group">
            <label for="bodyweight">Bodyweight (kg):</label>
            <select id="bodyweight" name="bodyweight" required{bodyweight_disabled}>
                {bodyweight_placeholder}{bodyweight_options}
            </select>
        </div>
        <button type="submit" name="action" value="update" formnovalidate>Update</button>
        {predict_button}
{error}    </form>
"#
    )
}

fn placeholder(text: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(r#"<option value="" disabled{selected}>{text}</option>"#)
}

fn option(value: &str, text: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(
        r#"<option value="{}"{selected}>{}</option>"#,
        escape_html_attribute(value),
        escape_text(text)
    )
}

fn render_recommendations(recommendation: &Recommendation) -> String {
    let cards: String = Lift::ALL
        .iter()
        .map(|lift| render_card(*lift, recommendation.attempts(*lift)))
        .collect();
    let total = recommendation.formatted_total();

    format!(
        r#"    <section class="recommendations">
        <h2>Recommended Attempts (kg)</h2>
        <div class="cards">
{cards}        </div>
        <p class="total"><strong>Estimated Total: {total} kg</strong></p>
    </section>
"#
    )
}

fn render_card(lift: Lift, attempts: &AttemptSet) -> String {
    let items: String = attempts
        .labelled()
        .iter()
        .map(|(label, kg)| format!("                <li><strong>{label}:</strong> {kg} kg</li>\n"))
        .collect();

    format!(
        r#"            <div class="recommendation-card">
                <h3>{lift}</h3>
                <ul>
{items}                </ul>
            </div>
"#
    )
}

fn render_reveal_button() -> String {
    format!(
        r#"    <form class="reveal" method="post" action="{}">
        <button type="submit">View Visual Data</button>
    </form>
"#,
        endpoints::REVEAL
    )
}

fn render_visualizations(visualizations: &VisualSet) -> String {
    let images: String = visualizations
        .plots()
        .iter()
        .map(|(kind, payload)| {
            format!(
                "        <img src=\"{}{}\" alt=\"{}\">\n",
                labels::PNG_DATA_URI_PREFIX,
                escape_html_attribute(payload),
                kind.alt_label()
            )
        })
        .collect();

    format!(
        r#"    <section class="visualizations">
        <h2>Visualizations</h2>
{images}    </section>
"#
    )
}

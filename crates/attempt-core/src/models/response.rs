// ABOUTME: Prediction response model: attempt recommendations and plot payloads
// ABOUTME: Derives the estimated total and pairs each plot with its fixed alt label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::labels;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three competition lifts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lift {
    /// Squat
    Squat,
    /// Bench press
    Bench,
    /// Deadlift
    Deadlift,
}

impl Lift {
    /// Lifts in competition order
    pub const ALL: [Self; 3] = [Self::Squat, Self::Bench, Self::Deadlift];

    /// Name used by the backend and on the cards
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::Bench => "Bench",
            Self::Deadlift => "Deadlift",
        }
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three ranked attempt targets for one lift, in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttemptSet {
    /// Opener
    #[serde(rename = "1st Attempt")]
    pub first: f64,
    /// Second attempt
    #[serde(rename = "2nd Attempt")]
    pub second: f64,
    /// Third attempt, counted toward the total
    #[serde(rename = "3rd Attempt")]
    pub third: f64,
}

impl AttemptSet {
    /// Attempts paired with their ordinal label
    #[must_use]
    pub fn labelled(&self) -> [(&'static str, f64); 3] {
        [
            ("1st Attempt", self.first),
            ("2nd Attempt", self.second),
            ("3rd Attempt", self.third),
        ]
    }
}

/// Per-lift attempt recommendations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Squat attempts
    #[serde(rename = "Squat")]
    pub squat: AttemptSet,
    /// Bench attempts
    #[serde(rename = "Bench")]
    pub bench: AttemptSet,
    /// Deadlift attempts
    #[serde(rename = "Deadlift")]
    pub deadlift: AttemptSet,
}

impl Recommendation {
    /// Attempts for one lift
    #[must_use]
    pub const fn attempts(&self, lift: Lift) -> &AttemptSet {
        match lift {
            Lift::Squat => &self.squat,
            Lift::Bench => &self.bench,
            Lift::Deadlift => &self.deadlift,
        }
    }

    /// Sum of the three third attempts
    #[must_use]
    pub fn total(&self) -> f64 {
        Lift::ALL
            .iter()
            .map(|lift| self.attempts(*lift).third)
            .sum()
    }

    /// Total with one decimal place, e.g. `570.0`
    #[must_use]
    pub fn formatted_total(&self) -> String {
        to_fixed_one(self.total())
    }
}

/// One decimal place with exact ties rounded away from zero: `570.25` shows
/// as `570.3`, where `{:.1}` alone gives `570.2`.
///
/// Only odd multiples of 0.25 are exact ties, and for those `value * 10.0` is
/// exact.
fn to_fixed_one(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

/// Kind of pre-rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Distribution of attempts
    Box,
    /// Attempt progression heatmap
    Heatmap,
    /// Lift contributions to the total
    Bar,
}

impl PlotKind {
    /// Fixed alt text for the image
    #[must_use]
    pub const fn alt_label(self) -> &'static str {
        match self {
            Self::Box => labels::BOX_PLOT,
            Self::Heatmap => labels::HEATMAP_PLOT,
            Self::Bar => labels::BAR_PLOT,
        }
    }
}

/// Base64 image payloads. Never decoded: they are embedded as-is.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualSet {
    /// Box plot payload
    pub box_plot: String,
    /// Heatmap payload
    pub heatmap_plot: String,
    /// Stacked bar payload
    pub bar_plot: String,
}

impl VisualSet {
    /// Payloads in display order with their kind
    #[must_use]
    pub fn plots(&self) -> [(PlotKind, &str); 3] {
        [
            (PlotKind::Box, self.box_plot.as_str()),
            (PlotKind::Heatmap, self.heatmap_plot.as_str()),
            (PlotKind::Bar, self.bar_plot.as_str()),
        ]
    }
}

// Payloads can be hundreds of kilobytes; keep them out of logs.
impl fmt::Debug for VisualSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualSet")
            .field("box_plot_len", &self.box_plot.len())
            .field("heatmap_plot_len", &self.heatmap_plot.len())
            .field("bar_plot_len", &self.bar_plot.len())
            .finish()
    }
}

/// Body returned by the prediction backend
///
/// A body carrying results parses as `Success` even when it also has an
/// `error` field; callers decide whether that field wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    /// Recommendations and charts
    Success {
        /// Attempt recommendations
        recommendations: Recommendation,
        /// Chart payloads
        visualizations: VisualSet,
    },
    /// The backend declined the request
    Failure {
        /// Message to show the user
        error: String,
    },
}

// ABOUTME: Data models exchanged between the page, the proxy, and the backend
// ABOUTME: Re-exports request and response types from their submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Division, sex, weight class, and the outgoing request body
pub mod request;
/// Recommendations, plots, and the backend response body
pub mod response;

pub use request::{Division, PredictionRequest, Sex, WeightClass};
pub use response::{AttemptSet, Lift, PlotKind, PredictionResponse, Recommendation, VisualSet};

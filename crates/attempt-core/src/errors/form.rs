// ABOUTME: Validation errors raised while collecting division, sex, and bodyweight
// ABOUTME: Local errors that block submission before any network call is made
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Sex;
use thiserror::Error;

/// Errors produced by the Input Collector.
///
/// Display strings are what the user sees next to the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// No division selected
    #[error("Please select a division.")]
    MissingDivision,
    /// No sex selected
    #[error("Please select valid values for Bodyweight and Sex.")]
    MissingSex,
    /// No bodyweight class selected
    #[error("Please select valid values for Bodyweight and Sex.")]
    MissingBodyweight,
    /// Division outside the fixed list
    #[error("Unknown division: {0}")]
    UnknownDivision(String),
    /// Sex value other than 0 or 1
    #[error("Sex must be F (0) or M (1).")]
    InvalidSex(String),
    /// Bodyweight chosen while no sex is selected
    #[error("Select sex before choosing a bodyweight.")]
    BodyweightUnavailable,
    /// Label not present in the selected sex's class list
    #[error("{label} kg is not a {sex} weight class")]
    UnknownWeightClass {
        /// Label as submitted
        label: String,
        /// Sex whose list was consulted
        sex: Sex,
    },
}

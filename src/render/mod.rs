// ABOUTME: Result renderer producing the HTML page and the terminal report
// ABOUTME: Shows the error or the recommendation cards, and charts only once revealed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Result Renderer
//!
//! Both renderers read a [`PageState`](crate::page::PageState) snapshot and
//! never mutate it. An error suppresses recommendations and charts; charts
//! appear only after the reveal action.

/// Server-rendered HTML page
pub mod page;
/// Plain-text report for the command line
pub mod text;

pub use page::render_page;
pub use text::render_text;

//! # evalboard-domain
//!
//! Pure widget model for the evalboard project administration dashboard.
//!
//! ## Responsibilities
//! - Define **stat variants** (the closed set of stat card flavours) and the
//!   **icons** they resolve to
//! - Define **stat entries** and the canonical welcome-section entries built
//!   from scalar counts
//! - Define **form field** descriptors: select options, validation messages,
//!   input kinds
//! - Define **button** styles and **time filters** for the reports header
//! - Own every CSS class name the widgets assemble, so styling contracts are
//!   testable without a DOM
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import a UI framework or any IO crate.
//! Rendering lives in the dashboard adapter.

pub mod error;

pub mod button;
pub mod field;
pub mod icon;
pub mod stat;
pub mod time_filter;
pub mod variant;
pub mod welcome;

//! # evalboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled Leptos dashboard (wasm bundle, `index.html`, assets)
//!   from a dist directory
//! - Fall back to `index.html` for unknown paths so client-side routes
//!   survive a reload
//! - Expose `/health` for liveness probes
//!
//! ## Dependency rule
//! Knows nothing about the widget model; it only moves bytes.

pub mod router;

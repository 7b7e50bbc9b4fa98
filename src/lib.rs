//! AI-assisted website builder service.
//!
//! - [`domain`] holds messages, component types, websites and generation results.
//! - [`application`] holds the ports, the provider orchestrator, the resilient
//!   generator with its demo fallback, and the website session.
//! - [`infrastructure`] implements the ports (HTTP providers, in-memory store,
//!   tracing).
//! - [`presentation`] exposes the axum HTTP surface and configuration.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

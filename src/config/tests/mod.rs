//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation switch selection tests
//! - `field_resolution`: Locator, token, checkbox, and path resolution tests

mod field_resolution;
mod helpers;
mod precedence;

//! Theme system: breakpoints and spacing threaded through resolution.
//!
//! This module provides:
//!
//! - [`Theme`]: Breakpoint tiers plus a spacing scale, with a fluent builder API
//! - [`Breakpoint`] / [`Breakpoints`]: The fixed tier enumeration and its widths
//! - [`Spacing`]: The spacing scale (a unit multiplier or a custom function)
//! - [`ThemeConfig`]: YAML configuration for themes
//! - [`default_theme`]: The shared built-in theme

mod breakpoint;
mod config;
mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use breakpoint::{Breakpoint, Breakpoints, RuleFn};
pub use config::ThemeConfig;
pub use error::ThemeError;
pub use theme::{default_theme, Spacing, SpacingFn, Theme};

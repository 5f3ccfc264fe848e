//! WebFolio UI Components
//!
//! Dioxus building blocks for the portfolio page. Components are styled only
//! through class names; the stylesheet lives with the application.
//!
//! ## Design Notes
//!
//! - **Primary (#4f46e5)**: calls to action, active filter, active dot
//! - **Ink (#1f2937)**: headings and body copy
//! - **Paper (#ffffff)**: header and card backgrounds
//!
//! Section titles carry a short accent underline; buttons are pill-shaped.

pub mod components;

pub use components::*;

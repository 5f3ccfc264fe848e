//! Reusable UI components for the portfolio page

mod button;
mod filter_pills;
mod input;
mod section_title;

pub use button::*;
pub use filter_pills::*;
pub use input::*;
pub use section_title::*;

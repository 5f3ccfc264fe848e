//! Page components for WebFolio.

mod home;

pub use home::{Home, ProjectPage};

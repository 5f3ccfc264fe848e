//! Color constants for inline styles.
//!
//! Keep in step with the custom properties in the stylesheet.

// === SURFACES ===
pub const HEADER_BACKGROUND: &str = "#ffffff";
pub const HEADER_SHADOW: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_stylesheet_paper() {
        assert!(crate::theme::GLOBAL_STYLES.contains(&format!("--paper: {};", HEADER_BACKGROUND)));
    }
}

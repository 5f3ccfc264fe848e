//! Site navigation: the section links and the mobile menu toggle.

/// A header link to a page section
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, section_id: &'static str) -> Self {
        Self { label, section_id }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

/// Links shown in the header, in page order
pub static NAV_LINKS: [NavLink; 6] = [
    NavLink::new("Home", "home"),
    NavLink::new("About", "about"),
    NavLink::new("Skills", "skills"),
    NavLink::new("Portfolio", "portfolio"),
    NavLink::new("Testimonials", "testimonials"),
    NavLink::new("Contact", "contact"),
];

/// Section ids that have a header link
pub fn linked_sections() -> impl Iterator<Item = &'static str> {
    NAV_LINKS.iter().map(|link| link.section_id)
}

/// Mobile menu state. The hamburger icon and the link panel always share it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link was chosen
    pub fn close(&mut self) {
        self.open = false;
    }
}

use dioxus::prelude::*;

use crate::context::{get_settings, SiteContext};
use crate::pages::{Home, ProjectPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page
/// - `/projects/:id` - The portfolio page with a project's detail modal open
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/projects/:id")]
    ProjectPage { id: String },
}

/// Root application component.
///
/// Provides global styles, site context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| SiteContext::from_settings(get_settings()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

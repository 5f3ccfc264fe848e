//! Filter Pills Component
//!
//! Horizontal row of portfolio filter buttons. The active state of each
//! pill is owned by the filter controller, not by this component.

use dioxus::prelude::*;
use webfolio_core::content::slugify;
use webfolio_core::FilterTag;

/// One filter button
#[derive(Clone, PartialEq, Debug)]
pub struct FilterOption {
    /// Tag passed to the filter when clicked (`data-filter`)
    pub tag: String,
    /// Visible label
    pub label: String,
    /// Whether this is the active filter
    pub active: bool,
}

/// Tags and labels for "All" followed by each category
pub fn filter_choices(categories: &[String]) -> Vec<(FilterTag, String)> {
    let mut choices = vec![(FilterTag::All, "All".to_string())];
    choices.extend(
        categories
            .iter()
            .map(|c| (FilterTag::Category(slugify(c)), c.clone())),
    );
    choices
}

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Buttons in display order
    pub options: Vec<FilterOption>,
    /// Handler called with the clicked tag
    pub on_select: EventHandler<String>,
}

/// Displays a row of filter pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         options: options(),
///         on_select: move |tag: String| apply_filter(&tag),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "portfolio-filter",
            role: "radiogroup",
            "aria-label": "Portfolio filter",
            for option in props.options.iter() {
                {
                    let tag = option.tag.clone();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: if option.active { "filter-btn active" } else { "filter-btn" },
                            role: "radio",
                            "aria-checked": if option.active { "true" } else { "false" },
                            "data-filter": "{option.tag}",
                            onclick: move |_| on_select.call(tag.clone()),
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_start_with_all() {
        let choices = filter_choices(&["Web Development".to_string(), "Design".to_string()]);
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0], (FilterTag::All, "All".to_string()));
        assert_eq!(
            choices[1],
            (
                FilterTag::Category("web-development".to_string()),
                "Web Development".to_string()
            )
        );
        assert_eq!(choices[2].0.as_str(), "design");
    }

    #[test]
    fn no_categories_still_offers_all() {
        assert_eq!(filter_choices(&[]).len(), 1);
    }
}

//! Static page content: projects, testimonials and skills.
//!
//! Records are immutable for the lifetime of the process. The gallery order
//! is the registry order, and filter categories are derived from it.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// A portfolio project shown in the gallery and the detail modal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique key (`data-project` on the gallery link)
    pub id: String,
    pub title: String,
    /// Display category, also the filter grouping
    pub category: String,
    pub client: String,
    /// Display-formatted date, never parsed
    pub date: String,
    pub image: String,
    /// Short description, inline markdown allowed
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
}

impl ProjectRecord {
    /// Filter tag for this project's category
    pub fn filter_tag(&self) -> String {
        slugify(&self.category)
    }
}

/// A client quote in the testimonial carousel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

/// A skill bar with its declared fill percentage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percent: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, percent: u8) -> Self {
        Self {
            name: name.into(),
            percent: percent.min(100),
        }
    }
}

/// Record shown when a project id is not registered
pub static FALLBACK_PROJECT: LazyLock<ProjectRecord> = LazyLock::new(|| ProjectRecord {
    id: String::new(),
    title: "Project Not Found".to_string(),
    category: "Unknown".to_string(),
    client: "Unknown".to_string(),
    date: "Unknown".to_string(),
    image: "assets/project-placeholder-1.jpg".to_string(),
    description: "Project details not available.".to_string(),
    technologies: Vec::new(),
    link: "#".to_string(),
});

/// All static content on the page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegistry {
    pub projects: Vec<ProjectRecord>,
    pub testimonials: Vec<Testimonial>,
    pub skills: Vec<Skill>,
}

impl ContentRegistry {
    /// The content shipped with the page
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects(),
            testimonials: builtin_testimonials(),
            skills: builtin_skills(),
        }
    }

    /// Look up a project by id
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Look up a project by id, falling back to the "not found" record
    pub fn get_or_fallback(&self, id: &str) -> &ProjectRecord {
        self.get(id).unwrap_or(&FALLBACK_PROJECT)
    }

    /// Distinct project categories in first-appearance order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category) {
                seen.push(project.category.clone());
            }
        }
        seen
    }
}

/// Lowercase, dash-separated tag for a display label.
///
/// `"Web Development"` becomes `"web-development"`, `"UI/UX"` becomes `"ui-ux"`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    category: &str,
    client: &str,
    date: &str,
    image: &str,
    description: &str,
    technologies: &[&str],
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        client: client.to_string(),
        date: date.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        link: "#".to_string(),
    }
}

fn builtin_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            "project1",
            "E-commerce Website",
            "Web Development",
            "Fashion Retailer",
            "January 2025",
            "assets/E-commerce Website.png",
            "A fully responsive e-commerce website built with modern web technologies. Features include product filtering, user accounts, shopping cart functionality, and secure payment processing.",
            &["HTML5", "CSS3", "JavaScript", "React", "Node.js", "MongoDB"],
        ),
        project(
            "project2",
            "Fitness App",
            "App Development",
            "Wellness Studio",
            "March 2025",
            "assets/Fitness App.png",
            "A mobile-first fitness application that allows users to track workouts, set goals, and monitor progress. Includes features like workout plans, nutrition tracking, and social sharing.",
            &["React Native", "Firebase", "CSS", "Redux"],
        ),
        project(
            "project3",
            "Brand Identity",
            "Design",
            "Startup Company",
            "February 2025",
            "assets/Brand Identity.png",
            "Complete brand identity design including logo, color palette, typography, and brand guidelines. Created a cohesive visual language that reflects the company's values and mission.",
            &["Adobe Illustrator", "Adobe Photoshop", "Figma"],
        ),
        project(
            "project4",
            "Portfolio Website",
            "Web Development",
            "Photographer",
            "April 2025",
            "assets/Portfolio Website.png",
            "A clean and modern portfolio website showcasing photography work with gallery features, client testimonials, and contact form. Optimized for fast loading and excellent user experience.",
            &["HTML5", "CSS3", "JavaScript", "PHP"],
        ),
        project(
            "project5",
            "Weather App",
            "App Development",
            "Personal Project",
            "May 2025",
            "assets/Weather App.png",
            "A weather application providing real-time forecasts, hourly updates, and weather alerts. Features include location-based weather data, interactive maps, and customizable notifications.",
            &["JavaScript", "API Integration", "CSS3", "HTML5"],
        ),
        project(
            "project6",
            "UI/UX Design",
            "Design",
            "Tech Company",
            "June 2025",
            "assets/UIUX Design.png",
            "User interface and experience design for a SaaS platform. Created wireframes, prototypes, and final designs focusing on usability, accessibility, and visual appeal.",
            &["Figma", "Adobe XD", "Sketch", "InVision"],
        ),
    ]
}

fn builtin_testimonials() -> Vec<Testimonial> {
    let entry = |quote: &str, author: &str, role: &str| Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        role: role.to_string(),
    };
    vec![
        entry(
            "Working together was a pleasure. The new storefront shipped on time and our conversion rate climbed within the first month.",
            "Sarah Johnson",
            "CEO, Fashion Retailer",
        ),
        entry(
            "Thoughtful, responsive and detail-oriented. The fitness app feels effortless to use and our members love it.",
            "Michael Chen",
            "Founder, Wellness Studio",
        ),
        entry(
            "Our brand finally looks like who we are. Clear process, great communication and beautiful results.",
            "Emily Rodriguez",
            "Marketing Director, Startup Company",
        ),
    ]
}

fn builtin_skills() -> Vec<Skill> {
    vec![
        Skill::new("HTML5 & CSS3", 95),
        Skill::new("JavaScript", 90),
        Skill::new("React", 85),
        Skill::new("Node.js", 80),
        Skill::new("UI/UX Design", 75),
        Skill::new("Figma", 85),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_unique_projects() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.projects.len(), 6);
        for (i, project) in registry.projects.iter().enumerate() {
            assert_eq!(project.id, format!("project{}", i + 1));
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.get("project2").map(|p| p.title.as_str()), Some("Fitness App"));
        assert!(registry.get("project42").is_none());
        assert_eq!(registry.get_or_fallback("project42").title, "Project Not Found");
        assert!(registry.get_or_fallback("project42").technologies.is_empty());
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let registry = ContentRegistry::builtin();
        assert_eq!(
            registry.categories(),
            vec!["Web Development", "App Development", "Design"]
        );
    }

    #[test]
    fn slugify_labels() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(slugify("UI/UX Design"), "ui-ux-design");
        assert_eq!(slugify("  Design  "), "design");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn skill_percent_is_clamped() {
        assert_eq!(Skill::new("Overconfidence", 140).percent, 100);
    }
}

//! Project records and the category filter applied by the gallery.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use serde::{Deserialize, Serialize};

/// Image shown when a project has neither a video nor an image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Label of the catch-all filter entry.
pub const ALL_LABEL: &str = "All";

/// A portfolio project. Immutable configuration loaded with the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub long_description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Display media resolved for a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Media<'a> {
    Video(&'a str),
    Image(&'a str),
}

impl Project {
    /// Media to render. Video takes precedence over image; a project with
    /// neither falls back to [`PLACEHOLDER_IMAGE`].
    #[must_use]
    pub fn media(&self) -> Media<'_> {
        if let Some(video) = non_empty(self.video.as_deref()) {
            return Media::Video(video);
        }
        Media::Image(non_empty(self.image.as_deref()).unwrap_or(PLACEHOLDER_IMAGE))
    }

    /// Outbound links that are present, demo first. Blank URLs are skipped.
    #[must_use]
    pub fn links(&self) -> Vec<ProjectLink<'_>> {
        [(LinkKind::Demo, self.demo_url.as_deref()), (LinkKind::Source, self.github_url.as_deref())]
            .into_iter()
            .filter_map(|(kind, href)| non_empty(href).map(|href| ProjectLink { kind, href }))
            .collect()
    }

    /// `true` when the project has at least one outbound link.
    #[must_use]
    pub fn has_links(&self) -> bool {
        !self.links().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Demo,
    Source,
}

impl LinkKind {
    /// Label used in the detail overlay.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Demo => "Live Demo",
            Self::Source => "Source Code",
        }
    }

    /// Label used on gallery cards.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Demo => "Demo",
            Self::Source => "Code",
        }
    }
}

/// A project's external link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLink<'a> {
    pub kind: LinkKind,
    pub href: &'a str,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Gallery filter selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every project, unfiltered.
    #[default]
    All,
    /// Projects whose category equals the label exactly.
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter-bar label. `"All"` maps to [`CategoryFilter::All`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL { Self::All } else { Self::Category(label.to_owned()) }
    }

    /// Label shown on the filter button.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(name) => name,
        }
    }

    /// Exact, case-sensitive category match.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => project.category == *name,
        }
    }
}

/// Stable filter: the ordered subsequence of `projects` matching `filter`.
#[must_use]
pub fn filter_projects<'a>(projects: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

//! Content catalog: everything the page renders, loaded once and validated.
//!
//! DESIGN
//! ======
//! The catalog is authored as YAML and embedded at build time so the server
//! render and the hydrated client always agree on the same data. Authoring
//! mistakes surface when the catalog is loaded instead of as silent gaps at
//! render time: structural problems are hard errors, while a project whose
//! category matches no filter label is reported as a warning because it
//! stays reachable under "All".

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::project::{ALL_LABEL, CategoryFilter, Project};

const BUILTIN_YAML: &str = include_str!("../data/portfolio.yaml");

static BUILTIN: LazyLock<Result<Catalog, ContentError>> = LazyLock::new(|| Catalog::from_yaml(BUILTIN_YAML));

/// Return the embedded catalog, parsed and validated on first use.
///
/// # Errors
///
/// Returns the parse or validation error of the embedded YAML.
pub fn builtin() -> Result<&'static Catalog, ContentError> {
    BUILTIN.as_ref().map_err(Clone::clone)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Hard content authoring errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content parse failed: {0}")]
    Parse(String),
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
    #[error("project {project} has an empty {field}")]
    EmptyField { project: u32, field: &'static str },
    #[error("duplicate category '{0}'")]
    DuplicateCategory(String),
    #[error("category list must not contain the reserved label 'All'")]
    ReservedCategory,
    #[error("skill '{skill}' has level {level} (max 100)")]
    SkillLevel { skill: String, level: u8 },
    #[error("projects unreachable through any category filter: {ids:?}")]
    UnreachableProjects { ids: Vec<u32> },
}

/// Non-fatal findings reported alongside a valid catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentWarning {
    /// The project's category matches no filter label; it only shows under "All".
    UnreachableProject { id: u32, category: String },
}

impl std::fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreachableProject { id, category } => {
                write!(f, "project {id} has category '{category}' which matches no filter")
            }
        }
    }
}

// =============================================================================
// MODEL
// =============================================================================

/// Root of the page content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Filter categories in display order, excluding the implicit "All".
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactSettings,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    pub headline_lead: String,
    pub headline_accent: String,
    pub intro: String,
    pub photo: String,
    pub resume: String,
    pub location: String,
    pub availability: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub focus_areas: Vec<FocusArea>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub copyright_year: u16,
}

/// About-section card describing an area of expertise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusArea {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub icon: FocusIcon,
    /// Span the full row of the card grid.
    #[serde(default)]
    pub wide: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusIcon {
    Database,
    Globe,
    #[default]
    Code,
}

/// Hero counter such as "8+ Projects".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
    pub icon: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Education,
    Work,
}

/// Timeline entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub kind: ExperienceKind,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub period: String,
    pub description: String,
}

/// How the contact form hands off messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Fixed delay, local acknowledgement, no network call.
    #[default]
    Simulated,
    /// POST to the server's contact relay endpoint.
    Relay,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSettings {
    #[serde(default)]
    pub delivery: DeliveryMode,
    #[serde(default)]
    pub channels: Vec<ContactChannel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Email,
    Phone,
    Location,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub title: String,
    pub info: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

// =============================================================================
// LOADING + VALIDATION
// =============================================================================

impl Catalog {
    /// Parse a YAML document and reject hard authoring errors.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] for malformed YAML or any error
    /// reported by [`Catalog::validate`].
    pub fn from_yaml(raw: &str) -> Result<Self, ContentError> {
        let catalog: Self = serde_yaml::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the catalog for authoring errors, returning non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns the first hard error found: duplicate project ids, empty
    /// required project fields, duplicate or reserved categories, or skill
    /// levels above 100.
    pub fn validate(&self) -> Result<Vec<ContentWarning>, ContentError> {
        let mut seen_categories = HashSet::new();
        for category in &self.categories {
            if category == ALL_LABEL {
                return Err(ContentError::ReservedCategory);
            }
            if !seen_categories.insert(category.as_str()) {
                return Err(ContentError::DuplicateCategory(category.clone()));
            }
        }

        let mut seen_ids = HashSet::new();
        let mut warnings = Vec::new();
        for project in &self.projects {
            if !seen_ids.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            for (field, value) in [
                ("title", &project.title),
                ("description", &project.description),
                ("long_description", &project.long_description),
                ("category", &project.category),
            ] {
                if value.trim().is_empty() {
                    return Err(ContentError::EmptyField { project: project.id, field });
                }
            }
            if !seen_categories.contains(project.category.as_str()) {
                warnings.push(ContentWarning::UnreachableProject {
                    id: project.id,
                    category: project.category.clone(),
                });
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel { skill: skill.name.clone(), level: skill.level });
        }

        Ok(warnings)
    }

    /// Like [`Catalog::validate`], but unreachable projects are an error.
    ///
    /// # Errors
    ///
    /// Returns any hard validation error, or
    /// [`ContentError::UnreachableProjects`] listing the affected ids.
    pub fn validate_strict(&self) -> Result<(), ContentError> {
        let ids = self
            .validate()?
            .into_iter()
            .map(|w| match w {
                ContentWarning::UnreachableProject { id, .. } => id,
            })
            .collect::<Vec<_>>();
        if ids.is_empty() { Ok(()) } else { Err(ContentError::UnreachableProjects { ids }) }
    }

    /// Filter-bar entries: "All" followed by the configured categories.
    #[must_use]
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().map(|c| CategoryFilter::Category(c.clone())))
            .collect()
    }

    #[must_use]
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

//! Profile data structures and loaders.

use std::fs;
use std::path::Path;

use folio_types::error::{FolioError, Result};
use serde::{Deserialize, Serialize};

/// One entry in the navigation bar, pointing at a page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A named group of skills (e.g. "Languages", "Tools").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One position in the work history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Short glyph or emoji shown on the project card.
    #[serde(default)]
    pub icon: String,
}

/// A degree or certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub location: String,
}

/// Ways to get in touch, shown in the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Short invitation paragraph above the contact links.
    #[serde(default)]
    pub pitch: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

/// The complete content payload for a portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// One-line role description under the name.
    #[serde(default)]
    pub headline: String,
    /// Longer strapline under the headline.
    #[serde(default)]
    pub tagline: String,
    /// Hero banner text, e.g. "Available for Opportunities". Absent
    /// means no banner.
    #[serde(default)]
    pub availability: Option<String>,
    /// Where the owner is based, shown with the about section.
    #[serde(default)]
    pub location: String,
    /// The about-section paragraphs, in order.
    #[serde(default)]
    pub about: Vec<String>,
    /// Navigable sections in page order. Sections rendered on the page
    /// but absent here (e.g. education) do not appear in the bar and
    /// never become the active section.
    #[serde(default = "default_nav")]
    pub nav: Vec<NavEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub contact: Contact,
}

/// The standard six-section navigation layout.
pub fn default_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new("home", "Home"),
        NavEntry::new("about", "About"),
        NavEntry::new("skills", "Skills"),
        NavEntry::new("experience", "Experience"),
        NavEntry::new("projects", "Projects"),
        NavEntry::new("contact", "Contact"),
    ]
}

impl Profile {
    /// Parse a profile from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(s)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Parse a profile from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(s)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile file, dispatching on the `.json` extension and
    /// treating everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("loading profile from {}", path.display());
        let raw = fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&raw)
        } else {
            Self::from_toml_str(&raw)
        }
    }

    /// Check the structural rules the page relies on: a non-empty
    /// name, at least one navigation entry, no blank or duplicate
    /// navigation ids.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::Content("profile name is empty".into()));
        }
        if self.nav.is_empty() {
            return Err(FolioError::Content("navigation has no entries".into()));
        }
        for entry in &self.nav {
            if entry.id.trim().is_empty() {
                return Err(FolioError::Content(format!(
                    "navigation entry '{}' has an empty id",
                    entry.label
                )));
            }
        }
        for (i, entry) in self.nav.iter().enumerate() {
            if self.nav[..i].iter().any(|e| e.id == entry.id) {
                return Err(FolioError::Content(format!(
                    "duplicate navigation id '{}'",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            headline: String::new(),
            tagline: String::new(),
            availability: None,
            location: String::new(),
            about: Vec::new(),
            nav: default_nav(),
            skills: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
            contact: Contact::default(),
        }
    }
}

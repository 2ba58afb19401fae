//! Portfolio content model.
//!
//! Everything the page displays -- the owner's name, the section
//! entries in the navigation bar, skills, work history, projects,
//! education, contact details -- lives in a [`Profile`] loaded from
//! TOML or JSON. The rendering layer is data-driven: editing the
//! profile file changes the site without touching code.

pub mod profile;

pub use profile::{
    Contact, EducationEntry, ExperienceEntry, NavEntry, Profile, ProjectEntry, SkillGroup,
};

//! Content Model
//!
//! Wire shapes and defaults for every page section.

mod envelope;
mod types;

pub use envelope::Envelope;
pub use types::{
    AboutContent, ContactLine, ContactSettings, FooterContactInfo, FooterContent, HeroContent,
    ProfileLink, Project, ProjectsSettings, QuickLink, ResumeInfo, Skill, SkillCategory,
    SocialLink, Stat, CARD_TECH_LIMIT,
};

//! Page Composition
//!
//! Mounts every section of the home page side by side. Each section still
//! loads independently: one GET apiece, no shared cache, and one section's
//! failure has no effect on the others.

use serde::Serialize;

use crate::content::{
    AboutContent, ContactSettings, FooterContent, HeroContent, Project, ProjectsSettings,
    ResumeInfo, SkillCategory,
};
use crate::endpoints::{EndpointError, Endpoints};
use crate::section::{self, RemoteSection, SectionState};
use crate::transport::ContentTransport;

/// Settled state of every section on the home page
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub hero: SectionState<HeroContent>,
    pub resume: SectionState<Option<ResumeInfo>>,
    pub about: SectionState<AboutContent>,
    pub skills: SectionState<Vec<SkillCategory>>,
    pub additional_technologies: SectionState<Vec<String>>,
    pub projects: SectionState<Vec<Project>>,
    pub projects_settings: SectionState<ProjectsSettings>,
    pub contact: SectionState<ContactSettings>,
    pub footer: SectionState<FooterContent>,
}

/// Home page sections, bound to their endpoints but not yet loaded
pub struct HomePage {
    hero: RemoteSection<HeroContent>,
    resume: RemoteSection<Option<ResumeInfo>>,
    about: RemoteSection<AboutContent>,
    skills: RemoteSection<Vec<SkillCategory>>,
    additional_technologies: RemoteSection<Vec<String>>,
    projects: RemoteSection<Vec<Project>>,
    projects_settings: RemoteSection<ProjectsSettings>,
    contact: RemoteSection<ContactSettings>,
    footer: RemoteSection<FooterContent>,
}

impl HomePage {
    pub fn new(endpoints: &Endpoints) -> Result<Self, EndpointError> {
        Ok(Self {
            hero: RemoteSection::new(section::hero(), endpoints)?,
            resume: RemoteSection::new(section::resume_info(), endpoints)?,
            about: RemoteSection::new(section::about(), endpoints)?,
            skills: RemoteSection::new(section::skills(), endpoints)?,
            additional_technologies: RemoteSection::new(
                section::additional_technologies(),
                endpoints,
            )?,
            projects: RemoteSection::new(section::projects(), endpoints)?,
            projects_settings: RemoteSection::new(section::projects_settings(), endpoints)?,
            contact: RemoteSection::new(section::contact_settings(), endpoints)?,
            footer: RemoteSection::new(section::footer(), endpoints)?,
        })
    }

    /// Names and URLs of every section, in page order
    pub fn urls(&self) -> Vec<(&'static str, &str)> {
        vec![
            (self.hero.name(), self.hero.url()),
            (self.resume.name(), self.resume.url()),
            (self.about.name(), self.about.url()),
            (self.skills.name(), self.skills.url()),
            (
                self.additional_technologies.name(),
                self.additional_technologies.url(),
            ),
            (self.projects.name(), self.projects.url()),
            (self.projects_settings.name(), self.projects_settings.url()),
            (self.contact.name(), self.contact.url()),
            (self.footer.name(), self.footer.url()),
        ]
    }

    /// Load every section concurrently and report where each one settled
    pub async fn mount<C>(mut self, transport: &C) -> PageSnapshot
    where
        C: ContentTransport + ?Sized,
    {
        futures_util::join!(
            self.hero.load(transport),
            self.resume.load(transport),
            self.about.load(transport),
            self.skills.load(transport),
            self.additional_technologies.load(transport),
            self.projects.load(transport),
            self.projects_settings.load(transport),
            self.contact.load(transport),
            self.footer.load(transport),
        );

        tracing::info!("Home page sections settled");

        PageSnapshot {
            hero: self.hero.into_state(),
            resume: self.resume.into_state(),
            about: self.about.into_state(),
            skills: self.skills.into_state(),
            additional_technologies: self.additional_technologies.into_state(),
            projects: self.projects.into_state(),
            projects_settings: self.projects_settings.into_state(),
            contact: self.contact.into_state(),
            footer: self.footer.into_state(),
        }
    }
}

impl PageSnapshot {
    /// Projects shown on the home page: every active project, in order
    pub fn home_projects(&self) -> Vec<Project> {
        self.projects.content().cloned().unwrap_or_default()
    }

    /// One section's settled state as JSON, by section name
    pub fn section_json(&self, name: &str) -> Option<serde_json::Value> {
        let value = serde_json::to_value(self).ok()?;
        value.get(name.replace('-', "_")).cloned()
    }
}

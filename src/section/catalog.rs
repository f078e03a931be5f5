//! The sections mounted on the portfolio pages

use super::SectionSpec;
use crate::content::{
    AboutContent, ContactSettings, FooterContent, HeroContent, Project, ProjectsSettings,
    ResumeInfo, SkillCategory,
};

/// Records the page lists by position
pub trait Ranked {
    fn is_active(&self) -> bool;
    fn order(&self) -> i64;
}

impl Ranked for Project {
    fn is_active(&self) -> bool {
        Project::is_active(self)
    }

    fn order(&self) -> i64 {
        self.order
    }
}

impl Ranked for SkillCategory {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn order(&self) -> i64 {
        self.order
    }
}

/// Drop inactive records, then sort ascending by `order`.
///
/// `sort_by_key` is stable, so equal orders keep response order.
pub fn active_sorted<T: Ranked>(items: Vec<T>) -> Vec<T> {
    let mut active: Vec<T> = items.into_iter().filter(Ranked::is_active).collect();
    active.sort_by_key(Ranked::order);
    active
}

pub fn about() -> SectionSpec<AboutContent> {
    SectionSpec::new("about", "about", AboutContent::default())
}

pub fn hero() -> SectionSpec<HeroContent> {
    SectionSpec::new("hero", "about", HeroContent::default())
}

pub fn resume_info() -> SectionSpec<Option<ResumeInfo>> {
    SectionSpec::new("resume", "resume", None)
        .sub_key("info")
        .require_success()
}

pub fn skills() -> SectionSpec<Vec<SkillCategory>> {
    SectionSpec::new("skills", "skills", Vec::new()).transform(active_sorted)
}

pub fn additional_technologies() -> SectionSpec<Vec<String>> {
    SectionSpec::new(
        "additional-technologies",
        "skills/additional-technologies",
        Vec::new(),
    )
}

pub fn projects() -> SectionSpec<Vec<Project>> {
    SectionSpec::new("projects", "projects", Vec::new()).transform(active_sorted)
}

/// The projects page list, exactly as the server returns it
pub fn all_projects() -> SectionSpec<Vec<Project>> {
    SectionSpec::new("all-projects", "projects", Vec::new())
}

pub fn projects_settings() -> SectionSpec<ProjectsSettings> {
    SectionSpec::new("projects-settings", "projects/settings", ProjectsSettings::default())
}

pub fn contact_settings() -> SectionSpec<ContactSettings> {
    SectionSpec::new("contact", "contactSettings", ContactSettings::default())
}

pub fn footer() -> SectionSpec<FooterContent> {
    SectionSpec::new("footer", "footer", FooterContent::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::Endpoints;
    use crate::section::RemoteSection;
    use crate::transport::fakes::FixedTransport;

    fn project(id: &str, order: i64, status: &str) -> Project {
        serde_json::from_value(serde_json::json!({
            "_id": id, "title": id, "order": order, "status": status
        }))
        .unwrap()
    }

    #[test]
    fn test_inactive_dropped_and_sorted() {
        let sorted = active_sorted(vec![
            project("a", 2, "active"),
            project("b", 1, "active"),
            project("c", 5, "inactive"),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_equal_orders_keep_response_order() {
        let sorted = active_sorted(vec![
            project("first", 1, "active"),
            project("second", 0, "active"),
            project("third", 1, "active"),
            project("fourth", 1, "draft"),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first", "third"]);
    }

    #[tokio::test]
    async fn test_all_projects_keeps_server_list() {
        let transport = FixedTransport::new(
            200,
            r#"{"success": true, "data": [
                {"_id": "late", "order": 9, "status": "active"},
                {"_id": "draft", "order": 0, "status": "draft"},
                {"_id": "early", "order": 1, "status": "active"}
            ]}"#,
        );
        let endpoints = Endpoints::new("http://test/api");

        let mut page = RemoteSection::new(all_projects(), &endpoints).unwrap();
        let ids: Vec<&str> = page.load(&transport).await.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "draft", "early"]);

        let mut home = RemoteSection::new(projects(), &endpoints).unwrap();
        let ids: Vec<&str> = home.load(&transport).await.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn test_skill_categories_use_is_active() {
        let categories: Vec<SkillCategory> = serde_json::from_str(
            r#"[{"category": "Backend Development", "order": 2, "isActive": true},
                {"category": "Design & UI/UX", "order": 1, "isActive": false},
                {"category": "Frontend Development", "order": 1, "isActive": true}]"#,
        )
        .unwrap();
        let sorted = active_sorted(categories);
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].category, "Frontend Development");
        assert_eq!(sorted[1].icon(), "database");
    }

    #[test]
    fn test_every_section_resolves() {
        let endpoints = Endpoints::new("http://test/api");
        assert_eq!(
            endpoints.resolve(about().key, about().sub_key).unwrap(),
            "http://test/api/about"
        );
        assert_eq!(
            endpoints.resolve(resume_info().key, resume_info().sub_key).unwrap(),
            "http://test/api/resume/info"
        );
        for (key, sub_key) in [
            (hero().key, hero().sub_key),
            (skills().key, skills().sub_key),
            (additional_technologies().key, None),
            (projects().key, None),
            (all_projects().key, None),
            (projects_settings().key, None),
            (contact_settings().key, None),
            (footer().key, None),
        ] {
            assert!(endpoints.resolve(key, sub_key).is_ok(), "{} should resolve", key);
        }
    }
}

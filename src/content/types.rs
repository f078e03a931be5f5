//! Section content types
//!
//! Wire shapes returned by the content API, with the compile-time defaults
//! each section shows before (or instead of) a successful fetch.
//!
//! Every field is optional on the wire: a missing or `null` field yields an
//! empty value for that field, never the section default. Fetched objects
//! replace defaults wholesale.

use serde::{Deserialize, Deserializer, Serialize};

/// Missing and `null` both deserialize to the type's empty value
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================
// About
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default, deserialize_with = "nullable")]
    pub about_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub about_section_title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub about_highlights: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub experience: String,
    #[serde(default, deserialize_with = "nullable")]
    pub education: String,
    #[serde(default, deserialize_with = "nullable")]
    pub location: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub projects_completed: String,
    #[serde(default, deserialize_with = "nullable")]
    pub years_experience: String,
    #[serde(default, deserialize_with = "nullable")]
    pub technologies: String,
    #[serde(default, deserialize_with = "nullable")]
    pub certifications: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            about_text: "I am a passionate developer with experience in building modern web \
                         applications. I love working with cutting-edge technologies and \
                         creating user-friendly solutions."
                .to_string(),
            about_section_title: "About Me".to_string(),
            about_highlights: vec![
                "Full-Stack Expertise: Proficient in both frontend and backend development"
                    .to_string(),
                "Modern Technologies: Experience with React, Node.js, TypeScript, and cloud platforms"
                    .to_string(),
                "Problem Solving: Strong analytical skills and creative approach to technical challenges"
                    .to_string(),
                "Team Collaboration: Excellent communication and collaboration skills".to_string(),
            ],
            experience: "5+ years of experience in web development".to_string(),
            education: "Bachelor's degree in Computer Science".to_string(),
            location: String::new(),
            email: String::new(),
            projects_completed: "25+".to_string(),
            years_experience: "5+".to_string(),
            technologies: "15+".to_string(),
            certifications: "8".to_string(),
        }
    }
}

/// A labelled figure in the About stats grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

impl AboutContent {
    /// Heading shown above the about text
    pub fn display_title(&self) -> &str {
        or_fallback(&self.about_section_title, "Full-Stack Software Engineer")
    }

    /// Stats grid, with per-figure display fallbacks for empty values
    pub fn stats(&self) -> [Stat; 4] {
        [
            Stat {
                label: "Projects Completed",
                value: or_fallback(&self.projects_completed, "25+").to_string(),
            },
            Stat {
                label: "Years Experience",
                value: or_fallback(&self.years_experience, "5+").to_string(),
            },
            Stat {
                label: "Technologies",
                value: or_fallback(&self.technologies, "15+").to_string(),
            },
            Stat {
                label: "Certifications",
                value: or_fallback(&self.certifications, "8").to_string(),
            },
        ]
    }

    /// Highlights split at the first colon into (lead, rest)
    pub fn highlight_parts(&self) -> Vec<(String, String)> {
        self.about_highlights
            .iter()
            .map(|h| match h.split_once(':') {
                Some((lead, rest)) => (lead.trim().to_string(), rest.trim().to_string()),
                None => (String::new(), h.trim().to_string()),
            })
            .collect()
    }
}

// ============================================
// Hero
// ============================================

/// Hero banner content (served by the `about` endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub github: String,
    #[serde(default, deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "nullable")]
    pub twitter: String,
    #[serde(default, deserialize_with = "nullable")]
    pub website: String,
    #[serde(default, deserialize_with = "nullable")]
    pub technology_tags: Vec<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Full-Stack Developer".to_string(),
            subtitle: "Passionate about creating innovative web applications".to_string(),
            description: "A dedicated developer with expertise in modern web technologies."
                .to_string(),
            github: String::new(),
            linkedin: String::new(),
            twitter: String::new(),
            website: String::new(),
            technology_tags: Vec::new(),
        }
    }
}

/// A social profile link rendered in the hero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileLink {
    pub name: &'static str,
    pub url: String,
}

impl HeroContent {
    /// Non-empty profile links, in display order
    pub fn profile_links(&self) -> Vec<ProfileLink> {
        [
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("Website", &self.website),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .map(|(name, url)| ProfileLink {
            name,
            url: url.clone(),
        })
        .collect()
    }
}

// ============================================
// Resume
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInfo {
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub size: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub upload_date: String,
}

// ============================================
// Skills
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Skill {
    /// Proficiency clamped to a 0-100 bar width
    pub fn bar_width(&self) -> u32 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(rename = "_id", default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub is_active: bool,
}

impl SkillCategory {
    /// Icon name for well-known category titles
    pub fn icon(&self) -> &'static str {
        match self.category.as_str() {
            "Frontend Development" => "code",
            "Backend Development" => "database",
            "DevOps & Tools" => "cloud",
            "Mobile Development" => "smartphone",
            "Design & UI/UX" => "globe",
            "Data Science" => "cpu",
            _ => "code",
        }
    }
}

// ============================================
// Projects
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub featured: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub order: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: String,
}

/// Technology chips shown on a project card
pub const CARD_TECH_LIMIT: usize = 3;

impl Project {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    /// First few technologies plus how many were left off the card
    pub fn card_technologies(&self) -> (&[String], usize) {
        let shown = self.technologies.len().min(CARD_TECH_LIMIT);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSettings {
    #[serde(default, deserialize_with = "nullable")]
    pub projects_title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub projects_subtitle: String,
    #[serde(default, deserialize_with = "nullable")]
    pub view_all_button_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub view_all_button_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub show_view_all_button: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub max_featured_projects: usize,
}

impl Default for ProjectsSettings {
    fn default() -> Self {
        Self {
            projects_title: "Featured Projects".to_string(),
            projects_subtitle: "A showcase of my recent work, demonstrating my skills in \
                                full-stack development and problem-solving."
                .to_string(),
            view_all_button_text: "View All Projects".to_string(),
            view_all_button_url: "/projects".to_string(),
            show_view_all_button: true,
            max_featured_projects: 6,
        }
    }
}

impl ProjectsSettings {
    /// Whether the "view all" target leaves the site
    pub fn view_all_is_external(&self) -> bool {
        self.view_all_button_url.starts_with("http")
    }
}

// ============================================
// Contact
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSettings {
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable")]
    pub country: String,
    #[serde(default, deserialize_with = "nullable")]
    pub contact_title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub contact_subtitle: String,
    #[serde(default, deserialize_with = "nullable")]
    pub contact_description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub form_enabled: bool,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            contact_title: "Get In Touch".to_string(),
            contact_subtitle: "Let's work together".to_string(),
            contact_description: "I'm always interested in hearing about new opportunities \
                                  and exciting projects."
                .to_string(),
            form_enabled: true,
        }
    }
}

/// One row of the contact details list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLine {
    pub title: &'static str,
    pub value: String,
    pub link: String,
}

impl ContactSettings {
    /// Email, phone and location rows with placeholder text for empty values
    pub fn contact_lines(&self) -> [ContactLine; 3] {
        let location = [&self.address, &self.city, &self.country]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        [
            ContactLine {
                title: "Email",
                value: or_fallback(&self.email, "your.email@example.com").to_string(),
                link: link_or_hash("mailto:", &self.email),
            },
            ContactLine {
                title: "Phone",
                value: or_fallback(&self.phone, "Add your phone number").to_string(),
                link: link_or_hash("tel:", &self.phone),
            },
            ContactLine {
                title: "Location",
                value: or_fallback(&location, "Add your location").to_string(),
                link: "#".to_string(),
            },
        ]
    }
}

// ============================================
// Footer
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterContactInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    #[serde(default, deserialize_with = "nullable")]
    pub copyright: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tagline: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub social_links: Vec<SocialLink>,
    #[serde(default, deserialize_with = "nullable")]
    pub quick_links: Vec<QuickLink>,
    #[serde(default, deserialize_with = "nullable")]
    pub contact_info: FooterContactInfo,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            copyright: "© 2025 Your Name. All rights reserved.".to_string(),
            tagline: "Building amazing digital experiences".to_string(),
            description: "Passionate developer creating innovative solutions for the web."
                .to_string(),
            social_links: Vec::new(),
            quick_links: Vec::new(),
            contact_info: FooterContactInfo::default(),
        }
    }
}

impl FooterContent {
    /// Server quick links, or the in-page anchors when none are configured
    pub fn quick_links_or_anchors(&self) -> Vec<QuickLink> {
        if !self.quick_links.is_empty() {
            return self.quick_links.clone();
        }
        crate::scroll::NAV_SECTIONS
            .iter()
            .map(|id| QuickLink {
                name: capitalize(id),
                url: format!("#{}", id),
            })
            .collect()
    }

    /// Contact lines; placeholders only when all three are empty
    pub fn contact_lines(&self) -> Vec<String> {
        let info = &self.contact_info;
        if info.email.is_empty() && info.phone.is_empty() && info.address.is_empty() {
            return vec![
                "your.email@example.com".to_string(),
                "Add your phone number".to_string(),
                "Add your location".to_string(),
            ];
        }
        [&info.email, &info.phone, &info.address]
            .into_iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect()
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn link_or_hash(scheme: &str, value: &str) -> String {
    if value.is_empty() {
        "#".to_string()
    } else {
        format!("{}{}", scheme, value)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_empty_not_defaults() {
        let about: AboutContent = serde_json::from_str(r#"{"aboutText": "Hi"}"#).unwrap();
        assert_eq!(about.about_text, "Hi");
        assert_eq!(about.about_section_title, "");
        assert!(about.about_highlights.is_empty());
    }

    #[test]
    fn test_about_display_fallbacks() {
        let about: AboutContent =
            serde_json::from_str(r#"{"yearsExperience": "3+"}"#).unwrap();
        let stats = about.stats();
        assert_eq!(stats[0].value, "25+");
        assert_eq!(stats[1].value, "3+");
        assert_eq!(stats[3].value, "8");
        assert_eq!(about.display_title(), "Full-Stack Software Engineer");
    }

    #[test]
    fn test_highlight_parts() {
        let about = AboutContent::default();
        let parts = about.highlight_parts();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].0, "Full-Stack Expertise");
        assert!(parts[0].1.starts_with("Proficient"));
    }

    #[test]
    fn test_project_wire_names() {
        let project: Project = serde_json::from_str(
            r#"{"_id": "p1", "title": "Shop", "technologies": ["Rust", "Axum", "Leptos", "SQL"],
                "order": 2, "status": "active", "createdAt": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(project.id, "p1");
        assert!(project.is_active());
        assert_eq!(project.created_at, "2024-01-01");

        let (shown, more) = project.card_technologies();
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 1);
    }

    #[test]
    fn test_contact_lines() {
        let settings = ContactSettings {
            email: "me@example.com".to_string(),
            city: "Lagos".to_string(),
            country: "Nigeria".to_string(),
            ..ContactSettings::default()
        };
        let lines = settings.contact_lines();
        assert_eq!(lines[0].link, "mailto:me@example.com");
        assert_eq!(lines[1].value, "Add your phone number");
        assert_eq!(lines[1].link, "#");
        assert_eq!(lines[2].value, "Lagos, Nigeria");
    }

    #[test]
    fn test_footer_fallbacks() {
        let footer = FooterContent::default();
        let links = footer.quick_links_or_anchors();
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].name, "Home");
        assert_eq!(links[4].url, "#contact");
        assert_eq!(footer.contact_lines()[0], "your.email@example.com");

        let footer = FooterContent {
            contact_info: FooterContactInfo {
                phone: "+1 555".to_string(),
                ..FooterContactInfo::default()
            },
            ..FooterContent::default()
        };
        assert_eq!(footer.contact_lines(), vec!["+1 555".to_string()]);
    }

    #[test]
    fn test_null_fields_keep_the_record() {
        let projects: Vec<Project> = serde_json::from_str(
            r#"[{"title": "A", "description": null, "technologies": null, "status": "active"},
                {"title": "B", "description": "Second", "order": null, "status": "active"}]"#,
        )
        .unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].description, "");
        assert!(projects[0].technologies.is_empty());
        assert_eq!(projects[1].order, 0);
        assert_eq!(projects[1].description, "Second");
    }

    #[test]
    fn test_settings_without_featured_limit() {
        let settings: ProjectsSettings = serde_json::from_str(
            r#"{"projectsTitle": "My Work", "viewAllButtonUrl": null}"#,
        )
        .unwrap();
        assert_eq!(settings.projects_title, "My Work");
        assert_eq!(settings.max_featured_projects, 0);
        assert!(!settings.view_all_is_external());
    }

    #[test]
    fn test_profile_links_skip_empty() {
        let hero = HeroContent {
            github: "https://github.com/me".to_string(),
            ..HeroContent::default()
        };
        let links = hero.profile_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].name, "GitHub");
    }
}

//! Page Sections
//!
//! One component per home page section. Each owns its data: it mounts its
//! own loader and renders a spinner until the loader settles.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::{FeaturedProjects, ProjectCard};
pub use skills::Skills;

//! Home Page
//!
//! Every section mounts (and fetches) independently.

use leptos::*;

use crate::components::PageView;
use crate::sections::{About, Contact, FeaturedProjects, Footer, Hero, Skills};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <PageView page="home" />
        <Hero />
        <About />
        <Skills />
        <FeaturedProjects />
        <Contact />
        <Footer />
    }
}

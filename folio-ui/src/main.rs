//! Folio Site
//!
//! Portfolio site built with Leptos (WASM).
//!
//! # Features
//!
//! - Every section loads its own content from the content API
//! - Built-in defaults whenever the API is slow, failing, or empty
//! - Contact form with submission feedback
//! - Anonymous page-view beacon
//! - Scroll progress bar and active-section navigation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Content shapes, loaders and submission logic live in the
//! `folio` crate; this crate supplies the browser transport, storage and
//! views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod sections;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

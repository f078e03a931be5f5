//! Folio CLI
//!
//! Command-line interface for the portfolio content layer:
//! - Resolve endpoint URLs
//! - Load page sections the way the site does, defaults included
//! - Submit the contact form and send view beacons
//! - Run a local fixture content API

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio::config::{generate_default_config, Config};
use folio::fixture::{self, FixtureState};
use folio::section::{self, RemoteSection};
use folio::{
    ContactForm, ContactSubmitter, HomePage, HttpTransport, SubmitStatus, ViewTracker,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Portfolio content loader and fixture server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Content API base URL (overrides config and FOLIO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an endpoint key to its URL, or list every endpoint
    Resolve {
        /// Logical key (e.g. about, contactSettings, resume)
        key: Option<String>,
        /// Sub-key for grouped endpoints (e.g. info, trackView)
        sub_key: Option<String>,
    },

    /// Load every home page section and print where each settled
    Snapshot {
        /// Print a single section (e.g. hero, projects-settings)
        #[arg(short, long)]
        section: Option<String>,
    },

    /// Load the full project list shown on the projects page, unfiltered
    Projects,

    /// Print the resume download URL, if a resume is published
    Resume,

    /// Submit the contact form
    Contact {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },

    /// Send one page-view beacon
    Track {
        /// Page name (default: the configured default page)
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Run the fixture content API
    Fixture {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config);

    let endpoints = config.endpoints();
    let transport = HttpTransport::new();

    match cli.command {
        Commands::Resolve { key, sub_key } => match key {
            Some(key) => {
                println!("{}", endpoints.resolve(&key, sub_key.as_deref())?);
            }
            None => {
                for key in endpoints.keys() {
                    match endpoints.resolve(key, None) {
                        Ok(url) => println!("{:<32} {}", key, url),
                        Err(_) => println!("{:<32} (group)", key),
                    }
                }
            }
        },

        Commands::Snapshot { section } => {
            let snapshot = HomePage::new(&endpoints)?.mount(&transport).await;

            let output = match section {
                Some(name) => snapshot
                    .section_json(&name)
                    .with_context(|| format!("Unknown section: {}", name))?,
                None => serde_json::to_value(&snapshot)?,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Projects => {
            let mut all_projects = RemoteSection::new(section::all_projects(), &endpoints)?;
            let projects = all_projects.load(&transport).await;

            for project in projects {
                let (shown, more) = project.card_technologies();
                let more = if more > 0 {
                    format!(" +{}", more)
                } else {
                    String::new()
                };
                println!(
                    "{:>3}  {:<32} [{}{}]",
                    project.order,
                    project.title,
                    shown.join(", "),
                    more
                );
            }
            if projects.is_empty() {
                println!("No projects available.");
            }
        }

        Commands::Resume => {
            let mut resume = RemoteSection::new(section::resume_info(), &endpoints)?;
            match resume.load(&transport).await {
                Some(info) => {
                    println!("{} ({} bytes)", info.original_name, info.size);
                    println!("{}", endpoints.resume_download_url(&info.id)?);
                }
                None => println!("No resume published."),
            }
        }

        Commands::Contact {
            first_name,
            last_name,
            email,
            subject,
            message,
        } => {
            let mut form = ContactForm {
                first_name,
                last_name,
                email,
                subject,
                message,
            };
            let missing = form.missing_fields();
            if !missing.is_empty() {
                anyhow::bail!("Missing required fields: {}", missing.join(", "));
            }

            let submitter = ContactSubmitter::new(&endpoints)?;
            let mut status = SubmitStatus::default();
            match submitter.submit(&transport, &mut form, &mut status).await {
                SubmitStatus::Success => {
                    println!("Thank you for your message! I'll get back to you soon.")
                }
                _ => {
                    eprintln!("Sorry, there was an error sending your message. Please try again.");
                    std::process::exit(1);
                }
            }
        }

        Commands::Track { page } => {
            let page = page.unwrap_or_else(|| config.site.default_page.clone());
            let tracker = ViewTracker::new(&endpoints, config.session_store())?;

            match tracker.try_track(&transport, &page).await {
                Ok(session_id) => println!("Tracked view of {} (session {})", page, session_id),
                Err(e) => eprintln!("View not tracked: {}", e),
            }
        }

        Commands::Fixture { host, port } => {
            let host = host.unwrap_or(config.fixture.host);
            let port = port.unwrap_or(config.fixture.port);
            let state = Arc::new(FixtureState::with_sample_content());

            fixture::serve(state, &format!("{}:{}", host, port)).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("folio={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

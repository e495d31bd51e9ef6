mod config;
mod error;
mod filters;
mod github;
mod render;
mod repo;
mod weight;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::fs;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use github::GithubClient;
use render::{Members, PageView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("giltpage=info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = Config::parse();

    // GitHub API client
    let client = GithubClient::new(&config.api_base, &config.org)
        .context("Failed to build HTTP client")?;

    // Listing and member count run side by side; neither waits on the other
    let (repos, members) = tokio::join!(
        github::fetch_all_repositories(&client, config.per_page),
        client.member_count(config.members_per_page),
    );

    let repos = repos.map(weight::weight_and_sort);
    if let Err(e) = &repos {
        error!("Repository listing failed: {e}");
    }

    let members = match members {
        Ok(count) => Members::from_count(count),
        Err(e) => {
            warn!("Member count unavailable: {e}");
            Members::Hidden
        }
    };

    let view = PageView {
        org: config.org.clone(),
        org_url: config.org_url(),
        listing: render::build_listing(repos, config.repos_per_row),
        members,
    };

    let html = render::render_page(&view, Utc::now());
    fs::write(&config.output, html)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!("Generated {} successfully.", config.output.display());

    Ok(())
}

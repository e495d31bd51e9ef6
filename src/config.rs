//! Command-line configuration.
//!
//! Every flag falls back to a `GILTPAGE_*` environment variable, then to the
//! built-in default.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "giltpage")]
#[command(version)]
#[command(about = "Render an organization's GitHub repositories as a static page")]
pub struct Config {
    /// GitHub organization to list
    #[arg(long, env = "GILTPAGE_ORG", default_value = "MonsantoCo")]
    pub org: String,

    /// REST API base URL
    #[arg(long, env = "GILTPAGE_API_BASE", default_value = "https://api.github.com")]
    pub api_base: String,

    /// Base URL for links back to the organization
    #[arg(long, env = "GILTPAGE_SITE_BASE", default_value = "https://github.com")]
    pub site_base: String,

    /// Repositories requested per listing page
    #[arg(
        long,
        env = "GILTPAGE_PER_PAGE",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub per_page: u32,

    /// Members requested by the member count query
    #[arg(
        long,
        env = "GILTPAGE_MEMBERS_PER_PAGE",
        default_value_t = 150,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub members_per_page: u32,

    /// Repositories per rendered row
    #[arg(
        long,
        env = "GILTPAGE_REPOS_PER_ROW",
        default_value_t = 100_000,
        value_parser = parse_row_size
    )]
    pub repos_per_row: usize,

    /// Where to write the generated page
    #[arg(short, long, env = "GILTPAGE_OUTPUT", default_value = "index.html")]
    pub output: PathBuf,
}

impl Config {
    pub fn org_url(&self) -> String {
        format!("{}/{}", self.site_base.trim_end_matches('/'), self.org)
    }
}

fn parse_row_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

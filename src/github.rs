use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{FetchError, extract_message};
use crate::repo::Repository;

const USER_AGENT: &str = concat!("giltpage/", env!("CARGO_PKG_VERSION"));

/// Source of repository listing pages, 1-indexed.
pub trait RepoPages {
    fn repos_page(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<Repository>, FetchError>> + Send;
}

/// Read every listing page in order until one comes back empty.
///
/// Requests are strictly sequential: page `n + 1` is only asked for once
/// page `n` has been appended. The first failed request aborts the whole
/// fetch and nothing accumulated so far is returned.
pub async fn fetch_all_repositories<S>(
    source: &S,
    per_page: u32,
) -> Result<Vec<Repository>, FetchError>
where
    S: RepoPages + Sync,
{
    let mut all = Vec::new();
    let mut page = 1u32;

    loop {
        let batch = source.repos_page(page, per_page).await?;
        if batch.is_empty() {
            break;
        }

        debug!(page, count = batch.len(), "fetched repository page");
        all.extend(batch);
        page += 1;
    }

    info!(total = all.len(), pages = page - 1, "fetched all repositories");
    Ok(all)
}

/// GitHub REST client scoped to one organization.
#[derive(Clone)]
pub struct GithubClient {
    api_base: Arc<String>,
    org: Arc<String>,
    http: Arc<Client>,
}

impl GithubClient {
    pub fn new(api_base: &str, org: &str) -> Result<Self, FetchError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            api_base: Arc::new(api_base.trim_end_matches('/').to_string()),
            org: Arc::new(org.to_string()),
            http: Arc::new(http),
        })
    }

    /// GET a URL and decode the body, turning non-2xx into `FetchError::Status`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = resp.status();
        // Read the body even for failures so GitHub's `message` can be surfaced
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                message: extract_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Number of members visible on the organization's first members page.
    pub async fn member_count(&self, per_page: u32) -> Result<usize, FetchError> {
        let url = format!(
            "{}/orgs/{}/members?per_page={per_page}",
            self.api_base, self.org
        );
        let members: Vec<IgnoredAny> = self.get_json(&url).await?;
        Ok(members.len())
    }
}

impl RepoPages for GithubClient {
    async fn repos_page(&self, page: u32, per_page: u32) -> Result<Vec<Repository>, FetchError> {
        let url = format!(
            "{}/orgs/{}/repos?per_page={per_page}&page={page}",
            self.api_base, self.org
        );
        // A `null` page ends the listing the same way an empty one does
        let page: Option<Vec<Repository>> = self.get_json(&url).await?;
        Ok(page.unwrap_or_default())
    }
}

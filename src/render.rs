use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::FetchError;
use crate::filters::{escape_html, sc};
use crate::repo::Repository;
use crate::weight::Weighted;

const NETWORK_ERROR_TEXT: &str = "An error occurred while communicating with GitHub.";

/// Render-ready view of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCard {
    pub href: String,
    pub watchers: u64,
    pub forks: u64,
    pub private: bool,
    pub language: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Repository> for RepoCard {
    fn from(repo: &Repository) -> Self {
        Self {
            href: repo.html_url.clone(),
            watchers: repo.watchers_count,
            forks: repo.forks_count,
            private: repo.private,
            language: repo.language.clone().filter(|l| !l.is_empty()),
            name: repo.name.clone(),
            description: repo.description.clone().filter(|d| !d.is_empty()),
        }
    }
}

/// Outcome of the repository pipeline.
#[derive(Debug)]
pub enum Listing {
    Rendered { rows: Vec<Vec<RepoCard>>, total: usize },
    Failed { server_message: Option<String> },
}

/// Outcome of the member query. Failures and empty orgs both stay hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Members {
    Hidden,
    Shown(usize),
}

impl Members {
    pub fn from_count(count: usize) -> Self {
        if count > 0 {
            Members::Shown(count)
        } else {
            Members::Hidden
        }
    }
}

#[derive(Debug)]
pub struct PageView {
    pub org: String,
    pub org_url: String,
    pub listing: Listing,
    pub members: Members,
}

/// Split cards into rows of at most `per_row` entries.
pub fn group_cards(cards: Vec<RepoCard>, per_row: usize) -> Vec<Vec<RepoCard>> {
    let per_row = per_row.max(1);
    let mut rows: Vec<Vec<RepoCard>> = Vec::new();

    for (i, card) in cards.into_iter().enumerate() {
        if i % per_row == 0 {
            rows.push(Vec::with_capacity(per_row.min(64)));
        }
        if let Some(row) = rows.last_mut() {
            row.push(card);
        }
    }

    rows
}

pub fn build_listing(result: Result<Vec<Weighted>, FetchError>, per_row: usize) -> Listing {
    match result {
        Ok(sorted) => {
            let total = sorted.len();
            let cards = sorted.iter().map(|w| RepoCard::from(&w.repo)).collect();
            Listing::Rendered {
                rows: group_cards(cards, per_row),
                total,
            }
        }
        Err(e) => Listing::Failed {
            server_message: e.server_message().map(str::to_string),
        },
    }
}

// HTML building blocks

fn class_attr(base: &str, hidden: bool) -> String {
    if hidden {
        format!("{base} hidden").trim().to_string()
    } else {
        base.to_string()
    }
}

fn render_card(card: &RepoCard) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"col-lg-4 col-md-6 col-sm-6 col-xs-12\">\n<div class=\"repo\">\n");
    out.push_str(&format!("<a href=\"{}\">\n", escape_html(&card.href)));

    out.push_str(&format!(
        "<i class=\"icon-star repo-icon\"></i><span class=\"count\">{}</span>\n",
        card.watchers
    ));
    out.push_str(&format!(
        "<i class=\"icon-code-fork repo-icon\"></i><span class=\"count\">{}</span>\n",
        card.forks
    ));

    if card.private {
        out.push_str("<i class=\"icon-lock\"></i>\n");
    }

    if let Some(lang) = &card.language {
        out.push_str(&sc(lang, &format!("lang {}", lang.to_lowercase())));
        out.push('\n');
    }

    out.push_str(&format!(
        "<h4 class=\"name\">{}</h4>\n",
        escape_html(&card.name)
    ));
    if let Some(desc) = &card.description {
        out.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape_html(desc)
        ));
    }

    out.push_str("</a>\n</div>\n</div>\n");
    out
}

fn render_rows(rows: &[Vec<RepoCard>]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str("<div class=\"repo-row row\">\n");
        for card in row {
            out.push_str(&render_card(card));
        }
        out.push_str("</div>\n");
    }
    out
}

/// Serialize the page with its five regions: member stats, repo stats,
/// loading, fallback link and the repository list.
pub fn render_page(view: &PageView, generated_at: DateTime<Utc>) -> String {
    let org_url = escape_html(&view.org_url);
    let members_shown = matches!(view.members, Members::Shown(_));

    let member_stats = match view.members {
        Members::Shown(n) => format!(
            "<p id=\"member-stats\">We are <a href=\"{org_url}?tab=members\">{n} members</a></p>"
        ),
        Members::Hidden => "<p id=\"member-stats\" class=\"hidden\"></p>".to_string(),
    };

    let (repo_stats, loading, fallback_hidden, rows) = match &view.listing {
        Listing::Rendered { rows, total } => {
            let class = if members_shown {
                " class=\"repo-stats-inline\""
            } else {
                ""
            };
            (
                format!(
                    "<p id=\"repo-stats\"{class}>Providing <a href=\"{org_url}\">{total} public repositories</a></p>"
                ),
                "<div id=\"loading\" class=\"hidden\">Loading...</div>".to_string(),
                true,
                render_rows(rows),
            )
        }
        Listing::Failed { server_message } => {
            let mut loading =
                format!("<div id=\"loading\" class=\"networkError\">{NETWORK_ERROR_TEXT}");
            if let Some(msg) = server_message {
                loading.push_str(&format!("<div>({})</div>", escape_html(msg)));
            }
            loading.push_str("</div>");

            let base = if members_shown { "repo-stats-inline" } else { "" };
            let class = class_attr(base, true);
            (
                format!("<p id=\"repo-stats\" class=\"{class}\"></p>"),
                loading,
                false,
                String::new(),
            )
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{org} on GitHub</title>
<link rel="stylesheet" href="css/main.css">
</head>
<body>
<div class="container">
{member_stats}
{repo_stats}
{loading}
<div id="fallback" class="{fallback_class}"><a href="{org_url}">Browse our repositories on GitHub</a></div>
<div id="all-repos">
{rows}</div>
</div>
<!-- generated {generated} -->
</body>
</html>
"#,
        org = escape_html(&view.org),
        fallback_class = class_attr("", fallback_hidden),
        generated = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

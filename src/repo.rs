use serde::Deserialize;

/// A repository as returned by `GET /orgs/{org}/repos`.
///
/// Only the fields the page uses are kept; everything else in the payload
/// is ignored by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub private: bool,
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listing_entry_with_nulls() {
        let json = r#"{
            "id": 1,
            "name": "gilt",
            "full_name": "MonsantoCo/gilt",
            "description": null,
            "html_url": "https://github.com/MonsantoCo/gilt",
            "stargazers_count": 4,
            "watchers_count": 4,
            "forks_count": 2,
            "fork": false,
            "private": false,
            "language": null
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "gilt");
        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
        assert_eq!(repo.stargazers_count, 4);
        assert_eq!(repo.forks_count, 2);
        assert!(!repo.fork);
    }
}

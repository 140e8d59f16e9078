//! The fixed list of player pages to scrape.
//!
//! Lists are YAML files with a single `urls` sequence. The default list is
//! compiled in from `seed_data/pitchers.yml`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Error types for subject list loading.
#[derive(Error, Debug)]
pub enum SubjectListError {
    #[error("Failed to read subject list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse subject list YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("Invalid page URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Duplicate page URL in subject list: {0}")]
    Duplicate(String),
    #[error("Subject list is empty")]
    Empty,
}

/// Top-level structure for a subject list YAML file.
#[derive(Deserialize, Debug)]
pub struct SubjectListFile {
    pub urls: Vec<String>,
}

/// Parse and validate a subject list from YAML content.
pub fn parse_subject_list(yaml_content: &str) -> Result<Vec<String>, SubjectListError> {
    let file: SubjectListFile = serde_yml::from_str(yaml_content)?;
    validate_subjects(file.urls)
}

/// Load the subject list embedded at compile time.
pub fn load_default_subjects() -> Result<Vec<String>, SubjectListError> {
    let yaml_content = include_str!("../../seed_data/pitchers.yml");
    parse_subject_list(yaml_content)
}

/// Load a subject list from a YAML file on disk.
pub fn load_subject_file(path: &Path) -> Result<Vec<String>, SubjectListError> {
    let content = std::fs::read_to_string(path).map_err(|source| SubjectListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_subject_list(&content)
}

/// Trims each URL and checks it is an absolute http(s) URL appearing once.
pub fn validate_subjects(urls: Vec<String>) -> Result<Vec<String>, SubjectListError> {
    if urls.is_empty() {
        return Err(SubjectListError::Empty);
    }
    let mut seen = HashSet::new();
    let mut validated = Vec::with_capacity(urls.len());
    for raw in urls {
        let url = raw.trim().to_string();
        let parsed = Url::parse(&url).map_err(|e| SubjectListError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SubjectListError::InvalidUrl {
                reason: format!("unsupported scheme {}", parsed.scheme()),
                url,
            });
        }
        if !seen.insert(url.clone()) {
            return Err(SubjectListError::Duplicate(url));
        }
        validated.push(url);
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_list() {
        let yaml = r#"
urls:
  - "https://www.baseball-reference.com/players/a/adamsba01.shtml"
  - "  https://www.baseball-reference.com/players/m/maddugr01.shtml "
"#;
        let urls = parse_subject_list(yaml).unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls[1],
            "https://www.baseball-reference.com/players/m/maddugr01.shtml"
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let yaml = r#"
urls:
  - "https://a.example/p1"
  - "https://a.example/p1"
"#;
        assert!(matches!(
            parse_subject_list(yaml).unwrap_err(),
            SubjectListError::Duplicate(_)
        ));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let yaml = r#"
urls:
  - "players/a/adamsba01.shtml"
"#;
        assert!(matches!(
            parse_subject_list(yaml).unwrap_err(),
            SubjectListError::InvalidUrl { .. }
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = validate_subjects(vec!["file:///etc/passwd".to_string()]);
        assert!(matches!(result, Err(SubjectListError::InvalidUrl { .. })));
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            parse_subject_list("urls: []").unwrap_err(),
            SubjectListError::Empty
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            parse_subject_list("urls: [unterminated").unwrap_err(),
            SubjectListError::YamlParse(_)
        ));
    }

    #[test]
    fn test_load_default_subjects_succeeds() {
        let urls = load_default_subjects().unwrap();
        assert!(!urls.is_empty());
        assert!(urls.iter().all(|u| u.starts_with("https://www.baseball-reference.com/")));
    }

    #[test]
    fn test_load_subject_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.yml");
        std::fs::write(&path, "urls:\n  - \"http://localhost/p\"\n").unwrap();
        assert_eq!(load_subject_file(&path).unwrap(), vec!["http://localhost/p"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_subject_file(Path::new("/nonexistent/list.yml")).unwrap_err();
        assert!(matches!(err, SubjectListError::Read { .. }));
    }
}

//! Content Loader
//!
//! Reads the five section documents from a content directory. Layout:
//!
//! ```text
//! <dir>/home.json              default language
//! <dir>/<lang>/home.json       per-language override
//! ```
//!
//! `.json`, `.yaml` and `.yml` are all accepted.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::types::*;

const EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Find the file backing `section`, preferring the language directory.
pub async fn find_section_file(dir: &Path, language: Option<&str>, section: Section) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(lang) = language.filter(|l| !l.is_empty()) {
        for ext in EXTENSIONS {
            candidates.push(dir.join(lang).join(format!("{}.{}", section, ext)));
        }
    }
    for ext in EXTENSIONS {
        candidates.push(dir.join(format!("{}.{}", section, ext)));
    }
    for candidate in candidates {
        if let Ok(meta) = tokio::fs::metadata(&candidate).await {
            if meta.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse a section document, picking the format from the file extension.
pub fn parse_section<T: DeserializeOwned>(path: &Path, text: &str) -> Result<SectionDocument<T>, ContentError> {
    let display = path.display().to_string();
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(text)
            .map_err(|source| ContentError::Yaml { path: display, source }),
        _ => serde_json::from_str(text)
            .map_err(|source| ContentError::Json { path: display, source }),
    }
}

/// Load one section document.
pub async fn load_section<T: DeserializeOwned>(
    dir: &Path,
    language: Option<&str>,
    section: Section,
) -> Result<SectionDocument<T>, ContentError> {
    let path = find_section_file(dir, language, section).await.ok_or_else(|| ContentError::Missing {
        section: section.to_string(),
        dir: dir.display().to_string(),
    })?;
    debug!(section = %section, path = %path.display(), "loading section");
    let text = tokio::fs::read_to_string(&path).await.map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_section(&path, &text)
}

fn keep_loaded<T>(section: Section, result: Result<SectionDocument<T>, ContentError>) -> Option<SectionDocument<T>> {
    match result {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(section = %section, error = %e, "failed to load section");
            None
        }
    }
}

/// Load every section concurrently. A section that cannot be loaded is
/// logged and left as `None`; this never fails as a whole.
pub async fn load_content(dir: &Path, language: Option<&str>) -> PortfolioContent {
    let (home, experience, projects, skills, certifications) = tokio::join!(
        load_section::<HomeBlock>(dir, language, Section::Home),
        load_section::<ExperienceRecord>(dir, language, Section::Experience),
        load_section::<ProjectRecord>(dir, language, Section::Projects),
        load_section::<SkillRecord>(dir, language, Section::Skills),
        load_section::<CertificationRecord>(dir, language, Section::Certifications),
    );

    PortfolioContent {
        home: keep_loaded(Section::Home, home),
        experience: keep_loaded(Section::Experience, experience),
        projects: keep_loaded(Section::Projects, projects),
        skills: keep_loaded(Section::Skills, skills),
        certifications: keep_loaded(Section::Certifications, certifications),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_load_content_mixed_formats() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.json"), r#"{"data":[{"content":["Hello"]}]}"#).unwrap();
        fs::write(dir.path().join("skills.yaml"), "data:\n  - title: Rust\n  - name: Go\n").unwrap();
        fs::write(dir.path().join("projects.json"), "{ broken").unwrap();

        let content = load_content(dir.path(), None).await;
        assert_eq!(content.home.as_ref().unwrap().get(0).unwrap().content, vec!["Hello"]);
        assert_eq!(content.skills.as_ref().unwrap().len(), 2);
        assert!(content.projects.is_none());
        assert!(content.experience.is_none());
        assert!(content.certifications.is_none());
    }

    #[tokio::test]
    async fn test_language_directory_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("fr")).unwrap();
        fs::write(dir.path().join("skills.json"), r#"{"data":[{"title":"Rust"}]}"#).unwrap();
        fs::write(dir.path().join("fr").join("skills.json"), r#"{"data":[{"title":"Rouille"}]}"#).unwrap();
        fs::write(dir.path().join("home.json"), r#"{"data":[]}"#).unwrap();

        let content = load_content(dir.path(), Some("fr")).await;
        assert_eq!(content.skills.unwrap().get(0).unwrap().title.as_deref(), Some("Rouille"));
        // falls back to the default file when the language has no override
        assert!(content.home.is_some());
    }

    #[tokio::test]
    async fn test_document_without_data_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.json"), "{}").unwrap();
        fs::write(dir.path().join("skills.yaml"), "title: Rust\n").unwrap();

        let content = load_content(dir.path(), None).await;
        assert!(content.home.is_none());
        assert!(content.skills.is_none());
        assert_eq!(crate::content::format::format_home(content.home.as_ref()), "Welcome!");
        assert_eq!(
            crate::content::format::format_skills(content.skills.as_ref()),
            "Skills information not available."
        );
    }

    #[tokio::test]
    async fn test_find_section_file_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("skills.json")).unwrap();
        fs::write(dir.path().join("skills.yml"), "data: []\n").unwrap();

        let found = find_section_file(dir.path(), Some("fr"), Section::Skills).await;
        assert_eq!(found, Some(dir.path().join("skills.yml")));
    }

    #[tokio::test]
    async fn test_load_section_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_section::<SkillRecord>(dir.path(), None, Section::Skills).await.unwrap_err();
        assert!(matches!(err, ContentError::Missing { .. }));
    }

    #[test]
    fn test_parse_section_yaml_error() {
        let err = parse_section::<SkillRecord>(Path::new("skills.yml"), "data: [unclosed").unwrap_err();
        assert!(matches!(err, ContentError::Yaml { .. }));
    }
}

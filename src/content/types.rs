//! Content Types
//!
//! Serde models for the per-section content documents. Every document has
//! the shape `{ "data": [ ... ] }`; record fields are camelCase on the wire
//! and almost all of them are optional, since the records are hand-written.
//! A document without a `data` list does not load. `null` records keep their
//! slot and are skipped when rendered.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Content loading errors
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("no content file for section '{section}' under {dir}")]
    Missing { section: String, dir: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// The five navigable content areas, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Experience,
    Projects,
    Skills,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Certifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
        }
    }

    /// Look up a section by its position in [`Section::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section '{}'", s))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{ "data": [...] }` section document.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionDocument<T> {
    pub data: Vec<Option<T>>,
}

impl<T> Default for SectionDocument<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T> SectionDocument<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        Self { data: records.into_iter().map(Some).collect() }
    }

    /// Number of slots, `null` records included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The record at `index`, unless that slot is `null`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index).and_then(Option::as_ref)
    }
}

/// A year written either as `2023` or `"2023"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeBlock {
    #[serde(default)]
    pub content: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub name: Option<String>,
    pub company: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub content: Vec<String>,
    pub technologies: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: Option<String>,
    pub name: Option<String>,
    pub year: Option<Scalar>,
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub content: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
}

impl ProjectRecord {
    /// `title`, falling back to `name`.
    pub fn label(&self) -> Option<&str> {
        non_empty(self.title.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillRecord {
    pub title: Option<String>,
    pub name: Option<String>,
}

impl SkillRecord {
    pub fn label(&self) -> Option<&str> {
        non_empty(self.title.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRecord {
    pub title: Option<String>,
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub certificate_url: Option<String>,
}

impl CertificationRecord {
    pub fn label(&self) -> Option<&str> {
        non_empty(self.title.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// All five section documents. `None` marks a section that failed to load.
#[derive(Debug, Clone, Default)]
pub struct PortfolioContent {
    pub home: Option<SectionDocument<HomeBlock>>,
    pub experience: Option<SectionDocument<ExperienceRecord>>,
    pub projects: Option<SectionDocument<ProjectRecord>>,
    pub skills: Option<SectionDocument<SkillRecord>>,
    pub certifications: Option<SectionDocument<CertificationRecord>>,
}

impl PortfolioContent {
    /// Parse one section from JSON text and store it, replacing what was there.
    pub fn set_section_json(&mut self, section: Section, text: &str) -> Result<(), ContentError> {
        let path = format!("<{}>", section);
        let json_err = |source| ContentError::Json { path: path.clone(), source };
        match section {
            Section::Home => self.home = Some(serde_json::from_str(text).map_err(json_err)?),
            Section::Experience => self.experience = Some(serde_json::from_str(text).map_err(json_err)?),
            Section::Projects => self.projects = Some(serde_json::from_str(text).map_err(json_err)?),
            Section::Skills => self.skills = Some(serde_json::from_str(text).map_err(json_err)?),
            Section::Certifications => {
                self.certifications = Some(serde_json::from_str(text).map_err(json_err)?)
            }
        }
        Ok(())
    }

    /// Number of records in a section; 0 for sections that did not load.
    pub fn record_count(&self, section: Section) -> usize {
        match section {
            Section::Home => self.home.as_ref().map_or(0, SectionDocument::len),
            Section::Experience => self.experience.as_ref().map_or(0, SectionDocument::len),
            Section::Projects => self.projects.as_ref().map_or(0, SectionDocument::len),
            Section::Skills => self.skills.as_ref().map_or(0, SectionDocument::len),
            Section::Certifications => self.certifications.as_ref().map_or(0, SectionDocument::len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order_and_names() {
        let names: Vec<&str> = Section::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["home", "experience", "projects", "skills", "certifications"]);
        assert_eq!(Section::from_index(2), Some(Section::Projects));
        assert_eq!(Section::from_index(5), None);
        assert_eq!("skills".parse::<Section>(), Ok(Section::Skills));
        assert!("blog".parse::<Section>().is_err());
    }

    #[test]
    fn test_project_camel_case_and_numeric_year() {
        let doc: SectionDocument<ProjectRecord> = serde_json::from_str(
            r#"{"data":[{"title":"Folio","year":2023,"githubUrl":"https://g","demoUrl":"https://d","extra":true}]}"#,
        )
        .unwrap();
        let p = doc.get(0).unwrap();
        assert_eq!(p.label(), Some("Folio"));
        assert_eq!(p.year.as_ref().unwrap().to_string(), "2023");
        assert_eq!(p.github_url.as_deref(), Some("https://g"));
        assert_eq!(p.demo_url.as_deref(), Some("https://d"));
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let skill = SkillRecord { title: Some(String::new()), name: Some("Rust".into()) };
        assert_eq!(skill.label(), Some("Rust"));
        let empty = SkillRecord::default();
        assert_eq!(empty.label(), None);
    }

    #[test]
    fn test_set_section_json_and_counts() {
        let mut content = PortfolioContent::default();
        content
            .set_section_json(Section::Skills, r#"{"data":[{"title":"Rust"},{"name":"Go"}]}"#)
            .unwrap();
        assert_eq!(content.record_count(Section::Skills), 2);
        assert_eq!(content.record_count(Section::Projects), 0);

        let err = content.set_section_json(Section::Home, "{not json").unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
    }

    #[test]
    fn test_document_without_data_does_not_load() {
        assert!(serde_json::from_str::<SectionDocument<HomeBlock>>("{}").is_err());
        assert!(serde_json::from_str::<SectionDocument<HomeBlock>>(r#"{"data":null}"#).is_err());

        let mut content = PortfolioContent::default();
        assert!(content.set_section_json(Section::Skills, "{}").is_err());
        assert!(content.skills.is_none());
    }

    #[test]
    fn test_null_records_keep_their_slot() {
        let mut content = PortfolioContent::default();
        content
            .set_section_json(Section::Experience, r#"{"data":[null,{"company":"Acme"}]}"#)
            .unwrap();
        let doc = content.experience.as_ref().unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.get(0).is_none());
        assert_eq!(doc.get(1).unwrap().company.as_deref(), Some("Acme"));
        assert_eq!(content.record_count(Section::Experience), 2);
    }
}

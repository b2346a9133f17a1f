//! Plain-text rendering of content records.
//!
//! These strings become the file contents of the virtual file system and the
//! detail pane of the GUI view, so both skins show identical text.

use lazy_static::lazy_static;
use regex_lite::Regex;
use tracing::warn;

use super::types::*;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^}]+)\}\}").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Replace `{{highlight}}` markers with their inner text.
pub fn strip_placeholders(line: &str) -> String {
    PLACEHOLDER.replace_all(line, "$1").into_owned()
}

/// Drop inline HTML tags and `{{highlight}}` markers.
pub fn clean_markup(line: &str) -> String {
    let without_tags = HTML_TAG.replace_all(line, "");
    strip_placeholders(&without_tags)
}

/// Lowercase and turn every whitespace run into `_`.
pub fn slugify(s: &str) -> String {
    WHITESPACE.replace_all(&s.to_lowercase(), "_").into_owned()
}

fn underline(title: &str) -> String {
    "=".repeat(title.chars().count())
}

pub fn format_home(doc: Option<&SectionDocument<HomeBlock>>) -> String {
    let Some(doc) = doc else {
        return "Welcome!".to_string();
    };

    let mut content = String::new();
    for (index, block) in doc.data.iter().enumerate() {
        let Some(block) = block else {
            warn!(index, "null home block, skipped");
            continue;
        };
        for line in &block.content {
            content.push_str(&clean_markup(line));
            content.push('\n');
        }
        content.push('\n');
    }
    content.trim().to_string()
}

/// File name for the experience record at `index` (zero-based position in the document).
pub fn experience_file_name(index: usize, company: &str) -> String {
    format!("{}_{}.txt", index + 1, slugify(company))
}

pub fn format_experience(exp: &ExperienceRecord, company: &str) -> String {
    let mut content = format!("{}\n", non_empty(exp.name.as_deref()).unwrap_or("Position"));
    content.push_str(&format!("Company: {}\n", company));
    content.push_str(&format!("Period: {}\n", non_empty(exp.date.as_deref()).unwrap_or("N/A")));

    if let Some(title) = non_empty(exp.title.as_deref()) {
        content.push_str(&format!("\n{}\n{}\n\n", title, underline(title)));
    }

    for line in &exp.content {
        content.push_str(&format!("• {}\n", strip_placeholders(line)));
    }

    if let Some(technologies) = &exp.technologies {
        content.push_str(&format!("\nTechnologies: {}\n", technologies.join(", ")));
    }

    content
}

/// `(file name, content)` for every experience record that names a company.
pub fn experience_files(doc: Option<&SectionDocument<ExperienceRecord>>) -> Vec<(String, String)> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for (index, exp) in doc.data.iter().enumerate() {
        let Some(company) = exp.as_ref().and_then(|e| non_empty(e.company.as_deref())) else {
            warn!(index, "experience record missing company, skipped");
            continue;
        };
        if let Some(exp) = exp {
            files.push((experience_file_name(index, company), format_experience(exp, company)));
        }
    }
    files
}

pub fn project_file_name(label: &str) -> String {
    format!("{}.txt", slugify(label))
}

pub fn format_project(project: &ProjectRecord, label: &str) -> String {
    let mut content = format!("{}\n{}\n\n", label, underline(label));

    if let Some(year) = &project.year {
        content.push_str(&format!("Built in: {}\n", year));
    }
    if let Some(technologies) = &project.technologies {
        content.push_str(&format!("Technologies: {}\n\n", technologies.join(", ")));
    }

    for line in &project.content {
        content.push_str(&strip_placeholders(line));
        content.push_str("\n\n");
    }

    if let Some(url) = non_empty(project.github_url.as_deref()) {
        content.push_str(&format!("GitHub: {}\n", url));
    }
    if let Some(url) = non_empty(project.demo_url.as_deref()) {
        content.push_str(&format!("Demo: {}\n", url));
    }

    content.trim().to_string()
}

pub fn project_files(doc: Option<&SectionDocument<ProjectRecord>>) -> Vec<(String, String)> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for (index, project) in doc.data.iter().enumerate() {
        let Some(project) = project else {
            warn!(index, "null project record, skipped");
            continue;
        };
        let Some(label) = project.label() else {
            warn!(index, "project record missing title/name, skipped");
            continue;
        };
        files.push((project_file_name(label), format_project(project, label)));
    }
    files
}

pub fn format_skills(doc: Option<&SectionDocument<SkillRecord>>) -> String {
    let Some(doc) = doc else {
        return "Skills information not available.".to_string();
    };

    let mut content = String::from("Technical Skills & Tools\n");
    content.push_str("========================\n\n");

    for (index, skill) in doc.data.iter().enumerate() {
        match skill.as_ref().and_then(SkillRecord::label) {
            Some(label) => content.push_str(&format!("• {}\n", label)),
            None => warn!(index, "skill record missing title/name, skipped"),
        }
    }
    content
}

pub fn format_certification(cert: &CertificationRecord, label: &str) -> String {
    let mut content = format!("• {}\n", label);
    if let Some(issuer) = non_empty(cert.issuer.as_deref()) {
        content.push_str(&format!("  Issuer: {}\n", issuer));
    }
    if let Some(date) = non_empty(cert.date.as_deref()) {
        content.push_str(&format!("  Status: {}\n", date));
    }
    if let Some(url) = non_empty(cert.certificate_url.as_deref()) {
        content.push_str(&format!("  Certificate: {}\n", url));
    }
    content
}

pub fn format_certifications(doc: Option<&SectionDocument<CertificationRecord>>) -> String {
    let Some(doc) = doc else {
        return "Certifications information not available.".to_string();
    };

    let mut content = String::from("Professional Certifications\n");
    content.push_str("===========================\n\n");

    for (index, cert) in doc.data.iter().enumerate() {
        let Some(cert) = cert else {
            warn!(index, "null certification record, skipped");
            continue;
        };
        match cert.label() {
            Some(label) => {
                content.push_str(&format_certification(cert, label));
                content.push('\n');
            }
            None => warn!(index, "certification record missing title/name, skipped"),
        }
    }
    content
}

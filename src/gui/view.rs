//! Plain-text rendering of the GUI skin: sidebar, item lists, detail pane.

use crate::commands::utils::{paint, Style};
use crate::content::format::{format_certification, format_experience, format_home, format_project};
use crate::content::types::non_empty;
use crate::content::{PortfolioContent, Section, SectionDocument};

use super::navigator::Navigator;
use super::pane::ContentPane;

const UNTITLED: &str = "Untitled";
const SEPARATOR_WIDTH: usize = 60;

/// List labels for a section's items.
pub fn item_labels(content: &PortfolioContent, section: Section) -> Vec<String> {
    fn labels<T>(doc: Option<&SectionDocument<T>>, label: impl Fn(&T) -> Option<&str>) -> Vec<String> {
        doc.map(|d| {
            d.data
                .iter()
                .map(|r| r.as_ref().and_then(|r| label(r)).unwrap_or(UNTITLED).to_string())
                .collect()
        })
            .unwrap_or_default()
    }

    match section {
        Section::Home => Vec::new(),
        Section::Experience => labels(content.experience.as_ref(), |e| {
            non_empty(e.company.as_deref()).or_else(|| non_empty(e.name.as_deref()))
        }),
        Section::Projects => labels(content.projects.as_ref(), |p| p.label()),
        Section::Skills => labels(content.skills.as_ref(), |s| s.label()),
        Section::Certifications => labels(content.certifications.as_ref(), |c| c.label()),
    }
}

fn section_loaded(content: &PortfolioContent, section: Section) -> bool {
    match section {
        Section::Home => content.home.is_some(),
        Section::Experience => content.experience.is_some(),
        Section::Projects => content.projects.is_some(),
        Section::Skills => content.skills.is_some(),
        Section::Certifications => content.certifications.is_some(),
    }
}

/// Text shown in the main pane for the selected section and item.
pub fn detail_text(content: &PortfolioContent, section: Section, item_index: usize) -> String {
    if !section_loaded(content, section) {
        return format!(
            "Unable to load {} content.\nPlease try switching languages or reloading the page.",
            section
        );
    }

    let detail = match section {
        Section::Home => Some(format_home(content.home.as_ref())),
        Section::Experience => content
            .experience
            .as_ref()
            .and_then(|d| d.get(item_index))
            .map(|e| format_experience(e, e.company.as_deref().unwrap_or("N/A")).trim_end().to_string()),
        Section::Projects => content
            .projects
            .as_ref()
            .and_then(|d| d.get(item_index))
            .map(|p| format_project(p, p.label().unwrap_or(UNTITLED))),
        Section::Skills => content
            .skills
            .as_ref()
            .and_then(|d| d.get(item_index))
            .map(|s| format!("• {}", s.label().unwrap_or(UNTITLED))),
        Section::Certifications => content
            .certifications
            .as_ref()
            .and_then(|d| d.get(item_index))
            .map(|c| format_certification(c, c.label().unwrap_or(UNTITLED)).trim_end().to_string()),
    };

    detail.unwrap_or_else(|| "Content unavailable for this selection.".to_string())
}

/// Render the whole screen. Updates the pane's content height so scrolling
/// clamps against the current detail text.
pub fn render_view(content: &PortfolioContent, nav: &Navigator, pane: &mut ContentPane, color: bool) -> String {
    let position = nav.current();
    let mut out = String::new();

    for (index, section) in Section::ALL.iter().enumerate() {
        let selected = index == position.section_index;
        let marker = if selected { "*" } else { " " };
        let title = format!("[{}] {}", index + 1, section);
        out.push_str(&format!("{} {}", marker, paint(&title, Style::Directory, color && selected)));
        if selected {
            if let Some(label) = nav.item_label() {
                out.push_str(&format!("  ({})", label));
            }
        }
        out.push('\n');

        for (item_index, label) in item_labels(content, *section).iter().enumerate() {
            let current = selected && item_index == position.item_index;
            let pointer = if current { ">" } else { " " };
            out.push_str(&format!("    {} {}\n", pointer, paint(label, Style::File, color && current)));
        }
    }

    out.push_str(&"─".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    let detail = detail_text(content, nav.section(), position.item_index);
    let lines: Vec<&str> = detail.lines().collect();
    pane.set_content_height(lines.len());
    for line in pane.visible(&lines) {
        out.push_str(line);
        out.push('\n');
    }

    out
}

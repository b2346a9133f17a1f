//! Synthesizes the terminal's directory tree from portfolio content.

use crate::content::format::*;
use crate::content::PortfolioContent;

use super::types::FsEntry;
use super::virtual_fs::join_path;

pub const README: &str = "Welcome to my portfolio!

Navigate using standard Unix commands:
- ls: list files
- cd: change directory
- cat: view file contents
- tree: view directory structure
- pwd: print working directory
- history: show previous commands
- clear: clear the terminal
- help: show available commands
- gui: switch back to GUI mode

Explore the directories to learn more about my experience, projects, and skills!";

pub const SECRETS: &str = "Hmm, you found the hidden file! 🕵️

Some commands aren't what they seem...
Try common typos, get some coffee, or just say hello.
The answer to everything might help.
And remember: with great power comes great responsibility. 😉

(Hint: Not all commands are listed in help!)";

/// Home directory of `owner`.
pub fn home_dir(owner: &str) -> String {
    format!("/home/{}", owner)
}

/// Entries for the whole tree, in display order.
pub fn build_tree(content: &PortfolioContent, owner: &str) -> Vec<(String, FsEntry)> {
    let home = home_dir(owner);
    let mut entries = Vec::new();

    entries.push((join_path(&home, "about.txt"), FsEntry::file(format_home(content.home.as_ref()))));

    let experience = join_path(&home, "experience");
    entries.push((experience.clone(), FsEntry::Directory));
    for (name, text) in experience_files(content.experience.as_ref()) {
        entries.push((join_path(&experience, &name), FsEntry::file(text)));
    }

    let projects = join_path(&home, "projects");
    entries.push((projects.clone(), FsEntry::Directory));
    for (name, text) in project_files(content.projects.as_ref()) {
        entries.push((join_path(&projects, &name), FsEntry::file(text)));
    }

    let skills = join_path(&home, "skills");
    entries.push((skills.clone(), FsEntry::Directory));
    entries.push((
        join_path(&skills, "skills.txt"),
        FsEntry::file(format_skills(content.skills.as_ref())),
    ));

    let certifications = join_path(&home, "certifications");
    entries.push((certifications.clone(), FsEntry::Directory));
    entries.push((
        join_path(&certifications, "certifications.txt"),
        FsEntry::file(format_certifications(content.certifications.as_ref())),
    ));

    entries.push((join_path(&home, "README.md"), FsEntry::file(README)));
    entries.push((join_path(&home, ".secrets"), FsEntry::file(SECRETS)));

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;
    use crate::fs::{FileSystem, VirtualFs};

    fn sample_content() -> PortfolioContent {
        let mut content = PortfolioContent::default();
        content.set_section_json(Section::Home, r#"{"data":[{"content":["Hi there"]}]}"#).unwrap();
        content
            .set_section_json(Section::Experience, r#"{"data":[{"company":"Acme Corp","name":"Dev"}]}"#)
            .unwrap();
        content
            .set_section_json(Section::Projects, r#"{"data":[{"title":"Ray Tracer"},{"name":"Folio"}]}"#)
            .unwrap();
        content
    }

    #[tokio::test]
    async fn test_tree_layout() {
        let fs = VirtualFs::with_entries("/home/sam", build_tree(&sample_content(), "sam"));
        let top = fs.readdir("/home/sam").await.unwrap();
        assert_eq!(
            top,
            vec!["about.txt", "experience", "projects", "skills", "certifications", "README.md", ".secrets"]
        );
        assert_eq!(fs.readdir("/home/sam/experience").await.unwrap(), vec!["1_acme_corp.txt"]);
        assert_eq!(
            fs.readdir("/home/sam/projects").await.unwrap(),
            vec!["ray_tracer.txt", "folio.txt"]
        );
        assert_eq!(fs.read_file("/home/sam/about.txt").await.unwrap(), "Hi there");
    }

    #[tokio::test]
    async fn test_missing_sections_still_build() {
        let fs = VirtualFs::with_entries("/home/sam", build_tree(&PortfolioContent::default(), "sam"));
        assert!(fs.readdir("/home/sam/experience").await.unwrap().is_empty());
        assert_eq!(
            fs.read_file("/home/sam/skills/skills.txt").await.unwrap(),
            "Skills information not available."
        );
        assert_eq!(fs.read_file("/home/sam/about.txt").await.unwrap(), "Welcome!");
        assert!(fs.read_file("/home/sam/.secrets").await.unwrap().contains("hidden file"));
    }
}

//! Tab completion over command names and path segments.

use crate::fs::FileSystem;

/// Commands whose argument completes as a path.
pub const PATH_COMMANDS: &[&str] = &["cd", "ls", "cat", "tree"];

/// What pressing Tab does to the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Replace the whole input line.
    Replace(String),
    /// Ambiguous: show these candidates, leave the input alone.
    Candidates(Vec<String>),
    NoMatch,
}

fn resolve(mut matches: Vec<String>, line: impl Fn(&str) -> String) -> Completion {
    match matches.len() {
        0 => Completion::NoMatch,
        1 => Completion::Replace(line(&matches.remove(0))),
        _ => Completion::Candidates(matches),
    }
}

/// Complete a command name. `names` must be sorted.
pub fn complete_command(prefix: &str, names: &[&str]) -> Completion {
    let matches: Vec<String> = names
        .iter()
        .filter(|name| name.starts_with(prefix))
        .map(|name| name.to_string())
        .collect();
    resolve(matches, |m| format!("{} ", m))
}

/// Children of the directory named by `partial` that extend its last segment.
/// Each match keeps the typed directory part and ends with `/` for directories.
pub async fn path_matches(fs: &dyn FileSystem, cwd: &str, partial: &str) -> Vec<String> {
    let (dir_part, term) = match partial.rfind('/') {
        Some(i) => (&partial[..=i], &partial[i + 1..]),
        None => ("", partial),
    };
    let base = if dir_part.is_empty() {
        cwd.to_string()
    } else {
        fs.resolve_path(cwd, dir_part)
    };

    let entries = match fs.readdir_with_file_types(&base).await {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut matches: Vec<String> = entries
        .iter()
        .filter(|e| e.name.starts_with(term))
        .map(|e| format!("{}{}", dir_part, e.display_name()))
        .collect();
    matches.sort();
    matches
}

/// Complete a whole input line.
pub async fn complete_line(fs: &dyn FileSystem, cwd: &str, names: &[&str], input: &str) -> Completion {
    let parts: Vec<&str> = input.split(' ').collect();
    if parts.len() == 1 {
        return complete_command(parts[0], names);
    }

    let command = parts[0];
    if !PATH_COMMANDS.contains(&command) {
        return Completion::NoMatch;
    }

    let partial = parts[1..].join(" ");
    let matches = path_matches(fs, cwd, &partial).await;
    resolve(matches, |m| format!("{} {}", command, m))
}

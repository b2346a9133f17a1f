//! Builtins that change terminal state rather than print content.

use crate::commands::CommandResult;
use crate::fs::FileSystem;

/// Handled by the terminal before the command registry.
pub const BUILTINS: &[&str] = &["cd", "clear", "gui"];

/// Current and previous working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDir {
    pub cwd: String,
    pub previous: String,
}

impl WorkingDir {
    pub fn new(home: &str) -> Self {
        Self { cwd: home.to_string(), previous: home.to_string() }
    }
}

/// `cd [dir]`. No argument or `~` goes home; `-` returns to the previous
/// directory and prints it.
pub async fn handle_cd(fs: &dyn FileSystem, wd: &mut WorkingDir, args: &[String]) -> CommandResult {
    let mut print_path = false;
    let target = match args.first().map(String::as_str) {
        None | Some("") => "~",
        Some("-") => {
            print_path = true;
            wd.previous.as_str()
        }
        Some(arg) => arg,
    };

    let new_dir = fs.resolve_path(&wd.cwd, target);
    match fs.stat(&new_dir).await {
        Ok(stat) if stat.is_directory => {}
        Ok(_) => return CommandResult::error(format!("cd: {}: Not a directory\n", target)),
        Err(_) => return CommandResult::error(format!("cd: {}: No such file or directory\n", target)),
    }

    wd.previous = std::mem::replace(&mut wd.cwd, new_dir);
    if print_path {
        CommandResult::success(format!("{}\n", wd.cwd))
    } else {
        CommandResult::success(String::new())
    }
}

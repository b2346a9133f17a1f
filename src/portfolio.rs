//! Portfolio
//!
//! Main entry point. Ties together the loaded content, the terminal skin, the
//! GUI navigator and the mode manager.

use tracing::{info, warn};

use crate::config::Config;
use crate::content::{load_content, PortfolioContent};
use crate::gui::{self, ContentPane, KeyInput, NavOutcome, Navigator};
use crate::mode::{FlagStore, Mode, ModeManager, StoreError};
use crate::terminal::{Completion, ExecOutcome, Terminal, TerminalAction};

pub struct Portfolio {
    config: Config,
    content: PortfolioContent,
    terminal: Terminal,
    navigator: Navigator,
    pane: ContentPane,
    modes: ModeManager,
}

impl Portfolio {
    /// Build both skins over `content` and restore the saved mode.
    pub fn new(config: Config, content: PortfolioContent, store: Box<dyn FlagStore>) -> Self {
        let terminal = Terminal::new(&content, config.terminal_options());
        let navigator = Navigator::from_content(&content);
        let pane = ContentPane::new(config.viewport);
        let modes = ModeManager::init(store);

        let mut portfolio = Self { config, content, terminal, navigator, pane, modes };
        if portfolio.mode() == Mode::Terminal {
            portfolio.terminal.print_welcome();
        }
        portfolio
    }

    /// Load content from the configured directory, then build.
    pub async fn load(config: Config, store: Box<dyn FlagStore>) -> Self {
        let content = load_content(&config.content_dir, config.language.as_deref()).await;
        Self::new(config, content, store)
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn toggle_label(&self) -> &'static str {
        self.modes.toggle_label()
    }

    /// Switch skins. Entering the terminal with an empty scrollback prints the
    /// welcome banner.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<bool, StoreError> {
        let changed = self.modes.switch_mode(mode)?;
        if changed && mode == Mode::Terminal && self.terminal.is_scrollback_empty() {
            self.terminal.print_welcome();
        }
        Ok(changed)
    }

    pub fn toggle_mode(&mut self) -> Result<Mode, StoreError> {
        let target = self.mode().other();
        self.switch_mode(target)?;
        Ok(target)
    }

    /// Run a terminal line and apply any mode switch it requests. A switch
    /// that cannot be saved leaves the mode alone and fails the line.
    pub async fn handle_terminal_input(&mut self, input: &str) -> ExecOutcome {
        let mut outcome = self.terminal.execute(input).await;
        if let Some(TerminalAction::SwitchMode(mode)) = outcome.action {
            if let Err(e) = self.switch_mode(mode) {
                warn!(mode = %mode, error = %e, "mode switch not saved");
                let line = self.terminal.push_error(format!("{}: {}", mode, e));
                outcome.lines.push(line);
                outcome.exit_code = 1;
                outcome.action = None;
            }
        }
        outcome
    }

    pub async fn complete(&mut self, input: &str) -> Completion {
        self.terminal.complete(input).await
    }

    fn apply(&mut self, outcome: NavOutcome) -> NavOutcome {
        match outcome {
            NavOutcome::Scroll(direction) => self.pane.scroll(direction),
            NavOutcome::Moved { scroll_to_top: true } => self.pane.scroll_to_top(),
            _ => {}
        }
        outcome
    }

    pub fn handle_key(&mut self, key: &KeyInput) -> NavOutcome {
        let outcome = gui::handle_key(&mut self.navigator, key);
        self.apply(outcome)
    }

    pub fn click_item(&mut self, section_index: usize, item_index: usize) -> NavOutcome {
        let outcome = gui::click_item(&mut self.navigator, section_index, item_index);
        self.apply(outcome)
    }

    pub fn click_section(&mut self, section_index: usize) -> NavOutcome {
        let outcome = gui::click_section(&mut self.navigator, section_index);
        self.apply(outcome)
    }

    pub fn render_gui(&mut self) -> String {
        gui::render_view(&self.content, &self.navigator, &mut self.pane, self.config.color)
    }

    /// Reload content for another language and rebuild both skins over it.
    pub async fn set_language(&mut self, language: Option<&str>) {
        let content = load_content(&self.config.content_dir, language).await;
        self.replace_content(content).await;
        self.config.language = language.map(str::to_string);
        info!(language = language.unwrap_or("default"), "content language changed");
    }

    pub async fn replace_content(&mut self, content: PortfolioContent) {
        self.terminal.rebuild(&content).await;
        self.navigator.set_item_counts(gui::navigator::item_counts(&content));
        self.content = content;
        self.pane.scroll_to_top();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Section;
    use crate::gui::Position;
    use crate::mode::{FileFlagStore, MemoryFlagStore, MODE_KEY};
    use crate::terminal::LineKind;
    use tempfile::TempDir;

    fn config() -> Config {
        Config { color: false, ..Config::default() }
    }

    fn content() -> PortfolioContent {
        let mut content = PortfolioContent::default();
        content.set_section_json(Section::Home, r#"{"data":[{"content":["Hi."]}]}"#).unwrap();
        content
            .set_section_json(Section::Projects, r#"{"data":[{"title":"Folio"},{"title":"Ray Tracer"}]}"#)
            .unwrap();
        content
    }

    #[test]
    fn test_starts_in_gui_without_banner() {
        let portfolio = Portfolio::new(config(), content(), Box::new(MemoryFlagStore::new()));
        assert_eq!(portfolio.mode(), Mode::Gui);
        assert_eq!(portfolio.toggle_label(), "Terminal");
        assert!(portfolio.terminal().is_scrollback_empty());
    }

    #[test]
    fn test_saved_terminal_mode_prints_banner() {
        let store = MemoryFlagStore::with_flag(MODE_KEY, "terminal");
        let portfolio = Portfolio::new(config(), content(), Box::new(store));
        assert_eq!(portfolio.mode(), Mode::Terminal);
        assert!(!portfolio.terminal().is_scrollback_empty());
    }

    #[tokio::test]
    async fn test_banner_only_on_empty_scrollback() {
        let mut portfolio = Portfolio::new(config(), content(), Box::new(MemoryFlagStore::new()));
        assert!(portfolio.switch_mode(Mode::Terminal).unwrap());
        let banner_len = portfolio.terminal().scrollback().len();
        assert!(banner_len > 0);

        portfolio.handle_terminal_input("pwd").await;
        portfolio.switch_mode(Mode::Gui).unwrap();
        portfolio.switch_mode(Mode::Terminal).unwrap();
        assert_eq!(portfolio.terminal().scrollback().len(), banner_len + 2);
    }

    #[tokio::test]
    async fn test_gui_command_switches_mode() {
        let mut portfolio = Portfolio::new(config(), content(), Box::new(MemoryFlagStore::new()));
        portfolio.toggle_mode().unwrap();
        assert_eq!(portfolio.mode(), Mode::Terminal);

        let outcome = portfolio.handle_terminal_input("gui").await;
        assert_eq!(outcome.action, Some(TerminalAction::SwitchMode(Mode::Gui)));
        assert_eq!(portfolio.mode(), Mode::Gui);
    }

    #[test]
    fn test_unsaved_switch_keeps_mode() {
        let dir = TempDir::new().unwrap();
        let store = FileFlagStore::open(dir.path().join("missing").join("state.json")).unwrap();
        let mut portfolio = Portfolio::new(config(), content(), Box::new(store));

        assert!(portfolio.switch_mode(Mode::Terminal).is_err());
        assert_eq!(portfolio.mode(), Mode::Gui);
        assert!(portfolio.terminal().is_scrollback_empty());
    }

    #[tokio::test]
    async fn test_gui_command_reports_unsaved_switch() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("state.json"), r#"{"portfolio-mode":"terminal"}"#).unwrap();
        let store = FileFlagStore::open(dir.path().join("state.json")).unwrap();
        let mut portfolio = Portfolio::new(config(), content(), Box::new(store));
        assert_eq!(portfolio.mode(), Mode::Terminal);

        // the directory disappears, so the next save fails
        drop(dir);
        let outcome = portfolio.handle_terminal_input("gui").await;
        assert_eq!(portfolio.mode(), Mode::Terminal);
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.action, None);
        assert!(outcome.stderr().starts_with("gui: failed to access flag store"));
        assert_eq!(portfolio.terminal().scrollback().last().map(|l| l.kind), Some(LineKind::Error));

        let outcome = portfolio.handle_terminal_input("pwd").await;
        assert_eq!(outcome.exit_code, 0);
    }

    #[test]
    fn test_keys_drive_navigator() {
        let mut portfolio = Portfolio::new(config(), content(), Box::new(MemoryFlagStore::new()));
        portfolio.handle_key(&KeyInput::new("3"));
        portfolio.handle_key(&KeyInput::new("j"));
        assert_eq!(portfolio.navigator().current(), Position { section_index: 2, item_index: 1 });

        let screen = portfolio.render_gui();
        assert!(screen.contains("    > Ray Tracer\n"));
        assert!(screen.contains("Ray Tracer\n==========\n"));

        assert!(matches!(portfolio.click_section(0), NavOutcome::Moved { scroll_to_top: true }));
    }

    #[tokio::test]
    async fn test_set_language_rebuilds() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("projects.json"), r#"{"data":[{"title":"Base"}]}"#).unwrap();
        std::fs::create_dir(dir.path().join("fr")).unwrap();
        std::fs::write(
            dir.path().join("fr").join("projects.json"),
            r#"{"data":[{"title":"Un"},{"title":"Deux"},{"title":"Trois"}]}"#,
        )
        .unwrap();

        let config = Config { content_dir: dir.path().to_path_buf(), ..config() };
        let mut portfolio = Portfolio::load(config, Box::new(MemoryFlagStore::new())).await;
        assert_eq!(portfolio.navigator().item_count(2), 1);

        portfolio.set_language(Some("fr")).await;
        assert_eq!(portfolio.navigator().item_count(2), 3);
        assert_eq!(portfolio.config().language.as_deref(), Some("fr"));

        let outcome = portfolio.handle_terminal_input("ls projects").await;
        assert_eq!(outcome.stdout(), "deux.txt  trois.txt  un.txt\n");
    }
}

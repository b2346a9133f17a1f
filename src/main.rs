use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_shell::gui::{KeyInput, NavOutcome};
use folio_shell::terminal::{LineKind, TerminalAction};
use folio_shell::{Completion, Config, FileFlagStore, FlagStore, MemoryFlagStore, Mode, Portfolio};

#[derive(Parser)]
#[command(name = "folio-shell")]
#[command(about = "A portfolio with a GUI view and a simulated shell")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Directory holding the section documents
    #[arg(long = "content")]
    content: Option<PathBuf>,

    /// Content language (subdirectory of the content directory)
    #[arg(long = "lang")]
    lang: Option<String>,

    /// File the selected mode is persisted to
    #[arg(long = "state")]
    state: Option<PathBuf>,

    /// Start in this mode (gui or terminal) and remember it
    #[arg(long = "mode")]
    mode: Option<Mode>,

    /// Disable ANSI colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Run one terminal line and exit
    #[arg(short = 'c')]
    line: Option<String>,

    /// Print the Tab completion of a terminal line and exit
    #[arg(long = "complete")]
    complete: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,
}

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| fail(e));
    if let Some(dir) = cli.content {
        config.content_dir = dir;
    }
    if cli.lang.is_some() {
        config.language = cli.lang;
    }
    if let Some(state) = cli.state {
        config.state_file = state;
    }
    if cli.no_color {
        config.color = false;
    }

    init_tracing(&config.log_level);

    let one_shot = cli.line.is_some() || cli.complete.is_some();
    let store: Box<dyn FlagStore> = if one_shot {
        Box::new(MemoryFlagStore::new())
    } else {
        match FileFlagStore::open(&config.state_file) {
            Ok(store) => Box::new(store),
            Err(e) => fail(e),
        }
    };

    let mut portfolio = Portfolio::load(config, store).await;

    if let Some(input) = cli.complete {
        print_completion(&mut portfolio, &input, cli.json).await;
        return;
    }

    if let Some(line) = cli.line {
        let code = run_line(&mut portfolio, &line, cli.json).await;
        std::process::exit(code);
    }

    if let Some(mode) = cli.mode {
        if let Err(e) = portfolio.switch_mode(mode) {
            eprintln!("Error: {}", e);
        }
    }

    if let Err(e) = repl(&mut portfolio).await {
        fail(e);
    }
}

async fn print_completion(portfolio: &mut Portfolio, input: &str, json: bool) {
    let completion = portfolio.complete(input).await;
    if json {
        let value = match &completion {
            Completion::Replace(line) => serde_json::json!({"replace": line}),
            Completion::Candidates(matches) => serde_json::json!({"candidates": matches}),
            Completion::NoMatch => serde_json::json!({}),
        };
        println!("{}", value);
        return;
    }
    match completion {
        Completion::Replace(line) => println!("{}", line),
        Completion::Candidates(matches) => println!("{}", matches.join("  ")),
        Completion::NoMatch => {}
    }
}

async fn run_line(portfolio: &mut Portfolio, line: &str, json: bool) -> i32 {
    let outcome = portfolio.handle_terminal_input(line).await;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "stdout": outcome.stdout(),
                "stderr": outcome.stderr(),
                "exitCode": outcome.exit_code,
            })
        );
    } else {
        print!("{}", outcome.stdout());
        eprint!("{}", outcome.stderr());
    }
    outcome.exit_code
}

const GUI_HELP: &str = "keys: h/l sections, j/k items, 1-5 jump, C-d/C-u scroll, click S [I], terminal, q";

/// Interactive loop. Terminal mode reads command lines (a trailing tab asks
/// for completion); GUI mode reads key names and clicks.
async fn repl(portfolio: &mut Portfolio) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let color = portfolio.config().color;

    let mut shown = None;
    loop {
        if shown != Some(portfolio.mode()) {
            shown = Some(portfolio.mode());
            match portfolio.mode() {
                Mode::Terminal => {
                    for line in portfolio.terminal().scrollback() {
                        println!("{}", line.render(color));
                    }
                }
                Mode::Gui => print_gui(portfolio),
            }
        }

        match portfolio.mode() {
            Mode::Terminal => print!("{}", portfolio.terminal().prompt()),
            Mode::Gui => print!("[{}] > ", portfolio.toggle_label()),
        }
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        match portfolio.mode() {
            Mode::Terminal => terminal_input(portfolio, &line, color).await,
            Mode::Gui => {
                if !gui_input(portfolio, line.trim()) {
                    return Ok(());
                }
            }
        }
    }
}

async fn terminal_input(portfolio: &mut Portfolio, line: &str, color: bool) {
    if let Some(partial) = line.strip_suffix('\t') {
        match portfolio.complete(partial).await {
            Completion::Replace(completed) => println!("{}", completed),
            Completion::Candidates(matches) => println!("\n{}", matches.join("  ")),
            Completion::NoMatch => {}
        }
        return;
    }

    let outcome = portfolio.handle_terminal_input(line).await;
    if outcome.action == Some(TerminalAction::Clear) {
        if color {
            print!("\x1b[2J\x1b[H");
        }
        return;
    }
    for line in outcome.lines.iter().filter(|l| l.kind != LineKind::Echo) {
        println!("{}", line.render(color));
    }
}

/// Returns `false` when the user quits.
fn gui_input(portfolio: &mut Portfolio, input: &str) -> bool {
    let mut words = input.split_whitespace();
    match words.next() {
        None => return true,
        Some("q") | Some("quit") => return false,
        Some("terminal") => {
            if let Err(e) = portfolio.switch_mode(Mode::Terminal) {
                eprintln!("Error: {}", e);
            }
            return true;
        }
        Some("click") => {
            let numbers: Vec<usize> = words.filter_map(|w| w.parse().ok()).collect();
            match numbers.as_slice() {
                [section] => {
                    portfolio.click_section(section.saturating_sub(1));
                }
                [section, item, ..] => {
                    portfolio.click_item(section.saturating_sub(1), item.saturating_sub(1));
                }
                [] => println!("usage: click SECTION [ITEM]"),
            }
        }
        Some(_) => {
            if portfolio.handle_key(&KeyInput::parse(input)) == NavOutcome::Ignored {
                println!("{}", GUI_HELP);
                return true;
            }
        }
    }
    print_gui(portfolio);
    true
}

fn print_gui(portfolio: &mut Portfolio) {
    print!("{}", portfolio.render_gui());
}

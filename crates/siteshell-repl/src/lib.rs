//! siteshell REPL — terminal front end for the shell kernel.
//!
//! rustyline reads lines from the terminal and feeds them into the
//! headless [`LineEditor`]; replies from the [`EmbeddedClient`] are
//! rendered back out of the editor's output pane. The same editor type
//! drives any other front end (tests, an embedded panel) unchanged.

pub mod editor;
pub mod history;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::Runtime;

use siteshell_client::{ClientError, ClientResult, EmbeddedClient, ShellClient};
use siteshell_kernel::{KernelConfig, ShellKernel};
use siteshell_types::ExecOutcome;

pub use editor::{LineEditor, OutputLine, ShellReply, Style};
pub use history::{Direction, HistoryBuffer, DEFAULT_MAX_ENTRIES};

/// The prompt, as the original panel showed it.
pub const PROMPT: &str = "wp-cli> ";

/// The banner shown at startup and after every clear.
pub fn welcome_banner() -> String {
    format!(
        "Site Shell [Version {}]\nType 'help' to see available commands.",
        env!("CARGO_PKG_VERSION")
    )
}

/// Map a client reply onto the editor's reply type: execution failures
/// keep their message, transport failures get the generic prefix.
fn map_reply(result: ClientResult<ExecOutcome>) -> ShellReply {
    result.map_err(|err| match err {
        ClientError::Execution(message) => message,
        other => format!("Error: {other}"),
    })
}

/// Run the interactive REPL until exit.
pub fn run(config: KernelConfig) -> Result<()> {
    let kernel = ShellKernel::new(config).context("failed to create kernel")?;
    let client = EmbeddedClient::new(kernel);
    let runtime = Runtime::new().context("failed to create tokio runtime")?;

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("failed to create line editor")?;
    let history_path = on_disk_history_path();
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            let is_not_found =
                matches!(&e, ReadlineError::Io(io) if io.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("failed to load history: {e}");
            }
        }
    }

    let mut shell = LineEditor::new(PROMPT, welcome_banner());
    let mut printed = 0usize;
    flush_output(&mut shell, &mut printed);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }
                if trimmed == "/settings" {
                    let settings = client.kernel().settings();
                    println!("php_binary:  {}", settings.php_binary);
                    println!("wp_cli_path: {}", settings.wp_cli_path);
                    println!("auto_detect: {}", settings.auto_detect);
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("failed to add history entry: {e}");
                }

                shell.set_input(&line);
                let echo_at = shell.output().len();
                if let Some(command) = shell.submit() {
                    // The terminal already shows the prompt and input;
                    // skip the editor's duplicate echo line.
                    printed = echo_at + 1;
                    let reply = runtime.block_on(client.execute(&command));
                    shell.complete(&map_reply(reply));
                }
                flush_output(&mut shell, &mut printed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);
    Ok(())
}

/// Execute one command and exit (the `-c` path).
pub fn run_command(config: KernelConfig, command: &str) -> Result<ExitCode> {
    let kernel = ShellKernel::new(config).context("failed to create kernel")?;
    let client = EmbeddedClient::new(kernel);
    let runtime = Runtime::new().context("failed to create tokio runtime")?;

    match runtime.block_on(client.execute(command)) {
        Ok(ExecOutcome::Output(text)) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Ok(ExecOutcome::ClearScreen) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{}", map_reply(Err(err)).unwrap_err());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print editor output lines the terminal has not seen yet.
fn flush_output(shell: &mut LineEditor, printed: &mut usize) {
    if shell.take_cleared() {
        // ANSI clear + home, then redraw from the top (the banner)
        print!("\x1b[2J\x1b[1;1H");
        *printed = 0;
    }
    let output = shell.output();
    for line in &output[(*printed).min(output.len())..] {
        match line.style {
            Style::Success => println!("{}", line.text),
            Style::Error => eprintln!("{}", line.text),
        }
    }
    *printed = output.len();
}

fn on_disk_history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.data_dir().join("siteshell").join("history.txt"))
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &Option<PathBuf>) {
    if let Some(path) = history_path {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("failed to create history directory: {e}");
            }
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("failed to save history: {e}");
        }
    }
}

//! Front-end integration: LineEditor driving a real kernel through the
//! embedded client, the way any hosting UI would.

use std::sync::Arc;

use siteshell_client::{ClientError, EmbeddedClient, ShellClient};
use siteshell_kernel::{KernelConfig, MemoryBackend, ShellKernel};
use siteshell_repl::{welcome_banner, LineEditor, Style, PROMPT};
use siteshell_types::ExecOutcome;

fn client() -> EmbeddedClient {
    let kernel =
        ShellKernel::with_backend(KernelConfig::default(), Arc::new(MemoryBackend::demo()))
            .unwrap();
    EmbeddedClient::new(kernel)
}

fn editor() -> LineEditor {
    LineEditor::new(PROMPT, welcome_banner())
}

async fn round_trip(editor: &mut LineEditor, client: &EmbeddedClient, line: &str) {
    editor.set_input(line);
    let Some(command) = editor.submit() else {
        return; // rejected or handled locally
    };
    let reply = client
        .execute(&command)
        .await
        .map_err(|e: ClientError| e.to_string());
    editor.complete(&reply);
}

#[tokio::test]
async fn submitted_command_output_lands_in_the_pane() {
    let client = client();
    let mut editor = editor();

    round_trip(&mut editor, &client, "plugin list").await;

    let texts: Vec<&str> = editor.output().iter().map(|l| l.text.as_str()).collect();
    assert!(texts.contains(&"wp-cli> plugin list"));
    assert!(texts.contains(&"Installed plugins:"));
    assert!(texts.contains(&"Hello Dolly (1.7.2) - inactive"));
    assert!(!editor.is_locked());
    assert_eq!(editor.buffer(), "");
}

#[tokio::test]
async fn failure_reply_is_styled_as_error() {
    let client = client();
    let mut editor = editor();

    // "admin" already exists in the demo seed
    round_trip(&mut editor, &client, "user create admin a@b.c pw").await;

    let last_error = editor
        .output()
        .iter()
        .rev()
        .find(|l| l.style == Style::Error)
        .expect("an error line");
    assert_eq!(
        last_error.text,
        "Error creating user: username already exists: admin"
    );
}

#[tokio::test]
async fn mutations_are_visible_to_later_commands() {
    let client = client();
    let mut editor = editor();

    round_trip(&mut editor, &client, r#"option update blogname "Edited Title""#).await;
    round_trip(&mut editor, &client, "option get blogname").await;

    let texts: Vec<&str> = editor.output().iter().map(|l| l.text.as_str()).collect();
    assert!(texts.contains(&"Option updated successfully."));
    assert!(texts.contains(&"Edited Title"));
}

#[tokio::test]
async fn clear_wipes_the_pane_but_not_history() {
    let client = client();
    let mut editor = editor();

    round_trip(&mut editor, &client, "help").await;
    round_trip(&mut editor, &client, "clear").await; // local side channel

    // Just the welcome banner remains
    let banner_lines = welcome_banner().lines().count();
    assert_eq!(editor.output().len(), banner_lines);
    assert!(editor.take_cleared());
    assert_eq!(editor.history().entries(), &["clear", "help"]);
}

#[tokio::test]
async fn second_submit_while_pending_issues_no_backend_call() {
    let client = client();
    let mut editor = editor();

    editor.set_input("site info");
    let command = editor.submit().expect("first submit accepted");

    // Enter pressed again before the reply arrives
    editor.set_input("site url");
    assert_eq!(editor.submit(), None);
    assert_eq!(editor.history().len(), 1);

    let reply = client.execute(&command).await.map_err(|e| e.to_string());
    editor.complete(&reply);
    assert!(!editor.is_locked());

    // Unlocked again: the next submission goes through
    round_trip(&mut editor, &client, "site url").await;
    let texts: Vec<&str> = editor.output().iter().map(|l| l.text.as_str()).collect();
    assert!(texts.contains(&"https://example.test"));
}

#[tokio::test]
async fn unknown_command_renders_as_success_output() {
    let client = client();
    let mut editor = editor();

    round_trip(&mut editor, &client, "frobnicate").await;

    let line = editor
        .output()
        .iter()
        .find(|l| l.text == "Unknown command: frobnicate")
        .expect("unknown-command line");
    assert_eq!(line.style, Style::Success);
}

#[tokio::test]
async fn clear_from_the_backend_resets_the_pane_too() {
    let client = client();
    let mut editor = editor();

    // "wp cls" is not the literal local spelling, so it goes to the kernel
    editor.set_input("wp cls");
    let command = editor.submit().expect("submitted");
    let outcome = client.execute(&command).await.unwrap();
    assert_eq!(outcome, ExecOutcome::ClearScreen);

    editor.complete(&Ok(outcome));
    assert!(editor.take_cleared());
    assert_eq!(editor.output().len(), welcome_banner().lines().count());
}

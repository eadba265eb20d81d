//! Tests for the interactive session loop

use std::io::Cursor;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use paysplit::application::services::CalculatorService;
use paysplit::application::Labels;
use paysplit::cli::session::Session;
use paysplit::domain::{Adjustment, LineItemId};
use paysplit::infrastructure::traits::{IdGenerator, SequentialIds};

/// Ids "a", "b", "c", ... so rows can be addressed by id rather than position.
struct LetterIds(AtomicU8);

impl IdGenerator for LetterIds {
    fn next_id(&self) -> LineItemId {
        let n = self.0.fetch_add(1, Ordering::Relaxed);
        LineItemId::new(((b'a' + n) as char).to_string())
    }
}

fn run_with(ids: Arc<dyn IdGenerator>, script: &str) -> (CalculatorService, String) {
    colored::control::set_override(false);
    let labels = Labels::default();
    let service = CalculatorService::new(ids, Adjustment::from_input(5.0));
    let mut session = Session::new(service, &labels);
    let mut out = Vec::new();

    session
        .run(Cursor::new(script.as_bytes()), &mut out)
        .expect("session runs");

    let transcript = String::from_utf8(out).expect("utf8 output");
    (session.into_service(), transcript)
}

fn run_script(script: &str) -> (CalculatorService, String) {
    run_with(Arc::new(SequentialIds::new()), script)
}

#[test]
fn given_worked_example_script_when_run_then_final_form_shows_figures() {
    let (state, transcript) = run_script("set 1 100\nadd\nset 2 50\nslide 5\nquit\n");

    assert_eq!(state.items().len(), 2);
    assert!(transcript.contains("￥1,650,000"), "{transcript}");
    assert!(transcript.contains("￥1,500,000"));
    assert!(transcript.contains("Partner share (5% + 5万円)"));
    assert!(transcript.contains("￥125,000"));
    assert!(transcript.contains("￥1,525,000"));
}

#[test]
fn given_empty_input_when_run_then_renders_initial_form_once() {
    let (state, transcript) = run_script("");

    assert_eq!(state.items().len(), 1);
    assert_eq!(transcript.matches("Calculator").count(), 1);
    assert!(transcript.contains("e.g. 100"));
    assert!(!transcript.contains("[x]"));
}

#[test]
fn given_second_row_when_rendered_then_delete_affordance_shown() {
    let (_, transcript) = run_script("add\nquit\n");

    let last_form = transcript.rsplit("Calculator").next().expect("form rendered");
    assert_eq!(last_form.matches("[x]").count(), 2);
}

#[test]
fn given_remove_on_last_row_when_run_then_silently_kept() {
    let (state, transcript) = run_script("rm 1\nq\n");

    assert_eq!(state.items().len(), 1);
    assert!(!transcript.contains("Warning"));
}

#[test]
fn given_unknown_row_when_run_then_warns_and_continues() {
    let (state, transcript) = run_script("set 7 10\nset 1 10\n");

    assert!(transcript.contains("Warning: invalid arguments: no row 7"));
    assert_eq!(state.figures().raw_total, 100_000.0);
}

#[test]
fn given_unknown_command_when_run_then_warns_and_continues() {
    let (state, transcript) = run_script("launch\nadd\n");

    assert!(transcript.contains("unknown command: launch"));
    assert_eq!(state.items().len(), 2);
}

#[test]
fn given_invalid_amount_text_when_run_then_counts_as_zero() {
    let (state, transcript) = run_script("set 1 100\nset 1 hello\n");

    assert_eq!(state.figures().raw_total, 0.0);
    assert!(transcript.contains("e.g. 100"));
}

#[test]
fn given_typed_adjustment_when_run_then_unclamped() {
    let (state, transcript) = run_script("adj 30\n");

    assert_eq!(state.adjustment().value(), 30.0);
    assert!(transcript.contains("(5% + 30万円)"));
    assert!(transcript.contains("￥300,000"));
}

#[test]
fn given_help_when_run_then_lists_commands() {
    let (_, transcript) = run_script("help\nexit\n");

    assert!(transcript.contains("slide <value>"));
    assert!(transcript.contains("adj [value]"));
}

#[test]
fn given_commands_after_quit_when_run_then_ignored() {
    let (state, _) = run_script("quit\nadd\n");

    assert_eq!(state.items().len(), 1);
}

#[test]
fn given_row_id_when_remove_then_that_row_gone() {
    let ids = Arc::new(LetterIds(AtomicU8::new(0)));
    let (state, _) = run_with(ids, "add\nadd\nrm b\nset c 3\n");

    let remaining: Vec<_> = state.items().iter().map(|i| i.id.to_string()).collect();
    assert_eq!(remaining, vec!["a", "c"]);
    assert_eq!(state.figures().raw_total, 30_000.0);
}

#[test]
fn given_unknown_id_when_remove_then_warns() {
    let ids = Arc::new(LetterIds(AtomicU8::new(0)));
    let (state, transcript) = run_with(ids, "add\nrm zz\n");

    assert!(transcript.contains("no row with id zz"));
    assert_eq!(state.items().len(), 2);
}

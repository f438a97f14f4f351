//! End-to-end command flow over the in-memory editor.

mod common;

use common::{linkmark_with, ScriptedResolver};
use std::sync::Arc;

use lm_app::{PasteOutcome, RevertOutcome};
use lm_core::document::{LineSpan, Position};
use lm_core::ports::EditorPort;
use lm_platform::InMemoryEditor;

#[tokio::test]
async fn url_paste_inserts_resolved_link_with_title_selected() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::returning(
        "[Example Domain](http://example.com)",
    ));
    let linkmark = linkmark_with("http://example.com", resolver.clone(), editor.clone());

    let outcome = linkmark.paste_link().await.unwrap();

    assert_eq!(outcome, PasteOutcome::LinkInserted);
    assert_eq!(editor.text(), "[Example Domain](http://example.com)");
    assert_eq!(editor.selected_text().as_deref(), Some("Example Domain"));
    assert_eq!(resolver.calls(), 1);
}

#[tokio::test]
async fn plain_text_paste_skips_the_resolver() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::returning("[unused](http://x.com)"));
    let linkmark = linkmark_with("not a url", resolver.clone(), editor.clone());

    let outcome = linkmark.paste_link().await.unwrap();

    assert_eq!(outcome, PasteOutcome::PlainText);
    assert_eq!(editor.text(), "not a url");
    assert_eq!(editor.selection(), None);
    assert_eq!(resolver.calls(), 0);
    assert!(linkmark.session().pending_revert().is_none());
}

#[tokio::test]
async fn failed_resolution_inserts_and_selects_the_fallback() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::failing());
    let linkmark = linkmark_with("http://dead.example", resolver, editor.clone());

    let outcome = linkmark.paste_link().await.unwrap();

    assert_eq!(outcome, PasteOutcome::LinkInserted);
    assert_eq!(editor.text(), "[unknown](http://dead.example)");
    // The whole sentinel is selected, not just the title portion.
    assert_eq!(
        editor.selected_text().as_deref(),
        Some("[unknown](http://dead.example)")
    );
}

#[tokio::test]
async fn escape_reverts_the_inserted_link_to_the_bare_url() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::returning(
        "[Example Domain](http://example.com)",
    ));
    let linkmark = linkmark_with("http://example.com", resolver, editor.clone());

    linkmark.paste_link().await.unwrap();
    let outcome = linkmark.revert_link().await.unwrap();

    assert_eq!(outcome, RevertOutcome::Reverted);
    assert_eq!(editor.text(), "http://example.com");
    assert_eq!(editor.caret(), Position::new(0, 18));
    assert!(linkmark.session().pending_revert().is_none());

    // A second escape has nothing left to act on.
    assert_eq!(linkmark.revert_link().await.unwrap(), RevertOutcome::Idle);
}

#[tokio::test]
async fn escape_reverts_a_fallback_link_right_after_insertion() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::failing());
    let linkmark = linkmark_with("http://dead.example", resolver, editor.clone());

    // The fallback paste leaves the caret one past the `)` (whole sentinel
    // selected); the revert must work from there without moving the caret.
    linkmark.paste_link().await.unwrap();
    let outcome = linkmark.revert_link().await.unwrap();

    assert_eq!(outcome, RevertOutcome::Reverted);
    assert_eq!(editor.text(), "http://dead.example");
    assert_eq!(editor.caret(), Position::new(0, 19));
}

#[tokio::test]
async fn escape_is_a_no_op_once_the_url_was_edited() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::returning(
        "[Example](http://example.com)",
    ));
    let linkmark = linkmark_with("http://example.com", resolver, editor.clone());

    linkmark.paste_link().await.unwrap();

    // User edits the URL inside the link: .com -> .org.
    let line = editor.text();
    let url_at = line.find("http://example.com").unwrap();
    editor
        .replace(
            LineSpan::new(0, url_at, url_at + "http://example.com".len()),
            "http://example.org",
        )
        .await
        .unwrap();

    let outcome = linkmark.revert_link().await.unwrap();

    assert_eq!(outcome, RevertOutcome::Stale);
    assert_eq!(editor.text(), "[Example](http://example.org)");
    assert!(
        linkmark.session().pending_revert().is_some(),
        "failed staleness check must leave the slot pending"
    );
}

#[tokio::test]
async fn tab_jumps_one_past_the_link_and_then_stays_put() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::returning(
        "[Example Domain](http://example.com)",
    ));
    let linkmark = linkmark_with("http://example.com", resolver, editor.clone());

    linkmark.paste_link().await.unwrap();
    linkmark.jump_past_link().await.unwrap();

    let line_len = editor.text().len();
    assert_eq!(editor.caret(), Position::new(0, line_len));
    assert_eq!(editor.selection(), None, "jump collapses the selection");

    // No further `)` on the line: the caret must not move.
    linkmark.jump_past_link().await.unwrap();
    assert_eq!(editor.caret(), Position::new(0, line_len));
}

#[tokio::test]
async fn second_paste_overwrites_the_revert_slot() {
    let editor = Arc::new(InMemoryEditor::new());
    let resolver = Arc::new(ScriptedResolver::returning("[A](http://a.com)"));
    let linkmark = linkmark_with("http://a.com", resolver, editor.clone());

    linkmark.paste_link().await.unwrap();
    let first = linkmark.session().pending_revert().unwrap();

    // Move past the first link, paste again on the same line.
    linkmark.jump_past_link().await.unwrap();
    linkmark.paste_link().await.unwrap();

    let second = linkmark.session().pending_revert().unwrap();
    assert_eq!(first.original_url, second.original_url);
    assert_ne!(first.inserted, second.inserted, "slot must hold the newest insertion");
    assert_eq!(editor.text(), "[A](http://a.com)[A](http://a.com)");
}

use anyhow::Result;
use std::sync::Arc;

use lm_core::document::{find_link_exit, Position};
use lm_core::ports::EditorPort;

/// The tab-navigate command: move the caret one past the next `)` on the
/// current line.
///
/// Independent of the revert state. Any active selection is collapsed to the
/// caret first so it cannot interfere with the search; when no `)` follows,
/// the cursor is left untouched.
pub struct JumpPastLinkUseCase {
    editor: Arc<dyn EditorPort>,
}

impl JumpPastLinkUseCase {
    pub fn new(editor: Arc<dyn EditorPort>) -> Self {
        Self { editor }
    }

    pub async fn execute(&self) -> Result<()> {
        let pos = self.editor.cursor().await?;
        self.editor.collapse_to(pos).await?;

        let line = self.editor.line_text(pos.line).await?;
        if let Some(col) = find_link_exit(&line, pos.col) {
            self.editor
                .collapse_to(Position::new(pos.line, col))
                .await?;
        }
        Ok(())
    }
}

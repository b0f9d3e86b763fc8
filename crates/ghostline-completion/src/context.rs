//! Context window management
//!
//! Maintains, per active document, a capped sliding window of recent
//! lines, a clipped neighborhood snapshot around the cursor, and the
//! accepted-suggestion log, composing them into a prompt context bundle on
//! demand. The manager owns this state exclusively; the host drives it by
//! mapping its editor events onto the methods below — the manager itself
//! has no subscription mechanism.

use tracing::debug;

use crate::history::AcceptedSuggestionLog;
use crate::language::Language;
use crate::types::{DocumentSnapshot, NeighborhoodSnapshot, Position, UserContextBundle};

/// Per-document context state: sliding window, snapshot, accepted log
pub struct ContextWindowManager {
    /// Cap on the sliding window, in lines
    max_window_lines: usize,
    /// Line radius of the neighborhood snapshot
    snapshot_radius: usize,
    window: Vec<String>,
    log: AcceptedSuggestionLog,
    active_document: Option<DocumentSnapshot>,
    cursor: Position,
}

impl ContextWindowManager {
    pub fn new(max_window_lines: usize, snapshot_radius: usize) -> Self {
        Self {
            max_window_lines,
            snapshot_radius,
            window: Vec::new(),
            log: AcceptedSuggestionLog::new(),
            active_document: None,
            cursor: Position::new(0, 0),
        }
    }

    /// Host event: the active document's content changed
    pub fn on_document_changed(&mut self, document: DocumentSnapshot) {
        self.window = window_of(&document, self.max_window_lines);
        debug!(lines = self.window.len(), "sliding window recomputed");
        self.active_document = Some(document);
    }

    /// Host event: a different editor became active
    ///
    /// `None` means focus left every editor; the window empties until a
    /// document is active again.
    pub fn on_editor_changed(&mut self, document: Option<DocumentSnapshot>) {
        match document {
            Some(document) => self.on_document_changed(document),
            None => {
                self.active_document = None;
                self.window.clear();
            }
        }
    }

    /// Host event: the cursor moved
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Replace the sliding window with the document's last lines
    ///
    /// Keeps `min(total_lines, max_window_lines)` lines in document order.
    /// Idempotent: repeated calls with the same document yield the same
    /// window.
    pub fn recompute_window(&mut self, document: &DocumentSnapshot) {
        self.window = window_of(document, self.max_window_lines);
    }

    /// Fresh neighborhood snapshot around `cursor_line`, clipped to the
    /// document bounds
    pub fn recompute_snapshot(
        &self,
        document: &DocumentSnapshot,
        cursor_line: usize,
    ) -> NeighborhoodSnapshot {
        snapshot_of(document, cursor_line, self.snapshot_radius)
    }

    /// Host event: the user accepted a suggestion
    pub fn track_accepted(&mut self, text: String, language: Language) {
        self.log.record(text, language);
    }

    pub fn accepted_log(&self) -> &AcceptedSuggestionLog {
        &self.log
    }

    pub fn window(&self) -> &[String] {
        &self.window
    }

    /// Recompute window and snapshot against the active document and
    /// compose the context bundle
    ///
    /// With no active document the window and snapshot come back empty;
    /// the accepted log passes through untouched.
    pub fn get_context(&mut self) -> UserContextBundle {
        let (window, snapshot) = match &self.active_document {
            Some(document) => (
                window_of(document, self.max_window_lines),
                snapshot_of(document, self.cursor.line, self.snapshot_radius),
            ),
            None => (Vec::new(), NeighborhoodSnapshot::default()),
        };
        self.window = window;

        UserContextBundle {
            recent_lines: self.window.clone(),
            accepted_suggestions: self.log.texts(),
            surrounding_context: snapshot.text,
        }
    }
}

fn window_of(document: &DocumentSnapshot, max_lines: usize) -> Vec<String> {
    let total = document.line_count();
    let keep = total.min(max_lines);
    document.lines()[total - keep..].to_vec()
}

fn snapshot_of(
    document: &DocumentSnapshot,
    cursor_line: usize,
    radius: usize,
) -> NeighborhoodSnapshot {
    let total = document.line_count();
    let end = cursor_line.saturating_add(radius).min(total);
    let start = cursor_line.saturating_sub(radius).min(end);

    let text = document.lines()[start..end].join("\n");
    NeighborhoodSnapshot {
        text,
        start_line: start,
        end_line: end,
    }
}

/// Ghostline Completion Engine
///
/// Post-processing and context assembly for model-generated inline
/// suggestions.
///
/// # Architecture
///
/// The engine sits between the host editor and the external model layer
/// and follows a pipeline architecture:
///
/// 1. **Context Assembly Layer**: Maintain a capped sliding window of
///    recent lines, a clipped neighborhood snapshot around the cursor, and
///    a log of previously accepted suggestions; compose them into a prompt
///    context bundle on demand
/// 2. **Duplication Resolution Layer**: Strip text the raw completion
///    duplicates from what the user already typed, using three layered
///    heuristics (construct signature, partial identifier, keyword
///    boundary)
/// 3. **Formatting Layer**: Classify the line prefix against an ordered
///    rule table and decide whether the completion is inserted inline or
///    on a new line with adjusted indentation
///
/// Invoking the model, parsing its response, editor activation, command
/// wiring, and settings persistence all live in the embedding host; the
/// engine reaches the model only through the [`SuggestionModel`] seam and
/// is driven by explicit method calls mapped from host editor events.
///
/// # Language Support
///
/// Formatting rules and duplication patterns are data tables keyed by
/// language (Rust, TypeScript/JavaScript, Python, Go, Java, Kotlin, Dart).
/// Language-specific rule lists are evaluated before the general list;
/// unknown language tags are valid and use the general rules. Adding a
/// language means adding table rows, not new code paths.
///
/// # Core Components
///
/// ## FormattingEngine
/// Applies the ordered [`RuleTable`] to a line prefix with explicit
/// first-match-wins semantics and derives the formatting decision.
///
/// ## DuplicationResolver
/// Removes prefix/completion overlap. Strategies run in fixed order and
/// the first one producing a strip is final.
///
/// ## ContextWindowManager
/// Owns the per-document sliding window, neighborhood snapshot, and
/// accepted-suggestion log, and composes the [`UserContextBundle`].
///
/// ## CompletionPostProcessor
/// Orchestrates the pipeline and produces the final insertable text,
/// anchored at the request cursor.
///
/// # Example: Post-Processing
///
/// ```ignore
/// use ghostline_completion::{
///     CompletionPostProcessor, EngineConfig, Language, Position,
/// };
/// use tokio_util::sync::CancellationToken;
///
/// let processor = CompletionPostProcessor::new(EngineConfig::default());
/// let cancel = CancellationToken::new();
///
/// let result = processor.post_process(
///     "import React from 'react';",
///     "import ",
///     Language::TypeScript,
///     Position::new(0, 7),
///     &cancel,
/// );
/// assert_eq!(result.text, "\nimport React from 'react';");
/// ```
///
/// # Example: Context Assembly
///
/// ```ignore
/// use ghostline_completion::{ContextWindowManager, DocumentSnapshot, Position};
///
/// let mut manager = ContextWindowManager::new(250, 25);
/// manager.on_document_changed(DocumentSnapshot::from_text("fn main() {}\n"));
/// manager.set_cursor(Position::new(0, 12));
///
/// let bundle = manager.get_context();
/// assert_eq!(bundle.recent_lines.len(), 1);
/// ```
pub mod config;
pub mod context;
pub mod dedup;
pub mod engine;
pub mod history;
pub mod language;
pub mod processor;
pub mod rules;
pub mod types;

// Re-export public types and traits
pub use config::{ConfigFormat, ConfigLoader, EngineConfig};
pub use context::ContextWindowManager;
pub use dedup::DuplicationResolver;
pub use engine::FormattingEngine;
pub use history::{AcceptedSuggestion, AcceptedSuggestionLog};
pub use language::{Language, LanguageDetector};
pub use processor::{CompletionPostProcessor, SuggestionModel};
pub use rules::{FormattingRule, RuleTable};
pub use types::{
    CompletionError, CompletionResult, DocumentSnapshot, FormattingDecision, IndentSettings,
    InsertableCompletion, NeighborhoodSnapshot, Position, UserContextBundle,
};

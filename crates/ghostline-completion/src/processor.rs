//! Completion post-processing orchestration
//!
//! Ties the pipeline together: the context manager builds the prompt
//! context consumed by the external model layer, and a raw completion
//! coming back flows through the duplication resolver and the formatting
//! engine to become final insertable text anchored at the cursor.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::EngineConfig;
use crate::context::ContextWindowManager;
use crate::dedup::DuplicationResolver;
use crate::engine::FormattingEngine;
use crate::language::Language;
use crate::types::{
    CompletionResult, IndentSettings, InsertableCompletion, Position, UserContextBundle,
};

/// Seam to the external model layer
///
/// The engine never invokes the model itself; implementations live in the
/// embedding host. This is the only suspension point in the pipeline.
#[async_trait]
pub trait SuggestionModel: Send + Sync {
    /// Produce a raw completion for the given context
    ///
    /// An empty string is a valid response and signals "no suggestion".
    async fn suggest(
        &self,
        context: &UserContextBundle,
        line_prefix: &str,
        language: Language,
    ) -> CompletionResult<String>;
}

/// Orchestrates context assembly and completion post-processing
pub struct CompletionPostProcessor {
    engine: FormattingEngine,
    resolver: DuplicationResolver,
    context: ContextWindowManager,
    indent: IndentSettings,
}

impl CompletionPostProcessor {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: FormattingEngine::new(config.long_line_threshold),
            resolver: DuplicationResolver::new(),
            context: ContextWindowManager::new(config.max_window_lines, config.snapshot_radius),
            indent: config.indent,
        }
    }

    /// The context manager owned by this processor
    ///
    /// The host maps its editor events (document changed, editor changed,
    /// cursor moved) onto the manager through this accessor.
    pub fn context_mut(&mut self) -> &mut ContextWindowManager {
        &mut self.context
    }

    pub fn context(&self) -> &ContextWindowManager {
        &self.context
    }

    /// Build the context bundle consumed by the model prompt
    pub fn build_prompt_context(&mut self) -> UserContextBundle {
        self.context.get_context()
    }

    /// Turn a raw model completion into final insertable text
    ///
    /// An empty raw completion short-circuits to an empty result before
    /// the resolver or engine runs. A cancelled request is discarded with
    /// no side effect. The anchor always equals `cursor` — only the text
    /// changes, including any leading newline and indentation.
    pub fn post_process(
        &self,
        raw: &str,
        line_prefix: &str,
        language: Language,
        cursor: Position,
        cancel: &CancellationToken,
    ) -> InsertableCompletion {
        if raw.trim().is_empty() {
            return InsertableCompletion::empty(cursor);
        }
        if cancel.is_cancelled() {
            debug!("completion request cancelled, result discarded");
            return InsertableCompletion::empty(cursor);
        }

        let resolved = self.resolver.resolve(line_prefix, raw, language);
        let decision = self.engine.decide(line_prefix, language, &self.indent);

        let text = if decision.insert_on_new_line {
            format!("\n{}{}", decision.indentation, resolved)
        } else {
            resolved
        };

        InsertableCompletion {
            text,
            anchor: cursor,
        }
    }

    /// Host event: the user accepted a suggestion
    ///
    /// A cancelled request never reaches the log.
    pub fn accept(&mut self, text: String, language: Language, cancel: &CancellationToken) {
        if cancel.is_cancelled() {
            debug!("acceptance ignored for cancelled request");
            return;
        }
        self.context.track_accepted(text, language);
    }

    /// Full request flow: context, model call, resolve, decide
    pub async fn complete(
        &mut self,
        model: &dyn SuggestionModel,
        line_prefix: &str,
        language: Language,
        cursor: Position,
        cancel: &CancellationToken,
    ) -> CompletionResult<InsertableCompletion> {
        let bundle = self.build_prompt_context();
        let raw = model.suggest(&bundle, line_prefix, language).await?;
        Ok(self.post_process(&raw, line_prefix, language, cursor, cancel))
    }
}

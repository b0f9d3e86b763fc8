//! Formatting decision engine
//!
//! Applies the ordered rule table to a line prefix and picks a formatting
//! action: insert the completion inline, or on a new line with adjusted
//! indentation. Pure function of its inputs plus the immutable table.

use tracing::trace;

use crate::language::Language;
use crate::rules::RuleTable;
use crate::types::{FormattingDecision, IndentSettings};

/// Decides how a completion should be merged into the document
pub struct FormattingEngine {
    table: &'static RuleTable,
    /// Prefix length (in characters) beyond which a break is forced even
    /// without a pattern match
    long_line_threshold: usize,
}

impl FormattingEngine {
    pub fn new(long_line_threshold: usize) -> Self {
        Self {
            table: RuleTable::builtin(),
            long_line_threshold,
        }
    }

    pub fn with_table(table: &'static RuleTable, long_line_threshold: usize) -> Self {
        Self {
            table,
            long_line_threshold,
        }
    }

    /// Classify `line_prefix` and derive the formatting decision
    ///
    /// Language override rules are evaluated before the general list, each
    /// in declaration order; the first match determines the outcome. On a
    /// break, indentation is the current line's leading whitespace,
    /// extended by one indent unit when the rule asks for it. With no
    /// match the completion stays inline, unless the prefix exceeds the
    /// long-line threshold.
    pub fn decide(
        &self,
        line_prefix: &str,
        language: Language,
        indent: &IndentSettings,
    ) -> FormattingDecision {
        let trimmed = line_prefix.trim();
        if trimmed.is_empty() {
            return FormattingDecision::inline();
        }

        let current_indent = leading_whitespace(line_prefix);

        if let Some(rule) = self.table.first_match(trimmed, language) {
            trace!(
                pattern = rule.pattern.as_str(),
                language = language.as_str(),
                "formatting rule matched"
            );
            if rule.should_break {
                let indentation = if rule.indent_next_line {
                    format!("{}{}", current_indent, indent.indent_unit())
                } else {
                    current_indent.to_string()
                };
                return FormattingDecision::line_break(indentation);
            }
            return FormattingDecision::inline();
        }

        if line_prefix.chars().count() > self.long_line_threshold {
            trace!(
                length = line_prefix.chars().count(),
                threshold = self.long_line_threshold,
                "long line prefix forces break"
            );
            return FormattingDecision::line_break(current_indent.to_string());
        }

        FormattingDecision::inline()
    }
}

/// Leading whitespace of a line
fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

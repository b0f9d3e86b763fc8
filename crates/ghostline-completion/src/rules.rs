//! Ordered formatting rule tables
//!
//! Static configuration data: each rule maps a line-prefix pattern to a
//! formatting action. Declaration order is significant — the first matching
//! rule wins and later rules are never consulted. Language-specific
//! override lists are checked before the general list.
//!
//! Adding a language means adding table rows, not new code paths.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::Language;

/// A single formatting rule
///
/// Patterns are evaluated against the trimmed line prefix.
#[derive(Debug)]
pub struct FormattingRule {
    pub pattern: Regex,
    /// Insert the completion on a new line
    pub should_break: bool,
    /// Extend the new line's indentation by one indent unit
    pub indent_next_line: bool,
}

impl FormattingRule {
    fn new(pattern: &str, should_break: bool, indent_next_line: bool) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("formatting rule pattern must compile"),
            should_break,
            indent_next_line,
        }
    }

    pub fn matches(&self, trimmed_prefix: &str) -> bool {
        self.pattern.is_match(trimmed_prefix)
    }
}

/// Immutable, declaratively ordered rule configuration
///
/// Constructed once at startup; evaluation is a linear scan with explicit
/// first-match-wins semantics.
pub struct RuleTable {
    general: Vec<FormattingRule>,
    overrides: HashMap<Language, Vec<FormattingRule>>,
}

impl RuleTable {
    /// The built-in process-wide table
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN
    }

    pub fn general_rules(&self) -> &[FormattingRule] {
        &self.general
    }

    /// Override rules for a language, empty when none are declared
    pub fn override_rules(&self, language: Language) -> &[FormattingRule] {
        self.overrides
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First matching rule: language overrides first, then the general list
    pub fn first_match(
        &self,
        trimmed_prefix: &str,
        language: Language,
    ) -> Option<&FormattingRule> {
        self.override_rules(language)
            .iter()
            .chain(self.general.iter())
            .find(|rule| rule.matches(trimmed_prefix))
    }
}

static BUILTIN: Lazy<RuleTable> = Lazy::new(|| {
    let general = vec![
        // import / include / using statements
        FormattingRule::new(r"^(import|from|include|#include|using|require|use)\b", true, false),
        // package / namespace declarations
        FormattingRule::new(r"^(package|namespace|module)\b", true, false),
        // decorator / attribute lines
        FormattingRule::new(r"^(@\w+|#\[)", true, false),
        // function / method signatures
        FormattingRule::new(
            r"^(export\s+)?(pub(\([^)]*\))?\s+)?(static\s+)?(async\s+)?(unsafe\s+)?(fn|def|func|function)\b",
            true,
            true,
        ),
        // class / interface / struct / enum / trait declarations
        FormattingRule::new(
            r"^(export\s+)?(pub(\([^)]*\))?\s+)?(abstract\s+)?(data\s+)?(class|interface|struct|enum|trait|impl|object|record)\b",
            true,
            true,
        ),
        // control-flow headers
        FormattingRule::new(
            r"^(if|else|elif|for|while|switch|match|try|catch|finally|do|loop|when|except|with)\b",
            true,
            true,
        ),
        // multi-line method-chain continuations
        FormattingRule::new(r"(\.\w+\(|\.)\s*$", true, true),
        // generic block openers
        FormattingRule::new(r"\{\s*$", true, true),
        // opening array / object / call brackets
        FormattingRule::new(r"[\[\(]\s*$", true, true),
        // trailing binary / assignment operators
        FormattingRule::new(r"[=+*/%<>&|^?:-]\s*$", true, true),
    ];

    let mut overrides = HashMap::new();

    overrides.insert(
        Language::TypeScript,
        vec![
            FormattingRule::new(r"=>\s*\{?\s*$", true, true),
            FormattingRule::new(r"^(export\s+)?(default\s+)?(async\s+)?function\b", true, true),
            FormattingRule::new(
                r"^(export\s+)?(const|let|var)\s+\w+\s*=\s*(async\s+)?\(",
                true,
                true,
            ),
        ],
    );

    overrides.insert(
        Language::Python,
        vec![
            FormattingRule::new(r"^async\s+def\b", true, true),
            FormattingRule::new(r":\s*$", true, true),
        ],
    );

    overrides.insert(
        Language::Rust,
        vec![
            FormattingRule::new(r"^(pub\s+)?(use|mod)\b", true, false),
            FormattingRule::new(r"^#\[", true, false),
            FormattingRule::new(
                r"^(pub(\([^)]*\))?\s+)?(async\s+)?(unsafe\s+)?fn\b",
                true,
                true,
            ),
        ],
    );

    overrides.insert(
        Language::Go,
        vec![
            FormattingRule::new(r"^(package|import)\b", true, false),
            FormattingRule::new(r"^func\b", true, true),
            FormattingRule::new(r"^type\s+\w+\s+(struct|interface)\b", true, true),
        ],
    );

    overrides.insert(
        Language::Java,
        vec![
            FormattingRule::new(r"^@\w+", true, false),
            FormattingRule::new(r"^(public|private|protected)\b", true, true),
        ],
    );

    overrides.insert(
        Language::Kotlin,
        vec![
            FormattingRule::new(r"^(suspend\s+)?fun\b", true, true),
            FormattingRule::new(r"^(data\s+|sealed\s+)?class\b", true, true),
        ],
    );

    overrides.insert(
        Language::Dart,
        vec![
            FormattingRule::new(r"^@\w+", true, false),
            FormattingRule::new(
                r"^(void|int|double|bool|String|Future|Stream)\b[^=;]*\(\s*$",
                true,
                true,
            ),
        ],
    );

    RuleTable { general, overrides }
});

//! Duplication resolution between the typed line prefix and a model completion
//!
//! The model frequently restates part of what the user already typed — it
//! echoes the signature it was asked to complete, or repeats a keyword or
//! partially-typed identifier. Three layered heuristics strip that echo,
//! tried strictly in order; the first one that produces a strip is final
//! and no strategy is retried on its own output within one call.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::language::Language;

/// A language-tagged declaration pattern capturing a trailing identifier
///
/// Patterns are anchored at the start of the trimmed text and capture the
/// declared name in group 1. Matching is attempted for the request language
/// first, then across all languages.
struct DeclarationPattern {
    language: Language,
    pattern: Regex,
}

impl DeclarationPattern {
    fn new(language: Language, pattern: &str) -> Self {
        Self {
            language,
            pattern: Regex::new(pattern).expect("declaration pattern must compile"),
        }
    }
}

static DECLARATION_PATTERNS: Lazy<Vec<DeclarationPattern>> = Lazy::new(|| {
    vec![
        DeclarationPattern::new(
            Language::Rust,
            r"^(?:pub(?:\([^)]*\))?\s+)?(?:async\s+)?(?:unsafe\s+)?fn\s+(\w+)",
        ),
        DeclarationPattern::new(Language::Rust, r"^(?:pub(?:\([^)]*\))?\s+)?struct\s+(\w+)"),
        DeclarationPattern::new(Language::Rust, r"^(?:pub(?:\([^)]*\))?\s+)?enum\s+(\w+)"),
        DeclarationPattern::new(Language::Rust, r"^(?:pub(?:\([^)]*\))?\s+)?trait\s+(\w+)"),
        DeclarationPattern::new(Language::Rust, r"^impl(?:<[^>]*>)?\s+(\w+)"),
        DeclarationPattern::new(Language::Python, r"^(?:async\s+)?def\s+(\w+)"),
        DeclarationPattern::new(Language::Python, r"^class\s+(\w+)"),
        DeclarationPattern::new(
            Language::TypeScript,
            r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(\w+)",
        ),
        DeclarationPattern::new(
            Language::TypeScript,
            r"^(?:export\s+)?(?:abstract\s+)?class\s+(\w+)",
        ),
        DeclarationPattern::new(Language::TypeScript, r"^(?:export\s+)?interface\s+(\w+)"),
        DeclarationPattern::new(
            Language::TypeScript,
            r"^(?:export\s+)?(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s*)?\(",
        ),
        DeclarationPattern::new(Language::Go, r"^func\s+(?:\([^)]*\)\s*)?(\w+)"),
        DeclarationPattern::new(Language::Go, r"^type\s+(\w+)"),
        DeclarationPattern::new(
            Language::Java,
            r"^(?:(?:public|private|protected|static|final|abstract|synchronized)\s+)+[\w<>\[\]]+\s+(\w+)\s*\(",
        ),
        DeclarationPattern::new(
            Language::Java,
            r"^(?:(?:public|private|protected|abstract|final)\s+)*(?:class|interface)\s+(\w+)",
        ),
        DeclarationPattern::new(
            Language::Kotlin,
            r"^(?:(?:suspend|private|public|internal|protected)\s+)*fun\s+(\w+)",
        ),
        DeclarationPattern::new(Language::Kotlin, r"^(?:(?:data|sealed)\s+)?class\s+(\w+)"),
        DeclarationPattern::new(Language::Kotlin, r"^object\s+(\w+)"),
        DeclarationPattern::new(
            Language::Dart,
            r"^(?:void|int|double|bool|String|Future<[^>]*>|Stream<[^>]*>)\s+(\w+)\s*\(",
        ),
        DeclarationPattern::new(Language::Dart, r"^(?:abstract\s+)?class\s+(\w+)"),
    ]
});

/// Reserved words checked by the keyword-boundary strategy
///
/// Covers declaration, control-flow, visibility, and common framework
/// keywords across the supported languages. Import-style statement
/// keywords are deliberately absent: an echoed `import ...` completion is
/// kept whole and placed on its own line by the formatting layer instead.
static RESERVED_KEYWORDS: &[&str] = &[
    // declarations
    "fn", "def", "func", "function", "class", "struct", "enum", "trait", "interface", "impl",
    "object", "type", "let", "const", "var", "val",
    // control flow
    "if", "else", "elif", "for", "while", "switch", "match", "case", "try", "catch", "finally",
    "do", "loop", "when", "return", "break", "continue", "yield", "throw", "await",
    // visibility and modifiers
    "pub", "public", "private", "protected", "internal", "static", "final", "abstract", "async",
    "override", "suspend", "export", "default",
    // framework
    "new", "extends", "implements",
];

static TRAILING_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)$").expect("trailing identifier pattern must compile"));

/// Strips text the completion duplicates from the already-typed prefix
#[derive(Debug, Default)]
pub struct DuplicationResolver;

impl DuplicationResolver {
    pub fn new() -> Self {
        Self
    }

    /// Remove prefix/completion overlap, returning the de-duplicated text
    ///
    /// Strategies are evaluated in fixed order — construct signature,
    /// partial identifier, keyword boundary — and the first one producing
    /// a strip is final. With a whitespace-only prefix, an empty
    /// completion, or no overlap, the completion is returned unchanged.
    pub fn resolve(&self, line_prefix: &str, completion: &str, language: Language) -> String {
        let trimmed_prefix = line_prefix.trim();
        if trimmed_prefix.is_empty() || completion.is_empty() {
            return completion.to_string();
        }

        if let Some(resolved) = strip_construct_signature(trimmed_prefix, completion, language) {
            debug!(strategy = "construct-signature", "stripped completion echo");
            return resolved;
        }
        if let Some(resolved) = strip_partial_identifier(trimmed_prefix, completion) {
            debug!(strategy = "partial-identifier", "stripped completion echo");
            return resolved;
        }
        if let Some(resolved) = strip_leading_keyword(trimmed_prefix, completion) {
            debug!(strategy = "keyword-boundary", "stripped completion echo");
            return resolved;
        }

        completion.to_string()
    }
}

/// Strategy 1: the completion restates a declaration the prefix began
///
/// Both sides must match the same declaration pattern with an identical
/// captured identifier. The echoed prefix segment is stripped from the
/// completion, and leading whitespace trimmed from the remainder.
fn strip_construct_signature(
    trimmed_prefix: &str,
    completion: &str,
    language: Language,
) -> Option<String> {
    let (pattern, prefix_ident) = signature_match(trimmed_prefix, language)?;

    let completion = completion.trim_start();
    let captures = pattern.pattern.captures(completion)?;
    if captures.get(1)?.as_str() != prefix_ident {
        return None;
    }

    let remainder = match completion.strip_prefix(trimmed_prefix) {
        Some(rest) => rest,
        // The echo diverges in spacing or arguments; fall back to the end
        // of the pattern's own match.
        None => &completion[captures.get(0)?.end()..],
    };
    Some(remainder.trim_start().to_string())
}

/// Match `text` against the declaration table: the tagged subset for
/// `language` first, then every pattern in table order
fn signature_match(text: &str, language: Language) -> Option<(&'static DeclarationPattern, String)> {
    let tagged = DECLARATION_PATTERNS
        .iter()
        .filter(|p| p.language == language);
    let all = DECLARATION_PATTERNS.iter();

    for pattern in tagged.chain(all) {
        if let Some(captures) = pattern.pattern.captures(text) {
            if let Some(ident) = captures.get(1) {
                return Some((pattern, ident.as_str().to_string()));
            }
        }
    }
    None
}

/// Strategy 2: the prefix ends in a partially-typed identifier the
/// completion finishes
fn strip_partial_identifier(trimmed_prefix: &str, completion: &str) -> Option<String> {
    let ident = TRAILING_IDENTIFIER
        .captures(trimmed_prefix)?
        .get(1)?
        .as_str();

    let remainder = completion.strip_prefix(ident)?;
    if !continues_identifier(remainder) {
        return None;
    }
    // A remainder that still opens with the identifier would strip again
    // on a later pass; the overlap is ambiguous, keep it.
    if remainder
        .strip_prefix(ident)
        .is_some_and(continues_identifier)
    {
        return None;
    }
    Some(remainder.to_string())
}

/// The next character extends an identifier or opens a bracket token
fn continues_identifier(rest: &str) -> bool {
    matches!(
        rest.chars().next(),
        Some(c) if c == '_' || c.is_alphanumeric() || matches!(c, '(' | '[' | '{')
    )
}

/// Strategy 3: prefix and completion meet on the same reserved word
fn strip_leading_keyword(trimmed_prefix: &str, completion: &str) -> Option<String> {
    for keyword in RESERVED_KEYWORDS {
        if ends_with_word(trimmed_prefix, keyword) && begins_with_word(completion, keyword) {
            return Some(completion[keyword.len()..].trim_start().to_string());
        }
    }
    None
}

fn ends_with_word(text: &str, word: &str) -> bool {
    text.strip_suffix(word)
        .map(|head| !head.chars().next_back().is_some_and(is_word_char))
        .unwrap_or(false)
}

fn begins_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .map(|rest| !rest.chars().next().is_some_and(is_word_char))
        .unwrap_or(false)
}

fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

use std::path::Path;

/// Language identification for the completion engine
///
/// The engine consumes short language tags from the host editor. Absent or
/// unknown tags are valid and fall back to the general rule tables.
use serde::{Deserialize, Serialize};

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    /// TypeScript and JavaScript share one rule set
    TypeScript,
    Python,
    Go,
    Java,
    Kotlin,
    Dart,
    /// Unknown or unsupported language; general rules only
    Unknown,
}

impl Language {
    /// All languages with dedicated rule tables
    pub const ALL: &'static [Language] = &[
        Language::Rust,
        Language::TypeScript,
        Language::Python,
        Language::Go,
        Language::Java,
        Language::Kotlin,
        Language::Dart,
    ];

    /// Resolve an editor language-id tag
    ///
    /// Unrecognized tags map to `Language::Unknown`.
    pub fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "rust" | "rs" => Language::Rust,
            "typescript" | "typescriptreact" | "javascript" | "javascriptreact" | "ts" | "tsx"
            | "js" | "jsx" => Language::TypeScript,
            "python" | "py" => Language::Python,
            "go" => Language::Go,
            "java" => Language::Java,
            "kotlin" | "kt" => Language::Kotlin,
            "dart" => Language::Dart,
            _ => Language::Unknown,
        }
    }

    /// Detect language from a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rs" => Language::Rust,
            "ts" | "tsx" | "js" | "jsx" => Language::TypeScript,
            "py" => Language::Python,
            "go" => Language::Go,
            "java" => Language::Java,
            "kt" | "kts" => Language::Kotlin,
            "dart" => Language::Dart,
            _ => Language::Unknown,
        }
    }

    /// String identifier for this language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Go => "go",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Dart => "dart",
            Language::Unknown => "unknown",
        }
    }
}

/// Language detection from file path with content fallback
pub struct LanguageDetector;

impl LanguageDetector {
    /// Detect language from a file extension
    pub fn from_path(path: &Path) -> Language {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Language::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Detect language from file content (shebang or keyword patterns)
    ///
    /// Pattern checks are ordered most specific first.
    pub fn from_content(content: &str) -> Language {
        if let Some(first_line) = content.lines().next() {
            if first_line.starts_with("#!") {
                if first_line.contains("python") {
                    return Language::Python;
                }
                if first_line.contains("node") || first_line.contains("ts-node") {
                    return Language::TypeScript;
                }
            }
        }

        if content.contains("package ") && content.contains("func ") {
            return Language::Go;
        }
        if content.contains("public class ") || content.contains("public interface ") {
            return Language::Java;
        }
        if content.contains("void main()") {
            return Language::Dart;
        }
        if content.contains("def ") {
            return Language::Python;
        }
        if content.contains("use ") || content.contains("fn ") {
            return Language::Rust;
        }
        if content.contains("export ") || content.contains("import ") {
            return Language::TypeScript;
        }
        if content.contains("fun ") {
            return Language::Kotlin;
        }

        Language::Unknown
    }

    /// Detect from both path and content, preferring the extension
    pub fn detect(path: &Path, content: &str) -> Language {
        let from_ext = Self::from_path(path);
        if from_ext != Language::Unknown {
            return from_ext;
        }
        Self::from_content(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_known_tags() {
        assert_eq!(Language::from_id("rust"), Language::Rust);
        assert_eq!(Language::from_id("typescript"), Language::TypeScript);
        assert_eq!(Language::from_id("typescriptreact"), Language::TypeScript);
        assert_eq!(Language::from_id("javascript"), Language::TypeScript);
        assert_eq!(Language::from_id("python"), Language::Python);
        assert_eq!(Language::from_id("go"), Language::Go);
        assert_eq!(Language::from_id("java"), Language::Java);
        assert_eq!(Language::from_id("kotlin"), Language::Kotlin);
        assert_eq!(Language::from_id("dart"), Language::Dart);
    }

    #[test]
    fn test_from_id_unknown_is_valid() {
        assert_eq!(Language::from_id("cobol"), Language::Unknown);
        assert_eq!(Language::from_id(""), Language::Unknown);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("tsx"), Language::TypeScript);
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("kts"), Language::Kotlin);
        assert_eq!(Language::from_extension("bin"), Language::Unknown);
    }

    #[test]
    fn test_detector_shebang() {
        assert_eq!(
            LanguageDetector::from_content("#!/usr/bin/env python\nprint('hi')"),
            Language::Python
        );
        assert_eq!(
            LanguageDetector::from_content("#!/usr/bin/env node\nconsole.log('hi')"),
            Language::TypeScript
        );
    }

    #[test]
    fn test_detector_content_patterns() {
        assert_eq!(
            LanguageDetector::from_content("use std::io;\nfn main() {}"),
            Language::Rust
        );
        assert_eq!(
            LanguageDetector::from_content("package main\nfunc main() {}"),
            Language::Go
        );
        assert_eq!(
            LanguageDetector::from_content("public class Main {}"),
            Language::Java
        );
        assert_eq!(
            LanguageDetector::from_content("fun main() {}"),
            Language::Kotlin
        );
    }

    #[test]
    fn test_detector_prefers_extension() {
        assert_eq!(
            LanguageDetector::detect(Path::new("main.rs"), "def hello(): pass"),
            Language::Rust
        );
        assert_eq!(
            LanguageDetector::detect(Path::new("main.mystery"), "def hello(): pass"),
            Language::Python
        );
    }
}

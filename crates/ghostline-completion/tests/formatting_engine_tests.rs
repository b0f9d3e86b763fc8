/// Integration tests for formatting decisions over the public API
use ghostline_completion::{FormattingEngine, IndentSettings, Language, RuleTable};

fn spaces(tab_size: usize) -> IndentSettings {
    IndentSettings {
        insert_spaces: true,
        tab_size,
    }
}

#[test]
fn test_import_statement_breaks_without_indent() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("import ", Language::TypeScript, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "");
}

#[test]
fn test_control_flow_breaks_with_one_indent_unit() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("  if (x > 0) ", Language::TypeScript, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "  ".to_string() + "    ");
}

#[test]
fn test_python_block_header_uses_override() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("    def process(self):", Language::Python, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "        ");
}

#[test]
fn test_typescript_arrow_head_breaks() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("const add = (a, b) =>", Language::TypeScript, &spaces(2));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "  ");
}

#[test]
fn test_rust_attribute_breaks_without_indent() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("#[derive(Debug)]", Language::Rust, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "");
}

#[test]
fn test_go_func_breaks_with_indent() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("func main() ", Language::Go, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "    ");
}

#[test]
fn test_plain_expression_stays_inline() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("total += amount;", Language::TypeScript, &spaces(4));

    assert!(!decision.insert_on_new_line);
    assert_eq!(decision.indentation, "");
}

#[test]
fn test_trailing_assignment_operator_breaks() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("let total =", Language::TypeScript, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "    ");
}

#[test]
fn test_method_chain_continuation_breaks() {
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("  client.request(", Language::TypeScript, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "      ");
}

#[test]
fn test_long_prefix_forces_break_without_rule_match() {
    let engine = FormattingEngine::new(40);
    let prefix = format!("    {};", "x".repeat(60));
    let decision = engine.decide(&prefix, Language::Unknown, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "    ");
}

#[test]
fn test_short_unmatched_prefix_stays_inline_with_custom_threshold() {
    let engine = FormattingEngine::new(40);
    let decision = engine.decide("short;", Language::Unknown, &spaces(4));

    assert!(!decision.insert_on_new_line);
}

#[test]
fn test_earliest_matching_rule_decides() {
    // "import {" matches both the import rule and the block-opener rule;
    // the import rule is declared first, so no extra indent is added.
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("import {", Language::TypeScript, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "");
}

#[test]
fn test_java_member_head_uses_override() {
    // Only the Java override recognizes a bare visibility-modifier head;
    // the general list has no rule for it.
    let engine = FormattingEngine::new(120);
    let decision = engine.decide("public int count", Language::Java, &spaces(4));

    assert!(decision.insert_on_new_line);
    assert_eq!(decision.indentation, "    ");

    let without_override = engine.decide("public int count", Language::Unknown, &spaces(4));
    assert!(!without_override.insert_on_new_line);
}

#[test]
fn test_custom_table_is_honored() {
    let decision = FormattingEngine::with_table(RuleTable::builtin(), 120).decide(
        "class Config",
        Language::Unknown,
        &spaces(4),
    );
    assert!(decision.insert_on_new_line);
}

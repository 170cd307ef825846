#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::scanner::{AnchorScanner, slice_value};
use super::value::{
    call_expression, char_literal, is_call_shaped, is_self_contained_literal,
    remove_first_parens, simple_expression, string_literal,
};
use super::*;
use crate::error::DefaultValueError;
use crate::symbols::{DeclarationTable, Visibility};

// ============================================================================
// Anchor scanner
// ============================================================================

#[test]
fn test_scanner_walks_stages_in_order() {
    let mut scanner = AnchorScanner::new("val flag: Boolean = true");
    assert_eq!(scanner.stage(), ScanStage::SeekName);
    scanner.expect("flag").unwrap();
    assert_eq!(scanner.stage(), ScanStage::SeekSeparator);
    scanner.expect(":").unwrap();
    assert_eq!(scanner.stage(), ScanStage::SeekType);
    scanner.expect("Boolean").unwrap();
    assert_eq!(scanner.stage(), ScanStage::SeekAssignment);
    scanner.expect("=").unwrap();
    assert_eq!(scanner.stage(), ScanStage::ScanningValue);
    assert_eq!(scanner.rest(), "true");
}

#[test]
fn test_scanner_never_looks_behind_cursor() {
    // The separator exists, but only before the name
    let mut scanner = AnchorScanner::new(": flag Boolean = true");
    scanner.expect("flag").unwrap();
    let err = scanner.expect(":").unwrap_err();
    match err {
        DefaultValueError::AnchorNotFound { anchor, stage, .. } => {
            assert_eq!(anchor, ":");
            assert_eq!(stage, ScanStage::SeekSeparator);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_scanner_rejects_empty_anchor() {
    let mut scanner = AnchorScanner::new("val x: Int = 1");
    assert!(scanner.expect("").is_err());
}

#[test]
fn test_slice_value_skips_blanks_after_assignment() {
    let value = slice_value("  size: Int =  \t 42,", "size", ":", "Int", "=").unwrap();
    assert_eq!(value, "42,");
}

#[test]
fn test_slice_value_missing_type_reports_stage() {
    let err = slice_value("val size: Long = 1", "size", ":", "Int", "=").unwrap_err();
    assert!(matches!(
        err,
        DefaultValueError::AnchorNotFound {
            stage: ScanStage::SeekType,
            ..
        }
    ));
    assert!(err.to_string().contains("seeking the declared type"));
}

#[test]
fn test_slice_value_without_assignment() {
    let err = slice_value("val size: Int,", "size", ":", "Int", "=").unwrap_err();
    assert!(matches!(
        err,
        DefaultValueError::AnchorNotFound {
            stage: ScanStage::SeekAssignment,
            ..
        }
    ));
}

#[test]
fn test_slice_value_nothing_after_assignment() {
    let err = slice_value("val size: Int =   ", "size", ":", "Int", "=").unwrap_err();
    assert!(matches!(err, DefaultValueError::EmptyDefaultValue { .. }));
}

// ============================================================================
// String literals
// ============================================================================

#[test]
fn test_string_literal_plain() {
    assert_eq!(string_literal(r#""hello", next: Int = 1"#).unwrap(), r#""hello""#);
}

#[test]
fn test_string_literal_with_escaped_quotes() {
    assert_eq!(
        string_literal(r#""say \"hi\"", x: Int = 2)"#).unwrap(),
        r#""say \"hi\"""#
    );
}

#[test]
fn test_string_literal_ending_in_escaped_backslash() {
    assert_eq!(string_literal(r#""C:\\", y"#).unwrap(), r#""C:\\""#);
}

#[test]
fn test_string_literal_empty() {
    assert_eq!(string_literal(r#""","#).unwrap(), r#""""#);
}

#[test]
fn test_raw_string_literal() {
    assert_eq!(
        string_literal(r#""""a "quoted" \ word""", b"#).unwrap(),
        r#""""a "quoted" \ word""""#
    );
}

#[test]
fn test_unterminated_string_literal() {
    let err = string_literal(r#""never \" closed"#).unwrap_err();
    assert!(matches!(err, DefaultValueError::UnterminatedStringLiteral { .. }));
}

#[test]
fn test_char_literal_containing_separators() {
    assert_eq!(char_literal("',', next: Int = 1").unwrap(), "','");
    assert_eq!(char_literal("' ')").unwrap(), "' '");
    assert_eq!(char_literal("'(',").unwrap(), "'('");
    assert_eq!(char_literal(r"'\'', x").unwrap(), r"'\''");
    assert_eq!(char_literal(r"'\\')").unwrap(), r"'\\'");
}

#[test]
fn test_unterminated_char_literal() {
    let err = char_literal("'a").unwrap_err();
    assert!(matches!(err, DefaultValueError::UnterminatedStringLiteral { .. }));
}

// ============================================================================
// Expression shapes
// ============================================================================

#[test]
fn test_call_shape_detection() {
    assert!(is_call_shaped("Foo()"));
    assert!(is_call_shaped("Foo(,"));
    assert!(is_call_shaped("Foo.bar()"));
    assert!(!is_call_shaped("Foo) {"));
    assert!(!is_call_shaped("Foo) = Bar()"));
    assert!(!is_call_shaped("Color.Red"));
}

#[test]
fn test_call_expression_cuts_after_balanced_parens() {
    assert_eq!(call_expression("Foo(), other: Int = 1").unwrap(), "Foo()");
    assert_eq!(call_expression("Foo()) {").unwrap(), "Foo()");
    assert_eq!(call_expression("Foo()").unwrap(), "Foo()");
}

#[test]
fn test_call_expression_keeps_chained_member_access() {
    assert_eq!(call_expression("Foo().bar, x").unwrap(), "Foo().bar");
    assert_eq!(call_expression("Foo().bar()) {}").unwrap(), "Foo().bar()");
}

#[test]
fn test_call_expression_keeps_arguments_with_spaces() {
    assert_eq!(call_expression("listOf(1, 2, 3), x").unwrap(), "listOf(1, 2, 3)");
}

#[test]
fn test_call_expression_unclosed_is_multiline() {
    let err = call_expression("Foo(").unwrap_err();
    assert!(matches!(err, DefaultValueError::UnsupportedMultilineCall { .. }));

    let err = call_expression("Bar(Foo(),").unwrap_err();
    assert!(matches!(err, DefaultValueError::UnsupportedMultilineCall { .. }));
}

#[test]
fn test_simple_expression_terminators() {
    assert_eq!(simple_expression("Color.Red"), "Color.Red");
    assert_eq!(simple_expression("Color.Red,"), "Color.Red");
    assert_eq!(simple_expression("Color.Red)"), "Color.Red");
    assert_eq!(simple_expression("42 // answer"), "42");
    assert_eq!(simple_expression("42// answer"), "42");
    assert_eq!(simple_expression("42/* answer */"), "42");
    assert_eq!(simple_expression("a\tb"), "a");
}

#[test]
fn test_self_contained_literals() {
    assert!(is_self_contained_literal("42"));
    assert!(is_self_contained_literal("1.5f"));
    assert!(is_self_contained_literal("0xFF"));
    assert!(is_self_contained_literal("-1"));
    assert!(is_self_contained_literal("+2.5"));
    assert!(!is_self_contained_literal("Color.Red"));
    assert!(!is_self_contained_literal("-offset"));
}

#[test]
fn test_remove_first_parens() {
    assert_eq!(remove_first_parens("Foo()"), "Foo");
    assert_eq!(remove_first_parens("Foo().bar()"), "Foo.bar()");
    assert_eq!(remove_first_parens("Bar(Foo())"), "Bar)");
    assert_eq!(remove_first_parens("Color.Red"), "Color.Red");
}

// ============================================================================
// Import resolution
// ============================================================================

fn read(
    table: &DeclarationTable,
    line: &str,
    imports: &[&str],
    name: &str,
    ty: &str,
) -> Result<ResolvedDefaultValue> {
    let imports: Vec<ImportStatement> =
        imports.iter().copied().map(ImportStatement::from).collect();
    DefaultValueReader::default().read_default_value(table, line, "com.app", &imports, name, ty)
}

#[test]
fn test_importable_symbol() {
    assert_eq!(DefaultValueReader::importable_symbol("Color.Red", "").unwrap(), "Color");
    assert_eq!(DefaultValueReader::importable_symbol("Foo()", "").unwrap(), "Foo");
    assert_eq!(
        DefaultValueReader::importable_symbol("emptyList<String>()", "").unwrap(),
        "emptyList"
    );
    assert!(DefaultValueReader::importable_symbol("listOf(1)", "").is_err());
}

#[test]
fn test_explicit_import_wins_over_same_package() {
    let table = DeclarationTable::new().with("com.app", "Color", Visibility::Public);
    let value = read(
        &table,
        "val color: Color = Color.Red",
        &["com.pkg.Color"],
        "color",
        "Color",
    )
    .unwrap();
    assert_eq!(value.required_imports, ["com.pkg.Color"]);
    assert_eq!(value.resolution, Resolution::ExplicitImport);
}

#[test]
fn test_first_matching_explicit_import_is_used() {
    let value = read(
        &DeclarationTable::new(),
        "val color: Color = Color.Red",
        &["a.Color", "b.Color"],
        "color",
        "Color",
    )
    .unwrap();
    assert_eq!(value.required_imports, ["a.Color"]);
}

#[test]
fn test_same_package_symbol_needs_no_import() {
    let table = DeclarationTable::new().with("com.app", "Defaults", Visibility::Internal);
    let value = read(
        &table,
        "val size: Int = Defaults.SIZE",
        &["com.other.*"],
        "size",
        "Int",
    )
    .unwrap();
    assert_eq!(value.expression_text, "Defaults.SIZE");
    assert!(value.required_imports.is_empty());
    assert_eq!(value.resolution, Resolution::SamePackage);
}

#[test]
fn test_same_package_qualify_policy() {
    let table = DeclarationTable::new().with("com.app", "Defaults", Visibility::Public);
    let reader = DefaultValueReader::new(
        ReaderOptions::default().with_same_package_policy(SamePackagePolicy::Qualify),
    );
    let value = reader
        .read_default_value(
            &table,
            "val size: Int = Defaults.SIZE",
            "com.app",
            &[],
            "size",
            "Int",
        )
        .unwrap();
    assert_eq!(value.required_imports, ["com.app.Defaults"]);
    assert_eq!(value.resolution, Resolution::SamePackage);
}

#[test]
fn test_single_wildcard_provider() {
    let table = DeclarationTable::new()
        .with("com.theme", "Palette", Visibility::Public)
        .with("com.widgets", "Button", Visibility::Public);
    let value = read(
        &table,
        "val palette: Palette = Palette.Dark",
        &["com.widgets.*", "com.theme.*"],
        "palette",
        "Palette",
    )
    .unwrap();
    assert_eq!(value.required_imports, ["com.theme.*"]);
    assert_eq!(value.resolution, Resolution::WildcardImport);
}

#[test]
fn test_private_wildcard_symbol_is_not_a_provider() {
    let table = DeclarationTable::new()
        .with("com.theme", "Palette", Visibility::Private)
        .with("com.legacy", "Palette", Visibility::Public);
    let value = read(
        &table,
        "val palette: Palette = Palette.Dark",
        &["com.theme.*", "com.legacy.*"],
        "palette",
        "Palette",
    )
    .unwrap();
    assert_eq!(value.required_imports, ["com.legacy.*"]);
}

#[test]
fn test_ambiguous_wildcards_fall_back_to_all() {
    let table = DeclarationTable::new()
        .with("com.a", "Palette", Visibility::Public)
        .with("com.b", "Palette", Visibility::Public);
    let value = read(
        &table,
        "val palette: Palette = Palette.Dark",
        &["com.a.*", "com.x.Other", "com.b.*"],
        "palette",
        "Palette",
    )
    .unwrap();
    assert_eq!(value.required_imports, ["com.a.*", "com.b.*"]);
    assert_eq!(value.resolution, Resolution::AmbiguousImportFallback);
    assert!(value.resolution.is_fallback());
}

#[test]
fn test_unknown_symbol_falls_back_to_all_wildcards() {
    let value = read(
        &DeclarationTable::new(),
        "val mode: Mode = Mode.Auto",
        &["com.a.*"],
        "mode",
        "Mode",
    )
    .unwrap();
    assert_eq!(value.required_imports, ["com.a.*"]);
    assert_eq!(value.resolution, Resolution::AmbiguousImportFallback);
}

#[test]
fn test_builtin_constructor_needs_no_import() {
    let value = read(
        &DeclarationTable::new(),
        "val items: ArrayList<Int> = arrayListOf()",
        &["com.a.*"],
        "items",
        "ArrayList<Int>",
    )
    .unwrap();
    assert_eq!(value.expression_text, "arrayListOf()");
    assert!(value.required_imports.is_empty());
    assert_eq!(value.resolution, Resolution::Builtin);
}

#[test]
fn test_configured_builtin_constructor() {
    let reader = DefaultValueReader::new(
        ReaderOptions::default().with_builtin_constructor("mutableListOf"),
    );
    let value = reader
        .read_default_value(
            &DeclarationTable::new(),
            "val items: MutableList<Int> = mutableListOf()",
            "com.app",
            &[],
            "items",
            "MutableList<Int>",
        )
        .unwrap();
    assert_eq!(value.resolution, Resolution::Builtin);
}

#[test]
fn test_private_same_package_symbol_is_rejected() {
    let table = DeclarationTable::new().with("com.app", "Hidden", Visibility::Private);
    let err = read(&table, "val x: Int = Hidden.VALUE", &[], "x", "Int").unwrap_err();
    match err {
        DefaultValueError::InaccessibleDefaultValueSymbol { symbol, package, .. } => {
            assert_eq!(symbol, "Hidden");
            assert_eq!(package, "com.app");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unique_wildcard_provider_beats_private_local() {
    let table = DeclarationTable::new()
        .with("com.app", "Hidden", Visibility::Private)
        .with("com.lib", "Hidden", Visibility::Public);
    let value = read(&table, "val x: Int = Hidden.VALUE", &["com.lib.*"], "x", "Int").unwrap();
    assert_eq!(value.required_imports, ["com.lib.*"]);
}

#[test]
fn test_custom_literal_keyword() {
    let mut options = ReaderOptions::default();
    options.literal_keywords.push("Unit".to_string());
    let value = DefaultValueReader::new(options)
        .read_default_value(
            &DeclarationTable::new(),
            "val u: Unit = Unit",
            "com.app",
            &[],
            "u",
            "Unit",
        )
        .unwrap();
    assert_eq!(value.resolution, Resolution::Literal);
}

#[test]
fn test_resolution_display() {
    assert_eq!(
        Resolution::AmbiguousImportFallback.to_string(),
        "ambiguous import fallback"
    );
    assert_eq!(Resolution::ExplicitImport.to_string(), "explicit import");
}

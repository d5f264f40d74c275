//! Golden snapshot tests for generated test sources
//!
//! These tests scaffold the `.cs` files in `tests/fixtures` and compare the generated sources against stored
//! snapshots. This ensures output changes are reviewed and intentional.
//!
//! Run with: `cargo test --test snapshot_tests`
//! Review changes: `cargo insta review`

use std::fs;

use testgen::scaffold::{GeneratedTest, ScaffoldEngine};

/// Load a source file from the fixtures directory
fn load_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}.cs", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

/// Scaffold a fixture that declares exactly one qualifying class
fn generate_single(name: &str) -> GeneratedTest {
    let mut tests = ScaffoldEngine::default()
        .generate(&load_fixture(name))
        .expect("fixture should parse");
    assert_eq!(tests.len(), 1, "expected one generated test for {name}");
    tests.remove(0)
}

#[test]
fn test_dependencies_snapshot() {
    let test = generate_single("dependencies");
    assert_eq!(test.qualified_name, "Bebra.Bebra1.Bebra2.Tests.BebraClassTests");
    insta::assert_snapshot!("dependencies", test.source);
}

#[test]
fn test_overloads_snapshot() {
    let test = generate_single("overloads");
    assert_eq!(test.qualified_name, "SecondNs.Second.InnerNs.Tests.ProgramTests");
    insta::assert_snapshot!("overloads", test.source);
}

#[test]
fn test_file_scoped_snapshot() {
    let test = generate_single("file_scoped");
    assert_eq!(test.qualified_name, "Shop.Billing.Tests.InvoiceServiceTests");
    insta::assert_snapshot!("file_scoped", test.source);
}

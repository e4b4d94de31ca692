//! Fixture-driven keyword suites.
//!
//! Each file under `tests/suites/` holds an array of test groups. A group
//! carries a schema, a description, and a list of `{description, data,
//! valid}` cases. For every group the harness runs the full pipeline —
//! parse the schema into a fresh context, register it as the root, resolve
//! refs — and then asserts each case's validation outcome.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use jsv_schema::{parse_schema_from_value, resolve_refs, validate_value, Context};

#[derive(Debug, Deserialize)]
struct SuiteGroup {
    description: String,
    schema: Value,
    tests: Vec<SuiteCase>,
}

#[derive(Debug, Deserialize)]
struct SuiteCase {
    description: String,
    data: Value,
    valid: bool,
}

fn suite_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/suites")
        .join(name)
}

fn run_suite(name: &str) {
    let path = suite_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let groups: Vec<SuiteGroup> = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()));
    assert!(!groups.is_empty(), "{name}: suite is empty");

    for group in &groups {
        let mut ctx = Context::new();
        let root = parse_schema_from_value(&group.schema, &mut ctx)
            .unwrap_or_else(|e| panic!("{name} / {}: schema failed to parse: {e}", group.description));
        ctx.set_root(root);
        resolve_refs(root, &mut ctx).unwrap_or_else(|e| {
            panic!("{name} / {}: ref resolution failed: {e}", group.description)
        });

        for case in &group.tests {
            let result = validate_value(&case.data, root, &ctx);
            assert_eq!(
                result.is_ok(),
                case.valid,
                "{name} / {} / {}: expected valid={}, got {result:?}",
                group.description,
                case.description,
                case.valid,
            );
        }
    }
}

#[test]
fn type_suite() {
    run_suite("type.json");
}

#[test]
fn string_suite() {
    run_suite("string.json");
}

#[test]
fn numeric_suite() {
    run_suite("numeric.json");
}

#[test]
fn object_suite() {
    run_suite("object.json");
}

#[test]
fn array_suite() {
    run_suite("array.json");
}

#[test]
fn composition_suite() {
    run_suite("composition.json");
}

#[test]
fn enum_const_suite() {
    run_suite("enum_const.json");
}

#[test]
fn ref_suite() {
    run_suite("ref.json");
}

#[test]
fn boolean_schema_suite() {
    run_suite("boolean_schema.json");
}

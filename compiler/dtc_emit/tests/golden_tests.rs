//! Golden tests for the shipped catalogs.
//!
//! The files in `tests/golden/` are the exact artifacts for the `core`
//! (factory calls) and `prefix` (direct calls) catalogs. Downstream tooling
//! diffs generated fragments, so any change here is a visible change to the
//! runtime's dispatch code.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use dtc_build::build_catalog;
use dtc_emit::{emit_dispatch, CallForm, Layout};
use dtc_ir::{names, Catalog};
use pretty_assertions::assert_eq;

fn generate(label: &str, names: &[&str], form: CallForm, layout: Layout) -> String {
    let catalog = Catalog::new(label, names.iter().copied()).unwrap();
    let tree = build_catalog(&catalog);
    emit_dispatch(&tree, form.renderer(), layout)
}

#[test]
fn core_compact() {
    let code = generate("core", names::CORE, CallForm::Factory, Layout::Compact);
    assert_eq!(code, include_str!("golden/core.compact.txt"));
}

#[test]
fn core_pretty() {
    let code = generate("core", names::CORE, CallForm::Factory, Layout::Pretty { indent: 2 });
    assert_eq!(code, include_str!("golden/core.pretty.txt"));
}

#[test]
fn prefix_compact() {
    let code = generate("prefix", names::PREFIX, CallForm::Direct, Layout::Compact);
    assert_eq!(code, include_str!("golden/prefix.compact.txt"));
}

#[test]
fn prefix_pretty() {
    let code = generate("prefix", names::PREFIX, CallForm::Direct, Layout::Pretty { indent: 2 });
    assert_eq!(code, include_str!("golden/prefix.pretty.txt"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    for layout in [Layout::Compact, Layout::Pretty { indent: 4 }] {
        let first = generate("core", names::CORE, CallForm::Factory, layout);
        let second = generate("core", names::CORE, CallForm::Factory, layout);
        assert_eq!(first, second);
    }
}

#[test]
fn every_core_name_is_dispatched_exactly_once() {
    let code = generate("core", names::CORE, CallForm::Factory, Layout::Compact);
    for name in names::CORE {
        let guard = format!("if(view == \"{name}\")");
        assert_eq!(code.matches(&guard).count(), 1, "{name}");
        assert!(code.contains(&format!("return {name}_factory();")));
    }
    assert_eq!(code.matches("return nullptr;").count(), 1);
}

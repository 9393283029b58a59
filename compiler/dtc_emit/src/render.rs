//! Leaf rendering: how a matched name turns into a builtin constructor call.
//!
//! The two call forms are a fixed contract with the runtime build:
//!
//! | Form      | Generated call            | Used for                  |
//! |-----------|---------------------------|---------------------------|
//! | `Direct`  | `builtins::<name>(name)`  | namespace-prefix catalog  |
//! | `Factory` | `<name>_factory()`        | core catalog              |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::writer::CodeWriter;

/// Renders the members of a leaf.
///
/// Implementors usually provide only [`dispatch_call`](Self::dispatch_call);
/// the default [`render_leaf`](Self::render_leaf) writes one guarded
/// `return` per name, in catalog order. Any `Fn(&str) -> String` closure is
/// a renderer.
pub trait LeafRenderer {
    /// Expression that constructs the builtin for `name`.
    fn dispatch_call(&self, name: &str) -> String;

    fn render_leaf(&self, names: &[String], out: &mut CodeWriter) {
        for name in names {
            let call = self.dispatch_call(name);
            out.branch(&format!("view == \"{name}\""), &format!("return {call};"));
        }
    }
}

impl<F: Fn(&str) -> String> LeafRenderer for F {
    fn dispatch_call(&self, name: &str) -> String {
        self(name)
    }
}

/// `builtins::<name>(name)`
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectCall;

impl LeafRenderer for DirectCall {
    fn dispatch_call(&self, name: &str) -> String {
        format!("builtins::{name}(name)")
    }
}

/// `<name>_factory()`
#[derive(Clone, Copy, Debug, Default)]
pub struct FactoryCall;

impl LeafRenderer for FactoryCall {
    fn dispatch_call(&self, name: &str) -> String {
        format!("{name}_factory()")
    }
}

/// Selects one of the two shipped renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallForm {
    Direct,
    Factory,
}

impl CallForm {
    /// Map the historical `top_level` flag: top-level dispatch calls the
    /// builtin directly, nested dispatch goes through its factory.
    pub fn from_top_level(top_level: bool) -> Self {
        if top_level {
            CallForm::Direct
        } else {
            CallForm::Factory
        }
    }

    pub fn renderer(self) -> &'static dyn LeafRenderer {
        match self {
            CallForm::Direct => &DirectCall,
            CallForm::Factory => &FactoryCall,
        }
    }
}

impl fmt::Display for CallForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CallForm::Direct => "direct",
            CallForm::Factory => "factory",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown call form `{0}` (expected `direct` or `factory`)")]
pub struct UnknownCallForm(pub String);

impl FromStr for CallForm {
    type Err = UnknownCallForm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(CallForm::Direct),
            "factory" => Ok(CallForm::Factory),
            other => Err(UnknownCallForm(other.to_string())),
        }
    }
}

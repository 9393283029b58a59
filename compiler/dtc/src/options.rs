//! Command-line options for `emit` and `splice`.

use std::path::PathBuf;

use dtc_emit::{CallForm, Layout};

use crate::DriverError;

/// Which layout `--layout` asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutKind {
    Compact,
    #[default]
    Pretty,
}

/// Options shared by the code-generating commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Leaf call form. `None` uses the catalog's default.
    pub call: Option<CallForm>,
    pub layout: LayoutKind,
    /// Spaces per nesting level in the pretty layout.
    pub indent: usize,
    /// Output file (`emit` only). `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            call: None,
            layout: LayoutKind::default(),
            indent: 2,
            output: None,
        }
    }
}

impl EmitOptions {
    /// The emitter layout these options select.
    pub fn layout(&self) -> Layout {
        match self.layout {
            LayoutKind::Compact => Layout::Compact,
            LayoutKind::Pretty => Layout::Pretty {
                indent: self.indent,
            },
        }
    }
}

/// Parse option arguments (everything after the positional ones).
///
/// Recognized: `--call=direct|factory`, `--layout=compact|pretty`,
/// `--indent=N`, `-o <path>`, `--output=<path>`.
pub fn parse_emit_options(args: &[String]) -> Result<EmitOptions, DriverError> {
    let mut options = EmitOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err(DriverError::usage("`-o` needs a path"));
            };
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if let Some(form) = arg.strip_prefix("--call=") {
            options.call = Some(form.parse::<CallForm>()?);
        } else if let Some(layout) = arg.strip_prefix("--layout=") {
            options.layout = match layout {
                "compact" => LayoutKind::Compact,
                "pretty" => LayoutKind::Pretty,
                other => {
                    return Err(DriverError::usage(format!(
                        "unknown layout `{other}` (expected `compact` or `pretty`)"
                    )))
                }
            };
        } else if let Some(indent) = arg.strip_prefix("--indent=") {
            options.indent = indent.parse().map_err(|_| {
                DriverError::usage(format!("`--indent` expects a number, got `{indent}`"))
            })?;
        } else if let Some(path) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(path));
        } else {
            return Err(DriverError::usage(format!("unknown option `{arg}`")));
        }
        i += 1;
    }
    Ok(options)
}

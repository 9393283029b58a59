//! Command handlers for the `dtc` CLI.
//!
//! Every command renders its complete output in memory before touching the
//! filesystem, so a failure never leaves a partially written artifact.

use std::io::Write;
use std::path::{Path, PathBuf};

use dtc_build::{build_catalog, TreeStats};
use dtc_emit::{dump, emit, CodeWriter, FALLBACK};
use dtc_ir::{Catalog, DecisionNode};
use tempfile::NamedTempFile;

use crate::options::{parse_emit_options, EmitOptions, LayoutKind};
use crate::source::CatalogSource;
use crate::splice::MarkerRegion;
use crate::DriverError;

pub const USAGE: &str = "\
Usage: dtc <command> [args]

Commands:
  emit <catalog> [options]            Write the dispatch fragment
  splice <catalog> <file> [options]   Replace the generated region of <file>
  dump <catalog>                      Print the decision tree
  check <catalog>                     Validate a catalog and print tree stats

<catalog> is `core`, `prefix`, or a file with one name per line.

Options:
  --call=direct|factory    Leaf call form (default: per catalog)
  --layout=compact|pretty  Output layout (default: pretty; splice is always pretty)
  --indent=N               Spaces per level in the pretty layout (default: 2)
  -o <path>                Output file for `emit` (default: stdout)";

/// Run a `dtc` invocation. `args` excludes the program name.
///
/// `stdout` is flushed before returning; a failed flush is an error.
pub fn run(args: &[String], stdout: &mut dyn Write) -> Result<(), DriverError> {
    dispatch(args, stdout)?;
    stdout.flush()?;
    Ok(())
}

fn dispatch(args: &[String], stdout: &mut dyn Write) -> Result<(), DriverError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(DriverError::usage(USAGE));
    };

    match command.as_str() {
        "emit" => {
            let (source, options) = catalog_and_options(rest, "emit")?;
            emit_catalog(&source, &options, stdout)
        }
        "splice" => {
            let (Some(catalog), Some(target)) = (rest.first(), rest.get(1)) else {
                return Err(DriverError::usage(
                    "usage: dtc splice <catalog> <file> [options]",
                ));
            };
            let options = parse_emit_options(&rest[2..])?;
            if options.output.is_some() {
                return Err(DriverError::usage(
                    "`splice` rewrites <file> in place and does not take `-o`",
                ));
            }
            if options.layout == LayoutKind::Compact {
                return Err(DriverError::usage(
                    "`splice` always uses the pretty layout",
                ));
            }
            splice_catalog(
                &CatalogSource::from_arg(catalog),
                Path::new(target),
                &options,
                stdout,
            )
        }
        "dump" => {
            let (source, _) = catalog_and_options(rest, "dump")?;
            dump_catalog(&source, stdout)
        }
        "check" => {
            let (source, _) = catalog_and_options(rest, "check")?;
            check_catalog(&source, stdout)
        }
        "help" | "--help" | "-h" => {
            writeln!(stdout, "{USAGE}")?;
            Ok(())
        }
        other => Err(DriverError::usage(format!(
            "unknown command `{other}`\n\n{USAGE}"
        ))),
    }
}

fn catalog_and_options(
    rest: &[String],
    command: &str,
) -> Result<(CatalogSource, EmitOptions), DriverError> {
    let Some((catalog, options)) = rest.split_first() else {
        return Err(DriverError::usage(format!(
            "usage: dtc {command} <catalog> [options]"
        )));
    };
    Ok((
        CatalogSource::from_arg(catalog),
        parse_emit_options(options)?,
    ))
}

/// Load a catalog and build its tree.
fn compile(source: &CatalogSource) -> Result<(Catalog, DecisionNode), DriverError> {
    let catalog = source.load()?;
    let tree = build_catalog(&catalog);
    Ok((catalog, tree))
}

/// Render the complete dispatch fragment for a catalog.
pub fn render(
    source: &CatalogSource,
    options: &EmitOptions,
    margin: &str,
) -> Result<String, DriverError> {
    let (_, tree) = compile(source)?;
    let form = options.call.unwrap_or_else(|| source.default_call_form());

    let mut out = CodeWriter::new(options.layout()).with_margin(margin);
    emit(&tree, form.renderer(), &mut out);
    out.statement(FALLBACK);
    Ok(out.take_output())
}

/// `dtc emit`
pub fn emit_catalog(
    source: &CatalogSource,
    options: &EmitOptions,
    stdout: &mut dyn Write,
) -> Result<(), DriverError> {
    let code = render(source, options, "")?;
    match &options.output {
        Some(path) => {
            write_file(path, &code)?;
            tracing::info!(catalog = %source, path = %path.display(), "wrote dispatch fragment");
        }
        None => {
            stdout.write_all(code.as_bytes())?;
            if !code.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

/// `dtc splice`
pub fn splice_catalog(
    source: &CatalogSource,
    target: &Path,
    options: &EmitOptions,
    stdout: &mut dyn Write,
) -> Result<(), DriverError> {
    let text = std::fs::read_to_string(target).map_err(|source| DriverError::Read {
        path: target.to_path_buf(),
        source,
    })?;
    let region = MarkerRegion::find(&text).map_err(|source| DriverError::Splice {
        path: target.to_path_buf(),
        source,
    })?;

    // The spliced block is hand-maintained source: always one statement per line.
    let options = EmitOptions {
        layout: LayoutKind::Pretty,
        ..options.clone()
    };
    let code = render(source, &options, region.margin())?;

    if region.current(&text) == region.adapt_line_endings(&code) {
        writeln!(stdout, "{}: up to date", target.display())?;
        return Ok(());
    }

    write_file(target, &region.replace(&text, &code))?;
    writeln!(stdout, "{}: updated from catalog `{source}`", target.display())?;
    Ok(())
}

/// `dtc dump`
pub fn dump_catalog(source: &CatalogSource, stdout: &mut dyn Write) -> Result<(), DriverError> {
    let (catalog, tree) = compile(source)?;
    write!(stdout, "{}", dump(&tree))?;
    writeln!(stdout, "# {}: {}", catalog.label(), TreeStats::of(&tree))?;
    Ok(())
}

/// `dtc check`
pub fn check_catalog(source: &CatalogSource, stdout: &mut dyn Write) -> Result<(), DriverError> {
    let (catalog, tree) = compile(source)?;
    writeln!(stdout, "{}: ok, {}", catalog.label(), TreeStats::of(&tree))?;
    Ok(())
}

/// Write `contents` to a temporary file next to `path`, then rename it over
/// `path`. The target is either fully replaced or left untouched.
pub fn write_file(path: &Path, contents: &str) -> Result<(), DriverError> {
    let write_err = |source| DriverError::Write {
        path: PathBuf::from(path),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}

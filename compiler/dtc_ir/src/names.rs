//! Builtin-name catalogs shipped with the compiler.
//!
//! These mirror the runtime's builtin registry. Order matters: it fixes
//! the order of comparisons in each generated leaf, so reordering an entry
//! changes the generated artifact.

/// Builtins callable without a namespace prefix (`count`, `trim_left`, ...).
///
/// Dispatched through `<name>_factory()`.
pub const CORE: &[&str] = &[
    "count",
    "max",
    "min",
    "sort",
    "sum",
    "product",
    "equal",
    "gt",
    "gte",
    "lt",
    "lte",
    "neq",
    "to_number",
    "walk",
    "abs",
    "ceil",
    "floor",
    "round",
    "plus",
    "minus",
    "mul",
    "div",
    "rem",
    "and",
    "or",
    "intersection",
    "union",
    "concat",
    "startswith",
    "endswith",
    "contains",
    "format_int",
    "indexof",
    "indexof_n",
    "lower",
    "upper",
    "replace",
    "split",
    "sprintf",
    "substring",
    "trim",
    "trim_left",
    "trim_right",
    "trim_space",
    "trim_prefix",
    "trim_suffix",
    "is_array",
    "is_boolean",
    "is_null",
    "is_number",
    "is_object",
    "is_set",
    "is_string",
    "type_name",
];

/// Namespace prefixes (`strings.`, `json.`, ...) that own a family of builtins.
///
/// Dispatched through `builtins::<name>(name)`.
pub const PREFIX: &[&str] = &[
    "array",
    "providers",
    "base64",
    "base64url",
    "bits",
    "crypto",
    "glob",
    "graph",
    "graphql",
    "hex",
    "http",
    "internal",
    "json",
    "io",
    "net",
    "numbers",
    "object",
    "opa",
    "rand",
    "rego",
    "regex",
    "semver",
    "strings",
    "time",
    "units",
    "urlquery",
    "uuid",
    "yaml",
];

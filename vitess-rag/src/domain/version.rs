//! Documentation version labels.
//!
//! The search service filters on decorated labels such as `v21.0 (Stable)`.
//! Users usually type the short form, so [`resolve_label`] expands it.
//!
//! [`ANNOTATED_VERSIONS`] backs the `versions` command. It is maintained
//! separately from [`VERSION_LABELS`]; when a release is added, both tables
//! need the new entry.

/// Short version token to decorated label, newest first.
pub const VERSION_LABELS: &[(&str, &str)] = &[
    ("v22.0", "v22.0 (Development)"),
    ("v21.0", "v21.0 (Stable)"),
    ("v20.0", "v20.0 (Stable)"),
    ("v19.0", "v19.0 (Archived)"),
    ("v18.0", "v18.0 (Archived)"),
    ("v17.0", "v17.0 (Archived)"),
    ("v16.0", "v16.0 (Archived)"),
    ("v15.0", "v15.0 (Archived)"),
    ("v14.0", "v14.0 (Archived)"),
    ("v13.0", "v13.0 (Archived)"),
    ("v12.0", "v12.0 (Archived)"),
    ("v11.0", "v11.0 (Archived)"),
];

/// Decorated label and its description, as listed by `versions`.
pub const ANNOTATED_VERSIONS: &[(&str, &str)] = &[
    ("v22.0 (Development)", "Latest development version"),
    ("v21.0 (Stable)", "Latest stable release"),
    ("v20.0 (Stable)", "Stable release"),
    ("v19.0 (Archived)", "Archived version"),
    ("v18.0 (Archived)", "Archived version"),
    ("v17.0 (Archived)", "Archived version"),
    ("v16.0 (Archived)", "Archived version"),
    ("v15.0 (Archived)", "Archived version"),
    ("v14.0 (Archived)", "Archived version"),
    ("v13.0 (Archived)", "Archived version"),
    ("v12.0 (Archived)", "Archived version"),
    ("v11.0 (Archived)", "Archived version"),
];

/// Expand a short version token to its decorated label.
///
/// Labels that already carry a parenthesized suffix and tokens missing from
/// [`VERSION_LABELS`] come back unchanged.
pub fn resolve_label(version: &str) -> String {
    if version.contains('(') && version.contains(')') {
        return version.to_string();
    }

    VERSION_LABELS
        .iter()
        .find(|(short, _)| *short == version)
        .map_or_else(|| version.to_string(), |(_, label)| (*label).to_string())
}

//! Entry name cleaning.
//!
//! Declared names may carry surrounding whitespace and a leading deferral
//! marker (`//` by default), as in `"   // test"`. Cleaning strips both and
//! records whether the marker was present.

/// A cleaned entry name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanName {
    pub name: String,
    /// The raw name started with the deferral marker.
    pub deferred: bool,
}

/// Clean a declared entry name.
///
/// Trims surrounding whitespace. If what remains starts with `marker`, the
/// marker and any whitespace after it are removed and the name is flagged
/// deferred. An empty marker disables deferral by name.
pub fn clean_name(raw: &str, marker: &str) -> CleanName {
    let trimmed = raw.trim();
    match trimmed.strip_prefix(marker) {
        Some(rest) if !marker.is_empty() => CleanName {
            name: rest.trim_start().to_owned(),
            deferred: true,
        },
        _ => CleanName {
            name: trimmed.to_owned(),
            deferred: false,
        },
    }
}

#[cfg(test)]
mod tests;

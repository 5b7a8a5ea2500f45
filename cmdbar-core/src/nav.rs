//! Section path resolution for in-place navigation.

use crate::error::PaletteError;

/// Where the user currently is, as reported by the host.
///
/// Passed in explicitly so path resolution stays pure; the core never
/// reads ambient host state.
#[derive(Debug, Clone)]
pub struct NavigationContext {
    pub current_path: String,
}

impl NavigationContext {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self { current_path: current_path.into() }
    }
}

/// Compute the destination for a section rewrite.
///
/// `current_path` is expected to look like `/{org}/{project}/...`; the
/// result is `{org}/{project}/{target_section}` with no leading slash.
/// How the result is applied to the host navigation API is the caller's
/// concern.
///
/// Policy for short paths: a path without both org and project segments
/// (e.g. the application root `/`) is a [`PaletteError::InsufficientPath`]
/// error. Joining missing segments into the destination would produce a
/// broken URL, so it is rejected up front.
pub fn resolve_section_path(
    ctx: &NavigationContext,
    target_section: &str,
) -> Result<String, PaletteError> {
    let segments: Vec<&str> = ctx.current_path.split('/').collect();
    match segments.as_slice() {
        ["", org, project, ..] if !org.is_empty() && !project.is_empty() => {
            Ok(format!("{}/{}/{}", org, project, target_section))
        }
        _ => Err(PaletteError::InsufficientPath(ctx.current_path.clone())),
    }
}

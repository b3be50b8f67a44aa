//! Drop payloads arrive as one string of paths. Paths containing spaces are
//! wrapped in braces, e.g. `{C:/my pics/a.png} C:/b.jpg`.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::image_io::is_supported;

/// Split a drop payload into paths, sorted.
pub fn parse_drop_list(payload: &str) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut rest = String::with_capacity(payload.len());
    let mut chars = payload.chars();

    while let Some(c) = chars.next() {
        if c != '{' {
            rest.push(c);
            continue;
        }
        let mut inner = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            inner.push(c);
        }
        if closed && !inner.is_empty() {
            paths.push(PathBuf::from(inner));
        } else {
            // Unbalanced or empty braces are kept as plain text.
            rest.push('{');
            rest.push_str(&inner);
            if closed {
                rest.push('}');
            }
        }
        rest.push(' ');
    }

    paths.extend(rest.split_whitespace().map(PathBuf::from));
    paths.sort();
    paths
}

/// Sort dropped paths and take the first supported one, so the pick does not
/// depend on the order the platform reports them in.
pub fn pick_dropped<S: AsRef<str>>(mut paths: Vec<PathBuf>, allowed: &[S]) -> Option<PathBuf> {
    paths.sort();
    first_supported(&paths, allowed)
}

/// First regular file in `paths` with an allowed extension.
pub fn first_supported<P, S>(paths: &[P], allowed: &[S]) -> Option<PathBuf>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    paths
        .iter()
        .map(AsRef::as_ref)
        .find(|p| p.is_file() && is_supported(p, allowed))
        .map(|p| {
            debug!(path = %p.display(), "accepted drop");
            p.to_path_buf()
        })
}

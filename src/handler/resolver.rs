//! Filesystem resolver
//!
//! Maps a logical request path to a confined file under the static
//! directory. Traversal segments are rejected lexically before touching the
//! filesystem; anything that exists is then canonicalized so symlinks cannot
//! escape the root either.

use std::path::{Path, PathBuf};

/// Outcome of resolving a logical path against the static directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A confined regular file, canonicalized
    File(PathBuf),
    /// An existing directory with no index document inside
    DirectoryWithoutIndex,
    /// Nothing on disk at the candidate path
    Missing,
    /// The path escapes the root via traversal or a symlink
    Escaped,
}

/// Resolve `logical_path` (already percent-decoded, query-free) under
/// `static_dir`. Empty and root paths map to `index_document`; directories
/// resolve to their index document when present.
#[must_use]
pub fn resolve(static_dir: &Path, logical_path: &str, index_document: &str) -> Resolution {
    let Some(relative) = normalize(logical_path) else {
        return Resolution::Escaped;
    };
    let relative = if relative.as_os_str().is_empty() {
        PathBuf::from(index_document)
    } else {
        relative
    };
    let candidate = static_dir.join(relative);

    // Canonicalization only works on paths that exist; a missing candidate
    // is the SPA fallback case, not an escape.
    let Ok(root) = static_dir.canonicalize() else {
        return Resolution::Missing;
    };
    let Ok(resolved) = candidate.canonicalize() else {
        return Resolution::Missing;
    };
    if !resolved.starts_with(&root) {
        return Resolution::Escaped;
    }

    if resolved.is_file() {
        return Resolution::File(resolved);
    }
    if resolved.is_dir() {
        // No directory listing: either the index document or nothing.
        return match candidate_index(&resolved, index_document) {
            Some(index_path) if index_path.starts_with(&root) => Resolution::File(index_path),
            Some(_) => Resolution::Escaped,
            None => Resolution::DirectoryWithoutIndex,
        };
    }
    Resolution::Missing
}

fn candidate_index(dir: &Path, index_document: &str) -> Option<PathBuf> {
    let index_path = dir.join(index_document).canonicalize().ok()?;
    index_path.is_file().then_some(index_path)
}

/// Lexically normalize a slash-separated request path. `.` segments and
/// empty segments are dropped, `..` pops; popping past the root means the
/// path escapes and resolution must stop with `Escaped`.
fn normalize(raw: &str) -> Option<PathBuf> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return None;
                }
            }
            other => segments.push(other),
        }
    }
    Some(segments.iter().collect())
}

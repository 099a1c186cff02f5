use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::{error::PatternError, lookup::pattern::Pattern};

/// Finds the files under `root` whose relative path matches a wildcard.
///
/// Paths are relative to `root` and use `/` as separator, so `a/*` matches
/// every file below the `a` directory. Only regular files are reported.
///
/// # Parameters
/// - `pattern`: The wildcard to match, see [`Pattern`].
/// - `root`: The directory to search.
///
/// # Returns
/// A lazy iterator over the matching paths, in file-name order.
///
/// # Errors
/// Returns a `PatternError` if the pattern cannot be compiled. Directory
/// entries that cannot be read are skipped with a warning.
pub fn glob_lookup(pattern: &str, root: impl AsRef<Path>) -> Result<GlobMatches, PatternError> {
    let root = root.as_ref().to_path_buf();
    Ok(GlobMatches { pattern: Pattern::new(pattern)?,
                     entries: WalkDir::new(&root).sort_by_file_name().into_iter(),
                     root })
}

/// Iterator returned by [`glob_lookup`].
pub struct GlobMatches {
    pattern: Pattern,
    root:    PathBuf,
    entries: walkdir::IntoIter,
}

impl GlobMatches {
    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let mut parts = Vec::new();
        for component in relative.components() {
            let Some(part) = component.as_os_str().to_str() else {
                warn!(path = %path.display(), "skipping path that is not valid UTF-8");
                return None;
            };
            parts.push(part);
        }
        Some(parts.join("/"))
    }
}

impl Iterator for GlobMatches {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                },
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(relative) = self.relative_path(entry.path())
               && self.pattern.is_match(&relative)
            {
                trace!(pattern = self.pattern.as_str(), path = relative.as_str(), "matched");
                return Some(relative);
            }
        }
    }
}

use std::io::{self, BufRead};

use crate::{error::PatternError, lookup::pattern::Pattern};

/// Finds the items of `space` matching a wildcard pattern.
///
/// # Parameters
/// - `pattern`: The wildcard to match, see [`Pattern`].
/// - `space`: The candidates.
///
/// # Returns
/// The matching items, in the order they appear in `space`.
///
/// # Errors
/// Returns a `PatternError` if the pattern cannot be compiled.
///
/// # Example
/// ```
/// use evil::lookup::str_lookup;
///
/// let space = ["a.a", "a.b", "b.a"];
/// assert_eq!(str_lookup("a.*", &space)?, ["a.a", "a.b"]);
/// assert_eq!(str_lookup("*.a", &space)?, ["a.a", "b.a"]);
/// # Ok::<(), evil::PatternError>(())
/// ```
pub fn str_lookup<S>(pattern: &str, space: &[S]) -> Result<Vec<String>, PatternError>
    where S: AsRef<str>
{
    let pattern = Pattern::new(pattern)?;
    Ok(space.iter()
            .map(AsRef::<str>::as_ref)
            .filter(|item| pattern.is_match(item))
            .map(str::to_string)
            .collect())
}

/// Reads a search space, one item per line.
///
/// Line terminators are stripped. Reading stops at the first line that
/// cannot be read or is not valid UTF-8, and that error is returned; no
/// partial space is produced.
///
/// # Errors
/// Returns the underlying I/O error.
///
/// # Example
/// ```
/// use evil::lookup::read_lines;
///
/// let space = read_lines("a.a\nb.b\r\n".as_bytes())?;
/// assert_eq!(space, ["a.a", "b.b"]);
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn read_lines<R>(reader: R) -> io::Result<Vec<String>>
    where R: BufRead
{
    reader.lines().collect()
}

/// Shell-style wildcard patterns.
///
/// Compiles `*`, `?`, `[seq]` and `[!seq]` wildcards into anchored regular
/// expressions, the way `fnmatch` does.
pub mod pattern;
/// Lookup over an in-memory collection of strings, and reading such a
/// collection one line at a time.
pub mod space;
/// Lazy lookup over the files of a directory tree.
///
/// Walks the tree in file-name order and yields the relative paths of the
/// regular files matching a pattern. The walk happens while the matches are
/// consumed, so the result can only be iterated once.
pub mod tree;

pub use pattern::Pattern;
pub use space::{read_lines, str_lookup};
pub use tree::{GlobMatches, glob_lookup};

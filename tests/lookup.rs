use std::{fs, io, path::Path};

use evil::{
    Error,
    lookup::{Pattern, glob_lookup, read_lines, str_lookup},
    preset::set::{self, Set},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Creates `a/a/a` through `c/c/c`, 27 empty files two directories deep.
fn tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let chars = ["a", "b", "c"];
    for l1 in chars {
        for l2 in chars {
            fs::create_dir_all(dir.path().join(l1).join(l2)).unwrap();
            for l3 in chars {
                fs::write(dir.path().join(l1).join(l2).join(l3), "").unwrap();
            }
        }
    }
    dir
}

fn glob(pattern: &str, root: &Path) -> Vec<String> {
    glob_lookup(pattern, root).unwrap().collect()
}

fn set_of(items: &[&str]) -> Set {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[test]
fn pattern_wildcards() {
    let cases = [("*", "anything", true),
                 ("*", "", true),
                 ("a*", "abc", true),
                 ("a*", "bac", false),
                 ("a?c", "abc", true),
                 ("a?c", "ac", false),
                 ("[ab]x", "bx", true),
                 ("[ab]x", "cx", false),
                 ("[!ab]x", "cx", true),
                 ("[!ab]x", "ax", false),
                 ("[a-c]", "b", true),
                 ("[a-c]", "d", false),
                 ("[-a]", "-", true),
                 ("[]]", "]", true),
                 ("a[", "a[", true),
                 ("a.b", "a.b", true),
                 ("a.b", "axb", false),
                 ("a+b", "a+b", true),
                 ("a/*", "a/b/c", true)];

    for (pattern, candidate, expected) in cases {
        assert_eq!(Pattern::new(pattern).unwrap().is_match(candidate),
                   expected,
                   "'{pattern}' against '{candidate}'");
    }
}

#[test]
fn pattern_with_reversed_range_is_rejected() {
    let err = Pattern::new("[z-a]").unwrap_err();
    assert_eq!(err.pattern, "[z-a]");
    assert!(err.to_string().contains("[z-a]"));
}

#[test_log::test]
fn glob_lookup_reports_relative_paths() {
    let dir = tree();

    assert_eq!(glob("a/a/*", dir.path()), ["a/a/a", "a/a/b", "a/a/c"]);
    assert_eq!(glob("a/*/a", dir.path()), ["a/a/a", "a/b/a", "a/c/a"]);
    assert_eq!(glob("*/a/a", dir.path()), ["a/a/a", "b/a/a", "c/a/a"]);
    assert_eq!(glob("c/c/c", dir.path()), ["c/c/c"]);
    assert_eq!(glob("*", dir.path()).len(), 27);
}

#[test]
fn glob_lookup_ignores_directories() {
    let dir = tree();

    assert!(glob("a", dir.path()).is_empty());
    assert!(glob("a/b", dir.path()).is_empty());
}

#[test]
fn glob_lookup_on_missing_root_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(glob("*", &dir.path().join("missing")).is_empty());
}

#[test]
fn glob_lookup_propagates_pattern_errors() {
    let dir = tree();
    assert!(glob_lookup("[z-a]", dir.path()).is_err());

    let result = set::evaluate("a/* = [z-a]", |pattern| glob_lookup(pattern, dir.path()));
    assert!(matches!(result, Err(Error::Pattern(_))));
}

#[test]
fn set_expressions_over_a_file_tree() {
    let dir = tree();
    let eval = |expression: &str| {
        set::evaluate(expression, |pattern| glob_lookup(pattern, dir.path())).unwrap()
    };

    assert_eq!(eval("a/* = */a"), set_of(&["a/a/a", "a/b/a", "a/c/a"]));
    assert_eq!(eval("a/a/* - */*/a"), set_of(&["a/a/b", "a/a/c"]));
    assert_eq!(eval("a/a/a, b/b/b"), set_of(&["a/a/a", "b/b/b"]));
    assert_eq!(eval("(a/* + b/*) = */c/* = *c"), set_of(&["a/c/c", "b/c/c"]));
}

#[test]
fn read_lines_fails_on_invalid_input() {
    assert_eq!(read_lines(&b"a.a\nb.b\n"[..]).unwrap(), ["a.a", "b.b"]);

    let err = read_lines(&b"a.a\n\xff\xfe\nb.b\n"[..]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);

    let err = Error::from(err);
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().starts_with("failed to read input"), "{err}");
}

#[test]
fn lines_are_searched_in_order() {
    let space = read_lines(&b"c.c\na.b\na.a\n"[..]).unwrap();
    assert_eq!(str_lookup("a.*", &space).unwrap(), ["a.b", "a.a"]);
    assert_eq!(set::evaluate("a.* - *.a", |pattern| str_lookup(pattern, &space)).unwrap(),
               set_of(&["a.b"]));
}

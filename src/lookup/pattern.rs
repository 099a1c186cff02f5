use regex::Regex;

use crate::error::PatternError;

/// A compiled shell-style wildcard.
///
/// - `*` matches any run of characters, including `/` and the empty run.
/// - `?` matches exactly one character.
/// - `[seq]` matches one character of `seq`; `[!seq]` one character outside
///   of it. Ranges such as `[a-c]` are supported.
/// - A `[` without a closing `]` matches itself.
///
/// Every other character matches itself. Matching is case-sensitive and
/// always covers the whole candidate.
///
/// # Example
/// ```
/// use evil::lookup::Pattern;
///
/// let pattern = Pattern::new("a.*.[!b]")?;
/// assert!(pattern.is_match("a.b.c"));
/// assert!(!pattern.is_match("a.b.b"));
/// assert!(!pattern.is_match("b.b.c"));
/// # Ok::<(), evil::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex:  Regex,
}

impl Pattern {
    /// Compiles a wildcard pattern.
    ///
    /// # Errors
    /// Returns a `PatternError` if a character class is invalid, such as a
    /// reversed range `[z-a]`.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&translate(pattern)).map_err(|source| {
                                                       PatternError { pattern: pattern.to_string(),
                                                                      source }
                                                   })?;
        Ok(Self { source: pattern.to_string(),
                  regex })
    }

    /// Whether `candidate` matches the whole pattern.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Translates a wildcard into an anchored regular expression.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::from(r"(?s)\A(?:");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;

        match c {
            '*' => {
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                out.push_str(".*");
            },
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                },
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    out.push_str(r")\z");
    out
}

/// Index of the `]` closing a class whose contents start at `start`.
///
/// A `]` right after the opening bracket (or after `!`) belongs to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..].iter()
                               .position(|&c| c == ']')
                               .map(|offset| j + offset)
}

/// Translates the contents of a `[...]` class.
fn translate_class(contents: &[char]) -> String {
    let (negated, members) = match contents.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, contents),
    };

    let mut class = String::from(if negated { "[^" } else { "[" });
    for (k, &c) in members.iter().enumerate() {
        let is_range = c == '-' && k > 0 && k + 1 < members.len();
        if is_range {
            class.push('-');
        } else {
            class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
    }
    class.push(']');
    class
}

use std::path::{is_separator, Path};

/// A listing pattern split into the directory to enumerate and the wildcard
/// applied to entry names inside it.
///
/// `src/*.rs` enumerates `src/` and keeps names matching `*.rs`; a pattern
/// without a separator enumerates the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    dir: &'a str,
    name: &'a str,
}

impl<'a> Pattern<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.char_indices().rev().find(|&(_, c)| is_separator(c)) {
            // Separators are ASCII, so `idx + 1` is a char boundary.
            Some((idx, _)) => Pattern {
                dir: &raw[..=idx],
                name: &raw[idx + 1..],
            },
            None => Pattern { dir: ".", name: raw },
        }
    }

    pub fn dir(&self) -> &Path {
        Path::new(self.dir)
    }

    pub fn matches(&self, entry_name: &str) -> bool {
        wildcard_match(self.name, entry_name)
    }
}

/// Matches `text` against `pattern` where `*` stands for any run of
/// characters (including none) and `?` for exactly one character.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();

    let (mut pi, mut ti) = (0, 0);
    // Position of the last `*` seen and the text index it is currently
    // assumed to cover up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while ti < t.len() {
        if pi < p.len() && (p[pi] == '?' || (p[pi] != '*' && p[pi] == t[ti])) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            backtrack = Some((pi, ti));
            pi += 1;
        } else if let Some((star, covered)) = backtrack {
            pi = star + 1;
            ti = covered + 1;
            backtrack = Some((star, covered + 1));
        } else {
            return false;
        }
    }

    p[pi..].iter().all(|&c| c == '*')
}

/// Splits a line into whitespace-separated tokens.
///
/// There is no quoting or escaping: a token can never contain whitespace.
/// A blank line yields no tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

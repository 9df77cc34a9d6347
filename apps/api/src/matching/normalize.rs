/// Canonicalizes a raw skill string for comparison.
///
/// Lower-cases, trims, then drops every character that is not an ASCII
/// lowercase letter, digit, `+`, `#` or whitespace, so `"C++"` stays `"c++"`
/// and `"Node.js"` becomes `"nodejs"`. An empty result means "no skill" and
/// must never be matched against anything.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .trim()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '+' | '#') || c.is_whitespace())
        .collect()
}

/// Normalizes a whole skill list, keeping positions aligned with the input.
pub fn normalize_all<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills.iter().map(|s| normalize(s.as_ref())).collect()
}

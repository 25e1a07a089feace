/// Compares two names ignoring letter case.
///
/// Chars are compared pairwise: equal, or equal after simple uppercasing, or
/// equal after lowercasing the uppercased chars. Final sigma `ς` therefore
/// matches `Σ`, and `İ` matches `i`.
pub fn names_match(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left.chars().zip(right.chars()).all(|(l, r)| chars_match(l, r))
}

fn chars_match(left: char, right: char) -> bool {
    if left == right {
        return true;
    }
    let (left, right) = (simple_upper(left), simple_upper(right));
    left == right || simple_lower(left) == simple_lower(right)
}

// Multi-char uppercase expansions (e.g. `ß` -> "SS") have no single-char
// mapping, so the char is kept.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// `İ` is the only char whose lowercase expands; its simple mapping is `i`.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

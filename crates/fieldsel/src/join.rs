//! String joining helpers shared by selections and formatters.

/// Repeat `value` `n` times, separated by `sep`.
///
/// Returns an empty string when `n == 0`.
pub fn repeat_string(value: &str, sep: &str, n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let mut out = String::with_capacity(value.len() * n + sep.len() * (n - 1));
    out.push_str(value);
    for _ in 1..n {
        out.push_str(sep);
        out.push_str(value);
    }
    out
}

/// Join `values`, appending `suffix` to each one and separating them with `sep`.
pub fn join_with_suffix<S: AsRef<str>>(values: &[S], suffix: &str, sep: &str) -> String {
    let len: usize = values.iter().map(|v| v.as_ref().len()).sum::<usize>()
        + suffix.len() * values.len()
        + sep.len() * values.len().saturating_sub(1);
    let mut out = String::with_capacity(len);
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(value.as_ref());
        out.push_str(suffix);
    }
    out
}

/// Join two parallel slices as `a[i] + infix + b[i]`, separated by `sep`.
///
/// Missing entries of `b` are treated as empty strings.
pub fn join_pairs<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B], infix: &str, sep: &str) -> String {
    let mut out = String::new();
    for (i, left) in a.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(left.as_ref());
        out.push_str(infix);
        if let Some(right) = b.get(i) {
            out.push_str(right.as_ref());
        }
    }
    out
}

/// Case-insensitive string equality (Unicode lowercase mapping, no allocation).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Whether `names` contains `value`, ignoring case.
pub fn contains_ignore_case(value: &str, names: &[&str]) -> bool {
    names.iter().any(|name| eq_ignore_case(value, name))
}

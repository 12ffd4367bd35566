//! Small text helpers shared by resolution and presentation.

/// Render `n` with its English ordinal suffix: 1st, 2nd, 3rd, 11th, 21st.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Leading integer of a cell's text, tolerating decoration characters
/// after the digits (the sheet marks some combo numbers with `*`).
pub fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Case-insensitive equality of two name pairs, ignoring order.
pub fn unordered_pair_eq(a: (&str, &str), b: (&str, &str)) -> bool {
    let norm = |s: &str| s.to_lowercase();
    let (a0, a1) = (norm(a.0), norm(a.1));
    let (b0, b1) = (norm(b.0), norm(b.1));
    (a0 == b0 && a1 == b1) || (a0 == b1 && a1 == b0)
}

//! Shared utility functions for code generation.

/// Convert a PascalCase or camelCase identifier to kebab-case
/// (e.g., "MyButton" -> "my-button").
///
/// A `-` is inserted before every ASCII uppercase letter except the first
/// character, then the whole string is lowercased. Consecutive capitals are
/// split individually ("HTMLBox" -> "h-t-m-l-box").
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            result.push('-');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

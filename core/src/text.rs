//! String helpers.

/// Uppercase the first character and lowercase the rest.
/// An empty string stays empty.
pub fn titlecase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

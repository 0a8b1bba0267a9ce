use crate::error::{PhonebookError, PhonebookResult};

/// Returns the value if it is present and non-empty.
/// Whitespace counts as content; nothing is trimmed.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Validates both fields of a new contact. Either one missing fails the pair.
pub fn required_pair<'a>(
    name: Option<&'a str>,
    number: Option<&'a str>,
) -> PhonebookResult<(&'a str, &'a str)> {
    match (present(name), present(number)) {
        (Some(name), Some(number)) => Ok((name, number)),
        _ => Err(PhonebookError::MissingFields),
    }
}

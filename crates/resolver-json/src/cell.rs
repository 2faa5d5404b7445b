//! Handling cell lookup in formatted resolver responses.

/// Key token of the cell description in a formatted response.
const DESCRIPTION_TOKEN: &str = "\"Description\" : \"";

/// Key token of the cell name in a formatted response.
const CELL_TOKEN: &str = "\"Cell\" : \"";

/// Return the name of the cell that handled a request.
///
/// `formatted` is a response body already passed through
/// [`format_fragment`](crate::format_fragment). The `Description` value is
/// preferred; the `Cell` value is used when there is no description.
///
/// # Examples
///
/// ```
/// use resolver_json::{cell_name, format_fragment};
///
/// let formatted = format_fragment(r#"{"Status":"OK","Cell":"cell-east-2"}"#).unwrap();
/// assert_eq!(cell_name(&formatted), Some("cell-east-2"));
/// ```
#[must_use]
pub fn cell_name(formatted: &str) -> Option<&str> {
    let value = value_after(formatted, DESCRIPTION_TOKEN)
        .or_else(|| value_after(formatted, CELL_TOKEN))?;
    let end = value.find('"')?;
    Some(&value[..end])
}

fn value_after<'a>(text: &'a str, token: &str) -> Option<&'a str> {
    text.find(token).map(|start| &text[start + token.len()..])
}

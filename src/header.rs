//! Header line helpers.

const MISSING: &str = "NA";

/// Split a header (marker already stripped) into its id and full name.
///
/// The id is the first whitespace-delimited token; the name is the whole line.
pub(crate) fn split_header(header: &str) -> (String, String) {
    let id = header.split(char::is_whitespace).next().unwrap_or("");
    (id.to_string(), header.to_string())
}

/// Extract the `runid=` value from a read description.
///
/// Returns `"NA"` unless exactly one space-separated token starts with
/// `runid`, or when that token carries no `=`.
pub fn get_runid(desc: &str) -> &str {
    let mut tokens = desc.split(' ').filter(|t| t.starts_with("runid"));
    match (tokens.next(), tokens.next()) {
        (Some(tok), None) => tok.split_once('=').map_or(MISSING, |(_, v)| v),
        _ => MISSING,
    }
}

/// Take at most `max_chars` characters from the start of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Remove the wrapping a model tends to put around a JSON answer.
///
/// Every backtick and every literal `json` is dropped, wherever it appears,
/// so a fenced ```` ```json ... ``` ```` block collapses to its payload.
pub fn strip_json_noise(response: &str) -> String {
    response
        .trim()
        .replace('`', "")
        .replace("json", "")
        .trim()
        .to_string()
}

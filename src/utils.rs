/// Replaces the HTML entity `&quot;` with a literal double quote.
///
/// The API ships quotes inside joke texts as `&quot;`; this is the only
/// entity it uses, so a plain substring replacement is enough.
pub fn unescape_quotes(text: &str) -> String {
    text.replace("&quot;", "\"")
}

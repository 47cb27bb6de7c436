use crate::error::Error;
use crate::utils::unescape_quotes;

/// A single Chuck Norris fact as delivered by the API. Lives only from parse
/// to render; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Joke {
    pub id: i64,
    pub text: String,
}

#[derive(serde::Deserialize)]
struct JokeResponse {
    #[serde(rename = "type")]
    status: String,
    #[serde(default)]
    value: serde_json::Value,
}

#[derive(serde::Deserialize)]
struct JokeValue {
    id: i64,
    joke: String,
    // The envelope also carries a "categories" array, which we never read.
}

/// Parses the API envelope and extracts the joke.
///
/// The status check happens before the value object is touched, so a
/// `{"type":"fail"}` answer reports the status text instead of a missing
/// field.
pub fn parse_joke(body: &str) -> Result<Joke, Error> {
    let response: JokeResponse = serde_json::from_str(body)?;

    if !response.status.eq_ignore_ascii_case("success") {
        return Err(Error::Status(response.status));
    }

    let value: JokeValue = serde_json::from_value(response.value)?;

    tracing::info!(id = value.id, joke = %value.joke, "parsed fact");

    Ok(Joke {
        id: value.id,
        text: unescape_quotes(&value.joke),
    })
}

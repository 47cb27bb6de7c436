use crate::error::Error;
use crate::models::{Joke, parse_joke};
use std::sync::mpsc::Sender;
use std::thread;

/// Plain HTTP: the API offers no TLS endpoint.
pub const JOKE_API_URL: &str = "http://api.icndb.com/jokes/random?exclude=[explicit]";

/// Fetches the raw response body from `url`.
///
/// Blocking; must never run on the UI thread. The body is joined line by
/// line with the newlines dropped, not reinserted. The payload is
/// single-line JSON in practice, so the joined string stays valid JSON,
/// but the wire format does not guarantee that.
pub fn fetch_joke(client: &reqwest::blocking::Client, url: &str) -> Result<String, Error> {
    let resp = client.get(url).send()?;

    if !resp.status().is_success() {
        return Err(Error::Http(resp.status().to_string()));
    }

    let body: String = resp.text()?.lines().collect();
    Ok(body)
}

/// Runs fetch + parse on a worker thread and delivers the outcome through
/// `tx`. The receiving end lives on the UI thread, which polls it between
/// redraws; the send fails only if the UI has already gone away.
pub fn spawn_fetch(tx: Sender<Result<Joke, Error>>) {
    thread::spawn(move || {
        let client = reqwest::blocking::Client::new();
        let outcome = fetch_joke(&client, JOKE_API_URL).and_then(|body| parse_joke(&body));

        match &outcome {
            Ok(joke) => tracing::info!(id = joke.id, "fetched fact"),
            Err(err) => tracing::error!(%err, "fetch failed"),
        }

        let _ = tx.send(outcome);
    });
}

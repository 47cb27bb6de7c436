use crate::error::Error;
use crate::models::Joke;
use std::sync::mpsc::{self, Receiver, Sender};

pub const ERROR_LABEL: &str = "Error: ";

/// Whether a request is outstanding. Owned by `App` and only ever touched on
/// the UI thread; the worker reports back through the channel instead of
/// sharing a flag.
#[derive(Debug, PartialEq)]
pub enum State {
    Idle,
    Loading,
}

pub struct App {
    pub state: State,
    /// The currently displayed text: a fact, or an error message.
    pub content: String,
    tx: Sender<Result<Joke, Error>>,
    rx: Receiver<Result<Joke, Error>>,
}

impl App {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: State::Idle,
            content: String::new(),
            tx,
            rx,
        }
    }

    /// Handle a tap. Returns `true` if the caller should start a fetch;
    /// while a request is in flight the tap is discarded.
    pub fn on_tap(&mut self) -> bool {
        if self.state == State::Loading {
            tracing::info!("tap ignored, a request is already in flight");
            return false;
        }

        self.state = State::Loading;
        true
    }

    /// The sending end handed to the worker thread for this app's requests.
    pub fn sender(&self) -> Sender<Result<Joke, Error>> {
        self.tx.clone()
    }

    /// Drains completed requests. Called once per UI tick.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.on_result(outcome);
        }
    }

    fn on_result(&mut self, outcome: Result<Joke, Error>) {
        match outcome {
            Ok(joke) => self.content = joke.text,
            Err(err) => {
                tracing::error!(%err, "request failed");
                self.content = format!("{ERROR_LABEL}{err}");
            }
        }
        self.state = State::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{App, ERROR_LABEL, State};
    use crate::error::Error;
    use crate::models::Joke;

    fn joke(text: &str) -> Joke {
        Joke {
            id: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn tap_starts_a_request_when_idle() {
        let mut app = App::new();
        assert!(app.on_tap());
        assert_eq!(app.state, State::Loading);
    }

    #[test]
    fn tap_while_loading_is_discarded() {
        let mut app = App::new();
        assert!(app.on_tap());
        assert!(!app.on_tap());
        assert_eq!(app.state, State::Loading);
    }

    #[test]
    fn success_renders_the_fact_and_returns_to_idle() {
        let mut app = App::new();
        app.on_tap();
        app.sender().send(Ok(joke("Chuck wins."))).unwrap();
        app.poll();
        assert_eq!(app.state, State::Idle);
        assert_eq!(app.content, "Chuck wins.");
    }

    #[test]
    fn failure_renders_a_labelled_message_and_returns_to_idle() {
        let mut app = App::new();
        app.on_tap();
        app.sender()
            .send(Err(Error::Http("404 Not Found".to_string())))
            .unwrap();
        app.poll();
        assert_eq!(app.state, State::Idle);
        assert!(app.content.starts_with(ERROR_LABEL));
        assert!(app.content.contains("404 Not Found"));
    }

    #[test]
    fn tap_rearms_after_completion() {
        let mut app = App::new();
        app.on_tap();
        app.sender().send(Ok(joke("first"))).unwrap();
        app.poll();
        assert!(app.on_tap());
    }

    #[test]
    fn poll_without_results_changes_nothing() {
        let mut app = App::new();
        app.on_tap();
        app.poll();
        assert_eq!(app.state, State::Loading);
    }
}

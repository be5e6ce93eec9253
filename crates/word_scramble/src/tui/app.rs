//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use tracing::{debug, info, instrument};
use word_scramble_core::{Dictionary, GameSession, Rejection};

/// Main application state.
///
/// Owns the game session plus everything that only exists on screen: the
/// word being typed and the rejection alert, if one is showing.
#[derive(Debug, Getters)]
pub struct App<D> {
    session: GameSession<D>,
    input: String,
    alert: Option<Rejection>,
    status_message: String,
    should_quit: bool,
}

impl<D: Dictionary> App<D> {
    /// Creates a new application around `session`.
    #[instrument(skip(session), fields(root_word = %session.root_word()))]
    pub fn new(session: GameSession<D>) -> Self {
        let status_message = welcome(session.root_word());
        Self {
            session,
            input: String::new(),
            alert: None,
            status_message,
            should_quit: false,
        }
    }

    /// Handles a key press.
    ///
    /// While an alert is showing, only Enter, Esc and Space do anything, and
    /// all three dismiss it.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    /// Submits the current input to the session.
    ///
    /// Accepted words clear the input. Rejected words raise an alert and
    /// leave the input in place so it can be corrected.
    #[instrument(skip(self), fields(input = %self.input))]
    pub fn submit(&mut self) {
        match self.session.submit(&self.input) {
            Ok(accepted) => {
                self.status_message = format!("Nice! {} accepted.", accepted.word());
                self.input.clear();
            }
            Err(rejection) => {
                debug!(kind = %rejection.kind(), "Showing rejection alert");
                self.alert = Some(rejection);
            }
        }
    }

    /// Starts a new round with a fresh root word.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.session.reset();
        self.input.clear();
        self.alert = None;
        self.status_message = welcome(self.session.root_word());
        info!(root_word = %self.session.root_word(), "New round");
    }

    /// Hides the rejection alert.
    #[instrument(skip(self))]
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }
}

fn welcome(root_word: &str) -> String {
    format!("Spell new words using the letters of {}", root_word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_scramble_core::{Language, RejectionKind, WordList, WordListDictionary, WordSource};

    fn app() -> App<WordListDictionary> {
        let dictionary =
            WordListDictionary::from_words(["listen", "tin", "silent"], Language::English);
        let source = WordSource::new(WordList::from_words(["listen"]));
        App::new(GameSession::with_root_word(source, dictionary, "listen"))
    }

    fn type_word(app: &mut App<WordListDictionary>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut app = app();
        type_word(&mut app, "tix");
        app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(app.input(), "ti");
    }

    #[test]
    fn test_rejection_keeps_input() {
        let mut app = app();
        type_word(&mut app, "zzz");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.input(), "zzz");
        assert_eq!(
            app.alert().as_ref().map(|a| *a.kind()),
            Some(RejectionKind::NotReal)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(*app.should_quit());
        assert!(app.input().is_empty());
    }
}

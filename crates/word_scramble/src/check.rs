//! Non-interactive checking of a batch of words against one root word.

use anyhow::{Result, bail};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use word_scramble_core::{
    Dictionary, GameSession, Language, Rejection, SessionSnapshot, WordList, WordSource,
};

/// Outcome of one submitted word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct WordResult {
    /// The word as it was submitted.
    word: String,
    /// Why the word was rejected, if it was.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    rejection: Option<Rejection>,
}

impl WordResult {
    /// Whether the word was accepted.
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Results of a batch check, in submission order, plus the final session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct CheckReport {
    /// Per-word outcomes.
    results: Vec<WordResult>,
    /// Session state after every word was submitted.
    session: SessionSnapshot,
}

impl CheckReport {
    /// Renders the report as human-readable lines.
    pub fn render_text(&self) -> String {
        let mut out = format!("Root word: {}\n", self.session.root_word());
        for result in &self.results {
            match &result.rejection {
                None => out.push_str(&format!("✓ {}\n", result.word)),
                Some(rejection) => out.push_str(&format!(
                    "✗ {} ({}) {}\n",
                    result.word,
                    rejection.title(),
                    rejection.message()
                )),
            }
        }
        out.push_str(&format!("Your point is: {}\n", self.session.score()));
        out
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Starts a session for checking words against `root`.
///
/// # Errors
///
/// Fails if `root` is blank after trimming.
#[instrument(skip(dictionary))]
pub fn check_session<D: Dictionary>(
    root: &str,
    dictionary: D,
    language: Language,
) -> Result<GameSession<D>> {
    if root.trim().is_empty() {
        bail!("Root word must not be empty");
    }
    let source = WordSource::new(WordList::from_words([root]));
    Ok(GameSession::with_root_word(source, dictionary, root).with_language(language))
}

/// Submits each word to `session` in order and collects the outcomes.
///
/// Words are checked against the history built up by earlier words in the
/// same batch, exactly as if they had been typed one after another.
#[instrument(skip(session, words), fields(root_word = %session.root_word(), count = words.len()))]
pub fn run_check<D: Dictionary>(session: &mut GameSession<D>, words: &[String]) -> CheckReport {
    let results = words
        .iter()
        .map(|word| {
            let rejection = session.submit(word).err();
            debug!(word = %word, accepted = rejection.is_none(), "Checked word");
            WordResult::new(word.clone(), rejection)
        })
        .collect();

    CheckReport::new(results, session.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use word_scramble_core::{RejectionKind, WordListDictionary};

    fn session() -> GameSession<WordListDictionary> {
        let dictionary = WordListDictionary::from_words(
            ["listen", "tin", "silent", "lint", "list"],
            Language::English,
        );
        GameSession::with_root_word(WordSource::new(WordList::from_words(["listen"])), dictionary, "listen")
    }

    #[test]
    fn test_check_session_rejects_blank_root() {
        for blank in ["", "   "] {
            let dictionary = WordListDictionary::from_words(["tin"], Language::English);
            let err = check_session(blank, dictionary, Language::English).unwrap_err();
            assert!(err.to_string().contains("Root word must not be empty"));
        }
    }

    #[test]
    fn test_check_session_canonicalizes_root() {
        let dictionary = WordListDictionary::from_words(["tin"], Language::English);
        let mut session = check_session(" Listen ", dictionary, Language::English).unwrap();
        assert_eq!(session.root_word(), "listen");

        let report = run_check(&mut session, &["tin".to_string()]);
        assert!(report.results()[0].is_accepted());
    }

    #[test]
    fn test_run_check_keeps_submission_order() {
        let mut session = session();
        let words: Vec<String> = ["tin", "tin", "no", "lint"].map(String::from).to_vec();

        let report = run_check(&mut session, &words);

        let kinds: Vec<Option<RejectionKind>> = report
            .results()
            .iter()
            .map(|r| r.rejection().as_ref().map(|rej| *rej.kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![None, Some(RejectionKind::Unoriginal), Some(RejectionKind::TooShort), None]
        );
        assert_eq!(report.session().score(), &2);
    }

    #[test]
    fn test_render_text_lists_every_word_and_score() {
        let mut session = session();
        let words: Vec<String> = ["tin", "listen"].map(String::from).to_vec();

        let text = run_check(&mut session, &words).render_text();

        assert!(text.starts_with("Root word: listen\n"));
        assert!(text.contains("✓ tin\n"));
        assert!(text.contains("✗ listen (Entering listen isn't allowed!)"));
        assert!(text.ends_with("Your point is: 1\n"));
    }

    #[test]
    fn test_json_omits_rejection_for_accepted_words() {
        let mut session = session();
        let words = vec!["silent".to_string()];

        let json = run_check(&mut session, &words).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["results"][0]["word"], "silent");
        assert!(value["results"][0].get("rejection").is_none());
        assert_eq!(value["session"]["score"], 1);
    }
}

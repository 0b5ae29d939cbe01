use interpreter_domain::{Credential, Language, LanguagePair};
use serde::{Deserialize, Serialize};

use crate::{ApplicationError, InterpretOutcome};

/// Which side of the language pair a selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageField {
    Input,
    Output,
}

/// Per-session mutable state: the language pair, the credential, a browser
/// payload waiting for its triggering cycle, and the last computed outcome.
/// One pipeline run is active per session at most; a second trigger is
/// refused while one is in flight.
#[derive(Debug)]
pub struct SessionState {
    pair: LanguagePair,
    credential: Option<Credential>,
    pending_payload: Option<String>,
    last_outcome: Option<InterpretOutcome>,
    in_flight: bool,
}

impl SessionState {
    pub fn new(pair: LanguagePair) -> Self {
        Self {
            pair,
            credential: None,
            pending_payload: None,
            last_outcome: None,
            in_flight: false,
        }
    }

    pub fn pair(&self) -> LanguagePair {
        self.pair
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Sets one side of the pair. Any language change invalidates results
    /// computed under the previous selection.
    pub fn select(&mut self, field: LanguageField, language: Language) {
        match field {
            LanguageField::Input => self.pair.input = language,
            LanguageField::Output => self.pair.output = language,
        }
        self.last_outcome = None;
    }

    /// Exchanges input and output languages. Both were already valid members
    /// of the supported set, so no validation is performed.
    pub fn swap(&mut self) {
        self.pair.swap();
        self.last_outcome = None;
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    /// Stores a browser-delivered payload until the next triggering cycle
    /// reads it.
    pub fn set_pending_payload(&mut self, payload: String) {
        self.pending_payload = Some(payload);
    }

    pub fn take_pending_payload(&mut self) -> Option<String> {
        self.pending_payload.take()
    }

    pub fn last_outcome(&self) -> Option<&InterpretOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn begin_run(&mut self) -> Result<(), ApplicationError> {
        if self.in_flight {
            return Err(ApplicationError::Busy);
        }
        self.in_flight = true;
        Ok(())
    }

    pub(crate) fn finish_run(&mut self, outcome: Option<InterpretOutcome>) {
        self.in_flight = false;
        self.last_outcome = outcome;
    }
}

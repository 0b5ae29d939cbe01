use interpreter_domain::SynthesizedAudio;

/// Terminal result of one pipeline run. A failed run produces an error
/// instead, never a partial outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpretOutcome {
    /// Full run: transcript, translation, and playable audio.
    Done {
        transcript: String,
        translation: String,
        audio: SynthesizedAudio,
    },
    /// The transcription service heard no speech. Not an error; translation
    /// and synthesis are skipped.
    Empty { advisory: String },
}

impl InterpretOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, InterpretOutcome::Done { .. })
    }
}

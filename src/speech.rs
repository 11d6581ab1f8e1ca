/// Outcome of one speech-to-text attempt.
///
/// "Nothing recognized" and "the STT service failed" are distinct
/// states: the first asks the user to retry, the second reports a
/// service problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcription {
    /// Recognized, non-empty text.
    Text(String),

    /// Audio received but no usable speech detected.
    NoSpeech,

    /// The transcription service itself failed.
    ApiError,
}

/// Speech-to-text collaborator seam. Implementations live outside the
/// core crate (the real service is an external API).
pub trait SpeechToText {
    fn transcribe(&self, audio: &[u8]) -> Transcription;
}

/// Text-to-speech collaborator seam. `None` means synthesis failed;
/// callers keep showing the text and skip the audio.
pub trait TextToSpeech {
    fn synthesize(&self, text: &str, language: &str, slow: bool) -> Option<Vec<u8>>;
}

/// User input as seen by the pipeline, after transcription handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Text(String),

    /// No usable input; the user is asked to retry. Never substituted
    /// with synthetic example text.
    NoInput,

    /// The transcription service failed; reported distinctly.
    ServiceError,
}

/// Map a transcription onto pipeline input.
///
/// Whitespace-only text counts as no input.
pub fn classify_transcription(transcription: Transcription) -> UserInput {
    match transcription {
        Transcription::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                UserInput::NoInput
            } else {
                UserInput::Text(trimmed.to_string())
            }
        }
        Transcription::NoSpeech => UserInput::NoInput,
        Transcription::ApiError => UserInput::ServiceError,
    }
}

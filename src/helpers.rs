use std::sync::{Mutex, MutexGuard, PoisonError};

use tungstenite::Message;

use crate::{
    errors::QuizError,
    localization::Localizer,
    models::communication::{Command, Response},
};

pub fn parse_command(msg: &Message) -> Result<Command, serde_json::Error> {
    serde_json::from_str(&msg.to_string())
}

/// Locks `mutex`, carrying on with the data if a holder panicked.
pub fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn error_response(error: &QuizError, localizer: &Localizer, language: &str) -> Response {
    Response::errorResponse {
        kind: error.kind(),
        errorText: localizer.text(error.text_key(), language),
        detail: error.to_string(),
    }
}

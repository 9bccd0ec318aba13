//! Handset state: display, keypad buffer and the active session

use super::{ClientError, UssdTransport};
use crate::api::UssdRequest;
use crate::menu::SessionStatus;

pub const IDLE_PROMPT: &str = "Welcome to the USSD emulator. Enter the USSD code to begin.";
pub const MISSING_INPUT_PROMPT: &str =
    "Please first enter the API URL and a USSD code or a response.";

/// Keys present on the handset keypad
const KEYPAD: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];

pub struct Emulator<T> {
    transport: T,
    phone_number: String,
    entry_code: String,
    display: String,
    input: String,
    /// Set while the server keeps answering `CON`
    session_id: Option<String>,
}

impl<T: UssdTransport> Emulator<T> {
    pub fn new(transport: T, phone_number: impl Into<String>, entry_code: impl Into<String>) -> Self {
        Self {
            transport,
            phone_number: phone_number.into(),
            entry_code: entry_code.into(),
            display: IDLE_PROMPT.to_string(),
            input: String::new(),
            session_id: None,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_session_active(&self) -> bool {
        self.session_id.is_some()
    }

    /// Append a keypad key. Returns false for keys the handset does not have.
    pub fn press(&mut self, key: char) -> bool {
        if KEYPAD.contains(&key) {
            self.input.push(key);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Drop the current session and return to the idle screen
    pub fn reset(&mut self) {
        self.display = IDLE_PROMPT.to_string();
        self.input.clear();
        self.session_id = None;
    }

    /// Request for the current input: a new session dials the typed code,
    /// an active one answers the menu under the entry code.
    fn next_request(&self) -> UssdRequest {
        match &self.session_id {
            Some(session_id) => UssdRequest {
                session_id: session_id.clone(),
                phone_number: self.phone_number.clone(),
                service_code: self.entry_code.clone(),
                text: self.input.clone(),
            },
            None => UssdRequest {
                session_id: uuid::Uuid::new_v4().to_string(),
                phone_number: self.phone_number.clone(),
                service_code: self.input.clone(),
                text: String::new(),
            },
        }
    }

    /// Submit the keypad buffer.
    ///
    /// Returns the reply status, or `None` if nothing was sent or the
    /// request failed. Any failure discards the session.
    pub async fn send(&mut self) -> Option<SessionStatus> {
        if self.input.is_empty() {
            self.display = MISSING_INPUT_PROMPT.to_string();
            return None;
        }

        let request = self.next_request();
        match self.transport.send(&request).await {
            Ok(reply) => {
                self.display = reply.message;
                self.session_id = match reply.status {
                    SessionStatus::Continue => Some(request.session_id),
                    SessionStatus::End => None,
                };
                self.input.clear();
                Some(reply.status)
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }

    fn fail(&mut self, err: &ClientError) {
        tracing::warn!(error = %err, "USSD request failed");
        self.display = format!("Error: {err}");
        self.session_id = None;
    }
}

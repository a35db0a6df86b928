//! Message processing
//!
//! Runs a message through the TEA update function, following any
//! follow-up messages it produces.

use tracing::trace;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        if !matches!(m, Message::Tick) {
            trace!("Processing {:?}", m);
        }
        msg = handler::update(state, m).message;
    }
}

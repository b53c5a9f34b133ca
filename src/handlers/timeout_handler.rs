use std::time::Duration;

use futures_channel::mpsc::UnboundedReceiver;
use futures_timer::Delay;
use futures_util::{future, pin_mut, StreamExt};
use log::info;

use crate::{
    handlers::game_handler::{advance_response, current_preferences},
    helpers::lock,
    models::{
        client::{Lists, SharedGame},
        game::AdvanceTicket,
    },
    server_messages::send_message,
};

/// Shows feedback for `delay`, then advances the game, unless a message
/// arrives on `rx` (or its sender is dropped) first.
pub async fn handle_advance_timeout(
    game: SharedGame,
    ticket: AdvanceTicket,
    delay: Duration,
    rx: UnboundedReceiver<bool>,
    lists: Lists,
    client_id: String,
) {
    let timer = Delay::new(delay);
    let cancelled = rx.into_future();

    pin_mut!(timer, cancelled);
    match future::select(timer, cancelled).await {
        future::Either::Left(_) => {
            let preferences = current_preferences(&lists);
            let response = {
                let mut session = lock(&game);
                let advance = session.advance(ticket);
                advance_response(advance, &session, &preferences, &lists.3.localizer)
            };

            match response {
                Some(response) => send_message(response, &lists.0, &client_id),
                None => info!("Stale advancement dropped for: {}", &client_id),
            }
        }
        future::Either::Right(_) => {
            info!("Advancement cancelled for: {}", &client_id);
        }
    }
}

use futures_channel::mpsc::unbounded;
use futures_util::{future, pin_mut, StreamExt, TryStreamExt};
use log::{info, warn};
use std::net::SocketAddr;
use tokio::net::TcpStream;
use uuid::Uuid;

use crate::{
    errors::ErrorKind,
    handlers::{command_handler::execute_command, game_handler::current_preferences},
    helpers::{lock, parse_command},
    models::{
        client::{Client, Lists},
        communication::Response,
    },
    server_messages::send_message,
};

pub async fn handle_connection(lists: Lists, raw_stream: TcpStream, addr: SocketAddr) {
    info!("Incoming TCP connection from: {}", &addr);

    let ws_stream = match tokio_tungstenite::accept_async(raw_stream).await {
        Ok(stream) => stream,
        Err(error) => {
            warn!("Handshake with {} error: {}", addr, error);
            return;
        }
    };
    info!("WebSocket connection established: {}", &addr);

    let connection_id = Uuid::new_v4().to_string();
    let (tx, rx) = unbounded();
    lock(&lists.0).insert(connection_id.clone(), tx);
    lock(&lists.1).insert(connection_id.clone(), Client::new(&connection_id));

    send_message(
        Response::settingsResponse {
            preferences: current_preferences(&lists),
        },
        &lists.0,
        &connection_id,
    );

    let (outgoing, incoming) = ws_stream.split();

    let handle_incoming = incoming.try_for_each(|msg| {
        if msg.is_close() || msg.is_ping() || msg.is_pong() {
            return future::ok(());
        }

        match parse_command(&msg) {
            Ok(command) => execute_command(command, &lists, &connection_id),
            Err(error) => {
                warn!("Error parsing command!: {}", error);
                let response = Response::errorResponse {
                    kind: ErrorKind::invalidState,
                    errorText: error.to_string(),
                    detail: msg.to_string(),
                };
                send_message(response, &lists.0, &connection_id);
            }
        }

        future::ok(())
    });

    let receive_from_others = rx.map(Ok).forward(outgoing);

    pin_mut!(handle_incoming, receive_from_others);
    future::select(handle_incoming, receive_from_others).await;

    info!("{} disconnected", &addr);

    // Dropping the client drops its cancel sender, which stops a pending
    // advancement for its game.
    if let Some(mut client) = lock(&lists.1).remove(&connection_id) {
        client.cancel_pending_advance();
    }
    lock(&lists.0).remove(&connection_id);
}

use log::{info, warn};
use tungstenite::protocol::Message;

use crate::{
    helpers::lock,
    models::{client::PeerMap, communication::Response},
};

pub fn send_message(response: Response, peer_map: &PeerMap, id: &str) {
    let text = match serde_json::to_string(&response) {
        Ok(text) => text,
        Err(error) => {
            warn!("Could not serialize response for {}: {}", id, error);
            return;
        }
    };

    let peers = lock(peer_map);
    match peers.get(id) {
        Some(recp) => match recp.unbounded_send(Message::Text(text)) {
            Ok(()) => info!("Message sent successfully to: {}", id),
            Err(error) => warn!("Sending to {} failed: {}", id, error),
        },
        None => warn!("No connection for: {}", id),
    }
}

pub fn broadcast_message_all(response: Response, peer_map: &PeerMap) {
    info!("Sending broadcast to all connections");
    let text = match serde_json::to_string(&response) {
        Ok(text) => text,
        Err(error) => {
            warn!("Could not serialize broadcast: {}", error);
            return;
        }
    };

    let peers = lock(peer_map);
    for (id, recp) in peers.iter() {
        if let Err(error) = recp.unbounded_send(Message::Text(text.clone())) {
            warn!("Broadcast to {} failed: {}", id, error);
        }
    }
    info!("Broadcast sent successfully to all connections");
}

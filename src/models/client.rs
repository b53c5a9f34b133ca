use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use futures_channel::mpsc::UnboundedSender;
use log::info;
use rand::rngs::StdRng;
use tungstenite::Message;

use super::filter::FilterState;
use crate::{
    config::AppConfig,
    directory::CountryDirectory,
    localization::Localizer,
    provider::CountryProvider,
    session::GameSession,
    settings::{Preferences, SettingsStore},
};

pub type Tx = UnboundedSender<Message>;
pub type PeerMap = Arc<Mutex<HashMap<String, Tx>>>;
pub type ClientList = Arc<Mutex<HashMap<String, Client>>>;
pub type SharedSettings = Arc<Mutex<Settings>>;
pub type SharedGame = Arc<Mutex<GameSession<StdRng>>>;
pub type Lists = (PeerMap, ClientList, SharedSettings, Arc<AppContext>);

/// What one connected client is looking at.
pub struct Client {
    pub id: String,
    pub filter: FilterState,
    /// Country list fetched on the first directory request.
    pub directory: Option<Arc<CountryDirectory>>,
    pub game: Option<SharedGame>,
    /// Cancels the pending feedback timer when sent to or dropped.
    pub cancel_advance: Option<UnboundedSender<bool>>,
}

impl Client {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            filter: FilterState::default(),
            directory: None,
            game: None,
            cancel_advance: None,
        }
    }

    pub fn cancel_pending_advance(&mut self) {
        if let Some(cancel) = self.cancel_advance.take() {
            info!("Cancelling pending advancement for: {}", &self.id);
            let _ = cancel.unbounded_send(true);
        }
    }
}

pub struct Settings {
    pub preferences: Preferences,
    pub store: Box<dyn SettingsStore>,
}

/// Read-only services shared by every connection.
pub struct AppContext {
    pub config: AppConfig,
    pub provider: Box<dyn CountryProvider>,
    pub localizer: Localizer,
}

#[cfg(test)]
mod tests {
    use futures_channel::mpsc::unbounded;

    use super::*;

    #[test]
    fn cancel_signals_once() {
        let (tx, mut rx) = unbounded();
        let mut client = Client::new("a");
        client.cancel_advance = Some(tx);

        client.cancel_pending_advance();
        client.cancel_pending_advance();

        assert_eq!(client.id, "a");
        assert!(client.cancel_advance.is_none());
        assert_eq!(rx.try_recv().ok(), Some(true));
        assert!(rx.try_recv().is_err());
    }
}

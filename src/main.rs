use country_quiz_rust::{
    config::AppConfig,
    handlers::connection_handler::handle_connection,
    localization::Localizer,
    loggers::file_logger::init_file_logger,
    models::client::{AppContext, ClientList, Lists, PeerMap, Settings, SharedSettings},
    provider::FileCountryProvider,
    settings::{Preferences, SqliteSettingsStore},
};
use log::{info, warn};
use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load(env::args());
    init_file_logger(&config.log_dir)?;
    info!("App started!");

    let localizer = Localizer::default();
    let store = SqliteSettingsStore::open(&config.settings_path)?;
    let mut preferences = match Preferences::load(&store) {
        Ok(preferences) => preferences,
        Err(error) => {
            warn!("Falling back to default preferences: {}", error);
            Preferences::default()
        }
    };
    if !localizer.has_language(&preferences.language) {
        warn!("No translations for {}, using defaults", &preferences.language);
        preferences.language = Preferences::default().language;
    }
    info!(
        "Preferences: theme {}, language {}",
        preferences.theme.as_str(),
        &preferences.language
    );

    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on: {}", &config.listen_addr);

    let peers = PeerMap::new(Mutex::new(HashMap::new()));
    let clients = ClientList::new(Mutex::new(HashMap::new()));
    let settings = SharedSettings::new(Mutex::new(Settings {
        preferences,
        store: Box::new(store),
    }));
    let context = Arc::new(AppContext {
        provider: Box::new(FileCountryProvider::new(config.countries_path.clone())),
        localizer,
        config,
    });
    let lists: Lists = (peers, clients, settings, context);

    while let Ok((stream, addr)) = listener.accept().await {
        tokio::spawn(handle_connection(lists.clone(), stream, addr));
    }

    Ok(())
}

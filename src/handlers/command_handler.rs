use std::sync::Arc;

use log::{info, warn};

use crate::{
    directory::{country_card, country_details, CountryDirectory},
    errors::QuizError,
    handlers::game_handler::{current_preferences, restart_game, start_game, submit_answer},
    helpers::{error_response, lock},
    localization::{Localizer, CANONICAL_REGIONS},
    models::{
        client::Lists,
        communication::{Command, RegionOption, Response},
        filter::FilterState,
    },
    server_messages::{broadcast_message_all, send_message},
};

pub fn execute_command(command: Command, lists: &Lists, connection_id: &str) {
    match command {
        Command::heartbeat {} => {
            info!("Heartbeat from: {}", connection_id);
        }
        Command::getPage {}
        | Command::search { .. }
        | Command::selectRegion { .. }
        | Command::selectSubregion { .. }
        | Command::sortBy { .. }
        | Command::goToPage { .. } => {
            execute_directory_command(command, lists, connection_id);
        }
        Command::getCountry { name } => {
            info!("Country request for {} from: {}", &name, connection_id);
            let preferences = current_preferences(lists);
            let localizer = &lists.3.localizer;

            let response = match lists.3.provider.country_by_name(&name) {
                Ok(countries) => match countries.first() {
                    Some(country) => Response::countryResponse {
                        country: country_details(country, localizer, &preferences.language),
                    },
                    None => error_response(
                        &QuizError::CountryNotFound(name),
                        localizer,
                        &preferences.language,
                    ),
                },
                Err(error) => {
                    warn!("Country lookup failed: {}", error);
                    error_response(&error, localizer, &preferences.language)
                }
            };
            send_message(response, &lists.0, connection_id);
        }
        Command::startGame { mode } => start_game(lists, connection_id, mode),
        Command::writeAnswer { answer } => submit_answer(lists, connection_id, &answer),
        Command::restartGame {} => restart_game(lists, connection_id),
        Command::getSettings {} => {
            let preferences = current_preferences(lists);
            send_message(
                Response::settingsResponse { preferences },
                &lists.0,
                connection_id,
            );
        }
        Command::toggleTheme {} => {
            info!("Toggle theme from: {}", connection_id);
            let preferences = {
                let mut guard = lock(&lists.2);
                let settings = &mut *guard;
                if let Err(error) = settings.preferences.toggle_theme(settings.store.as_mut()) {
                    warn!("Could not persist theme: {}", error);
                }
                settings.preferences.clone()
            };
            broadcast_message_all(Response::settingsResponse { preferences }, &lists.0);
        }
        Command::toggleLanguage {} => {
            info!("Toggle language from: {}", connection_id);
            let preferences = {
                let mut guard = lock(&lists.2);
                let settings = &mut *guard;
                if let Err(error) = settings
                    .preferences
                    .toggle_language(settings.store.as_mut())
                {
                    warn!("Could not persist language: {}", error);
                }
                settings.preferences.clone()
            };
            broadcast_message_all(Response::settingsResponse { preferences }, &lists.0);
        }
    }
}

/// The client's directory, fetched from the provider on first use.
fn client_directory(lists: &Lists, connection_id: &str) -> Option<Arc<CountryDirectory>> {
    let cached = lock(&lists.1)
        .get(connection_id)
        .and_then(|client| client.directory.clone());
    if cached.is_some() {
        return cached;
    }

    match lists.3.provider.all_countries() {
        Ok(countries) => {
            let directory = Arc::new(CountryDirectory::new(countries));
            if let Some(client) = lock(&lists.1).get_mut(connection_id) {
                client.directory = Some(directory.clone());
            }
            Some(directory)
        }
        Err(error) => {
            let preferences = current_preferences(lists);
            send_message(
                error_response(&error, &lists.3.localizer, &preferences.language),
                &lists.0,
                connection_id,
            );
            None
        }
    }
}

fn execute_directory_command(command: Command, lists: &Lists, connection_id: &str) {
    let directory = match client_directory(lists, connection_id) {
        Some(directory) => directory,
        None => return,
    };

    let filter = {
        let mut clients = lock(&lists.1);
        let client = match clients.get_mut(connection_id) {
            Some(client) => client,
            None => {
                warn!("Unknown client: {}", connection_id);
                return;
            }
        };

        match command {
            Command::search { text } => client.filter.set_search(&text),
            Command::selectRegion { region } => directory.select_region(&mut client.filter, &region),
            Command::selectSubregion { subregion } => client.filter.set_subregion(&subregion),
            Command::sortBy { order } => client.filter.set_sort(order),
            Command::goToPage { page } => client.filter.set_page(page),
            _ => (),
        }
        client.filter.page = directory.page(&client.filter).page;
        client.filter.clone()
    };

    let preferences = current_preferences(lists);
    let response = page_response(&directory, &filter, &lists.3.localizer, &preferences.language);
    send_message(response, &lists.0, connection_id);
}

pub fn page_response(
    directory: &CountryDirectory,
    filter: &FilterState,
    localizer: &Localizer,
    language: &str,
) -> Response {
    let page = directory
        .page(filter)
        .map(|country| country_card(country, localizer, language));

    let regions = CANONICAL_REGIONS
        .iter()
        .zip(localizer.translated_regions(language))
        .map(|(region, label)| RegionOption {
            value: region.to_string(),
            label,
        })
        .collect();
    let subregions = directory
        .subregions(&filter.region)
        .into_iter()
        .map(|subregion| RegionOption {
            label: localizer.translate_subregion(&subregion, language),
            value: subregion,
        })
        .collect();

    let empty_text = if page.totalItems == 0 {
        Some(localizer.text("noCountriesFound", language))
    } else {
        None
    };

    Response::pageResponse {
        page,
        filter: filter.clone(),
        regions,
        subregions,
        emptyText: empty_text,
    }
}

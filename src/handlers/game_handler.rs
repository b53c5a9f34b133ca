use std::sync::{Arc, Mutex};

use futures_channel::mpsc::unbounded;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::AppConfig,
    errors::QuizError,
    handlers::timeout_handler::handle_advance_timeout,
    helpers::{error_response, lock},
    localization::Localizer,
    models::{
        client::{Lists, SharedGame},
        communication::Response,
        game::{GameMode, Question, TOTAL_ROUNDS},
    },
    server_messages::send_message,
    session::{Advance, GameSession},
    settings::Preferences,
};

pub fn new_rng(config: &AppConfig) -> StdRng {
    match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn current_preferences(lists: &Lists) -> Preferences {
    lock(&lists.2).preferences.clone()
}

pub fn question_response(
    session: &GameSession<StdRng>,
    question: &Question,
    preferences: &Preferences,
    localizer: &Localizer,
) -> Response {
    let mode = session.mode();
    Response::questionResponse {
        mode,
        title: localizer.text(mode.title_key(), &preferences.language),
        round: session.state().round_index + 1,
        totalRounds: TOTAL_ROUNDS,
        score: session.state().score,
        choices: question.choices.clone(),
        prompt: question.prompt.clone(),
        tileUrl: match mode {
            GameMode::map => Some(preferences.theme.tile_url().to_string()),
            GameMode::flag => None,
        },
    }
}

/// Response for an advancement, `None` when it was stale.
pub fn advance_response(
    advance: Advance,
    session: &GameSession<StdRng>,
    preferences: &Preferences,
    localizer: &Localizer,
) -> Option<Response> {
    let language = preferences.language.as_str();
    match advance {
        Advance::Next(question) => Some(question_response(
            session,
            &question,
            preferences,
            localizer,
        )),
        Advance::Finished(outcome) => Some(Response::gameOverResponse {
            title: localizer.text("gameOver", language),
            outcome,
            text: localizer.text(outcome.tier.text_key(), language),
        }),
        Advance::Failed(error) => Some(error_response(&error, localizer, language)),
        Advance::Ignored => None,
    }
}

pub fn start_game(lists: &Lists, client_id: &str, mode: GameMode) {
    info!("Start {:?} game request from: {}", mode, client_id);

    let game: SharedGame = Arc::new(Mutex::new(GameSession::new(
        mode,
        new_rng(&lists.3.config),
    )));

    let previous = {
        let mut clients = lock(&lists.1);
        let client = match clients.get_mut(client_id) {
            Some(client) => client,
            None => {
                warn!("Unknown client: {}", client_id);
                return;
            }
        };
        client.cancel_pending_advance();
        client.game.replace(game.clone())
    };

    // A timer that already fired may still hold the old session.
    if let Some(previous) = previous {
        lock(&previous).restart();
    }

    load_game(lists, client_id, &game);
}

/// Fetches countries and moves the session out of `Loading`.
fn load_game(lists: &Lists, client_id: &str, game: &SharedGame) {
    let countries = lists.3.provider.all_countries();
    let preferences = current_preferences(lists);
    let localizer = &lists.3.localizer;

    let response = {
        let mut session = lock(game);
        let loaded = session.load(countries).map(|question| question.clone());
        match loaded {
            Ok(question) => question_response(&session, &question, &preferences, localizer),
            Err(error) => error_response(&error, localizer, &preferences.language),
        }
    };

    send_message(response, &lists.0, client_id);
}

pub fn submit_answer(lists: &Lists, client_id: &str, answer: &str) {
    info!("Answer message from: {}", client_id);

    let game = {
        let clients = lock(&lists.1);
        clients.get(client_id).and_then(|client| client.game.clone())
    };
    let game = match game {
        Some(game) => game,
        None => {
            warn!("Game does not exist for: {}", client_id);
            let preferences = current_preferences(lists);
            let error = QuizError::InvalidState("no game in progress".to_string());
            send_message(
                error_response(&error, &lists.3.localizer, &preferences.language),
                &lists.0,
                client_id,
            );
            return;
        }
    };

    let (submitted, mode, score) = {
        let mut session = lock(&game);
        let submitted = session.submit_answer(answer);
        (submitted, session.mode(), session.state().score)
    };
    let (feedback, ticket) = match submitted {
        Some(submitted) => submitted,
        None => {
            info!("Ignoring answer from {}: no question awaiting an answer", client_id);
            return;
        }
    };

    let preferences = current_preferences(lists);
    let localizer = &lists.3.localizer;
    let language = preferences.language.as_str();
    let text = if feedback.correct {
        localizer.text("correct", language)
    } else {
        format!(
            "{} {} {}.",
            localizer.text("wrong", language),
            localizer.text("correctAnswer", language),
            &feedback.correctAnswer
        )
    };

    send_message(
        Response::feedbackResponse {
            correct: feedback.correct,
            correctAnswer: feedback.correctAnswer,
            text,
            score,
        },
        &lists.0,
        client_id,
    );

    let (tx_cancel, rx_cancel) = unbounded();
    match lock(&lists.1).get_mut(client_id) {
        Some(client) => client.cancel_advance = Some(tx_cancel),
        None => return,
    }

    tokio::spawn(handle_advance_timeout(
        game,
        ticket,
        lists.3.config.feedback_delay(mode),
        rx_cancel,
        lists.clone(),
        client_id.to_string(),
    ));
}

/// Full reset of the client's game followed by a fresh load.
pub fn restart_game(lists: &Lists, client_id: &str) {
    info!("Restart game request from: {}", client_id);

    let game = {
        let mut clients = lock(&lists.1);
        match clients.get_mut(client_id) {
            Some(client) => {
                client.cancel_pending_advance();
                client.game.clone()
            }
            None => None,
        }
    };

    match game {
        Some(game) => {
            lock(&game).restart();
            load_game(lists, client_id, &game);
        }
        None => {
            let preferences = current_preferences(lists);
            let error = QuizError::InvalidState("no game to restart".to_string());
            send_message(
                error_response(&error, &lists.3.localizer, &preferences.language),
                &lists.0,
                client_id,
            );
        }
    }
}

use log::{info, warn};
use rand::Rng;

use crate::{
    errors::QuizError,
    models::{
        country::Country,
        game::{
            percentage, AdvanceTicket, Feedback, GameMode, GameState, Outcome, OutcomeTier,
            Question, TOTAL_ROUNDS,
        },
    },
    questions::QuestionGenerator,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Loading,
    Playing,
    Terminal,
    Failed(QuizError),
}

/// Result of presenting an `AdvanceTicket` back to the session.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    Next(Question),
    Finished(Outcome),
    Failed(QuizError),
    /// The ticket belonged to an earlier round or an earlier play-through.
    Ignored,
}

/// One play-through of a guessing game, from loading to the final score.
#[derive(Debug)]
pub struct GameSession<R: Rng> {
    mode: GameMode,
    generator: QuestionGenerator<R>,
    phase: GamePhase,
    pool: Vec<Country>,
    state: GameState,
    question: Option<Question>,
    epoch: u64,
}

impl<R: Rng> GameSession<R> {
    pub fn new(mode: GameMode, rng: R) -> Self {
        Self {
            mode,
            generator: QuestionGenerator::new(rng),
            phase: GamePhase::Loading,
            pool: Vec::new(),
            state: GameState::default(),
            question: None,
            epoch: 0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Completes the loading phase with the provider's answer.
    pub fn load(&mut self, countries: Result<Vec<Country>, QuizError>) -> Result<&Question, QuizError> {
        if self.phase != GamePhase::Loading {
            return Err(QuizError::InvalidState(
                "countries already loaded for this game".to_string(),
            ));
        }

        let pool = match countries {
            Ok(pool) => pool,
            Err(error) => {
                warn!("Game failed to load: {}", error);
                self.phase = GamePhase::Failed(error.clone());
                return Err(error);
            }
        };
        info!("Loaded {} countries for {:?} game", pool.len(), self.mode);
        self.pool = pool;

        match self.generator.generate(&self.pool, self.mode) {
            Ok(question) => {
                self.phase = GamePhase::Playing;
                Ok(&*self.question.insert(question))
            }
            Err(error) => {
                warn!("Could not build the first question: {}", error);
                self.phase = GamePhase::Failed(error.clone());
                Err(error)
            }
        }
    }

    /// Scores `choice` against the current question. Only the first answer
    /// per question counts; later ones return `None`.
    pub fn submit_answer(&mut self, choice: &str) -> Option<(Feedback, AdvanceTicket)> {
        if self.phase != GamePhase::Playing || self.state.last_feedback.is_some() {
            return None;
        }
        let question = self.question.as_ref()?;

        let correct = question.is_correct(choice);
        if correct {
            self.state.score += 1;
        }
        let feedback = Feedback {
            correct,
            correctAnswer: question.answer().to_string(),
        };
        self.state.last_feedback = Some(feedback.clone());

        let ticket = AdvanceTicket {
            epoch: self.epoch,
            round: self.state.round_index,
        };
        Some((feedback, ticket))
    }

    pub fn is_current(&self, ticket: &AdvanceTicket) -> bool {
        self.phase == GamePhase::Playing
            && ticket.epoch == self.epoch
            && ticket.round == self.state.round_index
            && self.state.last_feedback.is_some()
    }

    /// Moves past an answered question once its feedback has been shown.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> Advance {
        if !self.is_current(&ticket) {
            info!("Ignoring stale advancement {:?}", ticket);
            return Advance::Ignored;
        }

        self.state.round_index += 1;
        self.state.last_feedback = None;

        if self.state.round_index >= TOTAL_ROUNDS {
            self.state.terminal = true;
            self.phase = GamePhase::Terminal;
            self.question = None;
            return match self.outcome() {
                Some(outcome) => Advance::Finished(outcome),
                None => Advance::Ignored,
            };
        }

        match self.generator.generate(&self.pool, self.mode) {
            Ok(question) => {
                self.question = Some(question.clone());
                Advance::Next(question)
            }
            Err(error) => {
                self.phase = GamePhase::Failed(error.clone());
                self.question = None;
                Advance::Failed(error)
            }
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase != GamePhase::Terminal {
            return None;
        }
        Some(Outcome {
            score: self.state.score,
            total: TOTAL_ROUNDS,
            percentage: percentage(self.state.score, TOTAL_ROUNDS),
            tier: OutcomeTier::from_score(self.state.score, TOTAL_ROUNDS),
        })
    }

    /// Back to `Loading` with nothing carried over. Tickets issued before
    /// the restart are ignored afterwards.
    pub fn restart(&mut self) {
        self.epoch += 1;
        self.phase = GamePhase::Loading;
        self.state = GameState::default();
        self.question = None;
        self.pool.clear();
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::models::country::{CountryName, Flags};

    fn pool() -> Vec<Country> {
        ["Chile", "Peru", "Fiji", "Oman", "Laos"]
            .iter()
            .map(|name| Country {
                name: Some(CountryName {
                    common: name.to_string(),
                    official: name.to_string(),
                }),
                flags: Some(Flags {
                    png: Some(format!("{}.png", name)),
                    svg: None,
                }),
                cca3: name.to_uppercase(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn answer_before_load_is_ignored() {
        let mut session = GameSession::new(GameMode::flag, StdRng::seed_from_u64(1));
        assert!(session.submit_answer("Chile").is_none());
        assert_eq!(session.phase(), &GamePhase::Loading);
    }

    #[test]
    fn second_load_is_rejected() {
        let mut session = GameSession::new(GameMode::flag, StdRng::seed_from_u64(1));
        session.load(Ok(pool())).unwrap();

        assert!(matches!(
            session.load(Ok(pool())),
            Err(QuizError::InvalidState(_))
        ));
    }

    #[test]
    fn ticket_from_previous_round_is_ignored() {
        let mut session = GameSession::new(GameMode::flag, StdRng::seed_from_u64(1));
        session.load(Ok(pool())).unwrap();

        let (_, first) = session.submit_answer("Chile").unwrap();
        assert!(matches!(session.advance(first), Advance::Next(_)));

        session.submit_answer("Chile").unwrap();
        assert_eq!(session.advance(first), Advance::Ignored);
        assert_eq!(session.state().round_index, 1);
    }
}

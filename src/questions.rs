use log::warn;
use rand::{seq::SliceRandom, Rng};

use crate::{
    errors::QuizError,
    models::{
        country::Country,
        game::{zoom_level, GameMode, Question, QuestionPrompt, CHOICE_COUNT},
    },
};

/// Upper bound on random draws while collecting distractors.
const MAX_DISTRACTOR_DRAWS: usize = 10_000;

/// Builds multiple-choice questions from a country pool with an injected
/// random source.
#[derive(Debug)]
pub struct QuestionGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, pool: &[Country], mode: GameMode) -> Result<Question, QuizError> {
        let eligible: Vec<&Country> = pool.iter().filter(|c| mode.is_eligible(c)).collect();

        let target = match eligible.choose(&mut self.rng) {
            Some(target) => (*target).clone(),
            None => return Err(QuizError::NoEligibleCountries),
        };
        let target_name = match target.common_name() {
            Some(name) => name.to_string(),
            None => return Err(QuizError::NoEligibleCountries),
        };

        if distinct_names(pool) < CHOICE_COUNT {
            warn!(
                "Pool of {} countries has fewer than {} distinct names",
                pool.len(),
                CHOICE_COUNT
            );
            return Err(QuizError::NoEligibleCountries);
        }

        let mut choices = vec![target_name];
        let mut draws = 0;
        while choices.len() < CHOICE_COUNT {
            if draws >= MAX_DISTRACTOR_DRAWS {
                warn!("Gave up collecting distractors after {} draws", draws);
                return Err(QuizError::NoEligibleCountries);
            }
            draws += 1;

            let candidate = &pool[self.rng.gen_range(0..pool.len())];
            if let Some(name) = candidate.common_name() {
                if !choices.iter().any(|choice| choice == name) {
                    choices.push(name.to_string());
                }
            }
        }

        choices.shuffle(&mut self.rng);

        let prompt = prompt_for(&target, mode)?;
        Ok(Question {
            target,
            choices,
            prompt,
        })
    }
}

fn prompt_for(target: &Country, mode: GameMode) -> Result<QuestionPrompt, QuizError> {
    match mode {
        GameMode::flag => target
            .flag_url()
            .map(|url| QuestionPrompt::flag {
                url: url.to_string(),
            })
            .ok_or(QuizError::NoEligibleCountries),
        GameMode::map => target
            .coordinates()
            .map(|(latitude, longitude)| QuestionPrompt::map {
                latitude,
                longitude,
                zoom: zoom_level(target.common_name().unwrap_or_default()),
            })
            .ok_or(QuizError::NoEligibleCountries),
    }
}

fn distinct_names(pool: &[Country]) -> usize {
    let mut names: Vec<&str> = pool.iter().filter_map(|c| c.common_name()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::models::country::{CountryName, Flags};

    fn country(name: &str) -> Country {
        Country {
            name: Some(CountryName {
                common: name.to_string(),
                official: name.to_string(),
            }),
            flags: Some(Flags {
                png: Some(format!("https://flagcdn.com/{}.png", name)),
                svg: None,
            }),
            cca3: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn undersized_pool_fails_instead_of_looping() {
        let pool = vec![country("A"), country("B"), country("C"), country("A")];
        let mut generator = QuestionGenerator::new(StdRng::seed_from_u64(3));

        assert_eq!(
            generator.generate(&pool, GameMode::flag),
            Err(QuizError::NoEligibleCountries)
        );
    }

    #[test]
    fn map_mode_without_coordinates_has_no_eligible_countries() {
        let pool = vec![country("A"), country("B"), country("C"), country("D")];
        let mut generator = QuestionGenerator::new(StdRng::seed_from_u64(3));

        assert_eq!(
            generator.generate(&pool, GameMode::map),
            Err(QuizError::NoEligibleCountries)
        );
    }

    #[test]
    fn nameless_entries_are_skipped() {
        let mut pool = vec![country("A"), country("B"), country("C"), country("D")];
        pool.push(Country::default());
        pool.push(Country::default());
        let mut generator = QuestionGenerator::new(StdRng::seed_from_u64(11));

        for _ in 0..50 {
            let question = generator.generate(&pool, GameMode::flag).unwrap();
            assert_eq!(question.choices.len(), CHOICE_COUNT);
            assert!(question.choices.iter().all(|choice| !choice.is_empty()));
        }
    }
}

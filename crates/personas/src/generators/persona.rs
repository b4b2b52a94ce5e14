//! Persona generation from the fixed name and city sets.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::dataset::{Dataset, Record};
use crate::errors::DatasetError;

/// Generates persona records by uniform sampling with replacement.
pub struct PersonaGenerator {
    config: GeneratorConfig,
    ages: Uniform<u8>,
}

impl PersonaGenerator {
    /// Creates a generator over the built-in fixed sets.
    pub fn new() -> Self {
        let config = GeneratorConfig::default();
        let ages = Uniform::new_inclusive(config.min_age, config.max_age);
        Self { config, ages }
    }

    /// Creates a generator with custom configuration.
    ///
    /// Both fixed sets must be non-empty and `min_age` must not exceed `max_age`.
    pub fn with_config(config: GeneratorConfig) -> Result<Self, DatasetError> {
        if config.names.is_empty() {
            return Err(DatasetError::EmptyFixedSet("names"));
        }
        if config.cities.is_empty() {
            return Err(DatasetError::EmptyFixedSet("cities"));
        }
        if config.min_age > config.max_age {
            return Err(DatasetError::InvalidAgeRange {
                min: config.min_age,
                max: config.max_age,
            });
        }

        let ages = Uniform::new_inclusive(config.min_age, config.max_age);
        Ok(Self { config, ages })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a single record.
    ///
    /// Draws name, age and city in that order, so a seeded RNG yields a stable sequence.
    pub fn generate(&self, rng: &mut impl Rng) -> Record {
        let name = self.config.names[rng.gen_range(0..self.config.names.len())].clone();
        let age = self.ages.sample(rng);
        let city = self.config.cities[rng.gen_range(0..self.config.cities.len())].clone();

        Record { name, age, city }
    }

    /// Generates multiple records.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<Record> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generates a full dataset of `row_count` records behind the fixed header.
    pub fn generate_dataset(&self, rng: &mut impl Rng) -> Dataset {
        let records = self.generate_batch(self.config.row_count, rng);
        debug!("Generated {} persona records", records.len());
        Dataset::new(records)
    }
}

impl Default for PersonaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the standard 50-row dataset with the built-in fixed sets.
pub fn generate_dataset(rng: &mut impl Rng) -> Dataset {
    PersonaGenerator::new().generate_dataset(rng)
}

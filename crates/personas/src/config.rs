//! Fixed sets and constants for persona generation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Candidate first names, sampled uniformly with replacement.
pub static NAMES: [&str; 10] = [
    "Juan", "Ana", "Luis", "Maria", "Pedro", "Lucia", "Carlos", "Sofia", "Diego", "Elena",
];

/// Candidate cities, sampled uniformly with replacement.
pub static CITIES: [&str; 10] = [
    "Madrid",
    "Barcelona",
    "Valencia",
    "Sevilla",
    "Bilbao",
    "Zaragoza",
    "Malaga",
    "Granada",
    "Murcia",
    "Alicante",
];

/// Inclusive age bounds.
pub const AGE_RANGE: RangeInclusive<u8> = 18..=65;

/// Data rows per dataset, header excluded.
pub const ROW_COUNT: usize = 50;

/// Column labels written as the first line of every file.
pub const HEADER: [&str; 3] = ["Name", "Age", "City"];

/// File written by the `personas` binary, relative to the working directory.
pub const OUTPUT_FILE: &str = "personas.csv";

/// Configuration for persona generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of data rows to generate.
    pub row_count: usize,
    /// Youngest age, inclusive.
    pub min_age: u8,
    /// Oldest age, inclusive.
    pub max_age: u8,
    pub names: Vec<String>,
    pub cities: Vec<String>,
}

impl GeneratorConfig {
    /// Ages as an inclusive range.
    pub fn age_range(&self) -> RangeInclusive<u8> {
        self.min_age..=self.max_age
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            row_count: ROW_COUNT,
            min_age: *AGE_RANGE.start(),
            max_age: *AGE_RANGE.end(),
            names: NAMES.iter().map(|n| n.to_string()).collect(),
            cities: CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

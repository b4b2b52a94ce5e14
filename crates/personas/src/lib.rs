//! Synthetic persona data for manual testing and demos.
//!
//! Draws rows of `(name, age, city)` from small fixed sets and writes them as
//! a CSV file with a `Name,Age,City` header.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use personas::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let dataset = PersonaGenerator::new().generate_dataset(&mut rng);
//! write_csv(&dataset, OUTPUT_FILE)?;
//! ```

pub mod config;
pub mod dataset;
pub mod errors;
pub mod generators;

pub use dataset::{Dataset, Record, write_csv, write_csv_to};
pub use errors::DatasetError;
pub use generators::{PersonaGenerator, generate_dataset};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        AGE_RANGE, CITIES, GeneratorConfig, HEADER, NAMES, OUTPUT_FILE, ROW_COUNT,
    };
    pub use crate::dataset::{Dataset, Record, write_csv, write_csv_to};
    pub use crate::errors::DatasetError;
    pub use crate::generators::{PersonaGenerator, generate_dataset};
}

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::DEFAULT_DATA_DIR;

/// Runtime settings for a [`crate::Quiz`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one `<category>.json` file per category.
    pub data_dir: PathBuf,
    /// Seed for question sampling. Entropy is used when unset.
    pub seed: Option<u64>,
    /// File that receives log output. Logging is off when unset.
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: None,
            log_file: None,
        }
    }
}

use std::env;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // seed the store with the sample books at startup
    pub seed_catalog: bool,
    // reject generated isbns that collide with an existing record
    pub unique_isbn: bool,
    pub max_isbn_attempts: usize,
    // point the lambda runtime at the local emulator
    pub dev_mode: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            seed_catalog: true,
            unique_isbn: false,
            max_isbn_attempts: 10,
            dev_mode: false,
        }
    }

    pub fn empty(branch_id: &str) -> Self {
        Configuration {
            seed_catalog: false,
            ..Configuration::new(branch_id)
        }
    }

    // Reads overrides from CATALOG_* environment variables, unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_env_with_prefix("CATALOG")
    }

    pub fn from_env_with_prefix(prefix: &str) -> Self {
        let defaults = Configuration::new(
            env::var(format!("{}_BRANCH", prefix)).unwrap_or_else(|_| "dev".to_string()).as_str());
        Configuration {
            seed_catalog: env_or(format!("{}_SEED", prefix).as_str(), defaults.seed_catalog),
            unique_isbn: env_or(format!("{}_UNIQUE_ISBN", prefix).as_str(), defaults.unique_isbn),
            max_isbn_attempts: env_or(format!("{}_MAX_ISBN_ATTEMPTS", prefix).as_str(), defaults.max_isbn_attempts),
            dev_mode: env_or(format!("{}_DEV_MODE", prefix).as_str(), defaults.dev_mode),
            ..defaults
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name).ok()
        .and_then(|val| val.trim().parse::<T>().ok())
        .unwrap_or(default)
}

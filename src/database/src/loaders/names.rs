use include_dir::{Dir, include_dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;

static NAMES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/data/names");

const TEAM_NAMES_FILE: &str = "team_names.json";
const CITIES_FILE: &str = "cities.json";
const FIRST_NAMES_FILE: &str = "first_names.json";
const LAST_NAMES_FILE: &str = "last_names.json";

#[derive(Debug, Error)]
pub enum NamePoolError {
    #[error("name pool file {0} is missing")]
    Missing(&'static str),

    #[error("name pool file {file} is malformed")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Name pools the roster generator draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePools {
    pub team_names: Vec<String>,
    pub cities: Vec<String>,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

pub struct NamePoolLoader;

impl NamePoolLoader {
    /// Loads the pools bundled with the crate.
    pub fn load() -> Result<NamePools, NamePoolError> {
        Ok(NamePools {
            team_names: Self::load_file(TEAM_NAMES_FILE)?,
            cities: Self::load_file(CITIES_FILE)?,
            first_names: Self::load_file(FIRST_NAMES_FILE)?,
            last_names: Self::load_file(LAST_NAMES_FILE)?,
        })
    }

    fn load_file(file: &'static str) -> Result<Vec<String>, NamePoolError> {
        let contents = NAMES_DIR
            .get_file(file)
            .and_then(|f| f.contents_utf8())
            .ok_or(NamePoolError::Missing(file))?;

        serde_json::from_str(contents).map_err(|source| NamePoolError::Malformed { file, source })
    }
}

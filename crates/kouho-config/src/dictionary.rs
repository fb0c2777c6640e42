use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DictionaryConfig {
    /// TSV file to load; the embedded dictionary is used when unset.
    pub path: Option<PathBuf>,
}

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use kouho_config::Config;
use kouho_dict::TsvDictionary;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Written once by the loader task, read per keystroke afterwards.
    pub dictionary: RwLock<TsvDictionary>,
    /// Flipped (Release) when the loader finishes, success or not.
    pub dictionary_ready: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            dictionary: RwLock::new(TsvDictionary::default()),
            dictionary_ready: AtomicBool::new(false),
        }
    }
}

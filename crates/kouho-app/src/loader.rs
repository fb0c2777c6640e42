use std::sync::Arc;
use std::sync::atomic::Ordering;

use kanal::AsyncSender;
use kouho_dict::{TsvDictionary, TsvLoader};
use kouho_types::AppEvent;

use crate::state::AppState;

/// One-shot background dictionary load. Open failures leave the dictionary
/// empty, read failures leave whatever was parsed; readiness is signalled
/// either way so lookups can run against what there is.
pub async fn load_dictionary(
    state: Arc<AppState>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let path = { state.config.read().await.dictionary.path.clone() };

    let dictionary = tokio::task::spawn_blocking(move || match path {
        Some(path) => TsvLoader::load_from_file(&path).unwrap_or_else(|e| {
            tracing::error!("failed to open dictionary {}: {}", path.display(), e);
            TsvDictionary::default()
        }),
        None => TsvLoader::load_embedded(),
    })
    .await?;

    let entries = dictionary.entry_count();
    *state.dictionary.write().await = dictionary;
    state.dictionary_ready.store(true, Ordering::Release);
    tracing::info!("dictionary ready: {} entries", entries);

    let _ = app_to_ui_tx
        .send(AppEvent::DictionaryReady { entries })
        .await;
    Ok(())
}

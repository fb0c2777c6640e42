use std::sync::atomic::Ordering;

use kanal::AsyncSender;
use kouho_core::dictionary::{Dictionary, MatchType, SearchOptions};
use kouho_core::preprocess::Preprocessor;
use kouho_types::AppEvent;

use crate::state::AppState;

/// Re-run the lookup for the edited query line. Before the dictionary is
/// ready, or for an (effectively) empty query, the grid is just cleared.
pub async fn handle_query(
    state: &AppState,
    preprocessor: &impl Preprocessor,
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !state.dictionary_ready.load(Ordering::Acquire) {
        app_to_ui_tx
            .send(AppEvent::ShowCandidates(Vec::new()))
            .await?;
        return Ok(());
    }

    let query = preprocessor.process(text);
    if query.is_empty() {
        app_to_ui_tx
            .send(AppEvent::ShowCandidates(Vec::new()))
            .await?;
        return Ok(());
    }

    let candidates: Vec<String> = {
        let dictionary = state.dictionary.read().await;
        dictionary
            .search(
                &query,
                SearchOptions {
                    max_results: None,
                    match_type: MatchType::Prefix,
                },
            )
            .into_iter()
            .map(|candidate| candidate.translation)
            .collect()
    };
    tracing::debug!("query '{}': {} candidates", query, candidates.len());

    app_to_ui_tx
        .send(AppEvent::ShowCandidates(candidates))
        .await?;
    Ok(())
}

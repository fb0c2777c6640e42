use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kouho_core::preprocess::DefaultPreprocessor;
use kouho_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod candidate;
pub mod query;

use candidate::handle_candidate_click;
use query::handle_query;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let preprocessor = DefaultPreprocessor;

    tracing::info!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };
        handle_event(&state, &preprocessor, &app_to_ui_tx, event).await?;
    }
    tracing::info!("event loop stopped");
    Ok(())
}

async fn handle_event(
    state: &AppState,
    preprocessor: &DefaultPreprocessor,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::QueryChanged(text) => {
            handle_query(state, preprocessor, &text, app_to_ui_tx).await?;
        }
        AppEvent::CandidateClicked(text) => {
            handle_candidate_click(text, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(_) => {}
        // UI-bound events carry no work for this side
        AppEvent::ShowCandidates(_) | AppEvent::DictionaryReady { .. } | AppEvent::Notice(_) => {}
    }
    Ok(())
}

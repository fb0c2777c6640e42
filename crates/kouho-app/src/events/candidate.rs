use kanal::AsyncSender;
use kouho_types::AppEvent;

/// A chip was clicked; answer with a status-line notice.
pub async fn handle_candidate_click(
    text: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("candidate selected: {}", text);
    app_to_ui_tx.send(AppEvent::Notice(text)).await?;
    Ok(())
}

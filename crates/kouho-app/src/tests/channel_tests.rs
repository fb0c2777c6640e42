use std::time::Duration;

use kouho_types::AppEvent;
use tokio::time::timeout;

#[tokio::test]
async fn spawned_send_reaches_receiver() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    tokio::spawn(async move {
        tx.send(AppEvent::QueryChanged("あか".to_string()))
            .await
            .expect("send failed");
    });

    let result = timeout(Duration::from_secs(2), rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::QueryChanged(text))) => assert_eq!(text, "あか"),
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - event never arrived!"),
    }
}

#[tokio::test]
async fn sync_callback_can_spawn_a_send() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    // chip-click callbacks run in sync context and hop onto the runtime
    let chip_click = move || {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::CandidateClicked("赤".to_string()))
                .await
                .expect("send failed");
        });
    };

    chip_click();

    let result = timeout(Duration::from_secs(2), rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::CandidateClicked(text))) => assert_eq!(text, "赤"),
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - event never arrived!"),
    }
}

#[tokio::test]
async fn burst_of_keystroke_events_drains() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    tokio::spawn(async move {
        for i in 0..100 {
            tx.send(AppEvent::QueryChanged(format!("q{}", i)))
                .await
                .expect("send failed");
        }
    });

    let mut count = 0;
    let result = timeout(Duration::from_secs(2), async {
        while count < 100 {
            rx.recv().await.expect("recv failed");
            count += 1;
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for events!");
    assert_eq!(count, 100);
}

//! StudyDesk headless demo
//!
//! Walks the main flows against the seeded store and the simulated
//! services: create a collection through the wizard, upload a knowledge
//! file, then ask the assistant about it.

use anyhow::Result;
use studydesk_app::{AppState, UiEvent, UploadModal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (mut app, mut events_rx, mut notify_rx) = AppState::simulated();

    info!(
        "Seeded store: {} collections, {} knowledge items",
        app.store.collections().len(),
        app.store.knowledge_items().len()
    );

    // Create a collection through the two-step wizard.
    app.navigate("/collections/create");
    if let Some(wizard) = app.wizard.as_mut() {
        wizard.naming.set_name("Biology");
    }
    app.submit_wizard_name();

    // Stage and submit an upload in the wizard's second step.
    if let Some(modal) = app.upload_modal.clone() {
        modal
            .lock()
            .select_file("cell-division.mp3", Some("audio/mpeg"), 10 * 1024 * 1024);
        let transfer = UploadModal::begin_upload(&modal)?;
        info!(
            "Upload control: {}",
            modal.lock().upload_button_label()
        );
        transfer.await?;
    }

    // The completed upload closed the modal; let the wizard finish.
    while let Ok(event) = events_rx.try_recv() {
        match event {
            UiEvent::UploadModalClosed => app.on_upload_modal_closed(),
            UiEvent::Navigate { path } => app.navigate(&path),
            UiEvent::TranscriptChanged => {}
        }
    }
    if let Some(wizard) = app.wizard.as_ref() {
        if let Some(message) = wizard.success_message() {
            info!("{}", message);
        }
    }
    app.acknowledge_wizard();

    // Ask the assistant about a knowledge item.
    app.navigate("/knowledge/k1");
    if let Some(chat) = app.chat.as_mut() {
        chat.set_input("Summarize the key points of this document.");
        chat.send_message()?.await?;

        for message in chat.messages() {
            info!("[{}] {}", message.sender, message.text.unwrap_or_default());
        }
    }

    while let Ok(note) = notify_rx.try_recv() {
        info!("Notification [{:?}]: {}", note.level, note.message);
    }

    info!(
        "Store now holds {} collections and {} knowledge items",
        app.store.collections().len(),
        app.store.knowledge_items().len()
    );

    Ok(())
}

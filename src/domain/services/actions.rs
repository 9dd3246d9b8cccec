use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;

use super::downloads;
use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::ConvertRequest;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::infrastructure::gateway::GatewayManager;

fn convert_worker(action: ConvertRequest, tx: mpsc::UnboundedSender<Event>) {
    // Every request gets its own worker. Responses are folded back into the
    // chat in completion order, whichever finishes first clears the loading
    // state.
    tokio::spawn(async move {
        let gateway = GatewayManager::get();
        match gateway.convert(&action.payload).await {
            Ok(reply) => {
                let _ = tx.send(Event::ConvertResponse(action.kind, reply));
            }
            Err(err) => {
                tracing::error!(error = ?err, "convert request failed");
                let _ = tx.send(Event::ConvertError(action.kind, err.to_string()));
            }
        }
    });
}

fn save_media_worker(path: PathBuf, tx: mpsc::UnboundedSender<Event>) {
    tokio::spawn(async move {
        let message = match downloads::save_copy(&path).await {
            Ok(destination) => Message::new(
                Author::Podium,
                &format!("Saved a copy to {}.", destination.display()),
            ),
            Err(err) => {
                tracing::error!(error = ?err, "media save failed");
                Message::new_with_type(
                    Author::Podium,
                    MessageType::Error,
                    &format!("Couldn't save the file: {err}"),
                )
            }
        };

        let _ = tx.send(Event::AppMessage(message));
    });
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let event = rx.recv().await;
            if event.is_none() {
                continue;
            }

            match event.unwrap() {
                Action::ConvertRequest(request) => {
                    convert_worker(request, tx.clone());
                }
                Action::SaveMedia(path) => {
                    save_media_worker(path, tx.clone());
                }
            }
        }
    }
}

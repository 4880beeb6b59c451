//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::ProfileFetcher;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Runs fetches one at a time on a dedicated worker thread so at most one
/// request is in flight against the generation backend.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    fetcher: Arc<dyn ProfileFetcher>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchProfile { request, person } => {
                        tracing::debug!(request = request.0, person = %person, "fetching profile");
                        let result = fetcher.fetch(&person).await;
                        if ui_tx.send(UiEvent::ProfileResolved { request, result }).is_err() {
                            tracing::debug!("ui event channel closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
        tracing::info!("backend worker stopped");
    })
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;

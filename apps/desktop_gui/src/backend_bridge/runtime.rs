//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use client_core::{execute_effect, Action, ClientSettings, HttpCatalogClient};
use crossbeam_channel::{Receiver, Sender};
use tokio_util::sync::CancellationToken;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    settings: ClientSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BridgeFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let client = match HttpCatalogClient::from_settings(&settings) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                tracing::error!(error = %err, "cannot configure catalog client");
                let _ = ui_tx.try_send(UiEvent::BridgeFailed(err.to_string()));
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Connected to {}",
            client.backend_url()
        )));

        let cancel = CancellationToken::new();
        runtime.block_on(async {
            while let Ok(cmd) = cmd_rx.recv() {
                let name = cmd.name();
                let Some(effect) = cmd.into_effect() else {
                    break;
                };
                tracing::debug!(command = name, "running backend command");

                let client = client.clone();
                let cancel = cancel.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    if let Some(action) = execute_effect(client.as_ref(), effect, &cancel).await {
                        tokio::task::block_in_place(|| deliver_completion(&ui_tx, action));
                    }
                });
            }
        });

        cancel.cancel();
        tracing::info!("backend worker stopped");
    })
}

/// Completions carry fetched or created data, so wait for queue space
/// instead of dropping them. Fails only once the UI has gone away.
fn deliver_completion(ui_tx: &Sender<UiEvent>, action: Action) -> bool {
    match ui_tx.send(UiEvent::Completed(action)) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(event = ?err.into_inner(), "UI closed before completion was delivered");
            false
        }
    }
}

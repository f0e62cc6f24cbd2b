//! Backend worker: drains UI commands on a dedicated tokio runtime and
//! posts fetch outcomes back to the UI event queue.

use std::thread;

use client_core::{DirectoryApi, DirectoryClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{fetch_failure_label, FetchContext, UiEvent};

pub fn launch(api_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::UsersFailed(fetch_failure_label(
                    FetchContext::Users,
                    &format!("backend worker startup failure: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = match DirectoryClient::new(&api_url) {
                Ok(client) => client,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::UsersFailed(fetch_failure_label(
                        FetchContext::Users,
                        &err.to_string(),
                    )));
                    tracing::error!("invalid api url '{api_url}': {err}");
                    return;
                }
            };

            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            run_worker(&client, cmd_rx, ui_tx).await;
        });
    });
}

async fn run_worker(
    api: &dyn DirectoryApi,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::FetchUsers => {
                tracing::info!("backend: fetch_users");
                let event = match api.list_users().await {
                    Ok(users) => UiEvent::UsersLoaded(users),
                    Err(err) => {
                        tracing::error!("backend: fetch_users failed: {err}");
                        UiEvent::UsersFailed(fetch_failure_label(
                            FetchContext::Users,
                            &err.to_string(),
                        ))
                    }
                };
                let _ = ui_tx.try_send(event);
            }
            BackendCommand::FetchPosts { user_id, seq } => {
                tracing::info!(user_id = user_id.0, seq, "backend: fetch_posts");
                let event = match api.list_posts(user_id).await {
                    Ok(posts) => UiEvent::PostsLoaded {
                        user_id,
                        seq,
                        posts,
                    },
                    Err(err) => {
                        tracing::error!(user_id = user_id.0, "backend: fetch_posts failed: {err}");
                        UiEvent::PostsFailed {
                            user_id,
                            seq,
                            message: fetch_failure_label(FetchContext::Posts, &err.to_string()),
                        }
                    }
                };
                let _ = ui_tx.try_send(event);
            }
        }
    }
}

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::api::ws_types::WsMessage;
use crate::db::{self, trade_repo};
use crate::AppState;

pub async fn handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();

    // Subscribe before the greeting so no broadcast is missed.
    let mut rx = state.ws_tx.subscribe();
    tracing::info!(%client_id, clients = state.connected_clients(), "Dashboard WebSocket client connected");

    match db::with_connection(&state.config.database_path, |conn| {
        Box::pin(trade_repo::count_all(conn))
    })
    .await
    {
        Ok(count) => {
            if !send_message(&mut socket, &WsMessage::Stats(count)).await {
                tracing::info!(%client_id, "Dashboard WebSocket client disconnected");
                return;
            }
        }
        Err(e) => {
            tracing::warn!(%client_id, error = %e, "Skipping initial stats snapshot");
        }
    }

    loop {
        tokio::select! {
            msg = rx.recv() => {
                match msg {
                    Ok(ws_msg) => {
                        if !send_message(&mut socket, &ws_msg).await {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(%client_id, skipped = n, "Dashboard WS client lagged");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        break;
                    }
                }
            }
            client_msg = socket.recv() => {
                match client_msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) => break,
                }
            }
        }
    }

    tracing::info!(%client_id, "Dashboard WebSocket client disconnected");
}

/// Serialize and send one message. Returns `false` once the socket is gone.
async fn send_message(socket: &mut WebSocket, msg: &WsMessage) -> bool {
    match serde_json::to_string(msg) {
        Ok(json) => socket.send(Message::Text(json)).await.is_ok(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize WsMessage");
            true
        }
    }
}

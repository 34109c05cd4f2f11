// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live lineup events for connected dashboards.
//!
//! Events are informational. They tell listeners that a lineup, fixture or
//! roster changed so they can refetch it over HTTP; the HTTP API stays the
//! source of truth and no commands are accepted over the socket.

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, stream::StreamExt};
use matchday_domain::{MatchId, PlayerId, SquadFormat, TeamId};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use crate::AppState;

/// Maximum number of events buffered per subscriber.
/// Slow clients lose the oldest events.
const EVENT_BUFFER_SIZE: usize = 100;

/// A change listeners may want to react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A lineup was saved, replacing any earlier lineup for the same key.
    LineupSaved {
        /// The team.
        team_id: TeamId,
        /// The format.
        format: SquadFormat,
        /// The match, or none for the team template.
        match_id: Option<MatchId>,
        /// The stored lineup id.
        lineup_id: i64,
        /// Starters in slot order.
        starters: Vec<PlayerId>,
        /// Substitutes in substitute order.
        substitutes: Vec<PlayerId>,
    },
    /// A fixture was scheduled.
    MatchScheduled {
        /// The team.
        team_id: TeamId,
        /// The new fixture.
        match_id: MatchId,
        /// The opponent's name.
        opponent: String,
        /// Kickoff date as `YYYY-MM-DD`.
        kickoff: String,
    },
    /// A player joined a team roster.
    PlayerRegistered {
        /// The team.
        team_id: TeamId,
        /// The new player.
        player_id: PlayerId,
    },
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
}

/// Fan-out of live events to every connected socket.
#[derive(Clone)]
pub struct LiveEventBroadcaster {
    tx: broadcast::Sender<LiveEvent>,
}

impl LiveEventBroadcaster {
    /// Creates a broadcaster with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Sends an event to every current subscriber.
    ///
    /// Never blocks. With no subscribers the event is dropped.
    pub fn broadcast(&self, event: &LiveEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast live event");
            }
            Err(_) => {
                debug!(?event, "No receivers for live event");
            }
        }
    }

    /// Subscribes to events sent from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for LiveEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for GET `/api/live`.
///
/// Upgrades the connection to a WebSocket that streams [`LiveEvent`]s as
/// JSON text frames.
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(app_state): AxumState<AppState>,
) -> Response {
    let broadcaster: LiveEventBroadcaster = app_state.live.as_ref().clone();
    ws.on_upgrade(move |socket| handle_socket(socket, broadcaster))
}

async fn handle_socket(socket: WebSocket, broadcaster: LiveEventBroadcaster) {
    info!("Client connected to live event stream");

    let (mut sender, mut receiver) = socket.split();
    let mut rx: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();

    let connected_event: LiveEvent = LiveEvent::Connected {
        timestamp: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown")),
    };

    if let Ok(json) = serde_json::to_string(&connected_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        warn!("Failed to send connection confirmation");
        return;
    }

    let mut send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => {
                        if sender.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        error!(?e, "Failed to serialize live event");
                    }
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Live event subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    warn!("Received unexpected message from client, ignoring");
                }
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {}
                Err(e) => {
                    error!(?e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            debug!("Send task completed");
            recv_task.abort();
        }
        _ = &mut recv_task => {
            debug!("Receive task completed");
            send_task.abort();
        }
    }

    info!("Client disconnected from live event stream");
}

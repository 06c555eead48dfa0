//! Change-notification stream handler
//!
//! Pushes `ChangeEvent`s to connected clients over SSE. Clients treat
//! an event as an invalidation and refetch the affected view; a lagged
//! or dropped event therefore only delays a refresh, it cannot corrupt
//! client state.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio::sync::broadcast;

use crate::auth::CurrentUser;
use crate::core::ServerState;

/// GET /api/events/stream - tenant-scoped change notifications
pub async fn stream(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.hub.subscribe();
    let tenant_id = user.tenant_id.clone();

    let stream = futures::stream::unfold(rx, move |mut rx| {
        let tenant_id = tenant_id.clone();
        async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if event.tenant_id != tenant_id {
                            continue;
                        }
                        let Ok(sse_event) = Event::default().event("change").json_data(&event)
                        else {
                            continue;
                        };
                        return Some((Ok::<_, Infallible>(sse_event), rx));
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "SSE subscriber lagged, events dropped");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

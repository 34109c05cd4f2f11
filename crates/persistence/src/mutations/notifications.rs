// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use matchday::PushMessage;
use matchday_domain::{MatchId, PlayerId};
use tracing::{debug, info};

use crate::diesel_schema::notifications;
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = notifications)]
struct NewNotification<'a> {
    player_id: i64,
    match_id: Option<i64>,
    title: &'a str,
    body: &'a str,
    link: &'a str,
}

/// Writes one outbox row per recipient of each message.
///
/// # Returns
///
/// The number of rows written.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is written in that case.
pub fn enqueue_notifications(
    conn: &mut SqliteConnection,
    match_id: Option<MatchId>,
    messages: &[PushMessage],
) -> Result<usize, PersistenceError> {
    let rows: Vec<NewNotification<'_>> = messages
        .iter()
        .flat_map(|message| {
            message.recipients.iter().map(move |player_id| NewNotification {
                player_id: player_id.value(),
                match_id: match_id.map(|id| id.value()),
                title: &message.title,
                body: &message.body,
                link: &message.link,
            })
        })
        .collect();

    if rows.is_empty() {
        debug!("No notification recipients");
        return Ok(0);
    }

    let written: usize = conn.transaction::<usize, PersistenceError, _>(|conn| {
        Ok(diesel::insert_into(notifications::table)
            .values(&rows)
            .execute(conn)?)
    })?;

    info!(written, match_id = ?match_id, "Notifications queued");
    Ok(written)
}

/// Marks a player's notification as read.
///
/// # Returns
///
/// Whether a notification was updated.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn mark_notification_read(
    conn: &mut SqliteConnection,
    player_id: PlayerId,
    notification_id: i64,
) -> Result<bool, PersistenceError> {
    let updated: usize = diesel::update(notifications::table)
        .filter(notifications::notification_id.eq(notification_id))
        .filter(notifications::player_id.eq(player_id.value()))
        .set(notifications::is_read.eq(1))
        .execute(conn)?;

    Ok(updated > 0)
}

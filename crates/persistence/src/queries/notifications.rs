// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use matchday_domain::{MatchId, PlayerId};

use crate::data_models::NotificationData;
use crate::diesel_schema::notifications;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = notifications)]
struct NotificationRow {
    notification_id: i64,
    player_id: i64,
    match_id: Option<i64>,
    title: String,
    body: String,
    link: String,
    is_read: i32,
    created_at: String,
}

impl From<NotificationRow> for NotificationData {
    fn from(row: NotificationRow) -> Self {
        Self {
            notification_id: row.notification_id,
            player_id: PlayerId::new(row.player_id),
            match_id: row.match_id.map(MatchId::new),
            title: row.title,
            body: row.body,
            link: row.link,
            is_read: row.is_read != 0,
            created_at: row.created_at,
        }
    }
}

/// Lists a player's notifications, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_notifications(
    conn: &mut SqliteConnection,
    player_id: PlayerId,
) -> Result<Vec<NotificationData>, PersistenceError> {
    let rows: Vec<NotificationRow> = notifications::table
        .filter(notifications::player_id.eq(player_id.value()))
        .select(NotificationRow::as_select())
        .order_by(notifications::notification_id.desc())
        .load(conn)?;

    Ok(rows.into_iter().map(NotificationData::from).collect())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_full_lineup, schedule_test_match, seed_five_a_side_team};
use crate::{NotificationData, Persistence};
use matchday::{LineupKey, LineupState, PushMessage, SaveOutcome, save_lineup};
use matchday_domain::{MatchId, SquadFormat};

#[test]
fn test_match_lineup_save_queues_player_notifications() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let match_id: MatchId = schedule_test_match(&mut persistence, seeded.team_id);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, Some(match_id));

    let outcome: SaveOutcome = save_lineup(&mut persistence, &state, key, "Cup Final").unwrap();
    assert_eq!(outcome.notified, Some(8));

    let keeper: Vec<NotificationData> = persistence.list_notifications(seeded.players[0]).unwrap();
    assert_eq!(keeper.len(), 1);
    assert_eq!(keeper[0].title, "You're in the Starting XI!");
    assert_eq!(
        keeper[0].body,
        "You've been selected to start against Riverside Rovers on 14 Mar"
    );
    assert_eq!(keeper[0].link, format!("/dashboard/player/matches/{match_id}"));
    assert_eq!(keeper[0].match_id, Some(match_id));
    assert!(!keeper[0].is_read);

    let substitute: Vec<NotificationData> =
        persistence.list_notifications(seeded.players[3]).unwrap();
    assert_eq!(substitute.len(), 1);
    assert_eq!(substitute[0].title, "You're on the Bench");
}

#[test]
fn test_template_lineup_save_queues_nothing() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let state: LineupState = create_full_lineup(&mut persistence, seeded.team_id);
    let key: LineupKey = LineupKey::new(seeded.team_id, SquadFormat::FiveASide, None);

    let outcome: SaveOutcome = save_lineup(&mut persistence, &state, key, "Template").unwrap();

    assert_eq!(outcome.notified, None);
    for player_id in &seeded.players {
        assert!(persistence.list_notifications(*player_id).unwrap().is_empty());
    }
}

#[test]
fn test_enqueue_with_no_recipients_writes_nothing() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let message: PushMessage = PushMessage {
        recipients: Vec::new(),
        title: String::from("Nobody"),
        body: String::from("Nobody home"),
        link: String::from("/"),
    };

    assert_eq!(persistence.enqueue_notifications(None, &[message]).unwrap(), 0);
}

#[test]
fn test_mark_notification_read_only_for_owner() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let seeded = seed_five_a_side_team(&mut persistence);
    let message: PushMessage = PushMessage {
        recipients: vec![seeded.players[0]],
        title: String::from("Training"),
        body: String::from("Training moved to Thursday"),
        link: String::from("/dashboard/player"),
    };
    persistence.enqueue_notifications(None, &[message]).unwrap();
    let notification_id: i64 = persistence.list_notifications(seeded.players[0]).unwrap()[0]
        .notification_id;

    assert!(
        !persistence
            .mark_notification_read(seeded.players[1], notification_id)
            .unwrap()
    );
    assert!(
        persistence
            .mark_notification_read(seeded.players[0], notification_id)
            .unwrap()
    );
    assert!(persistence.list_notifications(seeded.players[0]).unwrap()[0].is_read);
}

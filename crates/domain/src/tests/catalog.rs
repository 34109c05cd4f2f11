// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, PositionCategory, Scheme, SlotKey, SlotRole, SquadFormat, all_schemes,
    default_scheme, find_scheme, schemes, validate_catalog,
};

#[test]
fn test_catalog_passes_integrity_checks() {
    assert_eq!(validate_catalog(), Ok(()));
}

#[test]
fn test_every_scheme_fields_the_format_count() {
    for scheme in all_schemes() {
        assert_eq!(
            scheme.slots.len(),
            scheme.format.players_on_field(),
            "scheme {} has the wrong slot count",
            scheme.name
        );
    }
}

#[test]
fn test_scheme_counts_per_format() {
    assert_eq!(schemes(SquadFormat::FiveASide).len(), 4);
    assert_eq!(schemes(SquadFormat::SevenASide).len(), 5);
    assert_eq!(schemes(SquadFormat::ElevenASide).len(), 8);
}

#[test]
fn test_every_scheme_has_exactly_one_goalkeeper() {
    for scheme in all_schemes() {
        let keepers: usize = scheme
            .slots
            .iter()
            .filter(|slot| slot.role == SlotRole::Goalkeeper)
            .count();
        assert_eq!(keepers, 1, "scheme {}", scheme.name);
    }
}

#[test]
fn test_default_scheme_is_first_in_catalog() {
    assert_eq!(default_scheme(SquadFormat::FiveASide).name, "2-2");
    assert_eq!(default_scheme(SquadFormat::SevenASide).name, "3-2-1");
    assert_eq!(default_scheme(SquadFormat::ElevenASide).name, "4-3-3");
}

#[test]
fn test_find_scheme_by_name() {
    let scheme: &Scheme = find_scheme(SquadFormat::FiveASide, "1-3").unwrap();
    assert_eq!(scheme.label, "1-3 (Diamond)");
    assert_eq!(scheme.format, SquadFormat::FiveASide);
}

#[test]
fn test_find_scheme_rejects_scheme_from_other_format() {
    let result: Result<&Scheme, DomainError> = find_scheme(SquadFormat::FiveASide, "4-4-2");
    assert_eq!(
        result,
        Err(DomainError::SchemeNotFound {
            format: SquadFormat::FiveASide,
            scheme: String::from("4-4-2"),
        })
    );
}

#[test]
fn test_two_two_slot_keys_in_declared_order() {
    let scheme: &Scheme = find_scheme(SquadFormat::FiveASide, "2-2").unwrap();
    let keys: Vec<String> = scheme
        .slot_keys()
        .iter()
        .map(|key| key.as_str().to_string())
        .collect();
    assert_eq!(
        keys,
        vec!["GK-50-88", "LB-30-65", "RB-70-65", "LF-35-25", "RF-65-25"]
    );
}

#[test]
fn test_two_strikers_have_distinct_keys() {
    let scheme: &Scheme = find_scheme(SquadFormat::SevenASide, "2-2-2").unwrap();
    let left: SlotKey = SlotKey::parse("ST-40-20").unwrap();
    let right: SlotKey = SlotKey::parse("ST-60-20").unwrap();
    assert!(scheme.contains(&left));
    assert!(scheme.contains(&right));
    assert_ne!(left, right);
}

#[test]
fn test_slot_key_parse_normalises_role_case() {
    let key: SlotKey = SlotKey::parse("cb-40-70").unwrap();
    assert_eq!(key.as_str(), "CB-40-70");
    assert_eq!(key.role().unwrap(), SlotRole::CentreBack);
}

#[test]
fn test_slot_key_parse_rejects_malformed_keys() {
    for raw in ["", "GK", "GK-50", "GK-50-88-1", "XX-50-88", "GK-a-88", "GK-50-101"] {
        assert_eq!(
            SlotKey::parse(raw),
            Err(DomainError::InvalidSlotKey(raw.to_string())),
            "{raw}"
        );
    }
}

#[test]
fn test_slot_key_deserializes_through_parse() {
    let key: SlotKey = serde_json::from_str(r#"" gk-50-88""#).unwrap();
    assert_eq!(key, SlotKey::parse("GK-50-88").unwrap());
    assert_eq!(serde_json::to_string(&key).unwrap(), r#""GK-50-88""#);

    assert!(serde_json::from_str::<SlotKey>(r#""GK-50-101""#).is_err());
    assert!(serde_json::from_str::<SlotKey>("12").is_err());
}

#[test]
fn test_role_family_rule() {
    assert!(SlotRole::Goalkeeper.accepts(PositionCategory::Goalkeeper));
    assert!(!SlotRole::Goalkeeper.accepts(PositionCategory::Defender));
    assert!(SlotRole::CentreBack.accepts(PositionCategory::Defender));
    assert!(SlotRole::LeftBack.accepts(PositionCategory::Defender));
    assert!(SlotRole::CentralMidfielder.accepts(PositionCategory::Midfielder));
    assert!(SlotRole::DefensiveMidfielder.accepts(PositionCategory::Midfielder));
    assert!(SlotRole::AttackingMidfielder.accepts(PositionCategory::Midfielder));
    assert!(SlotRole::Striker.accepts(PositionCategory::Forward));
    assert!(SlotRole::LeftWinger.accepts(PositionCategory::Forward));
    assert!(SlotRole::RightForward.accepts(PositionCategory::Forward));
    assert!(!SlotRole::Striker.accepts(PositionCategory::Midfielder));
    assert!(!SlotRole::LeftForward.accepts(PositionCategory::Defender));
}

#[test]
fn test_wing_back_accepts_defenders_and_forwards() {
    assert!(SlotRole::LeftWingBack.accepts(PositionCategory::Defender));
    assert!(SlotRole::LeftWingBack.accepts(PositionCategory::Forward));
    assert!(!SlotRole::LeftWingBack.accepts(PositionCategory::Midfielder));
}

#[test]
fn test_reflow_candidates_lead_with_own_role() {
    for role in SlotRole::ALL {
        assert_eq!(role.reflow_candidates().first(), Some(&role), "{role}");
    }
}

#[test]
fn test_slot_role_round_trips_through_code() {
    for role in SlotRole::ALL {
        let parsed: SlotRole = role.code().parse().unwrap();
        assert_eq!(parsed, role);
    }
}

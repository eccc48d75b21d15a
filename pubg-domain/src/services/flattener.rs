// Domain flattener
// JSON:API resources into flat domain objects, resolving relationships
// through one resource index per response

use crate::entities::{
    Document, Match, MatchAsset, Participant, ParticipantStats, Player, PrimaryData, RawRecord,
    Roster, Sample, Season, Status,
};
use crate::error::FatalDecodeFailure;
use crate::services::resolver::{resolve_list, Relationship, Resolved};
use crate::services::resource_index::ResourceIndex;
use crate::utils::parse_optional_timestamp;
use crate::value_objects::Link;

// `flatten` never fails: missing attributes take their defaults and missing side
// objects become `Link::Unresolved`.
pub trait Flatten: Sized {
    const RESOURCE_TYPE: &'static str;

    fn flatten(resource: &RawRecord, index: &ResourceIndex) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedResource {
    pub position: usize,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<T> {
    pub items: Vec<T>,
    pub skipped: Vec<SkippedResource>,
}

pub fn flatten_all<T: Flatten>(resources: &[RawRecord], index: &ResourceIndex) -> Vec<T> {
    resources
        .iter()
        .map(|resource| T::flatten(resource, index))
        .collect()
}

pub fn decode_one<T: Flatten>(body: &str) -> Result<T, FatalDecodeFailure> {
    let document = Document::parse(body)?;
    let index = ResourceIndex::build(&document.included);
    let primary = match document.data {
        PrimaryData::One(record) => record,
        PrimaryData::Many(entries) => entries
            .into_iter()
            .next()
            .ok_or(FatalDecodeFailure::MissingData)?
            .ok_or_else(|| {
                FatalDecodeFailure::UnexpectedShape("data[0] is not an object".to_string())
            })?,
    };
    check_type::<T>(&primary).map_err(FatalDecodeFailure::UnexpectedShape)?;
    Ok(T::flatten(&primary, &index))
}

// Elements that are not objects or carry another `type` are skipped in place; their
// siblings still flatten in order.
pub fn decode_many<T: Flatten>(body: &str) -> Result<ResourceList<T>, FatalDecodeFailure> {
    let document = Document::parse(body)?;
    let index = ResourceIndex::build(&document.included);

    let mut accepted = Vec::new();
    let mut skipped = Vec::new();
    for (position, entry) in document.data.into_entries().into_iter().enumerate() {
        let checked = entry
            .ok_or_else(|| "element is not an object".to_string())
            .and_then(|resource| check_type::<T>(&resource).map(|()| resource));
        match checked {
            Ok(resource) => accepted.push(resource),
            Err(reason) => skipped.push(SkippedResource { position, reason }),
        }
    }

    Ok(ResourceList {
        items: flatten_all(&accepted, &index),
        skipped,
    })
}

// Resources without a `type` are accepted as-is.
fn check_type<T: Flatten>(resource: &RawRecord) -> Result<(), String> {
    match resource.str_field("type") {
        Some(kind) if kind != T::RESOURCE_TYPE => Err(format!(
            "expected `{}` resource, found `{}`",
            T::RESOURCE_TYPE,
            kind
        )),
        _ => Ok(()),
    }
}

fn attributes(resource: &RawRecord) -> RawRecord {
    resource.object("attributes").unwrap_or_default()
}

fn link<T: Flatten>(resolved: Resolved<'_>, index: &ResourceIndex) -> Link<T> {
    match resolved {
        Resolved::Found { record, .. } => Link::Resolved(T::flatten(record, index)),
        Resolved::Unresolved(pointer) => Link::Unresolved {
            kind: pointer.kind,
            id: pointer.id,
        },
    }
}

fn links<T: Flatten>(resource: &RawRecord, name: &str, index: &ResourceIndex) -> Vec<Link<T>> {
    resolve_list(resource, name, index)
        .into_iter()
        .map(|resolved| link(resolved, index))
        .collect()
}

impl Flatten for Player {
    const RESOURCE_TYPE: &'static str = "player";

    fn flatten(resource: &RawRecord, _index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        Self {
            id: resource.string_or_default("id"),
            name: attrs.string_or_default("name"),
            version: attrs.string_or_default("patchVersion"),
            shard: attrs.string_or_default("shardId"),
            title: attrs.string_or_default("titleId"),
            match_ids: Relationship::of(resource, "matches").ids(),
        }
    }
}

impl Flatten for Match {
    const RESOURCE_TYPE: &'static str = "match";

    fn flatten(resource: &RawRecord, index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        Self {
            id: resource.string_or_default("id"),
            match_completion: parse_optional_timestamp(attrs.str_field("createdAt")),
            duration: attrs.i64_field("duration").unwrap_or_default(),
            game_mode: attrs.string_or_default("gameMode"),
            map: attrs.string_or_default("mapName"),
            is_custom_match: attrs.bool_field("isCustomMatch").unwrap_or_default(),
            patch_version: attrs.string_or_default("patchVersion"),
            season_state: attrs.string_or_default("seasonState"),
            shard: attrs.string_or_default("shardId"),
            title: attrs.string_or_default("titleId"),
            roster_ids: Relationship::of(resource, "rosters").ids(),
            rosters: links(resource, "rosters", index),
            assets: links(resource, "assets", index),
        }
    }
}

impl Flatten for Roster {
    const RESOURCE_TYPE: &'static str = "roster";

    fn flatten(resource: &RawRecord, index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        let stats = attrs.object("stats").unwrap_or_default();
        Self {
            id: resource.string_or_default("id"),
            rank: stats.i64_field("rank").unwrap_or_default(),
            team_id: stats.i64_field("teamId").unwrap_or_default(),
            won: attrs.bool_field("won").unwrap_or_default(),
            shard: attrs.string_or_default("shardId"),
            participants: links(resource, "participants", index),
        }
    }
}

impl Flatten for Participant {
    const RESOURCE_TYPE: &'static str = "participant";

    fn flatten(resource: &RawRecord, _index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        // Stats of the wrong shape read as all-default rather than failing the match.
        let stats = attrs
            .object("stats")
            .and_then(|stats| stats.decode::<ParticipantStats>().ok())
            .unwrap_or_default();
        Self {
            id: resource.string_or_default("id"),
            actor: attrs.string_or_default("actor"),
            shard: attrs.string_or_default("shardId"),
            stats,
        }
    }
}

impl Flatten for MatchAsset {
    const RESOURCE_TYPE: &'static str = "asset";

    fn flatten(resource: &RawRecord, _index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        Self {
            id: resource.string_or_default("id"),
            url: attrs.string_or_default("URL"),
            created: parse_optional_timestamp(attrs.str_field("createdAt")),
            description: attrs.string_or_default("description"),
            name: attrs.string_or_default("name"),
        }
    }
}

impl Flatten for Season {
    const RESOURCE_TYPE: &'static str = "season";

    fn flatten(resource: &RawRecord, _index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        Self {
            id: resource.string_or_default("id"),
            is_current_season: attrs.bool_field("isCurrentSeason").unwrap_or_default(),
            is_offseason: attrs.bool_field("isOffseason").unwrap_or_default(),
        }
    }
}

impl Flatten for Status {
    const RESOURCE_TYPE: &'static str = "status";

    fn flatten(resource: &RawRecord, _index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        Self {
            id: resource.string_or_default("id"),
            released_at: parse_optional_timestamp(attrs.str_field("releasedAt")),
            version: attrs.string_or_default("version"),
        }
    }
}

impl Flatten for Sample {
    const RESOURCE_TYPE: &'static str = "sample";

    fn flatten(resource: &RawRecord, _index: &ResourceIndex) -> Self {
        let attrs = attributes(resource);
        Self {
            id: resource.string_or_default("id"),
            created_at: parse_optional_timestamp(attrs.str_field("createdAt")),
            shard: attrs.string_or_default("shardId"),
            title: attrs.string_or_default("titleId"),
            match_ids: Relationship::of(resource, "matches").ids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    const PLAYER_BODY: &str = r#"{
        "data": {
            "type": "player",
            "id": "account.123-abc",
            "attributes": {
                "name": "PlayerName",
                "shardId": "steam",
                "titleId": "bluehole-pubg",
                "patchVersion": "",
                "stats": null
            },
            "relationships": {
                "assets": {"data": []},
                "matches": {"data": [
                    {"type": "match", "id": "456-def"},
                    {"type": "match", "id": "789-ghi"}
                ]}
            },
            "links": {"self": "https://api.pubg.com/shards/steam/players/account.123-abc"}
        },
        "included": []
    }"#;

    fn match_body() -> String {
        json!({
            "data": {
                "type": "match",
                "id": "m-1",
                "attributes": {
                    "createdAt": "2018-04-09T20:34:05Z",
                    "duration": 1799,
                    "gameMode": "squad-fpp",
                    "mapName": "Erangel_Main",
                    "isCustomMatch": false,
                    "seasonState": "progress",
                    "shardId": "steam",
                    "titleId": "bluehole-pubg",
                    "stats": null
                },
                "relationships": {
                    "rosters": {"data": [
                        {"type": "roster", "id": "r-1"},
                        {"type": "roster", "id": "r-missing"}
                    ]},
                    "assets": {"data": [{"type": "asset", "id": "a-1"}]}
                }
            },
            "included": [
                {
                    "type": "roster",
                    "id": "r-1",
                    "attributes": {"stats": {"rank": 1, "teamId": 4}, "won": "true", "shardId": "steam"},
                    "relationships": {"participants": {"data": [
                        {"type": "participant", "id": "p-1"},
                        {"type": "participant", "id": "p-2"}
                    ]}}
                },
                {
                    "type": "participant",
                    "id": "p-1",
                    "attributes": {
                        "actor": "",
                        "shardId": "steam",
                        "stats": {"DBNOs": 2, "kills": 5, "name": "PlayerName", "playerId": "account.123-abc", "winPlace": 1, "damageDealt": 512.5}
                    }
                },
                {
                    "type": "asset",
                    "id": "a-1",
                    "attributes": {
                        "URL": "https://telemetry-cdn.pubg.com/bluehole-pubg/steam/2018/04/09/telemetry.json",
                        "createdAt": "2018-04-09T20:34:10Z",
                        "description": "",
                        "name": "telemetry"
                    }
                }
            ]
        })
        .to_string()
    }

    #[test]
    fn player_document_flattens_with_empty_included() {
        let player: Player = decode_one(PLAYER_BODY).expect("player");
        assert_eq!(
            player,
            Player {
                id: "account.123-abc".to_string(),
                name: "PlayerName".to_string(),
                version: String::new(),
                shard: "steam".to_string(),
                title: "bluehole-pubg".to_string(),
                match_ids: vec!["456-def".to_string(), "789-ghi".to_string()],
            }
        );
    }

    #[test]
    fn player_list_keeps_order() {
        let body = json!({
            "data": [
                {"type": "player", "id": "account.1", "attributes": {"name": "First"}},
                {"type": "player", "id": "account.2", "attributes": {"name": "Second"},
                 "relationships": {"matches": {"data": [{"type": "match", "id": "m-9"}]}}}
            ]
        })
        .to_string();
        let players = decode_many::<Player>(&body).expect("players").items;
        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(players[0].match_ids.is_empty());
        assert_eq!(players[1].match_ids, vec!["m-9".to_string()]);
    }

    #[test]
    fn match_resolves_nested_collections() {
        let game: Match = decode_one(&match_body()).expect("match");
        assert_eq!(game.id, "m-1");
        assert_eq!(game.duration, 1799);
        assert_eq!(game.map, "Erangel_Main");
        assert_eq!(game.game_mode, "squad-fpp");
        assert_eq!(game.season_state, "progress");
        assert_eq!(game.match_completion.map(|at| at.year()), Some(2018));
        assert_eq!(game.roster_ids, vec!["r-1".to_string(), "r-missing".to_string()]);

        assert_eq!(game.rosters.len(), 2);
        let roster = game.rosters[0].resolved().expect("roster r-1");
        assert_eq!(roster.rank, 1);
        assert_eq!(roster.team_id, 4);
        assert!(roster.won);
        assert_eq!(roster.participant_ids(), vec!["p-1", "p-2"]);
        assert!(roster.participants[1].resolved().is_none());
        assert_eq!(
            game.rosters[1],
            Link::Unresolved {
                kind: "roster".to_string(),
                id: "r-missing".to_string()
            }
        );

        let participants: Vec<_> = game.participants().collect();
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].stats.dbnos, 2);
        assert_eq!(participants[0].stats.kills, 5);
        assert_eq!(participants[0].stats.damage_dealt, 512.5);
        assert_eq!(participants[0].stats.win_place, 1);

        let telemetry = game.telemetry().expect("telemetry asset");
        assert!(telemetry.url.ends_with("telemetry.json"));
        assert_eq!(telemetry.name, "telemetry");
        assert_eq!(game.unresolved_count(), 2);
    }

    #[test]
    fn empty_included_leaves_relationships_unresolved() {
        let mut body: serde_json::Value = serde_json::from_str(&match_body()).expect("json");
        body["included"] = json!([]);
        let game: Match = decode_one(&body.to_string()).expect("match");
        assert_eq!(game.rosters.len(), 2);
        assert!(game.rosters.iter().all(|link| !link.is_resolved()));
        assert!(game.telemetry().is_none());
        assert_eq!(game.participants().count(), 0);
    }

    #[test]
    fn missing_attributes_default() {
        let game: Match = decode_one(r#"{"data": {"type": "match", "id": "m-2"}}"#).expect("match");
        assert_eq!(game.id, "m-2");
        assert_eq!(game.duration, 0);
        assert!(game.match_completion.is_none());
        assert!(game.rosters.is_empty());
        assert!(game.assets.is_empty());
    }

    #[test]
    fn seasons_status_and_samples() {
        let seasons = decode_many::<Season>(
            &json!({"data": [
                {"type": "season", "id": "division.bro.official.2018-09", "attributes": {"isCurrentSeason": false, "isOffseason": false}},
                {"type": "season", "id": "division.bro.official.pc-2018-01", "attributes": {"isCurrentSeason": true, "isOffseason": false}}
            ]})
            .to_string(),
        )
        .expect("seasons")
        .items;
        assert_eq!(seasons.len(), 2);
        assert!(seasons[1].is_current_season);

        let status: Status = decode_one(
            r#"{"data": {"type": "status", "id": "pubg-api", "attributes": {"releasedAt": "2018-03-20T19:02:42Z", "version": "v8.0.1"}}}"#,
        )
        .expect("status");
        assert_eq!(status.id, "pubg-api");
        assert_eq!(status.version, "v8.0.1");
        assert!(status.released_at.is_some());

        let sample: Sample = decode_one(
            r#"{"data": {"type": "sample", "id": "s-1", "attributes": {"createdAt": "bogus", "shardId": "steam"},
                "relationships": {"matches": {"data": [{"type": "match", "id": "m-1"}]}}}}"#,
        )
        .expect("sample");
        assert!(sample.created_at.is_none());
        assert_eq!(sample.match_ids, vec!["m-1".to_string()]);
    }

    #[test]
    fn missing_data_and_wrong_type_are_fatal() {
        assert_eq!(
            decode_one::<Player>(r#"{"included": []}"#),
            Err(FatalDecodeFailure::MissingData)
        );
        assert_eq!(decode_one::<Player>(r#"{"data": []}"#), Err(FatalDecodeFailure::MissingData));
        assert!(matches!(
            decode_one::<Player>(&match_body()),
            Err(FatalDecodeFailure::UnexpectedShape(_))
        ));
        assert_eq!(
            decode_many::<Season>(r#"{"data": []}"#),
            Ok(ResourceList { items: Vec::new(), skipped: Vec::new() })
        );
        assert!(matches!(
            decode_one::<Player>(r#"{"data": [7, {"type": "player", "id": "a"}]}"#),
            Err(FatalDecodeFailure::UnexpectedShape(_))
        ));
        assert!(matches!(
            decode_many::<Player>(r#"{"data": "players"}"#),
            Err(FatalDecodeFailure::UnexpectedShape(_))
        ));
    }

    #[test]
    fn bad_list_elements_are_skipped_without_losing_siblings() {
        let body = json!({
            "data": [
                {"type": "player", "id": "account.1", "attributes": {"name": "First"}},
                7,
                {"type": "match", "id": "m-1"},
                {"type": "player", "id": "account.2", "attributes": {"name": "Second"}}
            ]
        })
        .to_string();
        let players = decode_many::<Player>(&body).expect("players");
        let names: Vec<_> = players.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);

        let positions: Vec<_> = players.skipped.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(players.skipped[0].reason, "element is not an object");
        assert_eq!(
            players.skipped[1].reason,
            "expected `player` resource, found `match`"
        );
    }

    #[test]
    fn list_members_share_one_included_index() {
        let body = json!({
            "data": [
                {"type": "match", "id": "m-1",
                 "relationships": {"rosters": {"data": [{"type": "roster", "id": "r-shared"}]}}},
                {"type": "match", "id": "m-2",
                 "relationships": {"rosters": {"data": [
                     {"type": "roster", "id": "r-2"},
                     {"type": "roster", "id": "r-shared"}
                 ]}}}
            ],
            "included": [
                {"type": "roster", "id": "r-shared", "attributes": {"stats": {"rank": 3, "teamId": 9}}},
                {"type": "roster", "id": "r-2", "attributes": {"stats": {"rank": 7, "teamId": 2}}}
            ]
        })
        .to_string();
        let games = decode_many::<Match>(&body).expect("matches");
        assert!(games.skipped.is_empty());
        assert_eq!(games.items.len(), 2);

        let shared_first = games.items[0].rosters[0].resolved().expect("shared roster");
        let shared_second = games.items[1].rosters[1].resolved().expect("shared roster");
        assert_eq!(shared_first, shared_second);
        assert_eq!(shared_first.team_id, 9);
        assert_eq!(games.items[1].rosters[0].resolved().map(|r| r.rank), Some(7));
    }

    #[test]
    fn relationship_type_is_checked_on_lookup() {
        let index = ResourceIndex::build(&[RawRecord::from_value(
            json!({"type": "participant", "id": "r-1"}),
        )
        .expect("object")]);
        let resource = RawRecord::from_value(json!({
            "id": "m-3",
            "relationships": {"rosters": {"data": [{"type": "roster", "id": "r-1"}]}}
        }))
        .expect("object");
        let game = Match::flatten(&resource, &index);
        assert!(!game.rosters[0].is_resolved());
    }
}

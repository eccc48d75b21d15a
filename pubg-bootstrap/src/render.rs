// Text output for the CLI

use std::fmt::Write;

use pubg_application::queries::TrackPoint;
use pubg_domain::{DecodeSummary, Link, Match, PlayerKill, Sample, Season, Status};

pub fn render_status(status: &Status) -> String {
    let released = status
        .released_at
        .map(|at| at.to_rfc3339())
        .unwrap_or_else(|| "unknown".to_string());
    format!("Status: {}\nVersion: {}\nReleased: {}\n", status.id, status.version, released)
}

pub fn render_match(game: &Match) -> String {
    let mut out = game.to_string();
    let _ = writeln!(out, "Rosters: {}", game.rosters.len());
    for link in &game.rosters {
        match link {
            Link::Resolved(roster) => {
                let _ = writeln!(
                    out,
                    "    #{} team {}{}",
                    roster.rank,
                    roster.team_id,
                    if roster.won { " (won)" } else { "" }
                );
                for participant in &roster.participants {
                    match participant {
                        Link::Resolved(p) => {
                            let _ = writeln!(
                                out,
                                "        {} kills {} damage {:.0} place {}",
                                p.stats.name, p.stats.kills, p.stats.damage_dealt, p.stats.win_place
                            );
                        }
                        Link::Unresolved { id, .. } => {
                            let _ = writeln!(out, "        {} (not included)", id);
                        }
                    }
                }
            }
            Link::Unresolved { id, .. } => {
                let _ = writeln!(out, "    {} (not included)", id);
            }
        }
    }
    match game.telemetry() {
        Some(asset) => {
            let _ = writeln!(out, "Telemetry: {}", asset.url);
        }
        None => {
            let _ = writeln!(out, "Telemetry: none");
        }
    }
    out
}

pub fn render_seasons(seasons: &[Season]) -> String {
    let mut out = String::new();
    for season in seasons {
        let mut flags = Vec::new();
        if season.is_current_season {
            flags.push("current");
        }
        if season.is_offseason {
            flags.push("offseason");
        }
        if flags.is_empty() {
            let _ = writeln!(out, "{}", season.id);
        } else {
            let _ = writeln!(out, "{} ({})", season.id, flags.join(", "));
        }
    }
    out
}

pub fn render_samples(samples: &[Sample]) -> String {
    let mut out = String::new();
    for sample in samples {
        let created = sample
            .created_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "unknown".to_string());
        let _ = writeln!(
            out,
            "Sample: {} ({}, {} matches)",
            sample.id,
            created,
            sample.match_ids.len()
        );
        for id in &sample.match_ids {
            let _ = writeln!(out, "    Id: {}", id);
        }
    }
    out
}

pub fn render_summary(summary: &DecodeSummary) -> String {
    let mut out = format!(
        "Records: {} ({} decoded, {} unknown, {} invalid)\n",
        summary.total(),
        summary.events,
        summary.unknown,
        summary.invalid
    );
    for (discriminator, count) in &summary.by_discriminator {
        let _ = writeln!(out, "    {:<24} {}", discriminator, count);
    }
    out
}

pub fn render_track(track: &[TrackPoint], limit: usize) -> String {
    let mut out = format!("Positions: {}\n", track.len());
    for point in track.iter().take(limit) {
        let _ = writeln!(
            out,
            "    {:>7.1}s  x {:.0} y {:.0} z {:.0}  hp {:.0}",
            point.elapsed_time, point.location.x, point.location.y, point.location.z, point.health
        );
    }
    if track.len() > limit {
        let _ = writeln!(out, "    ... {} more", track.len() - limit);
    }
    out
}

pub fn render_kills(kills: &[&PlayerKill]) -> String {
    let mut out = format!("Kills: {}\n", kills.len());
    for kill in kills {
        let victim = kill
            .victim
            .as_ref()
            .map(|victim| victim.name.as_str())
            .unwrap_or("?");
        let reason = kill
            .damage_reason
            .map(|reason| reason.as_str())
            .unwrap_or("-");
        let _ = writeln!(
            out,
            "    {} with {} at {:.0}m ({})",
            victim,
            kill.damage_causer_name,
            kill.distance / 100.0,
            reason
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pubg_domain::{
        Character, DamageReason, Location, Participant, ParticipantStats, Roster,
    };
    use std::collections::BTreeMap;

    #[test]
    fn match_lists_rosters_and_gaps() {
        let game = Match {
            id: "m-1".to_string(),
            map: "Erangel_Main".to_string(),
            rosters: vec![
                Link::Resolved(Roster {
                    id: "r-1".to_string(),
                    rank: 1,
                    team_id: 4,
                    won: true,
                    participants: vec![
                        Link::Resolved(Participant {
                            id: "p-1".to_string(),
                            stats: ParticipantStats {
                                name: "PlayerName".to_string(),
                                kills: 5,
                                ..ParticipantStats::default()
                            },
                            ..Participant::default()
                        }),
                        Link::Unresolved {
                            kind: "participant".to_string(),
                            id: "p-2".to_string(),
                        },
                    ],
                    ..Roster::default()
                }),
                Link::Unresolved {
                    kind: "roster".to_string(),
                    id: "r-2".to_string(),
                },
            ],
            ..Match::default()
        };
        let text = render_match(&game);
        assert!(text.contains("Id: m-1\n"));
        assert!(text.contains("#1 team 4 (won)"));
        assert!(text.contains("PlayerName kills 5"));
        assert!(text.contains("p-2 (not included)"));
        assert!(text.contains("r-2 (not included)"));
        assert!(text.ends_with("Telemetry: none\n"));
    }

    #[test]
    fn seasons_mark_current() {
        let seasons = vec![
            Season { id: "s-1".to_string(), ..Season::default() },
            Season { id: "s-2".to_string(), is_current_season: true, ..Season::default() },
        ];
        assert_eq!(render_seasons(&seasons), "s-1\ns-2 (current)\n");
    }

    #[test]
    fn summary_lists_counts_per_type() {
        let summary = DecodeSummary {
            events: 3,
            unknown: 1,
            invalid: 0,
            by_discriminator: BTreeMap::from([
                ("LogMatchStart".to_string(), 1),
                ("LogPlayerPosition".to_string(), 2),
                ("LogFuture".to_string(), 1),
            ]),
        };
        let text = render_summary(&summary);
        assert!(text.starts_with("Records: 4 (3 decoded, 1 unknown, 0 invalid)\n"));
        assert!(text.contains("LogPlayerPosition"));
    }

    #[test]
    fn track_respects_limit() {
        let track: Vec<TrackPoint> = (0..5)
            .map(|i| TrackPoint {
                elapsed_time: i as f64,
                location: Location::default(),
                health: 100.0,
            })
            .collect();
        let text = render_track(&track, 2);
        assert!(text.starts_with("Positions: 5\n"));
        assert!(text.ends_with("    ... 3 more\n"));
    }

    #[test]
    fn kills_name_the_victim() {
        let kill = PlayerKill {
            victim: Some(Character {
                name: "Other".to_string(),
                ..Character::default()
            }),
            damage_causer_name: "WeapHK416_C".to_string(),
            distance: 2500.0,
            ..PlayerKill::default()
        };
        assert_eq!(render_kills(&[&kill]), "Kills: 1\n    Other with WeapHK416_C at 25m (-)\n");

        let headshot = PlayerKill {
            damage_reason: Some(DamageReason::HeadShot),
            ..kill
        };
        assert!(render_kills(&[&headshot]).ends_with("at 25m (HeadShot)\n"));
    }
}

//! Box score derivation from a match's event log.

use std::collections::HashMap;

use crate::{
    model::match_event::{
        BoxScoreDto, EventType, PlayerBoxScoreDto, StatLineDto, TeamBoxScoreDto,
    },
    server::model::{
        game_rules::GameRules,
        match_event::MatchEvent,
        matches::{Match, MatchPlayer, TeamSide},
        player::Player,
        team::Team,
    },
};

/// Everything needed to build a box score. Nothing here touches the database.
pub struct BoxScoreInput<'a> {
    pub game: &'a Match,
    pub team1: &'a Team,
    pub team2: &'a Team,
    pub roster: &'a [MatchPlayer],
    /// Players referenced by events, used for names of players not on the roster.
    pub players: &'a HashMap<i32, Player>,
    pub events: &'a [MatchEvent],
    pub rules: &'a GameRules,
}

struct PlayerLine {
    team_id: Option<i32>,
    name: String,
    jersey_number: Option<i32>,
    stats: StatLineDto,
}

/// Adds one event's contribution to a stat line. Assists are credited separately.
fn record(stats: &mut StatLineDto, event_type: EventType) {
    match event_type {
        EventType::TwoPointMade => {
            stats.field_goals_made += 1;
            stats.field_goals_attempted += 1;
        }
        EventType::TwoPointMissed => stats.field_goals_attempted += 1,
        EventType::ThreePointMade => {
            stats.field_goals_made += 1;
            stats.field_goals_attempted += 1;
            stats.three_pointers_made += 1;
            stats.three_pointers_attempted += 1;
        }
        EventType::ThreePointMissed => {
            stats.field_goals_attempted += 1;
            stats.three_pointers_attempted += 1;
        }
        EventType::FreeThrowMade => {
            stats.free_throws_made += 1;
            stats.free_throws_attempted += 1;
        }
        EventType::FreeThrowMissed => stats.free_throws_attempted += 1,
        EventType::OffensiveRebound => stats.offensive_rebounds += 1,
        EventType::DefensiveRebound => stats.defensive_rebounds += 1,
        EventType::Steal => stats.steals += 1,
        EventType::Block => stats.blocks += 1,
        EventType::Turnover => stats.turnovers += 1,
        EventType::PersonalFoul | EventType::OffensiveFoul | EventType::TechnicalFoul => {
            stats.fouls += 1
        }
        _ => {}
    }

    stats.points += event_type.points();
    stats.rebounds = stats.offensive_rebounds + stats.defensive_rebounds;
}

fn credits_assist(event_type: EventType) -> bool {
    matches!(event_type, EventType::TwoPointMade | EventType::ThreePointMade)
}

/// Builds per-player and per-team stat lines from the events that are not undone.
///
/// The roster seeds the player list, starters first then by jersey number.
/// Players who appear only in events are appended in order of first appearance.
/// An event's team is its own `team_id`, falling back to the player's roster
/// team and then the player's club.
pub fn compute_box_score(input: BoxScoreInput<'_>) -> BoxScoreDto {
    let mut order: Vec<i32> = Vec::new();
    let mut lines: HashMap<i32, PlayerLine> = HashMap::new();

    let mut roster: Vec<&MatchPlayer> = input.roster.iter().collect();
    roster.sort_by_key(|entry| (!entry.is_starter, entry.jersey_number.unwrap_or(i32::MAX)));
    for entry in roster {
        order.push(entry.player_id);
        lines.insert(
            entry.player_id,
            PlayerLine {
                team_id: Some(entry.team_id),
                name: entry.full_name(),
                jersey_number: entry.jersey_number,
                stats: StatLineDto::default(),
            },
        );
    }

    let mut totals: HashMap<i32, StatLineDto> = HashMap::from([
        (input.game.team1_id, StatLineDto::default()),
        (input.game.team2_id, StatLineDto::default()),
    ]);

    for event in input.events.iter().filter(|event| !event.is_undone) {
        let team_id = event.team_id.or_else(|| {
            event
                .player_id
                .and_then(|id| line_team(&lines, input.players, id))
        });

        if let Some(player_id) = event.player_id {
            let line = line_for(&mut order, &mut lines, input.players, player_id, team_id);
            record(&mut line.stats, event.event_type);
        }

        if let Some(stats) = team_id.and_then(|id| totals.get_mut(&id)) {
            record(stats, event.event_type);
        }

        if credits_assist(event.event_type) {
            if let Some(assist_id) = event.assist_player_id {
                let line = line_for(&mut order, &mut lines, input.players, assist_id, team_id);
                line.stats.assists += 1;

                if let Some(stats) = team_id.and_then(|id| totals.get_mut(&id)) {
                    stats.assists += 1;
                }
            }
        }
    }

    let team_box = |side: TeamSide, team: &Team, totals: &mut HashMap<i32, StatLineDto>| {
        let players = order
            .iter()
            .filter_map(|id| lines.get(id).map(|line| (id, line)))
            .filter(|(_, line)| line.team_id == Some(team.id))
            .map(|(id, line)| PlayerBoxScoreDto {
                player_id: *id,
                player_name: line.name.clone(),
                jersey_number: line.jersey_number,
                stats: line.stats.clone(),
                fouled_out: line.stats.fouls >= input.rules.personal_foul_limit,
            })
            .collect();

        TeamBoxScoreDto {
            team_id: team.id,
            team_name: team.name.clone(),
            score: input.game.score(side),
            players,
            totals: totals.remove(&team.id).unwrap_or_default(),
        }
    };

    let team1 = team_box(TeamSide::Team1, input.team1, &mut totals);
    let team2 = team_box(TeamSide::Team2, input.team2, &mut totals);

    BoxScoreDto {
        match_id: input.game.id,
        team1,
        team2,
    }
}

fn line_team(
    lines: &HashMap<i32, PlayerLine>,
    players: &HashMap<i32, Player>,
    player_id: i32,
) -> Option<i32> {
    lines
        .get(&player_id)
        .and_then(|line| line.team_id)
        .or_else(|| players.get(&player_id).and_then(|player| player.team_id))
}

fn line_for<'l>(
    order: &mut Vec<i32>,
    lines: &'l mut HashMap<i32, PlayerLine>,
    players: &HashMap<i32, Player>,
    player_id: i32,
    event_team_id: Option<i32>,
) -> &'l mut PlayerLine {
    if !lines.contains_key(&player_id) {
        order.push(player_id);
    }

    lines.entry(player_id).or_insert_with(|| {
        let player = players.get(&player_id);
        PlayerLine {
            team_id: event_team_id.or_else(|| player.and_then(|p| p.team_id)),
            name: player
                .map(Player::full_name)
                .unwrap_or_else(|| format!("Player {}", player_id)),
            jersey_number: player.and_then(|p| p.jersey_number),
            stats: StatLineDto::default(),
        }
    })
}

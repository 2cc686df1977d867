mod common;

use common::{game, mid_game, participant, with, PLAYER};
use league_rollup::analysis::views::{best_matchup_per_role, top_champions_by_games, ChampionSummary};
use league_rollup::analysis::{fold_matches, Outcome, Role, RollupBuilder, SummonerEntry};
use league_rollup::api::models::MatchDto;
use pretty_assertions::assert_eq;
use serde_json::json;

fn varied_matches() -> Vec<MatchDto> {
    vec![
        mid_game(
            "NA1_1",
            "Ahri",
            "Zed",
            true,
            json!({ "kills": 7, "deaths": 1, "largestKillingSpree": 6, "challenges": { "kda": 9.5, "earliestBaron": 1300 } }),
        ),
        mid_game(
            "NA1_2",
            "Ahri",
            "Zed",
            true,
            json!({ "kills": 2, "deaths": 4, "largestKillingSpree": 2, "challenges": { "kda": 1.25 } }),
        ),
        mid_game(
            "NA1_3",
            "Ahri",
            "Syndra",
            false,
            json!({ "kills": 1, "deaths": 6, "largestKillingSpree": 0, "challenges": { "kda": 0.5, "earliestBaron": 1500 } }),
        ),
        mid_game(
            "NA1_4",
            "Viktor",
            "Zed",
            true,
            json!({ "kills": 12, "deaths": 3, "largestKillingSpree": 9, "challenges": { "kda": 6.0, "earliestBaron": 1250 } }),
        ),
    ]
}

#[test]
fn replaying_a_match_gives_identical_trees() {
    let m = &varied_matches()[0];

    let mut first = SummonerEntry::default();
    let mut second = SummonerEntry::default();
    first.fold_match(m, PLAYER).unwrap();
    second.fold_match(m, PLAYER).unwrap();

    assert_eq!(first, second);
}

#[test]
fn fold_order_does_not_change_the_tree() {
    let matches = varied_matches();
    let baseline = fold_matches(PLAYER, &matches).tree;

    let mut reversed = matches.clone();
    reversed.reverse();
    assert_eq!(fold_matches(PLAYER, &reversed).tree, baseline);

    let mut rotated = matches.clone();
    rotated.rotate_left(2);
    assert_eq!(fold_matches(PLAYER, &rotated).tree, baseline);

    let wins = &baseline.wins.stats;
    assert_eq!(wins.aggregate.get("kills"), 21.0);
    assert_eq!(wins.max["largestKillingSpree"], 9.0);
}

#[test]
fn min_tracking_ignores_zero_values() {
    let values = [0, 5, 0, 3];
    let matches: Vec<MatchDto> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            mid_game(
                &format!("NA1_{}", i),
                "Ahri",
                "Zed",
                true,
                json!({ "challenges": { "earliestDragonTakedown": v } }),
            )
        })
        .collect();

    for order in [vec![0, 1, 2, 3], vec![3, 2, 1, 0], vec![1, 3, 0, 2], vec![2, 0, 3, 1]] {
        let ordered: Vec<&MatchDto> = order.iter().map(|&i| &matches[i]).collect();
        let rollup = fold_matches(PLAYER, ordered);
        assert_eq!(rollup.tree.wins.stats.min["earliestDragonTakedown"], 3.0);
        assert_eq!(rollup.tree.wins.stats.max["earliestDragonTakedown"], 5.0);
    }
}

#[test]
fn max_tracking_keeps_negative_lane_deficits() {
    let m = mid_game(
        "NA1_1",
        "Ahri",
        "Zed",
        true,
        json!({ "challenges": { "maxCsAdvantageOnLaneOpponent": -4.0 } }),
    );
    let rollup = fold_matches(PLAYER, [&m]);

    let wins = &rollup.tree.wins.stats;
    assert_eq!(wins.max["maxCsAdvantageOnLaneOpponent"], -4.0);
    assert_eq!(wins.min["maxCsAdvantageOnLaneOpponent"], -4.0);

    let matchup = &rollup.tree.wins.champion["Ahri"].position[&Role::Middle].matchup["Zed"];
    assert_eq!(matchup.player.max["maxCsAdvantageOnLaneOpponent"], -4.0);
}

#[test]
fn normalization_divides_by_node_games() {
    let rollup = fold_matches(PLAYER, &varied_matches());
    let tree = &rollup.tree;

    // wins: 9.5 + 1.25 + 6.0 over 3 games
    assert_eq!(tree.wins.stats.average("kda"), 16.75 / 3.0);
    // Ahri wins: 9.5 + 1.25 over 2 games
    assert_eq!(tree.wins.champion["Ahri"].stats.average("kda"), 5.375);
    assert_eq!(tree.losses.stats.average("kda"), 0.5);

    let matchup = &tree.wins.champion["Ahri"].position[&Role::Middle].matchup["Zed"];
    assert_eq!(matchup.player.average("kda"), 5.375);
    assert!(tree.wins.stats.average.values().all(|v| v.is_finite()));
}

#[test]
fn games_counter_matches_each_node_path() {
    let rollup = fold_matches(PLAYER, &varied_matches());
    let tree = &rollup.tree;

    assert_eq!(tree.wins.stats.games(), 3);
    assert_eq!(tree.losses.stats.games(), 1);
    assert_eq!(tree.wins.champion["Ahri"].stats.games(), 2);
    assert_eq!(tree.wins.champion["Viktor"].stats.games(), 1);
    assert_eq!(tree.losses.champion["Ahri"].position[&Role::Middle].stats.games(), 1);

    let ahri_mid = &tree.wins.champion["Ahri"].position[&Role::Middle];
    assert_eq!(ahri_mid.matchup["Zed"].player.games(), 2);
    assert_eq!(ahri_mid.matchup["Zed"].opponent.games(), 2);
    assert!(!ahri_mid.matchup.contains_key("Syndra"));
}

#[test]
fn bad_matches_are_skipped_and_reported() {
    let mut builder = RollupBuilder::new(PLAYER);

    for i in 0..10 {
        let id = format!("NA1_{}", i);
        let m = if i % 3 == 0 && i > 0 {
            // player is not in these
            game(
                &id,
                1800,
                vec![
                    participant("someone-else", 100, "MIDDLE", "Lux", true),
                    participant("enemy-mid", 200, "MIDDLE", "Zed", false),
                ],
            )
        } else {
            mid_game(&id, "Ahri", "Zed", true, json!({ "kills": 1 }))
        };
        builder.fold(&m);
    }

    let rollup = builder.finish();
    assert_eq!(rollup.tree.wins.stats.games(), 7);
    assert_eq!(rollup.report.folded.len(), 7);
    assert_eq!(
        rollup
            .report
            .skipped
            .iter()
            .map(|s| s.match_id.as_str())
            .collect::<Vec<_>>(),
        vec!["NA1_3", "NA1_6", "NA1_9"]
    );
    assert!(rollup.report.skipped[0].reason.contains("player not found"));
}

#[test]
fn structurally_broken_match_is_skipped() {
    let broken: MatchDto = serde_json::from_value(json!({
        "metadata": { "matchId": "NA1_77", "participants": [PLAYER] }
    }))
    .unwrap();

    let rollup = fold_matches(PLAYER, [&broken, &varied_matches()[0]]);
    assert_eq!(rollup.report.folded, vec!["NA1_1".to_string()]);
    assert_eq!(rollup.report.skipped[0].match_id, "NA1_77");
    assert!(rollup.report.skipped[0].reason.contains("missing info"));
}

#[test]
fn missing_lane_opponent_keeps_upper_levels() {
    let m = game(
        "NA1_50",
        1500,
        vec![
            participant(PLAYER, 100, "", "Teemo", false),
            participant("enemy", 200, "", "Singed", true),
        ],
    );

    let rollup = fold_matches(PLAYER, [&m]);
    assert_eq!(rollup.report.without_matchup, vec!["NA1_50".to_string()]);

    let teemo = &rollup.tree.losses.champion["Teemo"];
    assert_eq!(teemo.stats.games(), 1);
    assert!(teemo.position[&Role::Unknown].matchup.is_empty());
}

#[test]
fn basic_kda_scenario() {
    let m = mid_game(
        "NA1_1",
        "Ahri",
        "Zed",
        true,
        json!({ "kills": 10, "deaths": 2, "assists": 8 }),
    );
    let rollup = fold_matches(PLAYER, [&m]);

    let aggregate = &rollup.tree.wins.champion["Ahri"].stats.aggregate;
    assert_eq!(aggregate.games, 1);
    assert_eq!(aggregate.get("kills"), 10.0);
    assert_eq!(aggregate.get("deaths"), 2.0);
    assert_eq!(aggregate.get("assists"), 8.0);

    assert_eq!(
        top_champions_by_games(&rollup.tree, Outcome::Wins, 1),
        vec![ChampionSummary {
            name: "Ahri".to_string(),
            games: 1,
            kda: 9.0,
        }]
    );
}

#[test]
fn matchup_needs_three_games_to_rank() {
    let mut matches = Vec::new();
    for i in 0..2 {
        matches.push(mid_game(&format!("NA1_z{}", i), "Ahri", "Zed", true, json!({})));
    }
    let rollup = fold_matches(PLAYER, &matches);
    assert!(best_matchup_per_role(&rollup.tree).is_empty());

    matches.push(mid_game("NA1_z2", "Ahri", "Zed", true, json!({})));
    let rollup = fold_matches(PLAYER, &matches);
    let best = best_matchup_per_role(&rollup.tree);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].role, Role::Middle);
    assert_eq!(best[0].opponent, "Zed");
    assert_eq!(best[0].games, 3);
}

#[test]
fn support_lane_opponent_is_found_through_utility_label() {
    let m = game(
        "NA1_60",
        2000,
        vec![
            with(participant(PLAYER, 200, "UTILITY", "Thresh", true), json!({ "visionScore": 70 })),
            participant("enemy-adc", 100, "BOTTOM", "Jinx", false),
            participant("enemy-sup", 100, "UTILITY", "Leona", false),
        ],
    );

    let rollup = fold_matches(PLAYER, [&m]);
    let position = &rollup.tree.wins.champion["Thresh"].position[&Role::Utility];
    assert!(position.matchup.contains_key("Leona"));
    assert_eq!(position.stats.aggregate.get("visionScore"), 70.0);
}

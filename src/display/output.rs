use crate::analysis::views::{
    self, CareerHigh, ChampionSummary, MatchupSummary, PositionVision, MIN_SAMPLE_GAMES,
};
use crate::analysis::{FoldReport, Outcome, Rollup};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    rank: String,
    champion: String,
    games: String,
    kda: String,
}

#[derive(Tabled)]
struct MatchupRow {
    role: String,
    champion: String,
    #[tabled(rename = "vs")]
    opponent: String,
    games: String,
    win_rate: String,
    kda: String,
}

#[derive(Tabled)]
struct VisionRow {
    role: String,
    games: String,
    vision: String,
    #[tabled(rename = "wards placed")]
    wards_placed: String,
    #[tabled(rename = "wards killed")]
    wards_killed: String,
}

#[derive(Tabled)]
struct RecordRow {
    stat: String,
    best: String,
}

fn section(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Renders every report section for a finished rollup.
pub fn display_report(player: &str, summoner_level: Option<i32>, rollup: &Rollup, top_n: usize) {
    let tree = &rollup.tree;

    display_hero(player, summoner_level, rollup);
    display_top_champions(Outcome::Wins, views::top_champions_by_games(tree, Outcome::Wins, top_n));
    display_top_champions(Outcome::Losses, views::top_champions_by_games(tree, Outcome::Losses, top_n));
    display_best_matchups(views::best_matchup_per_role(tree));
    display_vision(views::position_vision_breakdown(tree));
    display_highlights(rollup);
    display_career_highs(views::career_highs(tree));
    display_fold_report(&rollup.report);
}

fn display_hero(player: &str, summoner_level: Option<i32>, rollup: &Rollup) {
    let wins = rollup.tree.wins.stats.games();
    let losses = rollup.tree.losses.stats.games();
    let total = wins + losses;
    let win_rate = if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64 * 100.0
    };

    println!("\n{}", format!("🎮 {}", player).bold().cyan());
    if let Some(level) = summoner_level {
        println!("   Summoner Level {}", level);
    }
    println!(
        "{} {} W / {} L ({:.1}% WR over {} games)",
        "📈 Overall:".bold(),
        wins.to_string().green(),
        losses.to_string().red(),
        win_rate,
        total
    );
}

fn display_top_champions(outcome: Outcome, champions: Vec<ChampionSummary>) {
    section(&format!("🏆 MOST PLAYED ({})", outcome.to_string().to_uppercase()));

    if champions.is_empty() {
        println!("{}", "No games in this bucket".yellow());
        return;
    }

    let rows = champions
        .into_iter()
        .enumerate()
        .map(|(idx, c)| ChampionRow {
            rank: format!("#{}", idx + 1),
            champion: c.name,
            games: c.games.to_string(),
            kda: format!("{:.2}", c.kda),
        })
        .collect();
    print_table::<ChampionRow>(rows);
}

fn display_best_matchups(matchups: Vec<MatchupSummary>) {
    section("⚔️  BEST MATCHUP PER ROLE");

    if matchups.is_empty() {
        println!(
            "{}",
            format!("No matchup has {}+ games yet", MIN_SAMPLE_GAMES).yellow()
        );
        return;
    }

    let rows = matchups
        .into_iter()
        .map(|m| MatchupRow {
            role: m.role.to_string(),
            champion: m.champion,
            opponent: m.opponent,
            games: m.games.to_string(),
            win_rate: format!("{:.1}%", m.win_rate * 100.0),
            kda: format!("{:.2}", m.kda),
        })
        .collect();
    print_table::<MatchupRow>(rows);
    println!("\n• Win rate is computed over won games only");
}

fn display_vision(rows: Vec<PositionVision>) {
    section("👁️  VISION BY POSITION (wins)");

    if rows.is_empty() {
        println!("{}", "No vision data".yellow());
        return;
    }

    let rows = rows
        .into_iter()
        .map(|r| {
            let per_game = |total: f64| format!("{:.1}", total / r.games.max(1) as f64);
            VisionRow {
                role: r.role.to_string(),
                games: r.games.to_string(),
                vision: per_game(r.vision_score),
                wards_placed: per_game(r.wards_placed),
                wards_killed: per_game(r.wards_killed),
            }
        })
        .collect();
    print_table::<VisionRow>(rows);
}

fn display_highlights(rollup: &Rollup) {
    let tree = &rollup.tree;
    section("✨ HIGHLIGHTS");

    match views::total_time_played(tree) {
        Some(time) => println!(
            "⏱️  {:.1} hours in wins, {:.1} min per game",
            time.total_hours, time.average_minutes
        ),
        None => println!("{}", "No wins recorded".yellow()),
    }

    if let Some(best) = views::best_single_match(tree) {
        println!(
            "🔥 Best champion: {} ({:.0}/{:.0}/{:.0}, {:.2} KDA over {} wins)",
            best.name.bold(),
            best.kills,
            best.deaths,
            best.assists,
            best.kda,
            best.games
        );
    }

    if let Some(position) = views::best_position(tree) {
        println!(
            "🧭 Best position: {} ({} games, {:.2} KDA)",
            position.role.to_string().bold(),
            position.games,
            position.kda
        );
    }

    for outcome in [Outcome::Wins, Outcome::Losses] {
        if let Some(obj) = views::objective_summary(tree, outcome) {
            println!(
                "🐉 Objectives in {}: {:.2} dragons, {:.2} barons, {:.2} turrets per game",
                outcome,
                obj.per_game(obj.dragons),
                obj.per_game(obj.barons),
                obj.per_game(obj.turrets)
            );
        }
    }
}

fn display_career_highs(highs: Vec<CareerHigh>) {
    if highs.is_empty() {
        return;
    }
    section("📌 SINGLE-GAME RECORDS");

    let rows = highs
        .into_iter()
        .filter(|h| h.value != 0.0)
        .map(|h| RecordRow {
            stat: h.field.to_string(),
            best: format!("{:.0}", h.value),
        })
        .collect();
    print_table::<RecordRow>(rows);
}

pub fn display_fold_report(report: &FoldReport) {
    println!();
    display_success(&format!(
        "Analyzed {}/{} matches",
        report.folded.len(),
        report.requested()
    ));

    if !report.without_matchup.is_empty() {
        display_info(&format!(
            "{} matches had no lane opponent (excluded from matchups)",
            report.without_matchup.len()
        ));
    }

    for skipped in &report.skipped {
        println!("{} {} ({})", "⚠️".yellow(), skipped.match_id, skipped.reason);
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

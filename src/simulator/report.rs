//! Simulation report generation.

use crate::core::game_state::Outcome;
use serde::Serialize;

/// Result of one simulated battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// None when the battle hit the round cap
    pub outcome: Option<Outcome>,
    pub rounds: u32,
    pub boss_health: i32,
    pub survivors: Vec<String>,
    pub revives: u32,
    /// Total health restored by Medics
    pub health_healed: i32,
    pub skipped_turns: u32,
}

/// Aggregated results from multiple simulated battles.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub heroes_won: u32,
    pub boss_won: u32,
    pub timed_out: u32,

    pub avg_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
    pub avg_survivors: f64,
    pub avg_boss_health_left: f64,
    pub avg_revives: f64,
    pub avg_health_healed: f64,
    pub avg_skipped_turns: f64,

    /// (hero, fraction of battles it survived), in roster order
    pub survival_rates: Vec<(String, f64)>,

    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], value: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(value).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, roster: &[String]) -> Self {
        let num_runs = runs.len() as u32;
        let count = |outcome: Option<Outcome>| {
            runs.iter().filter(|r| r.outcome == outcome).count() as u32
        };

        let survival_rates = roster
            .iter()
            .map(|name| {
                let survived = runs.iter().filter(|r| r.survivors.contains(name)).count();
                (name.clone(), survived as f64 / num_runs.max(1) as f64)
            })
            .collect();

        Self {
            num_runs,
            heroes_won: count(Some(Outcome::HeroesWon)),
            boss_won: count(Some(Outcome::BossWon)),
            timed_out: count(None),
            avg_rounds: average(&runs, |r| r.rounds as f64),
            min_rounds: runs.iter().map(|r| r.rounds).min().unwrap_or(0),
            max_rounds: runs.iter().map(|r| r.rounds).max().unwrap_or(0),
            avg_survivors: average(&runs, |r| r.survivors.len() as f64),
            avg_boss_health_left: average(&runs, |r| r.boss_health as f64),
            avg_revives: average(&runs, |r| r.revives as f64),
            avg_health_healed: average(&runs, |r| r.health_healed as f64),
            avg_skipped_turns: average(&runs, |r| r.skipped_turns as f64),
            survival_rates,
            run_stats: runs,
        }
    }

    fn percent(&self, n: u32) -> f64 {
        n as f64 / self.num_runs.max(1) as f64 * 100.0
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("  Battles:      {}\n\n", self.num_runs));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Heroes won:   {:>6} ({:.1}%)\n",
            self.heroes_won,
            self.percent(self.heroes_won)
        ));
        report.push_str(&format!(
            "  Boss won:     {:>6} ({:.1}%)\n",
            self.boss_won,
            self.percent(self.boss_won)
        ));
        if self.timed_out > 0 {
            report.push_str(&format!(
                "  Timed out:    {:>6} ({:.1}%)\n",
                self.timed_out,
                self.percent(self.timed_out)
            ));
        }
        report.push('\n');

        report.push_str("── BATTLE LENGTH ────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Rounds:   {:.1}\n", self.avg_rounds));
        report.push_str(&format!("  Min Rounds:   {}\n", self.min_rounds));
        report.push_str(&format!("  Max Rounds:   {}\n", self.max_rounds));
        report.push_str(&format!(
            "  Avg Skipped Turns: {:.1}\n\n",
            self.avg_skipped_turns
        ));

        report.push_str("── AFTERMATH ────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Survivors:        {:.2}\n", self.avg_survivors));
        report.push_str(&format!(
            "  Avg Boss Health Left: {:.1}\n",
            self.avg_boss_health_left
        ));
        report.push_str(&format!("  Avg Revives:          {:.3}\n", self.avg_revives));
        report.push_str(&format!(
            "  Avg Health Healed:    {:.1}\n\n",
            self.avg_health_healed
        ));

        report.push_str("── SURVIVAL BY HERO ─────────────────────────────────────────────\n");
        for (name, rate) in &self.survival_rates {
            let pct = rate * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<10} {:>5.1}% {}\n", name, pct, bar));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

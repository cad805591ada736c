//! Simulation report generation.

use super::analytics::Analytics;
use super::config::SimConfig;
use super::runner::StopReason;
use crate::wheel::{designed_frequency, Color};
use serde::Serialize;

/// How often one colour came up during a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeShare {
    pub color: Color,
    pub count: u64,
    /// Percentage of spins, None when nothing was spun
    pub percentage: Option<f64>,
}

impl OutcomeShare {
    fn percentage_text(&self) -> String {
        match self.percentage {
            Some(pct) => format!("{:.2}%", pct),
            None => "N/A".to_string(),
        }
    }
}

fn outcome_shares(analytics: &Analytics, spins: u64) -> Vec<OutcomeShare> {
    Color::ALL
        .iter()
        .map(|&color| OutcomeShare {
            color,
            count: analytics.count(color),
            percentage: analytics.share(color, spins),
        })
        .collect()
}

fn push_distribution(report: &mut String, outcomes: &[OutcomeShare]) {
    report.push_str("  Colour     Spins        Share     Designed\n");
    report.push_str("  ──────     ─────        ─────     ────────\n");
    for outcome in outcomes {
        let bar_len = outcome.percentage.map(|pct| (pct / 5.0) as usize).unwrap_or(0);
        report.push_str(&format!(
            "  {:<8} {:>9}   {:>8}     {:>6.2}%  {}\n",
            outcome.color.name(),
            outcome.count,
            outcome.percentage_text(),
            designed_frequency(outcome.color) * 100.0,
            "█".repeat(bar_len)
        ));
    }
}

/// Final state of a single simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub strategy: String,
    pub starting_scraps: i64,
    pub final_scraps: i64,
    pub iterations: u64,
    pub peak_scraps: i64,
    pub stop_reason: Option<StopReason>,
    pub outcomes: Vec<OutcomeShare>,
}

impl SimReport {
    pub fn from_simulation(
        strategy: &str,
        config: &SimConfig,
        final_scraps: i64,
        iterations: u64,
        analytics: &Analytics,
        stop_reason: Option<StopReason>,
    ) -> Self {
        Self {
            strategy: strategy.to_string(),
            starting_scraps: config.starting_scraps,
            final_scraps,
            iterations,
            peak_scraps: analytics.peak_scraps,
            stop_reason,
            outcomes: outcome_shares(analytics, iterations),
        }
    }

    pub fn net_change(&self) -> i128 {
        self.final_scraps as i128 - self.starting_scraps as i128
    }

    pub fn outcome(&self, color: Color) -> Option<&OutcomeShare> {
        self.outcomes.iter().find(|o| o.color == color)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    RUEEL SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Strategy: {}\n", self.strategy));
        report.push_str(&format!(
            "Stopped:  {}\n\n",
            self.stop_reason
                .map(|r| r.describe())
                .unwrap_or("not run")
        ));

        report.push_str("── SCRAPS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Starting:            {}\n", self.starting_scraps));
        report.push_str(&format!("  Final:               {}\n", self.final_scraps));
        report.push_str(&format!("  Net Change:          {:+}\n", self.net_change()));
        report.push_str(&format!("  Highest Reached:     {}\n", self.peak_scraps));
        report.push_str(&format!("  Total Spins:         {}\n\n", self.iterations));

        report.push_str("── SPIN OUTCOMES ────────────────────────────────────────────────\n");
        push_distribution(&mut report, &self.outcomes);

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Aggregated results from several runs of the same configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub num_runs: u32,
    pub runs_goal_reached: u32,
    pub runs_iteration_limited: u32,
    pub runs_busted: u32,

    pub avg_final_scraps: f64,
    pub min_final_scraps: i64,
    pub max_final_scraps: i64,
    pub avg_iterations: f64,
    pub avg_peak_scraps: f64,
    pub highest_peak_scraps: i64,

    /// Outcome distribution pooled over every spin of every run
    pub total_spins: u64,
    pub outcomes: Vec<OutcomeShare>,

    #[serde(skip)]
    pub runs: Vec<SimReport>,
}

impl BatchReport {
    pub fn from_runs(runs: Vec<SimReport>) -> Self {
        let num_runs = runs.len() as u32;
        let count_stops =
            |reason: StopReason| runs.iter().filter(|r| r.stop_reason == Some(reason)).count() as u32;
        let runs_goal_reached = count_stops(StopReason::GoalReached);
        let runs_iteration_limited = count_stops(StopReason::IterationLimit);
        let runs_busted = count_stops(StopReason::InsufficientScraps);

        let divisor = num_runs.max(1) as f64;
        let avg_final_scraps = runs.iter().map(|r| r.final_scraps as f64).sum::<f64>() / divisor;
        let avg_iterations = runs.iter().map(|r| r.iterations as f64).sum::<f64>() / divisor;
        let avg_peak_scraps = runs.iter().map(|r| r.peak_scraps as f64).sum::<f64>() / divisor;
        let min_final_scraps = runs.iter().map(|r| r.final_scraps).min().unwrap_or(0);
        let max_final_scraps = runs.iter().map(|r| r.final_scraps).max().unwrap_or(0);
        let highest_peak_scraps = runs.iter().map(|r| r.peak_scraps).max().unwrap_or(0);

        let mut pooled = Analytics::new(highest_peak_scraps);
        for run in &runs {
            for outcome in &run.outcomes {
                pooled.outcome_counts[outcome.color.index()] += outcome.count;
            }
        }
        let total_spins = runs.iter().map(|r| r.iterations).sum();

        Self {
            num_runs,
            runs_goal_reached,
            runs_iteration_limited,
            runs_busted,
            avg_final_scraps,
            min_final_scraps,
            max_final_scraps,
            avg_iterations,
            avg_peak_scraps,
            highest_peak_scraps,
            total_spins,
            outcomes: outcome_shares(&pooled, total_spins),
            runs,
        }
    }

    /// Percentage of runs that hit the scraps goal, None for an empty batch.
    pub fn goal_rate(&self) -> Option<f64> {
        (self.num_runs > 0).then(|| self.runs_goal_reached as f64 / self.num_runs as f64 * 100.0)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  RUEEL BATCH SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached goal, {} hit iteration limit, {} busted\n\n",
            self.num_runs, self.runs_goal_reached, self.runs_iteration_limited, self.runs_busted
        ));

        report.push_str("── SCRAPS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final:           {:.1}\n", self.avg_final_scraps));
        report.push_str(&format!("  Min Final:           {}\n", self.min_final_scraps));
        report.push_str(&format!("  Max Final:           {}\n", self.max_final_scraps));
        report.push_str(&format!("  Avg Peak:            {:.1}\n", self.avg_peak_scraps));
        report.push_str(&format!("  Highest Peak:        {}\n", self.highest_peak_scraps));
        report.push_str(&format!("  Avg Spins:           {:.1}\n", self.avg_iterations));
        match self.goal_rate() {
            Some(rate) => report.push_str(&format!("  Goal Rate:           {:.1}%\n\n", rate)),
            None => report.push_str("  Goal Rate:           N/A\n\n"),
        }

        report.push_str("── SPIN OUTCOMES (ALL RUNS) ─────────────────────────────────────\n");
        push_distribution(&mut report, &self.outcomes);

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

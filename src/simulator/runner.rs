//! The simulation loop: spin until a stop condition holds.

use super::analytics::Analytics;
use super::config::SimConfig;
use super::report::{BatchReport, SimReport};
use super::spin::spin;
use crate::betting::{Strategy, StrategyKind};
use crate::core::error::{Result, SimError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Why a simulation stopped spinning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    IterationLimit,
    GoalReached,
    InsufficientScraps,
}

impl StopReason {
    pub fn describe(&self) -> &'static str {
        match self {
            StopReason::IterationLimit => "iteration limit reached",
            StopReason::GoalReached => "scraps goal reached",
            StopReason::InsufficientScraps => "not enough scraps to keep betting",
        }
    }
}

/// One bettor working through one run at the wheel.
///
/// Each simulation owns its generator, so independent simulations never share
/// random state.
pub struct Simulation<S = StrategyKind, R = ChaCha8Rng> {
    config: SimConfig,
    strategy: S,
    rng: R,
    scraps: i64,
    iterations: u64,
    analytics: Analytics,
    stop_reason: Option<StopReason>,
}

impl Simulation {
    /// Build a simulation using the config's built-in strategy.
    pub fn new(config: SimConfig) -> Self {
        Self::with_strategy(config, config.strategy)
    }
}

impl<S: Strategy> Simulation<S> {
    /// Build a simulation with a custom strategy. The config's `strategy` field is ignored.
    pub fn with_strategy(config: SimConfig, strategy: S) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, strategy, rng)
    }
}

impl<S: Strategy, R: Rng> Simulation<S, R> {
    /// Build a simulation drawing from a caller-supplied generator.
    pub fn with_rng(config: SimConfig, strategy: S, rng: R) -> Self {
        Self {
            config,
            strategy,
            rng,
            scraps: config.starting_scraps,
            iterations: 0,
            analytics: Analytics::new(config.starting_scraps),
            stop_reason: None,
        }
    }

    /// Run one iteration of the loop. Returns the stop reason once the run is over.
    pub fn step(&mut self) -> Result<Option<StopReason>> {
        self.analytics.observe_scraps(self.scraps);

        if self.config.has_iteration_cap() && self.iterations >= self.config.max_iterations {
            return Ok(Some(StopReason::IterationLimit));
        }

        if self.config.has_goal() && self.scraps >= self.config.scraps_goal {
            return Ok(Some(StopReason::GoalReached));
        }

        let outcome = spin(
            self.scraps,
            &self.strategy,
            &mut self.rng,
            &mut self.analytics,
        )?;
        if outcome.should_stop() {
            return Ok(Some(StopReason::InsufficientScraps));
        }

        self.scraps = self
            .scraps
            .checked_add(outcome.delta())
            .ok_or(SimError::ScrapsOverflow)?;
        self.iterations += 1;

        Ok(None)
    }

    /// Spin until a stop condition holds.
    ///
    /// With neither a goal nor an iteration cap this only ends once the bettor
    /// runs out of scraps.
    pub fn simulate(&mut self) -> Result<StopReason> {
        tracing::info!(
            strategy = self.strategy.name(),
            starting_scraps = self.scraps,
            scraps_goal = self.config.scraps_goal,
            max_iterations = self.config.max_iterations,
            "simulation started"
        );

        let reason = loop {
            match self.step() {
                Ok(Some(reason)) => break reason,
                Ok(None) => {}
                Err(err) => {
                    tracing::error!(iterations = self.iterations, %err, "simulation aborted");
                    return Err(err);
                }
            }
        };

        self.stop_reason = Some(reason);
        tracing::info!(
            reason = reason.describe(),
            scraps = self.scraps,
            iterations = self.iterations,
            peak_scraps = self.analytics.peak_scraps,
            "simulation stopped"
        );
        Ok(reason)
    }

    pub fn scraps(&self) -> i64 {
        self.scraps
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Why the last call to [`simulate`](Self::simulate) returned, if it has run.
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn report(&self) -> SimReport {
        SimReport::from_simulation(
            self.strategy.name(),
            &self.config,
            self.scraps,
            self.iterations,
            &self.analytics,
            self.stop_reason,
        )
    }
}

/// Run a single simulation for `config` and report on it.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let mut simulation = Simulation::new(*config);
    simulation.simulate()?;
    Ok(simulation.report())
}

/// Run `num_runs` independent simulations of the same config.
///
/// Run `i` is seeded with `seed + i` when the config carries a seed.
pub fn run_batch(config: &SimConfig, num_runs: u32) -> Result<BatchReport> {
    let mut runs = Vec::with_capacity(num_runs as usize);

    for run_idx in 0..num_runs {
        let run_config = SimConfig {
            seed: config.seed.map(|seed| seed.wrapping_add(run_idx as u64)),
            ..*config
        };
        let report = run_simulation(&run_config)?;

        tracing::debug!(
            run = run_idx + 1,
            of = num_runs,
            scraps = report.final_scraps,
            spins = report.iterations,
            "batch run finished"
        );
        runs.push(report);
    }

    let batch = BatchReport::from_runs(runs);
    tracing::info!(
        runs = batch.num_runs,
        goal_reached = batch.runs_goal_reached,
        busted = batch.runs_busted,
        "batch finished"
    );
    Ok(batch)
}

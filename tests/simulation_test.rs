//! Integration test: Bets, spins and the simulation loop
//!
//! Exercises the public engine end to end: bet totals, deterministic payout
//! resolution, insufficiency stops, iteration caps, goals and reports.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rueel::simulator::{resolve_payout, spin, Analytics, SpinOutcome};
use rueel::wheel::fixed_slot_rng;
use rueel::{
    run_batch, Bet, Color, Result, SimConfig, SimError, Simulation, StopReason, Strategy,
    StrategyKind,
};

// =============================================================================
// Bet totals
// =============================================================================

#[test]
fn test_bet_total_is_exact_sum() {
    let wagers = [7, 0, 13, 250, 1];
    let mut bet = Bet::empty();
    for (color, amount) in Color::ALL.iter().zip(wagers) {
        bet.set(*color, amount);
    }
    assert_eq!(bet.total(), Ok(271));
}

#[test]
fn test_bet_missing_colour_is_malformed() {
    let result = Bet::from_wagers([
        (Color::Yellow, 10),
        (Color::Green, 10),
        (Color::Blue, 10),
        (Color::Purple, 10),
    ]);
    assert_eq!(
        result,
        Err(SimError::MalformedBet {
            missing: vec![Color::Red]
        })
    );
}

// =============================================================================
// Spin resolution
// =============================================================================

#[test]
fn test_fixed_draw_gives_same_delta_every_time() {
    let bet = Bet::empty()
        .with(Color::Yellow, 40)
        .with(Color::Blue, 20)
        .with(Color::Red, 5);

    for (slot, &color) in rueel::wheel::WHEEL.iter().enumerate() {
        let expected = resolve_payout(&bet, color).unwrap();
        for _ in 0..3 {
            let mut rng = fixed_slot_rng(slot).unwrap();
            let mut analytics = Analytics::new(1000);
            let strategy = |_: i64| -> Result<Bet> { Ok(bet) };
            let outcome = spin(1000, &strategy, &mut rng, &mut analytics).unwrap();
            assert_eq!(outcome.delta(), expected, "slot {slot} ({color})");
        }
    }
}

#[test]
fn test_one_or_zero_scraps_always_stop() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut analytics = Analytics::new(0);
    let greedy = |scraps: i64| -> Result<Bet> { Ok(Bet::empty().with(Color::Red, scraps * 100)) };

    for scraps in [1, 0] {
        assert_eq!(
            spin(scraps, &StrategyKind::AllIn, &mut rng, &mut analytics),
            Ok(SpinOutcome::Insufficient)
        );
        assert_eq!(
            spin(scraps, &StrategyKind::HalfOnYellow, &mut rng, &mut analytics),
            Ok(SpinOutcome::Insufficient)
        );
        assert_eq!(
            spin(scraps, &greedy, &mut rng, &mut analytics),
            Ok(SpinOutcome::Insufficient)
        );
    }
}

// =============================================================================
// Loop termination
// =============================================================================

#[test]
fn test_iteration_cap_of_five() {
    // Half on Yellow never takes more than half, so it cannot bust in five spins
    let config = SimConfig {
        starting_scraps: 1000,
        strategy: StrategyKind::HalfOnYellow,
        scraps_goal: 0,
        max_iterations: 5,
        seed: Some(31337),
    };
    let mut sim = Simulation::new(config);

    assert_eq!(sim.simulate(), Ok(StopReason::IterationLimit));
    assert_eq!(sim.iterations(), 5);
    assert_eq!(sim.analytics().total_draws(), 5);
}

#[test]
fn test_goal_stops_as_soon_as_reached() {
    let add_one = |_: i64| -> Result<Bet> { Ok(Bet::empty().with(Color::Yellow, 1)) };
    let config = SimConfig {
        starting_scraps: 9_998,
        scraps_goal: 10_000,
        max_iterations: 0,
        ..Default::default()
    };
    // Slot 3 is Yellow: the 1-scrap stake comes back with 1 in winnings, +2 per spin
    let mut sim = Simulation::with_rng(config, add_one, fixed_slot_rng(3).unwrap());

    assert_eq!(sim.simulate(), Ok(StopReason::GoalReached));
    assert_eq!(sim.scraps(), 10_000);
    assert_eq!(sim.iterations(), 1);
    assert!(sim.analytics().peak_scraps >= 10_000);
}

#[test]
fn test_half_on_yellow_single_winning_spin() {
    let config = SimConfig {
        starting_scraps: 1000,
        strategy: StrategyKind::HalfOnYellow,
        scraps_goal: 0,
        max_iterations: 1,
        seed: None,
    };
    let bet = StrategyKind::HalfOnYellow.place_bet(1000).unwrap();
    assert_eq!(bet.wager(Color::Yellow), 500);
    assert_eq!(bet.total(), Ok(500));
    assert_eq!(resolve_payout(&bet, Color::Yellow), Ok(1000));

    // Slot 1 is the first Yellow slot
    let mut sim = Simulation::with_rng(config, config.strategy, fixed_slot_rng(1).unwrap());

    assert_eq!(sim.simulate(), Ok(StopReason::IterationLimit));
    assert_eq!(sim.scraps(), 2000);
    assert_eq!(sim.iterations(), 1);
    assert_eq!(sim.analytics().count(Color::Yellow), 1);
    assert_eq!(sim.analytics().peak_scraps, 2000);

    let report = sim.report();
    assert_eq!(report.final_scraps, 2000);
    assert_eq!(report.net_change(), 1000);
    let yellow = report.outcomes.iter().find(|o| o.color == Color::Yellow).unwrap();
    assert_eq!(yellow.percentage, Some(100.0));
}

#[test]
fn test_uncapped_all_in_eventually_busts() {
    // No goal and no cap: all-in loses everything on the first non-Yellow spin
    let config = SimConfig {
        starting_scraps: 1000,
        strategy: StrategyKind::AllIn,
        scraps_goal: 0,
        max_iterations: 0,
        seed: Some(8),
    };
    let mut sim = Simulation::new(config);

    assert_eq!(sim.simulate(), Ok(StopReason::InsufficientScraps));
    assert_eq!(sim.scraps(), 0);
    assert!(sim.iterations() >= 1);
    assert!(sim.analytics().peak_scraps >= 1000);
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_report_without_spins_uses_na() {
    let config = SimConfig {
        starting_scraps: 1,
        seed: Some(1),
        ..Default::default()
    };
    let mut sim = Simulation::new(config);
    assert_eq!(sim.simulate(), Ok(StopReason::InsufficientScraps));

    let text = sim.report().to_text();
    assert!(text.contains("Total Spins:         0"));
    assert!(text.contains("N/A"));
}

#[test]
fn test_batch_is_reproducible() {
    let config = SimConfig {
        strategy: StrategyKind::HalfOnYellow,
        max_iterations: 100,
        seed: Some(5),
        ..Default::default()
    };
    let a = run_batch(&config, 8).unwrap();
    let b = run_batch(&config, 8).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.total_spins, a.runs.iter().map(|r| r.iterations).sum::<u64>());
    let pooled: u64 = a.outcomes.iter().map(|o| o.count).sum();
    assert_eq!(pooled, a.total_spins);
}

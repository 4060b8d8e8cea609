//! Randomized checks over seeded bowls on every topology.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;
use std::collections::HashSet;
use sw_engine::{minimize, Point, ProgressRecorder, SearchConfig, SearchOutcome, Topology};

const CASES: usize = 64;

#[derive(Debug, Clone, Copy)]
struct Bowl {
    cx: f64,
    cy: f64,
    ax: f64,
    ay: f64,
    floor: f64,
}

impl Bowl {
    fn random(rng: &mut ChaCha8Rng) -> Self {
        Self {
            cx: rng.gen_range(-200.0..200.0),
            cy: rng.gen_range(-200.0..200.0),
            ax: rng.gen_range(0.1..5.0),
            ay: rng.gen_range(0.1..5.0),
            floor: rng.gen_range(0.01..10.0),
        }
    }

    fn value(&self, x: i64, y: i64) -> f64 {
        let dx = x as f64 - self.cx;
        let dy = y as f64 - self.cy;
        self.ax * dx * dx + self.ay * dy * dy + self.floor
    }
}

fn random_config(rng: &mut ChaCha8Rng) -> SearchConfig {
    let topology = match rng.gen_range(0..3) {
        0 => Topology::square(),
        1 => Topology::square_diagonal(),
        _ => Topology::Triangular,
    };
    let mut component = || {
        let magnitude = rng.gen_range(0..=128_i64);
        if rng.gen_bool(0.2) {
            -magnitude
        } else {
            magnitude
        }
    };
    let (dx, dy) = (component(), component());
    SearchConfig::new(topology)
        .with_runs(rng.gen_range(0..10))
        .with_start(rng.gen_range(-300..300), rng.gen_range(-300..300))
        .with_step(dx, dy)
}

/// Objective calls and progress reports in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Event {
    Evaluated(Point),
    Moved(Point),
}

fn traced_search(config: &SearchConfig, bowl: Bowl) -> (SearchOutcome, Vec<Event>) {
    let events = RefCell::new(Vec::new());
    let objective = |x, y| {
        events.borrow_mut().push(Event::Evaluated(Point::new(x, y)));
        bowl.value(x, y)
    };
    let mut on_move = |point: Point, _value: f64| {
        events.borrow_mut().push(Event::Moved(point));
    };
    let outcome = minimize(config, objective, Some(&mut on_move));
    (outcome, events.into_inner())
}

#[test]
fn searches_are_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..CASES {
        let config = random_config(&mut rng);
        let bowl = Bowl::random(&mut rng);
        let first = minimize(&config, |x, y| bowl.value(x, y), None);
        let second = minimize(&config, |x, y| bowl.value(x, y), None);
        assert_eq!(first, second, "{config:?}");
    }
}

#[test]
fn evaluation_count_matches_objective_calls() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..CASES {
        let config = random_config(&mut rng);
        let bowl = Bowl::random(&mut rng);
        let mut calls = 0_u64;
        let outcome = minimize(
            &config,
            |x, y| {
                calls += 1;
                bowl.value(x, y)
            },
            None,
        );
        assert_eq!(outcome.evaluations, calls, "{config:?}");
        assert_eq!(outcome.value, bowl.value(outcome.point.x, outcome.point.y));
        assert!(outcome.runs_completed <= config.runs);
    }
}

#[test]
fn progress_strictly_improves_and_ends_at_outcome() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    for _ in 0..CASES {
        let config = random_config(&mut rng);
        let bowl = Bowl::random(&mut rng);
        let mut recorder = ProgressRecorder::new();
        let outcome = minimize(
            &config,
            |x, y| bowl.value(x, y),
            Some(&mut recorder.callback()),
        );

        assert!(recorder.is_strictly_decreasing(), "{config:?}");
        assert_eq!(recorder.records()[0].point, config.start);
        let best = recorder.best().unwrap();
        assert_eq!(best.point, outcome.point);
        assert_eq!(best.value, outcome.value);
        assert!(recorder.records().len() as u64 <= outcome.evaluations);
    }
}

#[test]
fn no_cell_is_evaluated_twice_around_one_center() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    for _ in 0..CASES {
        let config = random_config(&mut rng);
        let bowl = Bowl::random(&mut rng);
        let (outcome, events) = traced_search(&config, bowl);

        // The start is evaluated before it is reported.
        assert_eq!(events.first(), Some(&Event::Evaluated(config.start)));
        assert_eq!(events.get(1), Some(&Event::Moved(config.start)));

        let mut center = config.start;
        let mut seen = HashSet::new();
        for event in &events[2..] {
            match *event {
                Event::Evaluated(point) => {
                    assert_ne!(point, center, "center re-evaluated in {config:?}");
                    assert!(seen.insert(point), "{point} evaluated twice in {config:?}");
                }
                Event::Moved(point) => {
                    center = point;
                    seen.clear();
                }
            }
        }
        assert_eq!(center, outcome.point);
    }
}

#[test]
fn nearest_lattice_point_is_found_with_enough_runs() {
    let mut rng = ChaCha8Rng::seed_from_u64(47);
    for _ in 0..CASES {
        let bowl = Bowl {
            ax: 1.0,
            ay: 1.0,
            ..Bowl::random(&mut rng)
        };
        let target = Point::new(bowl.cx.round() as i64, bowl.cy.round() as i64);
        for topology in [Topology::square(), Topology::square_diagonal()] {
            let config = SearchConfig::new(topology)
                .with_runs(16)
                .with_start(0, 0)
                .with_step(256, 256);
            let outcome = minimize(&config, |x, y| bowl.value(x, y), None);
            assert_eq!(outcome.point, target, "{config:?} {bowl:?}");
        }
    }
}

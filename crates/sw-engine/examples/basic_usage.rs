use sw_engine::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Stepwise Basic Usage Example");

    // A bowl whose minimum sits between lattice points
    let objective = |x: i64, y: i64| {
        let a = x as f64 - 3.3;
        let b = y as f64 - 4.4;
        a * a + b * b
    };

    // Square grid, four neighbors
    let outcome = find_min(
        8,
        Connectivity::Orthogonal,
        Point::new(-100, 50),
        Step::new(64, 64),
        objective,
        None,
    );
    println!(
        "Square grid: {} with value {:.3} after {} evaluations",
        outcome.point, outcome.value, outcome.evaluations
    );

    // Triangular lattice, recording every accepted move
    let mut recorder = ProgressRecorder::new();
    let outcome = find_min_tri(
        8,
        Point::new(-100, 50),
        Step::new(64, 56),
        objective,
        Some(&mut recorder.callback()),
    );
    println!(
        "Triangular lattice: {} after {} moves and {} evaluations",
        outcome.point,
        recorder.moves(),
        outcome.evaluations
    );
    for record in recorder.records() {
        println!("  #{:<2} {} -> {:.3}", record.sequence, record.point, record.value);
    }

    // A configured run against a named benchmark
    let search = SearchConfig::new(Topology::square_diagonal())
        .with_runs(10)
        .with_start(-50, 50)
        .with_step(64, 64);
    println!("Configuration:\n{}", search.to_json()?);

    let run = RunConfig::new(search, Objective::from_name("booth")?).with_scale(0.1);
    let outcome = run.execute(None);
    println!("Booth: {}", serde_json::to_string_pretty(&outcome)?);

    println!("Basic usage example completed successfully!");
    Ok(())
}

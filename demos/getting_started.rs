use polyhash::{GeneratorBuilder, GridStepping};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Vertices are (latitude, longitude); the ring closes itself.
    let central_park = vec![
        (40.7644, -73.9730),
        (40.8003, -73.9582),
        (40.7968, -73.9492),
        (40.7681, -73.9817),
    ];

    let generator = GeneratorBuilder::new()
        .precision(7)
        .step(0.0005)
        .stepping(GridStepping::Indexed)
        .validate_polygon(true)
        .build(central_park)?;

    println!("First cells covering Central Park:");
    for geohash in generator.generate().take(10) {
        println!("  {geohash}");
    }

    let mut run = generator.generate();
    let total = run.by_ref().count();
    let stats = run.stats();
    println!(
        "{} unique precision-{} cells from {} grid points ({} inside, {} duplicates)",
        total,
        generator.precision(),
        stats.grid_points,
        stats.inside_points,
        stats.duplicates
    );

    Ok(())
}

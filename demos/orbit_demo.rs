use orbit_sim::*;

fn main() -> Result<()> {
    let mut sim = OrbitSimulation::new();
    sim.set_simulation_speed_days_per_second(365.25 / 12.0)?;

    // one simulated year at 60 frames per second, sampled once a month
    for month in 0..=12 {
        let snapshot = sim.snapshot();
        println!(
            "month {month:2}: r = {:.4} units, angle = {:.4} rad, pos = ({:+.3}, {:+.3})",
            snapshot.scaled_distance, snapshot.angle, snapshot.position.x, snapshot.position.y
        );
        for _ in 0..60 {
            sim.tick_frame()?;
        }
    }

    sim.set_mass_multiplier(0.0)?;
    for _ in 0..60 {
        sim.tick_frame()?;
    }
    println!(
        "after a month without gravity: r = {:.4} units",
        sim.scaled_distance()
    );

    sim.report_collision();
    println!("paused after collision report: {}", sim.is_paused());
    Ok(())
}

//! Minimal example: rebuild an uneven parabola as a constant-speed path.

use std::error::Error;

use glam::DVec2;

fn main() -> Result<(), Box<dyn Error>> {
    // A parabola parameterized by t*t: the raw function crawls near t = 0
    // and races near t = 1.
    let curve = evenpace::path(|t: f64| DVec2::new(t * t, (t * t) * (1.0 - t * t)), 0.05, 256, None)?;

    println!(
        "arc length ~{:.3}, {} points at spacing {}",
        curve.total_length(),
        curve.points().len(),
        curve.step()
    );

    for i in 0..=4 {
        let u = f64::from(i) / 4.0;
        let point = curve.at(u);
        println!("u = {u:.2} -> ({:.3}, {:.3})", point.x, point.y);
    }

    Ok(())
}

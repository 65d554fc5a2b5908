//! Example: Generate one galaxy per shape
//!
//! Demonstrates the builder, the generator and the map queries.

use std::collections::BTreeMap;

use galaxy_builder::*;

fn main() -> Result<()> {
    println!("Galaxy Generation Example");
    println!("=========================\n");

    for shape in GalaxyShape::ALL {
        let params = GenerationParametersBuilder::new()
            .system_count(120)?
            .dimensions(DEFAULT_GALAXY_WIDTH, DEFAULT_GALAXY_HEIGHT)?
            .shape(shape)
            .spiral_arms(3.0)?
            .spiral_tightness(0.6)
            .radii(0.15, 0.85)?
            .seed(2024)
            .build()?;

        let galaxy = generate_galaxy(&params);

        println!("{} galaxy", shape.name());
        println!(
            "  Systems: {}/{}  Lanes: {}",
            galaxy.system_count(),
            params.system_count,
            galaxy.lane_count()
        );

        let planets: usize = galaxy.systems().map(|s| s.planet_count()).sum();
        let moons: u32 = galaxy
            .systems()
            .flat_map(|s| s.planets.iter())
            .map(|p| p.moons)
            .sum();
        println!("  Planets: {}  Moons: {}", planets, moons);

        let mut star_counts = BTreeMap::new();
        for system in galaxy.systems() {
            *star_counts.entry(system.star_type.name()).or_insert(0usize) += 1;
        }
        for (star, count) in &star_counts {
            let pct = *count as f64 / galaxy.system_count() as f64 * 100.0;
            println!("    {:<12} {:>3} ({:.1}%)", star, count, pct);
        }

        let center = DVec2::new(params.width as f64 / 2.0, params.height as f64 / 2.0);
        if let Some(id) = galaxy.find_system_at(center) {
            let reachable = galaxy.find_systems_within_hops(id, 2);
            println!(
                "  Closest to center: System_{} ({} systems within 2 jumps)",
                id,
                reachable.len()
            );
        }
        println!();
    }

    Ok(())
}

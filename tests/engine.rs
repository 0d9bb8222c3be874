use bouncesim::{NaiveSweep, QuadtreeIndex, Result, Universe};

const TOL: f64 = 1e-12;

/// A lone particle far from any wall just drifts by its velocity: 600×600
/// universe, particle at (10, 10) with velocity (1, 4) and radius 10 ends
/// one step at (11, 14) with velocity unchanged.
#[test]
fn single_particle_drifts_by_velocity() -> Result<()> {
    let mut universe = Universe::new(600.0, 600.0)?;
    universe.insert_particle(10.0, 10.0, 1.0, 4.0, 10.0)?;
    universe.step();

    let p = &universe.particles()[0];
    assert!((p.x - 11.0).abs() < TOL);
    assert!((p.y - 14.0).abs() < TOL);
    assert!((p.dx - 1.0).abs() < TOL);
    assert!((p.dy - 4.0).abs() < TOL);
    Ok(())
}

/// Equal radii approaching head-on with restitution 1: the discs at
/// (100, 100) and (108, 100) with velocities (2, 0) and (-2, 0) overlap
/// (distance 8 < radii sum 10), so the step must swap their x-velocities.
#[test]
fn head_on_equal_mass_pair_swaps_velocities() -> Result<()> {
    let mut universe = Universe::new(600.0, 600.0)?;
    universe.set_candidate_finder(Box::new(NaiveSweep));
    universe.insert_particle(100.0, 100.0, 2.0, 0.0, 5.0)?;
    universe.insert_particle(108.0, 100.0, -2.0, 0.0, 5.0)?;
    universe.step();

    let ps = universe.particles();
    assert!((ps[0].dx - (-2.0)).abs() < TOL);
    assert!(ps[0].dy.abs() < TOL);
    assert!((ps[1].dx - 2.0).abs() < TOL);
    assert!(ps[1].dy.abs() < TOL);
    Ok(())
}

/// The quadtree broad phase finds the same nearby partner the naive sweep
/// would: a heavy moving disc transfers momentum to a light resting one.
#[test]
fn quadtree_mode_resolves_nearby_collision() -> Result<()> {
    let mut universe = Universe::new(600.0, 600.0)?;
    universe.set_candidate_finder(Box::new(QuadtreeIndex::default()));
    universe.insert_particle(100.0, 100.0, 2.0, 0.0, 5.0)?;
    universe.insert_particle(104.5, 100.0, 0.0, 0.0, 1.0)?;
    universe.step();

    let ps = universe.particles();
    assert!(ps[1].dx > 0.0, "light particle should be knocked forward");
    assert!(ps[0].dx < 2.0, "heavy particle should have slowed");
    Ok(())
}

/// An isolated particle's velocity is untouched by a step; only its
/// position changes.
#[test]
fn isolated_particle_keeps_velocity() -> Result<()> {
    let mut universe = Universe::new(600.0, 600.0)?;
    universe.insert_particle(300.0, 300.0, -3.5, 1.25, 8.0)?;
    for _ in 0..10 {
        universe.step();
    }
    let p = &universe.particles()[0];
    assert!((p.dx - (-3.5)).abs() < TOL);
    assert!((p.dy - 1.25).abs() < TOL);
    Ok(())
}

/// Containment invariant: after any number of steps every disc lies fully
/// inside the universe bounds.
#[test]
fn discs_stay_inside_bounds() -> Result<()> {
    let mut universe = Universe::with_seed(600.0, 600.0, Some(1234))?;
    universe.spawn_random(200)?;
    universe.spawn_at(300.0, 300.0, None)?;
    universe.spawn_at(20.0, 580.0, Some(7.0))?;

    for _ in 0..300 {
        universe.step();
    }

    for p in universe.particles() {
        assert!(
            p.x >= p.radius && p.x <= 600.0 - p.radius,
            "x = {} escaped bounds for radius {}",
            p.x,
            p.radius
        );
        assert!(
            p.y >= p.radius && p.y <= 600.0 - p.radius,
            "y = {} escaped bounds for radius {}",
            p.y,
            p.radius
        );
    }
    Ok(())
}

/// Kinetic energy is a sum of non-negative terms, and with restitution < 1
/// and inelastic walls it can only decay.
#[test]
fn energy_nonnegative_and_damped_by_restitution() -> Result<()> {
    let mut universe = Universe::with_seed(400.0, 400.0, Some(99))?;
    universe.spawn_random(150)?;
    universe.set_coefficient_of_restitution(0.9)?;
    universe.set_wall_elastic(false);

    let e0 = universe.total_kinetic_energy();
    assert!(e0 >= 0.0);

    for _ in 0..100 {
        universe.step();
        let e = universe.total_kinetic_energy();
        assert!(e >= 0.0);
        assert!(e <= e0 + 1e-9, "energy grew from {e0} to {e}");
    }
    Ok(())
}

/// Steps are deterministic: identical seed and identical operations give
/// bit-identical particle state. Randomness only enters through spawning.
#[test]
fn identical_seeds_give_identical_histories() -> Result<()> {
    let mut a = Universe::with_seed(500.0, 500.0, Some(2024))?;
    let mut b = Universe::with_seed(500.0, 500.0, Some(2024))?;
    a.spawn_random(120)?;
    b.spawn_random(120)?;

    for _ in 0..50 {
        a.step();
        b.step();
    }

    assert_eq!(a.particle_count(), b.particle_count());
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        assert_eq!(pa.dx.to_bits(), pb.dx.to_bits());
        assert_eq!(pa.dy.to_bits(), pb.dy.to_bits());
        assert_eq!(pa.radius.to_bits(), pb.radius.to_bits());
    }
    Ok(())
}

/// A step never changes the particle count; only spawn/remove do.
#[test]
fn step_never_changes_particle_count() -> Result<()> {
    let mut universe = Universe::with_seed(300.0, 300.0, Some(5))?;
    universe.spawn_random(80)?;
    for _ in 0..50 {
        universe.step();
        assert_eq!(universe.particle_count(), 80);
    }
    universe.remove_oldest(30);
    assert_eq!(universe.particle_count(), 50);
    Ok(())
}

/// Colors are recomputed from speed each tick: after a step a fast particle
/// is redder than a slow one.
#[test]
fn color_tags_track_speed() -> Result<()> {
    let mut universe = Universe::new(600.0, 600.0)?;
    universe.insert_particle(100.0, 100.0, 0.1, 0.0, 3.0)?;
    universe.insert_particle(400.0, 400.0, 6.0, 0.0, 3.0)?;
    universe.step();

    let ps = universe.particles();
    let (slow, fast) = (&ps[0], &ps[1]);
    assert!(fast.color[0] > slow.color[0], "fast particle should be redder");
    assert!(fast.color[2] < slow.color[2], "slow particle should be bluer");
    Ok(())
}

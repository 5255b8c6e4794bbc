use cellstep_engine::{Particle, SimConfig, Simulation, World};

#[test]
fn config_json_smoke_applies_partial_overrides() {
    let mut world = World::new(1.0).unwrap();
    world.load_config_json(r#"{ "mass": 1.0, "dt": 0.01 }"#.to_string()).unwrap();

    let config = SimConfig::from_json(&world.get_config_json()).unwrap();
    assert_eq!(config.mass, 1.0);
    assert_eq!(config.dt, 0.01);
    assert_eq!(config.cutoff, SimConfig::default().cutoff);
    assert_eq!(world.simulation().config(), &config);
}

#[test]
fn world_store_matches_flat_layout() {
    let mut world = World::new(1.0).unwrap();
    assert!(world.add_particle(0.25, 0.75, 1.0, 2.0));
    assert!(!world.add_particle(1.5, 0.5, 0.0, 0.0));
    assert_eq!(world.particle_count(), 1);
    assert_eq!(world.particles_len_elements(), 6);
    assert_eq!(world.particles_len_bytes(), 48);
    assert_eq!(world.particles()[0], Particle::moving(0.25, 0.75, 1.0, 2.0));
    assert!((world.kinetic_energy() - 0.5 * SimConfig::default().mass * 5.0).abs() < 1e-15);

    world.clear();
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn stepper_runs_against_host_owned_store() {
    let config = SimConfig::from_json(r#"{ "mass": 1.0, "dt": 0.01 }"#).unwrap();
    let mut sim = Simulation::new(config).unwrap();
    let mut particles = vec![Particle::at(0.0, 0.0), Particle::at(0.0, 0.005)];

    sim.init(&mut particles, 1.0).unwrap();
    sim.advance_step(&mut particles, 1.0).unwrap();

    assert!(particles[0].ay < 0.0);
    assert!(particles[1].ay > 0.0);
    assert_eq!(sim.step_count(), 1);
}

use cellstep_engine::config::DEFAULT_DENSITY;
use cellstep_engine::{domain_size_for, World};

#[test]
fn perf_smoke_step() {
    let n = 32;
    let size = domain_size_for(n * n, DEFAULT_DENSITY);
    let mut world = World::new(size).unwrap();
    world.enable_perf_metrics(true);
    for i in 0..n {
        for j in 0..n {
            let x = (i as f64 + 0.5) * size / n as f64;
            let y = (j as f64 + 0.5) * size / n as f64;
            assert!(world.add_particle(x, y, 0.1, -0.1));
        }
    }
    world.init().unwrap();
    for _ in 0..10 {
        world.step().unwrap();
    }

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count() as usize, n * n);
    assert_eq!(world.step_count(), 10);
    assert!(world.particles().iter().all(|p| p.in_domain(size)));
}

use wasm_bindgen::prelude::*;

use crate::domain::config::SimConfig;
use crate::domain::error::check_domain;
use crate::domain::particle::{Particle, PARTICLE_STRIDE};
use crate::physics::kinetic_energy;

use super::perf_stats::{count_u32, PerfStats};
use super::Simulation;

/// Host-facing wrapper: owns a particle store next to the stepper so a JS
/// host can fill it, step it and read it back without copies.
#[wasm_bindgen]
pub struct World {
    sim: Simulation,
    particles: Vec<Particle>,
    size: f64,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with the default constants over `[0, size]^2`
    #[wasm_bindgen(constructor)]
    pub fn new(size: f64) -> Result<World, JsValue> {
        check_domain(size).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let sim = Simulation::new(SimConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            sim,
            particles: Vec::new(),
            size,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> f64 { self.size }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { count_u32(self.particles.len()) }

    #[wasm_bindgen(getter)]
    pub fn step_count(&self) -> u64 { self.sim.step_count() }

    /// Replace the run constants from a (possibly partial) JSON object
    pub fn load_config_json(&mut self, json: String) -> Result<(), JsValue> {
        let config = SimConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.sim
            .set_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn get_config_json(&self) -> String {
        self.sim.config().to_json()
    }

    /// Add a particle; returns false (and adds nothing) outside the domain
    pub fn add_particle(&mut self, x: f64, y: f64, vx: f64, vy: f64) -> bool {
        let p = Particle::moving(x, y, vx, vy);
        if !p.in_domain(self.size) {
            return false;
        }
        self.particles.push(p);
        true
    }

    /// Remove all particles
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Run the one-time setup hook over the current particles
    pub fn init(&mut self) -> Result<(), JsValue> {
        self.sim
            .init(&mut self.particles, self.size)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Step the simulation forward
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.sim
            .advance_step(&mut self.particles, self.size)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn kinetic_energy(&self) -> f64 {
        kinetic_energy(&self.particles, self.sim.config().mass)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.sim.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.sim.perf_stats()
    }

    /// Pointer to the particle store: `[x, y, vx, vy, ax, ay]` per particle
    pub fn particles_ptr(&self) -> *const f64 {
        self.particles.as_ptr() as *const f64
    }

    pub fn particles_len_elements(&self) -> usize {
        self.particles.len() * PARTICLE_STRIDE
    }

    pub fn particles_len_bytes(&self) -> usize {
        self.particles.len() * std::mem::size_of::<Particle>()
    }
}

impl World {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}

use crate::constants::{
    PARTICLE_DELAY_MAX_SEC, PARTICLE_DRIFT_STEP_PERCENT, PARTICLE_DURATION_MIN_SEC,
    PARTICLE_DURATION_SPAN_SEC, PARTICLE_SIZE_MIN_PX, PARTICLE_SIZE_SPAN_PX,
};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleColor {
    Primary,
    Accent,
}

impl ParticleColor {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Primary => "var(--primary-color)",
            Self::Accent => "var(--accent-color)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_percent: f64,
    pub color: ParticleColor,
    pub animation_delay_sec: f64,
    pub animation_duration_sec: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: PARTICLE_SIZE_MIN_PX + rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX,
            left_percent: rng.gen::<f64>() * 100.0,
            color: if rng.gen_bool(0.5) {
                ParticleColor::Primary
            } else {
                ParticleColor::Accent
            },
            animation_delay_sec: rng.gen::<f64>() * PARTICLE_DELAY_MAX_SEC,
            animation_duration_sec: PARTICLE_DURATION_MIN_SEC
                + rng.gen::<f64>() * PARTICLE_DURATION_SPAN_SEC,
        }
    }

    /// Inline style for the particle's DOM node.
    pub fn inline_style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.3}%; background: {color}; animation-delay: {delay:.2}s; animation-duration: {dur:.2}s;",
            size = self.size_px,
            left = self.left_percent,
            color = self.color.css_value(),
            delay = self.animation_delay_sec,
            dur = self.animation_duration_sec,
        )
    }

    /// Random horizontal wander; a step that would leave [0, 100] is dropped.
    /// Returns whether the particle moved.
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let step = rng.gen_range(-PARTICLE_DRIFT_STEP_PERCENT..=PARTICLE_DRIFT_STEP_PERCENT);
        let next = self.left_percent + step;
        if (0.0..=100.0).contains(&next) {
            self.left_percent = next;
            true
        } else {
            false
        }
    }
}

/// The background particles. Regenerated wholesale on count change.
pub struct ParticleSet {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSet {
    pub fn new(count: usize, mut rng: StdRng) -> Self {
        let particles = (0..count).map(|_| Particle::random(&mut rng)).collect();
        Self { particles, rng }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Discards every particle and builds `count` fresh ones. Returns false
    /// when the count is unchanged and nothing was rebuilt.
    pub fn regenerate_if_changed(&mut self, count: usize) -> bool {
        if count == self.particles.len() {
            return false;
        }
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::random(rng)).collect();
        true
    }

    pub fn drift_all(&mut self) {
        let rng = &mut self.rng;
        for p in &mut self.particles {
            p.drift(rng);
        }
    }
}

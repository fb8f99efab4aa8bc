use crate::config::FieldConfig;
use glam::Vec2;
use smallvec::SmallVec;

/// An expanding, fading ring spawned by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub origin: Vec2,
    pub created_at_ms: f64,
    pub radius: f32,
    pub intensity: f32,
}

impl Pulse {
    pub fn new(origin: Vec2, created_at_ms: f64) -> Self {
        Self {
            origin,
            created_at_ms,
            radius: 0.0,
            intensity: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseTiming {
    pub expansion_duration_ms: f64,
    pub fade_duration_ms: f64,
    pub max_radius: f32,
}

impl PulseTiming {
    pub fn from_config(config: &FieldConfig) -> Self {
        Self {
            expansion_duration_ms: config.expansion_duration_ms,
            fade_duration_ms: config.fade_duration_ms,
            max_radius: config.max_pulse_radius,
        }
    }
}

/// Active pulses in spawn order, oldest first.
#[derive(Clone, Debug)]
pub struct PulseSet {
    pulses: SmallVec<[Pulse; 8]>,
    timing: PulseTiming,
    capacity: usize,
}

impl PulseSet {
    pub fn new(timing: PulseTiming, capacity: usize) -> Self {
        Self {
            pulses: SmallVec::new(),
            timing,
            capacity: capacity.max(1),
        }
    }

    /// Add a pulse, evicting the oldest when the set is full.
    pub fn spawn(&mut self, origin: Vec2, now_ms: f64) {
        if self.pulses.len() >= self.capacity {
            let dropped = self.pulses.remove(0);
            log::warn!(
                "[pulse] cap of {} reached, dropping pulse from t={:.0}ms",
                self.capacity,
                dropped.created_at_ms
            );
        }
        self.pulses.push(Pulse::new(origin, now_ms));
        log::debug!(
            "[pulse] spawned at ({:.1},{:.1}) active={}",
            origin.x,
            origin.y,
            self.pulses.len()
        );
    }

    /// Recompute radius and intensity of every pulse for `now_ms` and drop the
    /// ones whose fade has completed.
    pub fn advance(&mut self, now_ms: f64) {
        let timing = self.timing;
        self.pulses.retain(|p| {
            let elapsed = (now_ms - p.created_at_ms).max(0.0);
            if elapsed >= timing.fade_duration_ms {
                return false;
            }
            let radius = (elapsed / timing.expansion_duration_ms) as f32 * timing.max_radius;
            let intensity = (1.0 - elapsed / timing.fade_duration_ms).max(0.0) as f32;
            // A late timestamp must not shrink a ring or revive its intensity.
            p.radius = p.radius.max(radius);
            p.intensity = p.intensity.min(intensity);
            p.intensity > 0.0
        });
    }

    #[inline]
    pub fn as_slice(&self) -> &[Pulse] {
        &self.pulses
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }
}

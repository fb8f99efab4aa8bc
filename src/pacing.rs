use crate::constants::MAX_CATCHUP_STEPS;

/// Converts animation-frame timestamps into whole baked-frame steps at a fixed
/// rate, so flipbook speed does not depend on the display refresh rate.
#[derive(Clone, Copy, Debug)]
pub struct FramePacer {
    interval_ms: f64,
    last_ms: Option<f64>,
    carry_ms: f64,
}

impl FramePacer {
    pub fn new(frames_per_second: f32) -> Self {
        Self {
            interval_ms: 1000.0 / frames_per_second.max(f32::EPSILON) as f64,
            last_ms: None,
            carry_ms: 0.0,
        }
    }

    /// Steps owed since the previous call. The first call only sets the origin.
    pub fn steps(&mut self, now_ms: f64) -> usize {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0;
        };
        self.carry_ms += (now_ms - last).max(0.0);
        let whole = (self.carry_ms / self.interval_ms).floor();
        self.carry_ms -= whole * self.interval_ms;
        let steps = whole as usize;
        if steps > MAX_CATCHUP_STEPS {
            self.carry_ms = 0.0;
            return MAX_CATCHUP_STEPS;
        }
        steps
    }
}

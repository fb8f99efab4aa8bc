use crate::config::FieldConfig;
use crate::pulse::{Pulse, PulseSet, PulseTiming};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    /// Pointer has not entered the surface, or has left it.
    #[default]
    Absent,
    At(Vec2),
}

impl PointerState {
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        match self {
            PointerState::At(p) => Some(*p),
            PointerState::Absent => None,
        }
    }
}

/// Leading-edge rate limiter: the first event of a window is taken, the rest
/// of the window is dropped.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    pub fn accept(&mut self, now_ms: f64) -> bool {
        match self.last_accepted_ms {
            Some(last) if now_ms - last < self.window_ms => false,
            _ => {
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}

/// Pointer position and active pulses, mutated only by input events and by
/// `advance` at the start of a tick.
#[derive(Clone, Debug)]
pub struct InputState {
    pointer: PointerState,
    throttle: Throttle,
    pulses: PulseSet,
}

impl InputState {
    pub fn new(config: &FieldConfig) -> Self {
        Self {
            pointer: PointerState::Absent,
            throttle: Throttle::new(config.pointer_throttle_ms),
            pulses: PulseSet::new(PulseTiming::from_config(config), config.max_active_pulses),
        }
    }

    /// Returns whether the move got through the throttle.
    pub fn record_pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        if !self.throttle.accept(now_ms) {
            return false;
        }
        self.pointer = PointerState::At(Vec2::new(x, y));
        true
    }

    pub fn record_pointer_leave(&mut self) {
        self.pointer = PointerState::Absent;
        self.throttle.reset();
    }

    pub fn record_click(&mut self, x: f32, y: f32, now_ms: f64) {
        if !x.is_finite() || !y.is_finite() {
            log::warn!("[input] ignoring click at non-finite position ({x}, {y})");
            return;
        }
        self.pulses.spawn(Vec2::new(x, y), now_ms);
    }

    pub fn advance(&mut self, now_ms: f64) {
        self.pulses.advance(now_ms);
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    #[inline]
    pub fn pulses(&self) -> &[Pulse] {
        self.pulses.as_slice()
    }
}

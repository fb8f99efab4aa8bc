// Browser-side tuning for the canvas front-end.

// Baked frames advanced at most per tick; anything beyond (a hidden tab, a
// long GC pause) is dropped rather than replayed.
pub const MAX_CATCHUP_STEPS: usize = 4;

// Canvas composite operations used for the two blend modes
pub const NORMAL_COMPOSITE_OP: &str = "source-over";
pub const ADDITIVE_COMPOSITE_OP: &str = "lighter";

// Pointer events wired on the canvas
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const POINTER_DOWN_EVENT: &str = "pointerdown";
pub const POINTER_LEAVE_EVENT: &str = "pointerleave";

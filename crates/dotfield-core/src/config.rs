//! Field configuration.
//!
//! Every option only changes the compositor math; none of them alter control
//! flow. A config is validated once at construction so that out-of-range
//! values fail fast instead of leaking `NaN` sizes into the render path.

use crate::constants::*;
use crate::error::{FieldError, Result};
use serde::{Deserialize, Serialize};

/// Which contributions the compositor evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Effects {
    pub pulses: bool,
    pub pointer: bool,
    pub frames: bool,
    pub chromatic: bool,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            pulses: true,
            pointer: true,
            frames: true,
            chromatic: true,
        }
    }
}

/// Per-channel multipliers applied to the base chromatic offset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelWeights {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Default for ChannelWeights {
    fn default() -> Self {
        Self {
            red: DEFAULT_RED_CHANNEL_WEIGHT,
            green: DEFAULT_GREEN_CHANNEL_WEIGHT,
            blue: DEFAULT_BLUE_CHANNEL_WEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    pub dot_size: f32,
    pub max_dot_size: f32,
    pub dot_spacing: f32,
    pub grid_rows: usize,
    pub grid_columns: usize,

    pub wave_thickness: f32,
    pub expansion_duration_ms: f64,
    pub fade_duration_ms: f64,
    pub max_pulse_radius: f32,
    pub pulse_weight: f32,
    /// Oldest pulses are evicted beyond this many. Not part of the reference
    /// behavior, which let the list grow without bound.
    pub max_active_pulses: usize,

    pub mouse_influence_radius: f32,
    pub pointer_weight: f32,
    pub pointer_throttle_ms: f64,

    pub chromatic_influence_radius: f32,
    pub base_chromatic_offset: f32,
    pub chromatic_min_size_ratio: f32,
    pub channel_weights: ChannelWeights,
    pub halo_alpha: f32,

    pub frame_gain: f32,
    pub frame_rate_fps: f32,

    pub effects: Effects,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dot_size: DEFAULT_DOT_SIZE,
            max_dot_size: DEFAULT_MAX_DOT_SIZE,
            dot_spacing: DEFAULT_DOT_SPACING,
            grid_rows: DEFAULT_GRID_ROWS,
            grid_columns: DEFAULT_GRID_COLUMNS,
            wave_thickness: DEFAULT_WAVE_THICKNESS,
            expansion_duration_ms: DEFAULT_PULSE_EXPANSION_MS,
            fade_duration_ms: DEFAULT_PULSE_FADE_MS,
            max_pulse_radius: DEFAULT_PULSE_MAX_RADIUS,
            pulse_weight: DEFAULT_PULSE_WEIGHT,
            max_active_pulses: DEFAULT_MAX_ACTIVE_PULSES,
            mouse_influence_radius: DEFAULT_MOUSE_INFLUENCE_RADIUS,
            pointer_weight: DEFAULT_POINTER_WEIGHT,
            pointer_throttle_ms: DEFAULT_POINTER_THROTTLE_MS,
            chromatic_influence_radius: DEFAULT_CHROMATIC_INFLUENCE_RADIUS,
            base_chromatic_offset: DEFAULT_BASE_CHROMATIC_OFFSET,
            chromatic_min_size_ratio: DEFAULT_CHROMATIC_MIN_SIZE_RATIO,
            channel_weights: ChannelWeights::default(),
            halo_alpha: DEFAULT_HALO_ALPHA,
            frame_gain: DEFAULT_FRAME_GAIN,
            frame_rate_fps: DEFAULT_FRAME_RATE_FPS,
            effects: Effects::default(),
        }
    }
}

fn non_negative(field: &'static str, v: f64) -> Result<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(FieldError::config(
            field,
            format!("must be a finite value >= 0, got {v}"),
        ));
    }
    Ok(())
}

fn positive(field: &'static str, v: f64) -> Result<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(FieldError::config(
            field,
            format!("must be a finite value > 0, got {v}"),
        ));
    }
    Ok(())
}

fn finite(field: &'static str, v: f64) -> Result<()> {
    if !v.is_finite() {
        return Err(FieldError::config(field, format!("must be finite, got {v}")));
    }
    Ok(())
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("dotSize", self.dot_size as f64)?;
        positive("maxDotSize", self.max_dot_size as f64)?;
        if self.dot_size > self.max_dot_size {
            return Err(FieldError::config(
                "dotSize",
                format!(
                    "resting size {} exceeds maxDotSize {}",
                    self.dot_size, self.max_dot_size
                ),
            ));
        }
        positive("dotSpacing", self.dot_spacing as f64)?;
        if self.grid_rows == 0 {
            return Err(FieldError::config("gridRows", "grid needs at least one row"));
        }
        if self.grid_columns == 0 {
            return Err(FieldError::config(
                "gridColumns",
                "grid needs at least one column",
            ));
        }

        // Divisors in the falloff math
        positive("waveThickness", self.wave_thickness as f64)?;
        positive("expansionDurationMs", self.expansion_duration_ms)?;
        positive("fadeDurationMs", self.fade_duration_ms)?;
        positive("mouseInfluenceRadius", self.mouse_influence_radius as f64)?;
        positive(
            "chromaticInfluenceRadius",
            self.chromatic_influence_radius as f64,
        )?;
        positive("frameRateFps", self.frame_rate_fps as f64)?;

        non_negative("maxPulseRadius", self.max_pulse_radius as f64)?;
        finite("pulseWeight", self.pulse_weight as f64)?;
        finite("pointerWeight", self.pointer_weight as f64)?;
        finite("frameGain", self.frame_gain as f64)?;
        non_negative("pointerThrottleMs", self.pointer_throttle_ms)?;
        non_negative("baseChromaticOffset", self.base_chromatic_offset as f64)?;
        non_negative("chromaticMinSizeRatio", self.chromatic_min_size_ratio as f64)?;
        finite("channelWeights.red", self.channel_weights.red as f64)?;
        finite("channelWeights.green", self.channel_weights.green as f64)?;
        finite("channelWeights.blue", self.channel_weights.blue as f64)?;
        if !(0.0..=1.0).contains(&self.halo_alpha) {
            return Err(FieldError::config(
                "haloAlpha",
                format!("must be within [0, 1], got {}", self.halo_alpha),
            ));
        }
        if self.max_active_pulses == 0 {
            return Err(FieldError::config(
                "maxActivePulses",
                "at least one pulse must be allowed",
            ));
        }
        Ok(())
    }

    /// Parse a JSON document (missing keys take defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FieldConfig = serde_json::from_str(json)
            .map_err(|e| FieldError::config("json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_rows * self.grid_columns
    }

    /// Pixel extent of the grid, `(width, height)`.
    #[inline]
    pub fn surface_size(&self) -> (f32, f32) {
        (
            self.grid_columns as f32 * self.dot_spacing,
            self.grid_rows as f32 * self.dot_spacing,
        )
    }
}

//! Recorded input sessions.
//!
//! A session is a config plus an ordered list of timestamped events. Replaying
//! it rebuilds a fresh [`DotField`] and collects the composite of every tick.

use crate::compositor::CompositeResult;
use crate::config::FieldConfig;
use crate::error::{FieldError, Result};
use crate::field::DotField;
use crate::frames::FrameField;
use serde::{Deserialize, Serialize};

fn one_step() -> usize {
    1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FieldEvent {
    PointerMove {
        at_ms: f64,
        x: f32,
        y: f32,
    },
    PointerLeave {
        at_ms: f64,
    },
    Click {
        at_ms: f64,
        x: f32,
        y: f32,
    },
    Tick {
        at_ms: f64,
        #[serde(default = "one_step")]
        frame_steps: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub config: FieldConfig,
    pub events: Vec<FieldEvent>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self> {
        let session: Session = serde_json::from_str(json)
            .map_err(|e| FieldError::config("session", e.to_string()))?;
        session.config.validate()?;
        Ok(session)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Feed `events` to a new field and return one composite per `Tick`.
pub fn replay(
    config: &FieldConfig,
    frames: &FrameField,
    events: &[FieldEvent],
) -> Result<Vec<Vec<CompositeResult>>> {
    let mut field = DotField::with_frames(config.clone(), frames.clone())?;
    let mut ticks = Vec::new();
    for event in events {
        match *event {
            FieldEvent::PointerMove { at_ms, x, y } => {
                field.pointer_moved(x, y, at_ms);
            }
            FieldEvent::PointerLeave { .. } => field.pointer_left(),
            FieldEvent::Click { at_ms, x, y } => field.clicked(x, y, at_ms),
            FieldEvent::Tick { at_ms, frame_steps } => {
                ticks.push(field.tick(at_ms, frame_steps).to_vec());
            }
        }
    }
    Ok(ticks)
}

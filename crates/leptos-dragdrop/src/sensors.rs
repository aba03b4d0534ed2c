//! Input sensors.
//!
//! A sensor adapts one family of input events (pointer, mouse, touch) into
//! drag start / move / end. Several sensors can be registered at once; the
//! first one to begin a gesture owns it until the gesture ends.

use crate::geometry::Point;

/// Input device family a sensor listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Pointer,
    Mouse,
    Touch,
}

/// When a pending press turns into a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivationConstraint {
    /// Start once the pointer moved more than this many pixels
    Distance(f64),
    /// Start after holding for `delay_ms`; moving more than `tolerance` first aborts
    Delay { delay_ms: u32, tolerance: f64 },
}

/// Outcome of checking a pending press against its constraint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Pending,
    Activate,
    Abort,
}

impl ActivationConstraint {
    /// Check a pointer movement from `origin` to `current`
    pub fn on_move(&self, origin: Point, current: Point) -> Activation {
        let moved = origin.distance_to(current);
        match *self {
            ActivationConstraint::Distance(threshold) if moved > threshold => Activation::Activate,
            ActivationConstraint::Distance(_) => Activation::Pending,
            ActivationConstraint::Delay { tolerance, .. } if moved > tolerance => Activation::Abort,
            ActivationConstraint::Delay { .. } => Activation::Pending,
        }
    }
}

/// Movement threshold in pixels to start dragging
pub const DEFAULT_DISTANCE_PX: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensor {
    pub kind: SensorKind,
    pub activation: ActivationConstraint,
}

impl Sensor {
    pub fn pointer() -> Self {
        Self { kind: SensorKind::Pointer, activation: ActivationConstraint::Distance(DEFAULT_DISTANCE_PX) }
    }

    pub fn mouse() -> Self {
        Self { kind: SensorKind::Mouse, activation: ActivationConstraint::Distance(DEFAULT_DISTANCE_PX) }
    }

    pub fn touch() -> Self {
        Self { kind: SensorKind::Touch, activation: ActivationConstraint::Distance(DEFAULT_DISTANCE_PX) }
    }

    pub fn with_activation(mut self, activation: ActivationConstraint) -> Self {
        self.activation = activation;
        self
    }
}

/// Build a sensor set, dropping later duplicates of the same kind
pub fn use_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Vec<Sensor> {
    let mut out: Vec<Sensor> = Vec::new();
    for sensor in sensors {
        if !out.iter().any(|s| s.kind == sensor.kind) {
            out.push(sensor);
        }
    }
    out
}

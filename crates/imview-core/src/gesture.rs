use crate::config::ViewerConfig;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scrolled away from the user.
    Up,
    Down,
}

impl WheelDirection {
    /// Scale multiplier for one wheel tick.
    pub fn zoom_factor(self, config: &ViewerConfig) -> f64 {
        match self {
            Self::Up => config.zoom_in_factor,
            Self::Down => config.zoom_out_factor,
        }
    }

    /// Classify a vertical scroll delta; zero is not a tick.
    pub fn from_delta(dy: f32) -> Option<Self> {
        if dy > 0.0 {
            Some(Self::Up)
        } else if dy < 0.0 {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// Left-button drag used for panning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag that started over the image; `last` is the previous pointer position.
    Dragging { last: Point },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// What armed the current zoom gesture. Only releasing the same trigger disarms it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmTrigger {
    RightButton,
    Modifier,
}

/// Wheel events only zoom while armed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomArm {
    #[default]
    Unarmed,
    Armed(ArmTrigger),
}

impl ZoomArm {
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }

    /// Disarm if `trigger` is what armed us. Returns true on a state change.
    pub fn release(&mut self, trigger: ArmTrigger) -> bool {
        if *self == Self::Armed(trigger) {
            *self = Self::Unarmed;
            true
        } else {
            false
        }
    }
}

/// What a canvas point overlaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Image,
    Grid,
    None,
}

use serde::{Deserialize, Serialize};

/// Priority class ids (stable ABI for JS)
pub const PR_HIGH: u8 = 0;
pub const PR_MEDIUM: u8 = 1;
pub const PR_LOW: u8 = 2;

/// Task priority. Fixes the bubble radius once, at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            PR_HIGH => Some(Self::High),
            PR_MEDIUM => Some(Self::Medium),
            PR_LOW => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::High => PR_HIGH,
            Self::Medium => PR_MEDIUM,
            Self::Low => PR_LOW,
        }
    }

    /// Bubble radius in container units (CSS pixels).
    pub fn radius(self) -> f32 {
        match self {
            Self::High => 70.0,
            Self::Medium => 55.0,
            Self::Low => 40.0,
        }
    }
}

/// One simulated bubble.
///
/// `x`/`y` are the disc center in container coordinates (y grows downward).
/// `radius` is used both for rendering size and for collision geometry.
/// While `held` is set the drag controller owns the position and the
/// stepper leaves the body alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskBody {
    pub id: u32,
    pub label: String,
    pub priority: Priority,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub held: bool,
}

impl TaskBody {
    /// Create a body at rest at the given spawn position.
    pub fn new(id: u32, label: String, priority: Priority, x: f32, y: f32) -> Self {
        Self {
            id,
            label,
            priority,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: priority.radius(),
            held: false,
        }
    }
}

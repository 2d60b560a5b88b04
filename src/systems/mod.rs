//! Systems: the physics stepper and the drag controller.

pub mod drag;
pub mod physics;

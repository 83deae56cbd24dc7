pub mod movement;
pub mod urgency;
pub mod special_action;
pub mod render;

pub use movement::*;
pub use urgency::*;
pub use special_action::*;
pub use render::*;

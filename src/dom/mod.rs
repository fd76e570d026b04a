// ============================================================================
// DOM MODULE - Selection encadenable + helpers de bajo nivel
// ============================================================================

pub mod element;
pub mod builder;
pub mod selection;
pub mod manipulation;
pub mod traversal;
pub mod events;
pub mod animation;
pub mod effects;

pub use builder::*;
pub use selection::*;
pub use manipulation::Content;
pub use events::EventHandler;
pub use animation::{is_animating, FadeDirection};

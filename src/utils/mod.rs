// Utils compartidos

pub mod constants;
pub mod collection;

pub use constants::*;
pub use collection::*;

pub mod map;
pub mod sidebar;

pub use map::*;
pub use sidebar::*;

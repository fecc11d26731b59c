mod character;
mod device;
mod planner;
mod timeline;

pub use character::*;
pub use device::*;
pub use planner::*;
pub use timeline::*;

//! Eviction policy implementations

mod count;
mod size;

pub use count::CountPolicy;
pub use size::SizePolicy;

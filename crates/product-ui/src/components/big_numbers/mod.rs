mod component;
mod size;

pub use component::*;
pub use size::*;

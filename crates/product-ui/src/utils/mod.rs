mod class_names;

pub use class_names::*;

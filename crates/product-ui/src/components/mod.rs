// Primitives
pub mod skeleton;

// Composite widgets
pub mod big_numbers;

// Re-exports for convenience
pub use big_numbers::*;
pub use skeleton::*;

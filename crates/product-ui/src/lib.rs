pub mod components;
pub mod devtools;
pub mod settings;
pub mod utils;

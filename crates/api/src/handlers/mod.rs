pub mod content;
pub mod seed;

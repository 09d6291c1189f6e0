pub mod ai;
pub mod fallback;
pub mod prompt;

pub mod animator;
pub mod ticker;

pub mod keyframes;
pub mod path;

pub mod curve;
pub mod pipeline;
pub mod raster;
pub mod svg;

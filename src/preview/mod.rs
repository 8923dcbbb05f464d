pub mod driver;
pub mod raster;

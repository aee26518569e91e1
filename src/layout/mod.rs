//! Layout module: bounding regions and the recursive rasterizer.

mod rasterize;
mod region;

pub use rasterize::rasterize;
pub use region::Region;

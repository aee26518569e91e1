//! Widget module: the per-frame declarative UI tree.

mod tree;

pub use tree::{Extent, Widget};

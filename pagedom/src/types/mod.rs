mod edges;
mod viewport;

pub use edges::Edges;
pub use viewport::Viewport;

//! WebGPU rendering module
//!
//! Flat-shaded triangles built from a `Snapshot` each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

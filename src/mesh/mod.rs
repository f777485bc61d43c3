pub mod builder;
pub mod report;
pub mod stl;

pub use builder::{MeshBuilder, Triangle, Vertex};
pub use report::{MeshReport, analyze};
pub use stl::{facet_count, to_ascii, write_stl};

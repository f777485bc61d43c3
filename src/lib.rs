//! modelo3d - Generate 3D-printable STL primitives
//!
//! Watertight triangle meshes for basic solids (cube, cylinder, sphere,
//! hollow box), serialized as strict ASCII STL.

pub mod config;
pub mod domain;
pub mod generator;
pub mod mesh;
pub mod metadata;
pub mod solids;
pub mod storage;

//! Transform algebra shared between scripts and the host engine

pub mod quaternion;
pub mod vector3;

pub use quaternion::Quaternion;
pub use vector3::Vector3;

pub mod adaptors;
pub mod backend;

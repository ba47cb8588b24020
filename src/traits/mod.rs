pub mod viewpoint;

pub use viewpoint::*;

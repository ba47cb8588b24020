pub mod input_adapter;
pub mod timer;

pub use input_adapter::*;
pub use timer::*;

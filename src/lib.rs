pub mod camera;
pub mod cli;
pub mod core;
pub mod frame;
pub mod keyboard;
pub mod traits;

pub use camera::{CameraController, CameraSettings, TranslationMode};
pub use cli::{Cli, OceanConfig, SimulationParams};
pub use keyboard::{Direction, KeyboardLayout};

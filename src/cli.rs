// cli.rs - Command-line interface configuration
use std::time::Duration;

use clap::Parser;

use crate::camera::TranslationMode;
use crate::keyboard::KeyboardLayout;

pub const DEFAULT_FPS: u32 = 35;

#[derive(Parser, Debug, Clone)]
#[command(name = "ocean")]
#[command(about = "Real-time ocean surface viewer", long_about = None)]
pub struct Cli {
    /// Type of keyboard driving the movement keys
    #[arg(long, value_enum, default_value_t = KeyboardLayout::Azerty)]
    pub keyboard: KeyboardLayout,

    /// Target frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = positive_u32)]
    pub fps: u32,

    /// Actual width of the ocean
    #[arg(long, default_value_t = 350.0, value_parser = positive_f64)]
    pub lx: f64,

    /// Actual depth of the ocean
    #[arg(long, default_value_t = 350.0, value_parser = positive_f64)]
    pub ly: f64,

    /// Subdivisions of the ocean along x (power of 2)
    #[arg(long, default_value_t = 128, value_parser = power_of_two)]
    pub nx: u32,

    /// Subdivisions of the ocean along y (power of 2)
    #[arg(long, default_value_t = 256, value_parser = power_of_two)]
    pub ny: u32,

    /// Slows down or speeds up the simulation
    #[arg(long = "motion_factor", default_value_t = 0.6, value_parser = positive_f64)]
    pub motion_factor: f64,

    /// Speed of the wind
    #[arg(
        long = "wind_speed",
        default_value_t = 50.0,
        value_parser = finite_f64,
        allow_negative_numbers = true
    )]
    pub wind_speed: f64,

    /// How strongly waves stay aligned with the wind
    #[arg(long = "wind_alignment", default_value_t = 2)]
    pub wind_alignment: u32,

    /// Minimum wave height, smooths the simulation
    #[arg(long = "min_wave_size", default_value_t = 0.1, value_parser = non_negative_f64)]
    pub min_wave_size: f64,

    /// Wave amplitude adjustment
    #[arg(long = "A", default_value_t = 0.0000038, value_parser = positive_f64)]
    pub amplitude: f64,

    /// Window width in pixels
    #[arg(long, default_value_t = 800, value_parser = positive_u32)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600, value_parser = positive_u32)]
    pub height: u32,

    /// Move along the full sight direction instead of the horizontal plane
    #[arg(long, default_value = "false")]
    pub fly: bool,
}

fn positive_u32(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("must be a positive integer".to_string()),
    }
}

fn power_of_two(value: &str) -> Result<u32, String> {
    let n = positive_u32(value)?;
    if n.is_power_of_two() {
        Ok(n)
    } else {
        Err(format!("{n} is not a power of 2"))
    }
}

fn finite_f64(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err("must be a float".to_string()),
    }
}

fn positive_f64(value: &str) -> Result<f64, String> {
    match finite_f64(value) {
        Ok(x) if x > 0.0 => Ok(x),
        _ => Err("must be a positive float".to_string()),
    }
}

fn non_negative_f64(value: &str) -> Result<f64, String> {
    match finite_f64(value) {
        Ok(x) if x >= 0.0 => Ok(x),
        _ => Err("must be a non-negative float".to_string()),
    }
}

/// Tuning constants handed to the wave generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub lx: f64,
    pub ly: f64,
    pub nx: u32,
    pub ny: u32,
    pub wind_speed: f64,
    pub wind_alignment: u32,
    pub min_wave_size: f64,
    pub amplitude: f64,
    pub motion_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// Validated startup configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanConfig {
    pub window: WindowSize,
    pub fps: u32,
    pub keyboard: KeyboardLayout,
    pub translation_mode: TranslationMode,
    pub simulation: SimulationParams,
}

impl OceanConfig {
    /// Time budget of one frame at the target rate, `DEFAULT_FPS` when zero
    pub fn frame_interval(&self) -> Duration {
        let second = Duration::from_secs(1);
        second
            .checked_div(self.fps)
            .unwrap_or(second / DEFAULT_FPS)
    }
}

impl From<Cli> for OceanConfig {
    fn from(cli: Cli) -> Self {
        Self {
            window: WindowSize {
                width: cli.width,
                height: cli.height,
            },
            fps: cli.fps,
            keyboard: cli.keyboard,
            translation_mode: if cli.fly {
                TranslationMode::Sight
            } else {
                TranslationMode::Horizontal
            },
            simulation: SimulationParams {
                lx: cli.lx,
                ly: cli.ly,
                nx: cli.nx,
                ny: cli.ny,
                wind_speed: cli.wind_speed,
                wind_alignment: cli.wind_alignment,
                min_wave_size: cli.min_wave_size,
                amplitude: cli.amplitude,
                motion_factor: cli.motion_factor,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validators() {
        assert_eq!(positive_u32("35"), Ok(35));
        assert!(positive_u32("0").is_err());
        assert!(positive_u32("-3").is_err());
        assert!(positive_u32("fast").is_err());

        assert_eq!(power_of_two("64"), Ok(64));
        assert!(power_of_two("100").is_err());

        assert_eq!(positive_f64("0.5"), Ok(0.5));
        assert!(positive_f64("0").is_err());
        assert!(positive_f64("inf").is_err());

        assert_eq!(non_negative_f64("0"), Ok(0.0));
        assert!(non_negative_f64("-0.1").is_err());

        assert_eq!(finite_f64("-12.5"), Ok(-12.5));
        assert!(finite_f64("NaN").is_err());
    }

    #[test]
    fn test_frame_interval() {
        let config = OceanConfig::from(Cli::parse_from(["ocean", "--fps", "50"]));
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_frame_interval_with_zero_fps() {
        let mut config = OceanConfig::from(Cli::parse_from(["ocean"]));
        config.fps = 0;
        assert_eq!(
            config.frame_interval(),
            Duration::from_secs(1) / DEFAULT_FPS
        );
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

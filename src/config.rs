// Command-line configuration

use clap::Parser;

use crate::demos::DemoKind;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Window size must be non-zero, got {width}x{height}")]
    ZeroWindowSize { width: u32, height: u32 },

    #[error("Gravity must be finite, got {0}")]
    NonFiniteGravity(f32),

    #[error("Bounce must be within [0, 1], got {0}")]
    BounceOutOfRange(f32),
}

/// Interactive 2D motion demos
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Demo shown at startup
    #[arg(long, value_enum, default_value_t = DemoKind::Physics)]
    pub tab: DemoKind,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Seed for ball populations and colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial gravity for the physics demo
    #[arg(long, allow_negative_numbers = true)]
    pub gravity: Option<f32>,

    /// Initial bounce for the physics demo
    #[arg(long, allow_negative_numbers = true)]
    pub bounce: Option<f32>,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub initial_tab: DemoKind,
    pub window_width: u32,
    pub window_height: u32,
    pub seed: Option<u64>,
    pub gravity: Option<f32>,
    pub bounce: Option<f32>,
}

impl AppConfig {
    /// Validate parsed arguments
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        if args.width == 0 || args.height == 0 {
            return Err(ConfigError::ZeroWindowSize {
                width: args.width,
                height: args.height,
            });
        }
        if let Some(gravity) = args.gravity {
            if !gravity.is_finite() {
                return Err(ConfigError::NonFiniteGravity(gravity));
            }
        }
        if let Some(bounce) = args.bounce {
            if !(0.0..=1.0).contains(&bounce) {
                return Err(ConfigError::BounceOutOfRange(bounce));
            }
        }

        Ok(Self {
            initial_tab: args.tab,
            window_width: args.width,
            window_height: args.height,
            seed: args.seed,
            gravity: args.gravity,
            bounce: args.bounce,
        })
    }
}

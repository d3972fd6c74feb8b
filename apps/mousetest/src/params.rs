//! Command line options.

use mousetest_app::AppConfig;
use mousetest_core::{Error, PositionMode, Result};

const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 768;
const DEFAULT_TARGET_FPS: u32 = 60;

/// Harness options parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessParams {
    /// Mode the mouse starts in.
    pub initial_mode: PositionMode,
    /// Report absolute coordinates in logical pixels.
    pub dpi_aware: bool,
    pub width: u32,
    pub height: u32,
    /// Zero disables frame pacing.
    pub target_fps: u32,
    pub help: bool,
}

impl Default for HarnessParams {
    fn default() -> Self {
        Self {
            initial_mode: PositionMode::Absolute,
            dpi_aware: false,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            help: false,
        }
    }
}

impl HarnessParams {
    /// Parse parameters from the process arguments.
    pub fn from_args() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse parameters from an argument list (program name excluded).
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-h" | "--help" => params.help = true,
                "--relative" => params.initial_mode = PositionMode::Relative,
                "--dpi-aware" => params.dpi_aware = true,
                "--width" => params.width = parse_value("--width", args.next())?,
                "--height" => params.height = parse_value("--height", args.next())?,
                "--target-fps" => params.target_fps = parse_value("--target-fps", args.next())?,
                other => {
                    return Err(Error::InvalidArgument(format!("unknown option `{other}`")));
                }
            }
        }

        if params.width == 0 || params.height == 0 {
            return Err(Error::InvalidArgument(
                "window dimensions must be non-zero".to_string(),
            ));
        }

        Ok(params)
    }

    /// Window configuration for these parameters.
    #[must_use]
    pub fn app_config(&self) -> AppConfig {
        AppConfig::new("MouseTest")
            .with_size(self.width, self.height)
            .with_target_fps(self.target_fps)
    }
}

fn parse_value<S: AsRef<str>>(flag: &str, value: Option<S>) -> Result<u32> {
    let value = value.ok_or_else(|| Error::InvalidArgument(format!("{flag} needs a value")))?;
    value.as_ref().parse().map_err(|_| {
        Error::InvalidArgument(format!("{flag}: `{}` is not a number", value.as_ref()))
    })
}

pub fn print_help() {
    eprintln!(
        "MouseTest - interactive mouse state harness

USAGE:
    cargo run -p mousetest -- [OPTIONS]

OPTIONS:
    --relative              Start in relative mode
    --dpi-aware             Report cursor coordinates in logical pixels
    --width <N>             Window width (default: {DEFAULT_WIDTH})
    --height <N>            Window height (default: {DEFAULT_HEIGHT})
    --target-fps <N>        Frame rate cap, 0 for none (default: {DEFAULT_TARGET_FPS})
    -h, --help              Print this help message

CONTROLS:
    Left button (hold)      Relative mode, mouse look
    Home                    Reset scroll wheel value
    End                     Toggle absolute/relative mode
    Escape                  Quit

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}

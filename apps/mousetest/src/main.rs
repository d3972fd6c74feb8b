//! MouseTest: interactive mouse state harness.
//!
//! Opens a window and shows, in its title bar, what the mouse abstraction
//! reports each frame: held buttons, the scroll wheel accumulator, the
//! position mode with the cursor position, the last button edge, and the
//! look direction driven by relative motion.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p mousetest -- [OPTIONS]
//! ```
//!
//! Hold the left button to switch into relative mode and look around;
//! release it to return to absolute mode. `Home` resets the scroll wheel,
//! `End` toggles the mode, `Escape` quits.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;
mod frame_loop;
mod overlay;
mod params;

use mousetest_app::run_app;

use crate::app::MouseTest;
use crate::params::{print_help, HarnessParams};

fn main() -> anyhow::Result<()> {
    let params = HarnessParams::from_args()?;
    if params.help {
        print_help();
        return Ok(());
    }

    let config = params.app_config();
    run_app::<MouseTest>(config, params)
}

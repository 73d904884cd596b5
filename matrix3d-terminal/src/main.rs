/// Matrix3D Terminal Demo - Rotating Cube
///
/// Usage: matrix3d-terminal [face-size] [duration-ms]
///
/// Controls:
///   - WASD / Arrow Keys: Tilt the cube
///   - E/R: Roll
///   - Space: Pause the sweep
///   - Q/ESC: Quit
use std::io;

use matrix3d_terminal::{AnimationConfig, TerminalApp};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AnimationConfig::from_args(&args)?;

    log::info!(
        "Starting cube demo (face size {}, sweep {} ms)",
        config.face_size,
        config.duration.as_millis()
    );

    let mut app = TerminalApp::new(config)?;
    app.run()?;

    log::info!("Cube demo finished");
    Ok(())
}

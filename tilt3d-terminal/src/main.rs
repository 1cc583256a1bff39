/// Tilt3D Terminal Demo - Leaning Card
///
/// Demonstrates the corner-tilt engine with an ASCII card that cycles
/// through all eight corners.
/// Controls:
///   - Left/Right: Move the start corner around the ring
///   - D: Flip traversal direction
///   - Space: Toggle static pose / animated cycle
///   - Q/ESC: Quit

use std::io;
use tilt3d_core::{AnimatedCycle, Corner, Direction, ShadowStyle, TiltConfig};
use tilt3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    println!("Tilt3D Terminal Demo - Loading...");

    let config = TiltConfig::Animated(AnimatedCycle {
        from_corner: Corner::TopMedium,
        direction: Direction::Clockwise,
        distortion: 150.0,
        angle_degrees: 25.0,
        step: 1.0,
        duration_seconds: 8.0,
        shadow_style: Some(ShadowStyle::default()),
    });

    println!("Starting terminal demo (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(config)?;
    app.run()?;

    println!("Thank you for trying Tilt3D!");
    Ok(())
}

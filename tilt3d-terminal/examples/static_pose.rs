/// Example: Show a fixed tilt pose toward a named corner
///
/// Usage: cargo run --example static_pose -- top_left

use std::env;
use std::io;
use tilt3d_core::{Corner, ShadowStyle, StaticPose, TiltConfig};
use tilt3d_terminal::TerminalApp;

fn parse_corner(name: &str) -> Option<Corner> {
    match name {
        "top_medium" => Some(Corner::TopMedium),
        "top_right" => Some(Corner::TopRight),
        "medium_right" => Some(Corner::MediumRight),
        "bottom_right" => Some(Corner::BottomRight),
        "bottom_medium" => Some(Corner::BottomMedium),
        "bottom_left" => Some(Corner::BottomLeft),
        "medium_left" => Some(Corner::MediumLeft),
        "top_left" => Some(Corner::TopLeft),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let corner = match args.get(1) {
        Some(name) => parse_corner(name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "unknown corner '{}' (expected one of: top_medium, top_right, \
                     medium_right, bottom_right, bottom_medium, bottom_left, \
                     medium_left, top_left)",
                    name
                ),
            )
        })?,
        None => {
            eprintln!("No corner provided, using bottom_right...");
            Corner::BottomRight
        }
    };

    let config = TiltConfig::Static(StaticPose {
        corner,
        distortion: 150.0,
        angle_degrees: 25.0,
        step: 1.0,
        shadow_style: Some(ShadowStyle::default()),
    });

    println!("Showing static pose toward {:?} (press Q to quit)...", corner);
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app in static mode
    let mut app = TerminalApp::new(config)?;
    app.run()?;

    Ok(())
}

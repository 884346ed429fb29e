//! Desktop simulator for the frond widget tree.
//!
//! Renders the demo tree in an SDL2 window via `embedded-graphics-simulator`
//! and feeds it mouse and keyboard input through a [`Driver`].
//!
//! # Usage
//!
//! ```text
//! frond-simulator [CONFIG]
//! ```
//!
//! `CONFIG` is an optional postcard-encoded `UiConfig`; without it the
//! default theme is used.
//!
//! # Input
//!
//! | Input              | Effect                                   |
//! |--------------------|------------------------------------------|
//! | Left button        | Press / release the control under it     |
//! | Motion while held  | Drag (moves slider handles)              |
//! | Letter/digit/space | Typed into the text edit under the mouse |
//! | Escape             | Quit                                     |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use frond::config::UiConfig;
use frond::geometry;
use frond::ui::{Driver, Factory, GraphicsCanvas, Theme};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 480;
const DISPLAY_HEIGHT_PX: u32 = 320;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

/// Theme from the config file named on the command line, if any.
fn load_theme() -> Theme {
    let Some(path) = std::env::args().nth(1) else {
        return Theme::default();
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Cannot read {}: {}; using default theme", path, e);
            return Theme::default();
        }
    };

    match UiConfig::from_bytes(&bytes).and_then(|config| config.theme()) {
        Ok(theme) => {
            info!("Loaded theme from {}", path);
            theme
        }
        Err(e) => {
            warn!("Bad config {}: {}; using default theme", path, e);
            Theme::default()
        }
    }
}

/// Character typed by an SDL key, if it produces one.
fn keycode_to_char(keycode: Keycode) -> Option<char> {
    if keycode == Keycode::Space {
        return Some(' ');
    }
    let name = keycode.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn to_point(point: Point) -> geometry::Point {
    geometry::Point::new(point.x as f64, point.y as f64)
}

fn redraw(driver: &Driver, display: &mut SimulatorDisplay<Rgb565>) {
    let _ = display.clear(Rgb565::WHITE);
    let mut canvas = GraphicsCanvas::new(display);
    driver.paint(&mut canvas);
    if let Err(e) = canvas.finish() {
        error!("Draw error: {:?}", e);
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting frond simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );

    let theme = load_theme();
    let root = Factory::new(&theme).demo();
    let mut driver = Driver::new(
        root,
        geometry::Size::new(DISPLAY_WIDTH_PX as f64, DISPLAY_HEIGHT_PX as f64),
    );

    // SDL2 display and window
    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Frond Simulator", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    redraw(&driver, &mut display);
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();
        let mut needs_redraw = false;

        for event in window.events() {
            needs_redraw |= match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Escape {
                        break 'running;
                    }
                    keycode_to_char(keycode).is_some_and(|key| driver.key_press(key))
                }

                SimulatorEvent::MouseMove { point } => driver.mouse_move(to_point(point)),

                // Report the position first: presses act at the last pointer
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let moved = driver.mouse_move(to_point(point));
                    driver.mouse_down() | moved
                }

                SimulatorEvent::MouseButtonUp { point, .. } => {
                    let moved = driver.mouse_move(to_point(point));
                    driver.mouse_up() | moved
                }

                _ => false,
            };
        }

        if needs_redraw {
            redraw(&driver, &mut display);
        }
        window.update(&display);

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}

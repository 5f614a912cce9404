use std::sync::Arc;

use log::info;
use window_runtime::{CURSOR_DEFAULT, CURSOR_NONE, EventType, WindowConfig, open_window};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut window = open_window(WindowConfig::new("Window Runtime Demo", 1024, 768).with_fps_limit(60))?;

    let modes: Arc<[String]> = ["Arrow", "Hidden", "Hand"].iter().map(|s| (*s).to_owned()).collect();
    let mut mode = 0;
    let mut tint = [0.2, 0.4, 0.8];
    let mut show_depth = false;

    while window.is_running() {
        for event in window.poll_events(EventType::Press)? {
            info!("pressed {:?}", event.name);
            if event.name == "Escape" {
                window.request_stop(true);
            }
        }

        let (x, y) = window.cursor_position()?;
        let (width, height) = window.window_shape();

        window.gui().sub_window("Controls", (0.02, 0.02), (0.3, 0.4), |panel| {
            panel.text(&format!("Framebuffer {width}x{height}"));
            panel.colored_text(&format!("Cursor ({x:.2}, {y:.2})"), tint);
            mode = panel.combo("Cursor", mode, &modes);
            tint = panel.color_edit_3("Tint", tint);
            show_depth = panel.checkbox("Depth info", show_depth);
            if show_depth {
                panel.text("Depth is cleared to 1.0 every frame");
            }
        });

        let cursor = match mode {
            0 => CURSOR_DEFAULT,
            1 => CURSOR_NONE,
            _ => 3,
        };
        window.set_cursor(cursor, false)?;

        window.show()?;
    }

    Ok(())
}

use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::Grid;
use crate::ui::{panel_x, Button, Stepper, PANEL_WIDTH};

/// Draw the engine snapshot, one filled square per live cell.
/// Squares are one pixel smaller than the cell so the lattice stays visible.
pub fn draw_cells(snapshot: &Grid, resolution: u32) {
    let scale = resolution as f32;
    let size = scale - 1.0;
    let alive_color = Color::from_rgba(220, 20, 60, 255); // Crimson

    for (x, y, cell) in snapshot.iter_cells() {
        if cell.is_alive() {
            draw_rectangle(x as f32 * scale, y as f32 * scale, size, size, alive_color);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the side panel with widgets, readouts and control help
pub fn draw_controls(
    session: &Session,
    buttons: &[Button],
    steppers: &[&Stepper],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    steppers.iter().for_each(|stepper| stepper.draw(mouse_pos));

    let px = panel_x();

    let controls = [
        ("Controls:", 290.0, 14.0, WHITE),
        ("LMB: Draw", 305.0, 12.0, GRAY),
        ("RMB: Erase", 318.0, 12.0, GRAY),
        ("Space: Start/Stop", 331.0, 12.0, GRAY),
        ("Up/Down: Speed", 344.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });

    let speed_text = format!("{:.0} steps/s", session.steps_per_second);
    let generation_text = format!("{}", session.generation());
    let status_color = if session.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels: [(&str, f32, f32, Color); 6] = [
        ("Speed:", 560.0, 16.0, WHITE),
        (speed_text.as_str(), 580.0, 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Generation:", 620.0, 16.0, WHITE),
        (generation_text.as_str(), 640.0, 20.0, Color::from_rgba(220, 20, 60, 255)),
        ("Status:", 680.0, 16.0, WHITE),
        (
            if session.is_running { "Running" } else { "Stopped" },
            700.0,
            16.0,
            status_color,
        ),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}

mod button;
mod stepper;

pub use button::Button;
pub use stepper::Stepper;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the drawable grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the drawable grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Create the lifecycle buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 160.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start"),
        Button::new(px, 210.0, PANEL_WIDTH, BUTTON_HEIGHT, "Stop"),
    ]
}

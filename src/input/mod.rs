use macroquad::prelude::*;

use crate::application::Session;
use crate::ui::{grid_area_height, grid_area_width, Button};

/// Route the lifecycle button clicks (0 = start, 1 = stop)
pub fn process_button_clicks(session: &mut Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    if buttons[0].is_clicked(mouse_pos) {
        session.start(grid_area_width() as u32, grid_area_height() as u32);
    }
    if buttons[1].is_clicked(mouse_pos) {
        session.stop();
    }
}

/// Handle mouse editing on the grid: left draws, right erases.
/// Editing is live while the simulation runs; positions that round off
/// the grid are dropped by the session.
pub fn handle_mouse_edit(session: &mut Session, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() || mouse_pos.1 >= grid_area_height() {
        return;
    }

    let (pixel_x, pixel_y) = (mouse_pos.0 as i32, mouse_pos.1 as i32);
    if is_mouse_button_down(MouseButton::Left) {
        session.paint(pixel_x, pixel_y);
    } else if is_mouse_button_down(MouseButton::Right) {
        session.erase(pixel_x, pixel_y);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(mut session: Session) -> Session {
    if is_key_pressed(KeyCode::Space) {
        session.toggle(grid_area_width() as u32, grid_area_height() as u32);
    }
    if is_key_pressed(KeyCode::Up) {
        session = session.adjust_speed(1.0);
    }
    if is_key_pressed(KeyCode::Down) {
        session = session.adjust_speed(-1.0);
    }
    session
}

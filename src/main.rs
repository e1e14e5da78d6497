use macroquad::prelude::*;
use toroidal_life::{
    input, rendering,
    ui::{self, Stepper},
    Session,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut session = Session::new();

    let px = ui::panel_x();
    let mut resolution_stepper = Stepper::new(
        px,
        30.0,
        ui::PANEL_WIDTH,
        "Resolution (px/cell)",
        session.resolution,
        2,
        40,
    );
    let mut density_stepper = Stepper::new(
        px,
        90.0,
        ui::PANEL_WIDTH,
        "Density (1 in N alive)",
        session.density,
        1,
        20,
    );

    loop {
        let mouse_pos = mouse_position();

        // Update widget positions for responsiveness
        let px = ui::panel_x();
        resolution_stepper.set_position(px, 30.0);
        density_stepper.set_position(px, 90.0);
        let buttons = ui::create_buttons();

        // Parameters lock while the simulation runs
        resolution_stepper.set_enabled(!session.is_running);
        density_stepper.set_enabled(!session.is_running);

        if resolution_stepper.update(mouse_pos) {
            session.resolution = resolution_stepper.value();
        }
        if density_stepper.update(mouse_pos) {
            session.density = density_stepper.value();
        }

        input::process_button_clicks(&mut session, &buttons, mouse_pos);
        input::handle_mouse_edit(&mut session, mouse_pos);
        session = input::process_keyboard_input(session);

        // Update game state
        session = session.tick(get_frame_time());

        // Render
        clear_background(BLACK);
        if let Some(engine) = &session.engine {
            rendering::draw_cells(&engine.snapshot(), session.resolution);
        }
        rendering::draw_controls(
            &session,
            &buttons,
            &[&resolution_stepper, &density_stepper],
            mouse_pos,
        );

        next_frame().await;
    }
}

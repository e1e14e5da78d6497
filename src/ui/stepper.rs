use macroquad::prelude::*;

const STEP_BUTTON_SIZE: f32 = 28.0;

/// Numeric up/down control for the pre-start parameters (resolution and
/// density). Locked widgets draw dimmed and ignore clicks.
pub struct Stepper {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    value: u32,
    min: u32,
    max: u32,
    enabled: bool,
}

impl Stepper {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        value: u32,
        min: u32,
        max: u32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            value: value.clamp(min, max),
            min,
            max,
            enabled: true,
        }
    }

    /// Current value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Lock or unlock the widget
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle clicks on the - and + zones; returns true if the value changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !self.enabled || !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        let before = self.value;
        if self.minus_rect().contains(vec2(mouse_pos.0, mouse_pos.1)) {
            self.value = self.value.saturating_sub(1).max(self.min);
        } else if self.plus_rect().contains(vec2(mouse_pos.0, mouse_pos.1)) {
            self.value = (self.value + 1).min(self.max);
        }
        self.value != before
    }

    /// Draw label, value and the two step buttons
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let (box_color, text_color) = if self.enabled {
            (Color::from_rgba(70, 130, 180, 255), WHITE)
        } else {
            (Color::from_rgba(45, 45, 45, 255), GRAY)
        };

        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        for (rect, sign) in [(self.minus_rect(), "-"), (self.plus_rect(), "+")] {
            let hovered = self.enabled && rect.contains(vec2(mouse_pos.0, mouse_pos.1));
            let color = if hovered {
                Color::from_rgba(100, 149, 237, 255)
            } else {
                box_color
            };
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, text_color);
            let size = measure_text(sign, None, 20, 1.0);
            draw_text(
                sign,
                rect.x + (rect.w - size.width) / 2.0,
                rect.y + (rect.h + size.height) / 2.0,
                20.0,
                text_color,
            );
        }

        let value_text = format!("{}", self.value);
        let size = measure_text(&value_text, None, 18, 1.0);
        draw_text(
            &value_text,
            self.x + (self.width - size.width) / 2.0,
            self.y + (STEP_BUTTON_SIZE + size.height) / 2.0,
            18.0,
            text_color,
        );
    }

    fn minus_rect(&self) -> Rect {
        Rect::new(self.x, self.y, STEP_BUTTON_SIZE, STEP_BUTTON_SIZE)
    }

    fn plus_rect(&self) -> Rect {
        Rect::new(
            self.x + self.width - STEP_BUTTON_SIZE,
            self.y,
            STEP_BUTTON_SIZE,
            STEP_BUTTON_SIZE,
        )
    }
}

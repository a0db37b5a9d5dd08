use macroquad::prelude::*;

const BOX: f32 = 20.0;
const CHECK_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);

/// Labeled on/off box
pub struct Checkbox {
    x: f32,
    y: f32,
    label: String,
    checked: bool,
}

impl Checkbox {
    pub fn new(x: f32, y: f32, label: impl Into<String>, checked: bool) -> Self {
        Self { x, y, label: label.into(), checked }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Returns the new state when clicked
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<bool> {
        let width = BOX + 8.0 + measure_text(&self.label, None, 16, 1.0).width;
        let hovered = super::contains(self.x, self.y, width, BOX, mouse_pos);
        if hovered && is_mouse_button_pressed(MouseButton::Left) {
            self.checked = !self.checked;
            return Some(self.checked);
        }
        None
    }

    pub fn draw(&self) {
        draw_rectangle_lines(self.x, self.y, BOX, BOX, 2.0, WHITE);
        if self.checked {
            draw_rectangle(self.x + 4.0, self.y + 4.0, BOX - 8.0, BOX - 8.0, CHECK_COLOR);
        }
        draw_text(&self.label, self.x + BOX + 8.0, self.y + 15.0, 16.0, WHITE);
    }
}

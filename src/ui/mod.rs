mod button;
mod checkbox;
mod dropdown;
mod number_field;
mod spinner;

pub use button::Button;
pub use checkbox::Checkbox;
pub use dropdown::Dropdown;
pub use number_field::NumberField;
pub use spinner::Spinner;

use macroquad::prelude::*;

/// Height of the control panel under the canvas
pub const PANEL_HEIGHT: f32 = 120.0;
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Left edge used by the widget row
pub const MARGIN: f32 = 12.0;

/// Y position where the control panel starts
pub fn panel_y(canvas_height: f32) -> f32 {
    canvas_height
}

/// True when a point lies inside the given rectangle (edges included)
pub fn contains(x: f32, y: f32, w: f32, h: f32, point: (f32, f32)) -> bool {
    point.0 >= x && point.0 <= x + w && point.1 >= y && point.1 <= y + h
}

const WIDGET_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const WIDGET_HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);

/// Fill shared by buttons, spinner arrows and the dropdown
pub fn widget_color(hovered: bool) -> Color {
    if hovered { WIDGET_HOVER_COLOR } else { WIDGET_COLOR }
}

/// Filled widget box with the white border, highlighted while hovered
pub fn draw_widget_box(x: f32, y: f32, w: f32, h: f32, hovered: bool) {
    draw_rectangle(x, y, w, h, widget_color(hovered));
    draw_rectangle_lines(x, y, w, h, 2.0, WHITE);
}

/// White text centered in a box
pub fn draw_centered_text(text: &str, x: f32, y: f32, w: f32, h: f32, font_size: u16) {
    let size = measure_text(text, None, font_size, 1.0);
    draw_text(
        text,
        x + (w - size.width) / 2.0,
        y + (h + size.height) / 2.0,
        font_size as f32,
        WHITE,
    );
}

/// Caption drawn just above a widget
pub fn draw_label(text: &str, x: f32, y: f32) {
    draw_text(text, x, y - 5.0, 14.0, GRAY);
}

/// Start/Pause, Clear, Random in a row along the top of the panel
pub fn create_buttons(canvas_height: f32) -> Vec<Button> {
    let y = panel_y(canvas_height) + 14.0;
    ["Start", "Clear", "Random"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = MARGIN + i as f32 * (BUTTON_WIDTH + 10.0);
            Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, *label)
        })
        .collect()
}

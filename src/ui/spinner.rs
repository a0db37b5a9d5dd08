use macroquad::prelude::*;

/// Integer spinner: [-] value [+], bounded to `min..=max`
pub struct Spinner {
    x: f32,
    y: f32,
    label: String,
    value: usize,
    min: usize,
    max: usize,
}

const BOX: f32 = 28.0;
const VALUE_WIDTH: f32 = 44.0;

impl Spinner {
    pub fn new(
        x: f32,
        y: f32,
        label: impl Into<String>,
        value: usize,
        min: usize,
        max: usize,
    ) -> Self {
        Self { x, y, label: label.into(), value: value.clamp(min, max), min, max }
    }

    /// Handle clicks on the arrows. Returns the new value when it changed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let previous = self.value;
        if super::contains(self.x, self.y, BOX, BOX, mouse_pos) {
            self.value = step_down(self.value, self.min);
        } else if super::contains(self.plus_x(), self.y, BOX, BOX, mouse_pos) {
            self.value = step_up(self.value, self.max);
        }
        (self.value != previous).then_some(self.value)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        super::draw_label(&self.label, self.x, self.y);
        for (x, glyph) in [(self.x, "-"), (self.plus_x(), "+")] {
            let hovered = super::contains(x, self.y, BOX, BOX, mouse_pos);
            super::draw_widget_box(x, self.y, BOX, BOX, hovered);
            super::draw_centered_text(glyph, x, self.y, BOX, BOX, 22);
        }
        let value = self.value.to_string();
        super::draw_centered_text(&value, self.x + BOX, self.y, VALUE_WIDTH, BOX, 18);
    }

    fn plus_x(&self) -> f32 {
        self.x + BOX + VALUE_WIDTH
    }
}

fn step_down(value: usize, min: usize) -> usize {
    value.saturating_sub(1).max(min)
}

fn step_up(value: usize, max: usize) -> usize {
    (value + 1).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_stop_at_bounds() {
        assert_eq!(step_down(2, 2), 2);
        assert_eq!(step_down(10, 2), 9);
        assert_eq!(step_up(50, 50), 50);
        assert_eq!(step_up(10, 50), 11);
    }
}

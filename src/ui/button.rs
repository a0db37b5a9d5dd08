use macroquad::prelude::*;

/// Clickable labeled box in the control panel
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self { x, y, width, height, text: text.into() }
    }

    /// Swap the caption, e.g. Start <-> Pause
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        super::contains(self.x, self.y, self.width, self.height, mouse_pos)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let hovered = self.is_hovered(mouse_pos);
        super::draw_widget_box(self.x, self.y, self.width, self.height, hovered);
        super::draw_centered_text(&self.text, self.x, self.y, self.width, self.height, 20);
    }

    /// Left press over the button this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_uses_button_bounds() {
        let btn = Button::new(10.0, 10.0, 100.0, 30.0, "Start");
        assert!(btn.is_hovered((110.0, 40.0)));
        assert!(!btn.is_hovered((9.0, 20.0)));
    }
}

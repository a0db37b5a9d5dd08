use macroquad::prelude::*;

const MAX_CHARS: usize = 7;

/// Single-line numeric text field. Click to focus, type digits (and a
/// leading minus), Enter to commit. The committed text is handed back raw so
/// the caller decides what counts as valid.
pub struct NumberField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    text: String,
    focused: bool,
}

impl NumberField {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, value: u64) -> Self {
        Self {
            x,
            y,
            width,
            height: 28.0,
            label: label.into(),
            text: value.to_string(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the shown text, used to restore the last valid value
    pub fn set_value(&mut self, value: u64) {
        self.text = value.to_string();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Process focus and keystrokes. Returns the text when Enter is pressed.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<String> {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = super::contains(self.x, self.y, self.width, self.height, mouse_pos);
        }
        if !self.focused {
            return None;
        }

        while let Some(ch) = get_char_pressed() {
            if accepts(&self.text, ch) {
                self.text.push(ch);
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.text.pop();
        }
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
            self.focused = false;
            return Some(self.text.clone());
        }
        None
    }

    pub fn draw(&self) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);
        let background = if self.focused {
            Color::from_rgba(55, 55, 55, 255)
        } else {
            Color::from_rgba(40, 40, 40, 255)
        };
        draw_rectangle(self.x, self.y, self.width, self.height, background);
        let border = if self.focused { Color::from_rgba(100, 149, 237, 255) } else { GRAY };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);
        let caret = if self.focused { "_" } else { "" };
        draw_text(&format!("{}{caret}", self.text), self.x + 6.0, self.y + 20.0, 18.0, WHITE);
    }
}

/// Digits anywhere, minus only as the first character
fn accepts(text: &str, ch: char) -> bool {
    text.len() < MAX_CHARS && (ch.is_ascii_digit() || (ch == '-' && text.is_empty()))
}

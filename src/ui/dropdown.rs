use macroquad::prelude::*;

const MENU_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const ITEM_COLOR: Color = Color::new(0.18, 0.18, 0.18, 1.0);
const SELECTED_ITEM_COLOR: Color = Color::new(0.2, 0.39, 0.59, 1.0);
const ITEM_BORDER_COLOR: Color = Color::new(0.31, 0.31, 0.31, 1.0);

/// Dropdown selector. Sits in the bottom panel, so the menu opens upward
/// over the canvas.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 28.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Check if dropdown is open
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        super::draw_label(&self.label, self.x, self.y);
        let hovered = self.is_hovered_main(mouse_pos);
        super::draw_widget_box(self.x, self.y, self.width, self.height, hovered);

        let font_size = 16.0;
        let text = truncate(&self.items[self.selected], self.width - 30.0, font_size);
        draw_text(&text, self.x + 5.0, self.y + 20.0, font_size, WHITE);
        draw_text("^", self.x + self.width - 18.0, self.y + 22.0, 16.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        let menu_top = self.y - menu_height;
        draw_rectangle(self.x, menu_top, self.width, menu_height, MENU_COLOR);

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                super::widget_color(true)
            } else if i == self.selected {
                SELECTED_ITEM_COLOR
            } else {
                ITEM_COLOR
            };

            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            draw_rectangle_lines(self.x, item_y, self.width, self.height, 1.0, ITEM_BORDER_COLOR);
            let text = truncate(item, self.width - 10.0, font_size);
            draw_text(&text, self.x + 5.0, item_y + 20.0, font_size, WHITE);
        }

        draw_rectangle_lines(self.x, menu_top, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle clicks. Returns the chosen index when an item was picked,
    /// including a re-pick of the current one.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }

        if self.is_open {
            self.is_open = false;
            if let Some(i) = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i)) {
                self.selected = i;
                return Some(i);
            }
        }
        None
    }

    /// True when the pointer is over the button or the open menu
    pub fn captures(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y - (self.items.len() - index) as f32 * self.height
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        super::contains(self.x, self.y, self.width, self.height, mouse_pos)
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        super::contains(self.x, self.item_y(index), self.width, self.height, mouse_pos)
    }
}

/// Shorten text with an ellipsis until it fits `max_width`
fn truncate(text: &str, max_width: f32, font_size: f32) -> String {
    if measure_text(text, None, font_size as u16, 1.0).width <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty()
        && measure_text(&format!("{truncated}..."), None, font_size as u16, 1.0).width > max_width
    {
        truncated.pop();
    }
    format!("{truncated}...")
}

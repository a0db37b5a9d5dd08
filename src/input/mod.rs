use macroquad::prelude::*;

use crate::application::SimulationDriver;
use crate::domain::Canvas;
use crate::ui::Button;

/// User intents the Shell forwards to the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleRunning,
    Clear,
    Randomize,
    Step,
    ToggleGridLines,
}

const KEY_ACTIONS: [(KeyCode, Action); 5] = [
    (KeyCode::Space, Action::ToggleRunning),
    (KeyCode::C, Action::Clear),
    (KeyCode::R, Action::Randomize),
    (KeyCode::N, Action::Step),
    (KeyCode::G, Action::ToggleGridLines),
];

/// Actions for keys pressed this frame
pub fn keyboard_actions() -> Vec<Action> {
    KEY_ACTIONS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
        .collect()
}

/// Button order matches `ui::create_buttons`
pub fn button_action(index: usize) -> Option<Action> {
    match index {
        0 => Some(Action::ToggleRunning),
        1 => Some(Action::Clear),
        2 => Some(Action::Randomize),
        _ => None,
    }
}

/// Actions for buttons clicked this frame
pub fn button_actions(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Action> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .filter_map(|(idx, _)| button_action(idx))
        .collect()
}

/// Toggle the cell under the pointer on a left press inside the canvas
pub fn handle_canvas_click(driver: &SimulationDriver, canvas: Canvas, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let (x, y) = mouse_pos;
    if x >= canvas.width as f32 || y >= canvas.height as f32 {
        return;
    }
    let mut engine = driver.lock_engine();
    if let Some((row, col)) = Canvas::cell_at(x, y, engine.cell_size()) {
        engine.toggle(row, col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_actions_in_order() {
        assert_eq!(button_action(0), Some(Action::ToggleRunning));
        assert_eq!(button_action(1), Some(Action::Clear));
        assert_eq!(button_action(2), Some(Action::Randomize));
        assert_eq!(button_action(3), None);
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, (key, _)) in KEY_ACTIONS.iter().enumerate() {
            assert!(KEY_ACTIONS[i + 1..].iter().all(|(other, _)| other != key));
        }
    }
}

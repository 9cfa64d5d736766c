//! 键盘事件映射 (Input -> Action)

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Screen};

/// 根据当前页面和按键获取对应的 Action
pub fn get_action(screen: &Screen, key: KeyCode) -> Option<Action> {
    match screen {
        Screen::Home => match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::Navigate),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        Screen::Result { .. } => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.screen, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_keys() {
        let home = Screen::Home;
        assert_eq!(get_action(&home, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get_action(&home, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get_action(&home, KeyCode::Tab), Some(Action::Navigate));
        assert_eq!(get_action(&home, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(get_action(&home, KeyCode::Up), None);
    }

    #[test]
    fn test_result_keys() {
        let result = Screen::Result { rows: Vec::new() };
        assert_eq!(get_action(&result, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(get_action(&result, KeyCode::Esc), Some(Action::Back));
        assert_eq!(get_action(&result, KeyCode::Char('a')), None);
    }
}

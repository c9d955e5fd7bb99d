//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::Operator;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Input => match key {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Some(Action::Digit(c)),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            KeyCode::Char('=') | KeyCode::Enter => Some(Action::Equals),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::Percent),
            KeyCode::Backspace => Some(Action::DeleteLast),
            KeyCode::Esc => Some(Action::ClearAll),
            KeyCode::Tab => Some(Action::ToggleHistory),
            KeyCode::Char(c) => Operator::from_char(c).map(Action::ChooseOperator),
            _ => None,
        },
        AppMode::History => match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Enter => Some(Action::RecallEntry),
            KeyCode::Char('x') | KeyCode::Char('X') => Some(Action::StartClearHistory),
            KeyCode::Esc | KeyCode::Tab => Some(Action::ToggleHistory),
            _ => None,
        },
        AppMode::Confirm(_) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

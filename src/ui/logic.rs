//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use super::actions::Action;
use super::state::{App, AppMode, ConfirmAction};
use crate::models::Operator;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::Digit(c) => self.press_digit(c),
            Action::ChooseOperator(op) => self.press_operator(op),
            Action::Equals => self.press_equals(),
            Action::DeleteLast => self.calc.delete_last(),
            Action::ClearAll => self.press_clear(),
            Action::Percent => self.calc.convert_to_percent(),

            Action::ToggleHistory => self.toggle_history(),
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::RecallEntry => self.recall_entry(),
            Action::StartClearHistory => self.start_clear_history(),

            Action::Cancel => self.cancel(),
            Action::Submit => self.execute_confirm(),
        }
        false
    }

    // ============ 计算器入口点 ============

    /// 输入数字字符
    pub fn press_digit(&mut self, c: char) {
        self.calc.input_digit(c);
        self.message = None;
    }

    /// 选择运算符，连续运算被结算时记入历史
    pub fn press_operator(&mut self, op: Operator) {
        if let Some(calculation) = self.calc.choose_operator(op) {
            self.history.push(&calculation);
            self.clamp_selection();
        }
        self.message = None;
    }

    /// 结算并记入历史
    pub fn press_equals(&mut self) {
        if let Some(calculation) = self.calc.calculate() {
            self.message = Some(calculation.to_string());
            self.history.push(&calculation);
            self.selected_index = self.history.len() - 1;
        }
    }

    /// 清空计算器状态
    pub fn press_clear(&mut self) {
        self.calc.clear_all();
        self.message = Some("已清零".to_string());
    }

    // ============ 历史面板相关 ============

    /// 在输入模式和历史模式之间切换
    pub fn toggle_history(&mut self) {
        match self.mode {
            AppMode::Input => {
                if self.history.is_empty() {
                    self.message = Some("暂无历史记录".to_string());
                } else {
                    self.mode = AppMode::History;
                    self.selected_index = self.history.len() - 1;
                    self.message = None;
                }
            }
            _ => self.mode = AppMode::Input,
        }
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.history.len() {
            self.selected_index += 1;
        }
    }

    /// 把选中条目的结果回填为当前输入
    pub fn recall_entry(&mut self) {
        if let Some(entry) = self.selected_entry() {
            if entry.recallable() {
                let result = entry.result.clone();
                self.calc.recall(&result);
                self.mode = AppMode::Input;
                self.message = Some(format!("已回填 {}", result));
            } else {
                self.message = Some("该结果无法回填".to_string());
            }
        }
    }

    /// 开始清空历史（需确认）
    pub fn start_clear_history(&mut self) {
        if !self.history.is_empty() {
            self.mode = AppMode::Confirm(ConfirmAction::ClearHistory);
        }
    }

    // ============ 通用操作 ============

    /// 执行确认操作
    pub fn execute_confirm(&mut self) {
        if let AppMode::Confirm(ConfirmAction::ClearHistory) = &self.mode {
            let cleared = self.history.len();
            self.history.clear();
            self.selected_index = 0;
            self.message = Some(format!("已清空 {} 条历史记录", cleared));
        }
        self.mode = AppMode::Input;
    }

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Input;
        self.message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::History;

    fn app() -> App {
        App::new(History::new())
    }

    fn dispatch_keys(app: &mut App, actions: &[Action]) {
        for action in actions {
            app.dispatch(*action);
        }
    }

    #[test]
    fn test_dispatch_addition_records_history() {
        let mut app = app();
        dispatch_keys(
            &mut app,
            &[
                Action::Digit('5'),
                Action::ChooseOperator(Operator::Add),
                Action::Digit('3'),
                Action::Equals,
            ],
        );
        assert_eq!(app.calc.display_value(), "8");
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.entries[0].expression, "5 + 3");
        assert_eq!(app.message.as_deref(), Some("5 + 3 = 8"));
    }

    #[test]
    fn test_dispatch_chained_operator_records_intermediate() {
        let mut app = app();
        dispatch_keys(
            &mut app,
            &[
                Action::Digit('5'),
                Action::ChooseOperator(Operator::Add),
                Action::Digit('3'),
                Action::ChooseOperator(Operator::Add),
                Action::Digit('2'),
                Action::Equals,
            ],
        );
        assert_eq!(app.calc.display_value(), "10");
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history.entries[0].result, "8");
        assert_eq!(app.history.entries[1].result, "10");
    }

    #[test]
    fn test_toggle_history_on_empty_stays_in_input() {
        let mut app = app();
        app.dispatch(Action::ToggleHistory);
        assert_eq!(app.mode, AppMode::Input);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_recall_entry() {
        let mut app = app();
        dispatch_keys(
            &mut app,
            &[
                Action::Digit('6'),
                Action::ChooseOperator(Operator::Multiply),
                Action::Digit('7'),
                Action::Equals,
                Action::ToggleHistory,
                Action::RecallEntry,
            ],
        );
        assert_eq!(app.mode, AppMode::Input);
        assert_eq!(app.calc.display_value(), "42");
    }

    #[test]
    fn test_recall_error_entry_is_rejected() {
        let mut app = app();
        dispatch_keys(
            &mut app,
            &[
                Action::Digit('7'),
                Action::ChooseOperator(Operator::Divide),
                Action::Digit('0'),
                Action::Equals,
                Action::ClearAll,
                Action::ToggleHistory,
                Action::RecallEntry,
            ],
        );
        // 仍在历史模式，输入保持清零后的状态
        assert_eq!(app.mode, AppMode::History);
        assert_eq!(app.calc.display_value(), "0");
    }

    #[test]
    fn test_clear_history_requires_confirm() {
        let mut app = app();
        dispatch_keys(
            &mut app,
            &[
                Action::Digit('1'),
                Action::ChooseOperator(Operator::Add),
                Action::Digit('1'),
                Action::Equals,
                Action::ToggleHistory,
                Action::StartClearHistory,
            ],
        );
        assert_eq!(app.mode, AppMode::Confirm(ConfirmAction::ClearHistory));

        app.dispatch(Action::Cancel);
        assert_eq!(app.history.len(), 1);

        app.dispatch(Action::ToggleHistory);
        app.dispatch(Action::StartClearHistory);
        app.dispatch(Action::Submit);
        assert!(app.history.is_empty());
        assert_eq!(app.mode, AppMode::Input);
    }

    #[test]
    fn test_quit_action() {
        let mut app = app();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::Digit('1')));
    }
}

//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::Operator;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,

    // 计算器入口点
    Digit(char),
    ChooseOperator(Operator),
    Equals,
    DeleteLast,
    ClearAll,
    Percent,

    // 历史面板
    ToggleHistory,
    MoveSelectionUp,
    MoveSelectionDown,
    RecallEntry,
    StartClearHistory,

    // 表单/通用交互
    Cancel, // Esc / n
    Submit, // y
}

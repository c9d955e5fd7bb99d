//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::models::{Calculator, History, HistoryEntry};

/// 应用状态
pub struct App {
    pub calc: Calculator,
    pub history: History,
    pub mode: AppMode,
    pub selected_index: usize,
    pub message: Option<String>,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    /// 正常输入模式，按键直接进入计算器
    Input,
    /// 浏览历史记录
    History,
    /// 等待确认破坏性操作
    Confirm(ConfirmAction),
}

/// 确认操作类型
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    ClearHistory,
}

impl App {
    /// 创建新的应用实例
    pub fn new(history: History) -> Self {
        let selected_index = history.len().saturating_sub(1);
        Self {
            calc: Calculator::new(),
            history,
            mode: AppMode::Input,
            selected_index,
            message: None,
        }
    }

    /// 获取当前选中的历史条目
    pub fn selected_entry(&self) -> Option<&HistoryEntry> {
        self.history.entries.get(self.selected_index)
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.history.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.history.len() {
            self.selected_index = self.history.len() - 1;
        }
    }
}

//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, ConfirmAction};
use crate::models::ERROR_SENTINEL;
use components::{render_dialog_framework, render_display_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 主区域
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(chunks[1]);

    let calc_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(main[0]);

    render_display(frame, app, calc_area[0]);
    render_keypad(frame, calc_area[1]);
    render_history(frame, app, main[1]);
    render_help(frame, app, chunks[2]);

    // 渲染弹窗
    if let AppMode::Confirm(action) = &app.mode {
        render_confirm_dialog(frame, action);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🧮 算盘")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_display(frame: &mut Frame, app: &App, area: Rect) {
    let value = app.calc.display_value();
    let pending = app.calc.pending_display();
    let is_error = value == ERROR_SENTINEL || value == "NaN";
    render_display_widget(frame, area, pending.as_deref(), value, is_error);
}

fn render_keypad(frame: &mut Frame, area: Rect) {
    let rows = [
        "┌───┬───┬───┬───┐",
        "│ 7 │ 8 │ 9 │ ÷ │",
        "├───┼───┼───┼───┤",
        "│ 4 │ 5 │ 6 │ × │",
        "├───┼───┼───┼───┤",
        "│ 1 │ 2 │ 3 │ − │",
        "├───┼───┼───┼───┤",
        "│ 0 │ . │ % │ + │",
        "└───┴───┴───┴───┘",
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|row| Line::styled(*row, Style::default().fg(Color::Gray)))
        .collect();

    let keypad = Paragraph::new(lines)
        .block(Block::default().title("键盘直接输入").borders(Borders::ALL));
    frame.render_widget(keypad, area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let browsing = app.mode == AppMode::History;

    let items: Vec<ListItem> = app
        .history
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let content = format!(
                "{}  {} = {}",
                entry.created_at.format("%H:%M"),
                entry.expression,
                entry.result
            );

            let style = if browsing && i == app.selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if entry.result == ERROR_SENTINEL {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            ListItem::new(Line::from(vec![Span::styled(content, style)]))
        })
        .collect();

    let border_style = if browsing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let history_widget = List::new(items)
        .block(
            Block::default()
                .title(format!("历史记录 ({})", app.history.len()))
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if browsing && !app.history.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(history_widget, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Input => {
            "[0-9 .] 输入  [+−×÷%] 运算  [Enter/=] 等于  [Backspace] 退格  [Esc] 清零  [p] 百分比  [Tab] 历史  [q] 退出"
        }
        AppMode::History => "[j/k] 选择  [Enter] 回填结果  [x] 清空历史  [Tab/Esc] 返回  [q] 退出",
        AppMode::Confirm(_) => "[y] 确认  [n] 取消",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_confirm_dialog(frame: &mut Frame, action: &ConfirmAction) {
    let area = centered_rect(50, 20, frame.area());
    let inner = render_dialog_framework(frame, area, "⚠️ 确认操作");

    let message = match action {
        ConfirmAction::ClearHistory => "确认清空所有历史记录？",
    };

    let dialog = Paragraph::new(format!("{}\n\n[y] 确认  [n] 取消", message))
        .style(Style::default().fg(Color::Red));

    frame.render_widget(dialog, inner);
}

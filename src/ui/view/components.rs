//! 通用 UI 组件
//!
//! 对话框、显示屏等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 计算器显示屏
///
/// 上行是待定算式（如 "5 +"），下行是右对齐的当前显示值。
pub fn render_display_widget(
    frame: &mut Frame,
    area: Rect,
    pending: Option<&str>,
    value: &str,
    is_error: bool,
) {
    let value_style = if is_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::styled(
            pending.unwrap_or("").to_string(),
            Style::default().fg(Color::Gray),
        ),
        Line::styled(value.to_string(), value_style),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(Block::default().title("显示").borders(Borders::ALL));
    frame.render_widget(display, area);
}

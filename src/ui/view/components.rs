//! 通用 UI 组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::models::Item;

/// [组件] 带有标题的输入框，光标停在文本末尾
pub fn render_input_widget(frame: &mut Frame, area: Rect, title: &str, value: &str) {
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);

    frame.set_cursor_position(input_cursor(area, value));
}

/// 光标位置：按显示宽度计算，超出输入框时停在右边框内侧
pub fn input_cursor(area: Rect, value: &str) -> Position {
    let width = u16::try_from(Line::from(value).width()).unwrap_or(u16::MAX);
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2));
    Position::new(x, area.y.saturating_add(1))
}

/// [组件] 名单列表，每行一个名字
pub fn render_item_list(frame: &mut Frame, area: Rect, title: &str, items: &[Item]) {
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(item.name.as_str()))
        .collect();

    let list = List::new(rows)
        .style(Style::default().fg(Color::White))
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

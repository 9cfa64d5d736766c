//! 视图层模块
//!
//! 首页和结果页的渲染入口

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Screen};
use crate::models::Item;
use components::{render_input_widget, render_item_list};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Home => render_home(frame, app),
        Screen::Result { rows } => render_result(frame, app, rows),
    }
}

fn render_home(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 输入框
            Constraint::Min(5),    // 名单
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0], "📝 名单");
    render_input_widget(frame, chunks[1], "输入名字", &app.store.draft().name);
    render_item_list(
        frame,
        chunks[2],
        &format!("名单 ({})", app.store.items().len()),
        app.store.items(),
    );
    render_help(frame, app, chunks[3], "[Enter] 添加  [Tab] 查看结果  [Esc] 退出");
}

fn render_result(frame: &mut Frame, app: &App, rows: &[Item]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_title(frame, chunks[0], "📋 结果");
    render_item_list(frame, chunks[1], &format!("{:?}", app.codec), rows);
    render_help(frame, app, chunks[2], "[Esc] 返回  [q] 退出");
}

fn render_title(frame: &mut Frame, area: Rect, text: &str) {
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect, help_text: &str) {
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

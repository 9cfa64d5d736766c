mod codec;
mod config;
mod logging;
mod models;
mod navigation;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::load_user_config;
use crate::models::ListStore;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 配置文件 (~/.config/roster/config.toml)，缺失时使用默认值
    let config = load_user_config()?;

    let log_guard = logging::init();
    tracing::info!(codec = ?config.codec, seed = config.seed.len(), "starting");

    // 每次会话一个名单，不做持久化
    let store = ListStore::with_seed(config.seed);
    let mut app = App::new(store, config.codec);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    if let Some(guard) = &log_guard {
        println!("日志位于 {}", guard.log_dir().display());
    }
    result
}

/// 每处理一个按键后重绘
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

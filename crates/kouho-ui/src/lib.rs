use std::io;
use std::sync::Arc;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use kanal::{AsyncReceiver, AsyncSender};
use kouho_config::Config;
use kouho_grid::GridSpec;
use kouho_types::{AppEvent, UiEvent};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tokio::sync::RwLock;

pub mod input;
pub mod view;

use self::input::{InputResult, LineInput};
use self::view::CandidateGridView;

struct UiState {
    input: LineInput,
    grid: CandidateGridView,
    loading: bool,
    entry_count: usize,
    notice: Option<String>,
    should_quit: bool,
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let ui = { config.read().await.ui.clone() };
    let spec = GridSpec {
        rows: ui.rows,
        chip_margin: ui.chip_margin,
        divider: 1,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut state = UiState {
        input: LineInput::default(),
        grid: CandidateGridView::new(spec, ui.row_dividers),
        loading: true,
        entry_count: 0,
        notice: None,
        should_quit: false,
    };

    let result = run(&mut terminal, &mut state, app_to_ui_rx, &ui_to_app_tx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut UiState,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| render(frame, state))?;

        tokio::select! {
            terminal_event = events.next() => match terminal_event {
                Some(Ok(event)) => handle_terminal_event(state, event, ui_to_app_tx).await?,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            app_event = app_to_ui_rx.recv() => handle_app_event(state, app_event?),
        }

        if state.should_quit {
            tracing::info!("ui closing");
            let _ = ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await;
            break;
        }
    }

    Ok(())
}

async fn handle_terminal_event(
    state: &mut UiState,
    event: Event,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match event {
        Event::Key(key) => handle_key(state, key, tx).await?,
        Event::Mouse(mouse) => handle_mouse(state, mouse, tx).await?,
        // the next draw picks up the new width
        Event::Resize(_, _) => {}
        _ => {}
    }
    Ok(())
}

async fn handle_key(
    state: &mut UiState,
    key: KeyEvent,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }
    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        state.should_quit = true;
        return Ok(());
    }
    if state.input.handle(key) == InputResult::Changed {
        state.notice = None;
        tx.send(AppEvent::QueryChanged(state.input.value().to_string()))
            .await?;
    }
    Ok(())
}

async fn handle_mouse(
    state: &mut UiState,
    mouse: MouseEvent,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return Ok(());
    }
    let clicked = state
        .grid
        .chip_at(mouse.column, mouse.row)
        .map(str::to_string);
    if let Some(text) = clicked {
        tracing::debug!("chip clicked: {}", text);
        tx.send(AppEvent::CandidateClicked(text)).await?;
    }
    Ok(())
}

fn handle_app_event(state: &mut UiState, event: AppEvent) {
    match event {
        AppEvent::ShowCandidates(candidates) => state.grid.set_candidates(candidates),
        AppEvent::DictionaryReady { entries } => {
            state.loading = false;
            state.entry_count = entries;
        }
        AppEvent::Notice(text) => state.notice = Some(text),
        AppEvent::UiEvent(UiEvent::Close) => state.should_quit = true,
        AppEvent::UiEvent(_) => {}
        // ui-to-app events are never echoed back
        AppEvent::QueryChanged(_) | AppEvent::CandidateClicked(_) => {}
    }
}

fn render(frame: &mut Frame, state: &mut UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::DarkGray)),
        Span::raw(state.input.value()),
    ]);
    frame.render_widget(
        Paragraph::new(input_line).block(Block::bordered().title("query")),
        chunks[0],
    );

    let status = if state.loading {
        Span::styled("loading dictionary...", Style::default().fg(Color::Yellow))
    } else if let Some(notice) = &state.notice {
        Span::styled(notice.clone(), Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("{} entries", state.entry_count),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[1]);

    state.grid.render(frame, chunks[2]);
}

//! Stepsort Visualizer - Terminal User Interface
//!
//! Animates bubble and insertion sort one comparison per tick using ratatui.
//! App logic lives in `stepsort::tui::sort_app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use stepsort::config::VisualizerConfig;
    use stepsort::tui::sort_app::SortApp;

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let app = if let Some(yaml_path) = args.get(1) {
        match SortApp::from_yaml_file(yaml_path) {
            Ok(app) => {
                log::info!(
                    "loaded {yaml_path} ({} values)",
                    app.controller.model().len()
                );
                app
            }
            Err(e) => {
                eprintln!("Error loading '{yaml_path}': {e}");
                eprintln!("Usage: sort-tui [path/to/visualizer.yaml]");
                std::process::exit(1);
            }
        }
    } else {
        SortApp::new(&VisualizerConfig::default())
    };

    tui::run(app)
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with: cargo run --bin sort-tui --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
        Frame, Terminal,
    };
    use std::io;
    use std::time::Instant;
    use stepsort::engine::HighlightRole;
    use stepsort::renderers::RenderFrame;
    use stepsort::tui::sort_app::SortApp;

    /// Bar shades for unhighlighted positions, cycled by index.
    const GRADIENTS: [Color; 3] = [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ];

    pub fn run(mut app: SortApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = run_main_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_main_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut SortApp,
    ) -> io::Result<()> {
        let mut last_tick = Instant::now();
        let mut frame = app.controller.frame();

        loop {
            terminal.draw(|f| ui(f, app, &frame))?;

            // Speed may change between ticks, so re-read the interval each pass.
            let tick_rate = app.tick_interval();
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if crossterm::event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                        frame = app.controller.frame();
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app.step();
                frame = app.controller.frame();
                last_tick = Instant::now();
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn ui(f: &mut Frame, app: &SortApp, frame: &RenderFrame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_title(f, chunks[0], frame);
        render_controls(f, chunks[1]);
        render_bars(f, chunks[2], frame);
        render_status_bar(f, chunks[3], app);
    }

    fn render_title(f: &mut Frame, area: Rect, frame: &RenderFrame) {
        let title = Paragraph::new(Line::from(Span::styled(
            frame.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("stepsort"));
        f.render_widget(title, area);
    }

    fn render_controls(f: &mut Frame, area: Rect) {
        let controls = Paragraph::new(vec![
            Line::from(
                "R - Reset | SPACE - Start | A - Ascending | D - Descending | UP/DOWN - Speed",
            ),
            Line::from("I - Insertion Sort | B - Bubble Sort | Q - Quit"),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT));
        f.render_widget(controls, area);
    }

    /// Colour for the bar at `index`.
    fn bar_color(index: usize, role: Option<HighlightRole>) -> Color {
        match role {
            Some(HighlightRole::Primary) => Color::Green,
            Some(HighlightRole::Secondary) => Color::Red,
            None => GRADIENTS[index % GRADIENTS.len()],
        }
    }

    /// Width of each bar so that `count` bars fit in `width` columns.
    fn bar_width(width: u16, count: usize) -> u16 {
        if count == 0 {
            return 1;
        }
        let per_bar = usize::from(width) / count;
        u16::try_from(per_bar).unwrap_or(u16::MAX).max(1)
    }

    fn render_bars(f: &mut Frame, area: Rect, frame: &RenderFrame) {
        // Shift by one so the minimum value still draws a sliver.
        let bars: Vec<Bar> = frame
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Bar::default()
                    .value(frame.relative_height(v) + 1)
                    .text_value(String::new())
                    .style(Style::default().fg(bar_color(i, frame.role_of(i))))
            })
            .collect();

        let ceiling = frame
            .max_value
            .map_or(1, |hi| frame.relative_height(hi) + 1);
        let inner_width = area.width.saturating_sub(2);

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width(inner_width, bars.len()))
            .bar_gap(0)
            .max(ceiling);
        f.render_widget(chart, area);
    }

    fn render_status_bar(f: &mut Frame, area: Rect, app: &SortApp) {
        let color = if app.controller.is_running() {
            Color::Yellow
        } else {
            Color::Green
        };
        let status_text = Line::from(vec![
            Span::raw(" "),
            Span::styled(app.status_line(), Style::default().fg(color)),
            Span::raw(" | "),
            Span::raw(format!("Frame: {} ", app.frame_count)),
        ]);
        let status_bar = Paragraph::new(status_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(status_bar, area);
    }

}

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::counter::DogStatus;

const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Snapshot of everything the view shows, read through selectors.
pub struct CounterView {
    pub count: i64,
    pub dog: DogStatus,
}

pub fn draw(frame: &mut Frame<'_>, view: &CounterView) {
    let [counter, dog, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(frame.area());

    let count = Paragraph::new(Line::from(Span::styled(
        view.count.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(bordered(" Count "));
    frame.render_widget(count, counter);

    let (text, color) = match &view.dog {
        DogStatus::Idle => ("Press d to fetch a dog".to_string(), TEXT),
        DogStatus::Loading => ("Fetching...".to_string(), TEXT),
        DogStatus::Loaded(url) => (url.clone(), STATUS_OK),
        DogStatus::Failed(reason) => (reason.clone(), STATUS_ERROR),
    };
    let dog_widget = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
        .wrap(Wrap { trim: true })
        .block(bordered(" Dog "));
    frame.render_widget(dog_widget, dog);

    let hints = Paragraph::new(Line::from(Span::styled(
        format!(" +/Space: Increment │ e: Effect │ d: Dog │ q: Quit   v{}", VERSION),
        Style::default().fg(TEXT).add_modifier(Modifier::DIM),
    )))
    .block(bordered(""));
    frame.render_widget(hints, footer);
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
}

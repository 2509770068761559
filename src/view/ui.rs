//! Terminal viewer for a loaded recording.
//!
//! Draws the waveform as one vertical bar per terminal column above a time
//! ruler. Terminal resizes are debounced; while a new size settles the
//! waveform is replaced by a placeholder message.

use super::debounce::ResizeDebouncer;
use super::geometry::{column_spans, label_slots, sample_for_column, tick_column};
use super::theme::{Panel, Theme};
use crate::ruler::TickSet;
use crate::scope::Oscilloscope;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

const RULER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const PLACEHOLDER: &str = "Window size changed, waiting for resizing to finish";

/// Viewer options taken from configuration.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub settle: Duration,
    pub theme: Theme,
    pub dense_labels: bool,
    /// Shown in the footer
    pub title: String,
}

/// What was derived for the current settled width.
struct Derived {
    samples: Vec<f32>,
    ticks: Option<TickSet>,
}

/// Full-screen waveform viewer.
pub struct ScopeTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    options: ViewOptions,
    debouncer: ResizeDebouncer<(u16, u16)>,
    derived: Option<Derived>,
}

impl ScopeTui {
    /// Creates a new viewer and enters alternate screen mode.
    ///
    /// # Errors
    /// - If terminal cannot be initialized
    /// - If raw mode cannot be enabled
    /// - If alternate screen cannot be entered
    pub fn new(options: ViewOptions) -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let debouncer = ResizeDebouncer::new(options.settle);

        Ok(Self {
            terminal,
            options,
            debouncer,
            derived: None,
        })
    }

    /// Runs the draw and input loop until the user quits.
    ///
    /// # Errors
    /// - If terminal rendering or event polling fails
    pub fn run(&mut self, scope: &Oscilloscope) -> anyhow::Result<()> {
        let size = self.terminal.size()?;
        self.debouncer.prime((size.width, size.height));
        self.derive(scope, size.width);

        loop {
            if let Some((width, _)) = self.debouncer.poll(Instant::now()) {
                self.derive(scope, width);
            }

            self.draw(scope)?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            tracing::debug!("Viewer closed by user");
                            break;
                        }
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            tracing::debug!("Ctrl+C pressed: closing viewer");
                            break;
                        }
                        _ => {}
                    },
                    Event::Resize(width, height) => {
                        if self.debouncer.observe((width, height), Instant::now()) {
                            tracing::trace!("Resize to {}x{} pending", width, height);
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Recomputes the view samples and ruler for a display `width` columns wide.
    fn derive(&mut self, scope: &Oscilloscope, width: u16) {
        let samples = match scope.view_samples(width as usize) {
            Ok(samples) => samples,
            Err(e) => {
                tracing::warn!("No waveform view: {e}");
                Vec::new()
            }
        };
        let ticks = match scope.tick_set(width as u32) {
            Ok(ticks) => Some(ticks),
            Err(e) => {
                tracing::warn!("No ruler: {e}");
                None
            }
        };
        tracing::debug!("Derived {} samples for width {}", samples.len(), width);
        self.derived = Some(Derived { samples, ticks });
    }

    fn draw(&mut self, scope: &Oscilloscope) -> anyhow::Result<()> {
        let settling = self.debouncer.is_settling();
        let theme = self.options.theme;
        let dense_labels = self.options.dense_labels;
        let footer_text = footer_line(&self.options.title, scope, self.derived.as_ref());
        let derived = self.derived.as_ref();

        self.terminal.draw(|frame| {
            let area = frame.area();
            let ruler_height = RULER_HEIGHT.min(area.height.saturating_sub(FOOTER_HEIGHT));

            let waveform_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area
                    .height
                    .saturating_sub(ruler_height + FOOTER_HEIGHT),
            };
            let ruler_area = Rect {
                x: area.x,
                y: area.y + waveform_area.height,
                width: area.width,
                height: ruler_height,
            };
            let footer_area = Rect {
                x: area.x,
                y: area.y + area.height.saturating_sub(FOOTER_HEIGHT),
                width: area.width,
                height: FOOTER_HEIGHT.min(area.height),
            };

            frame.render_widget(
                Block::default().style(theme.style(Panel::Waveform)),
                waveform_area,
            );
            frame.render_widget(Block::default().style(theme.style(Panel::Ruler)), ruler_area);

            if settling {
                let message = Paragraph::new(PLACEHOLDER)
                    .alignment(Alignment::Center)
                    .style(theme.style(Panel::Waveform));
                let centered = Rect {
                    y: waveform_area.y + waveform_area.height / 2,
                    height: 1.min(waveform_area.height),
                    ..waveform_area
                };
                frame.render_widget(message, centered);
            } else if let Some(derived) = derived {
                draw_waveform(frame.buffer_mut(), waveform_area, &derived.samples, &theme);
                if let Some(ticks) = &derived.ticks {
                    draw_ruler(frame.buffer_mut(), ruler_area, ticks, &theme, dense_labels);
                }
            }

            let footer = Paragraph::new(footer_text).style(
                Style::default()
                    .fg(Color::Rgb(185, 207, 212))
                    .bg(Color::Rgb(0, 0, 0)),
            );
            frame.render_widget(footer, footer_area);
        })?;

        Ok(())
    }

    /// Cleans up terminal state and exits alternate screen mode.
    ///
    /// # Errors
    /// - If terminal mode cannot be disabled
    /// - If cursor cannot be shown
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for ScopeTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn draw_waveform(buf: &mut Buffer, area: Rect, samples: &[f32], theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = theme.style(Panel::Waveform);
    let spans = column_spans(samples, area.height);

    for column in 0..area.width {
        let Some(index) = sample_for_column(column, area.width, spans.len()) else {
            continue;
        };
        let span = spans[index];
        for row in span.top..=span.bottom {
            buf.set_string(area.x + column, area.y + row, "█", style);
        }
    }
}

fn draw_ruler(buf: &mut Buffer, area: Rect, ticks: &TickSet, theme: &Theme, dense_labels: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let style = theme.style(Panel::Ruler);

    for &x in &ticks.minor {
        if let Some(column) = tick_column(x, area.width) {
            buf.set_string(area.x + column, area.y, "╵", style);
        }
    }

    let tick_rows = area.height.saturating_sub(1).max(1);
    for tick in &ticks.major {
        if let Some(column) = tick_column(tick.x, area.width) {
            for row in 0..tick_rows {
                buf.set_string(area.x + column, area.y + row, "│", style);
            }
        }
    }

    if area.height > 1 {
        let label_row = area.y + area.height - 1;
        for (column, label) in label_slots(&ticks.major, area.width, dense_labels) {
            buf.set_string(area.x + column, label_row, label, style);
        }
    }
}

fn footer_line(title: &str, scope: &Oscilloscope, derived: Option<&Derived>) -> Line<'static> {
    let duration = scope.duration();
    let minutes = (duration / 60.0).floor() as u64;
    let secs = duration - minutes as f64 * 60.0;

    let mut spans = vec![
        Span::styled(format!(" {title} "), Style::default().fg(Color::Yellow)),
        Span::raw(format!("{minutes}:{secs:04.1}")),
    ];
    if let Some(format) = scope.format() {
        spans.push(Span::raw(format!(" / {format}")));
    }
    if let Some(ticks) = derived.and_then(|d| d.ticks.as_ref()) {
        spans.push(Span::raw(format!(" / scale {}", ticks.scale)));
    }
    spans.push(Span::raw(" / q to quit"));
    Line::from(spans)
}

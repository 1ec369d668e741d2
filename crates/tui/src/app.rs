//! Main application struct and run loop.
//!
//! The `App` is the host for the [`ColorGrid`]: it tells the grid when its
//! size changes, draws it through a [`ColorGridWidget`], and forwards
//! pointer input in grid-local coordinates.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use swatch_config::Config;
use swatch_protocol::{Message, PaletteColor};
use tracing::{debug, trace};

use crate::{
    event::{event_to_message, poll_event},
    grid::ColorGrid,
    host::{Resizable, TouchAction, TouchEvent, Touchable},
    layout::{MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    terminal::AppTerminal,
    widgets::{ColorGridWidget, render_status_bar},
};

/// The main application struct.
#[derive(Debug)]
pub struct App {
    grid: ColorGrid,
    config: Config,
    /// Written by the grid's listener, read by the app.
    chosen: Rc<Cell<Option<PaletteColor>>>,
    /// Area the grid occupied at the last layout.
    grid_area: Rect,
    /// Whether the grid was laid out (terminal large enough).
    grid_visible: bool,
    should_quit: bool,
    cancelled: bool,
}

impl App {
    /// Creates a new application with the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_config::Config;
    /// use swatch_tui::App;
    ///
    /// let app = App::new(Config::default());
    /// assert_eq!(app.chosen(), None);
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        let chosen = Rc::new(Cell::new(None));
        let slot = Rc::clone(&chosen);

        let mut grid = ColorGrid::new();
        grid.init(move |color: PaletteColor| slot.set(Some(color)));

        Self {
            grid,
            config,
            chosen,
            grid_area: Rect::default(),
            grid_visible: false,
            should_quit: false,
            cancelled: false,
        }
    }

    /// Returns the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the color grid.
    #[must_use]
    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    /// Returns the most recently chosen color.
    #[must_use]
    pub fn chosen(&self) -> Option<PaletteColor> {
        self.chosen.get()
    }

    /// Returns whether the application has been asked to stop.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns what the picker reports on exit.
    ///
    /// `None` if the user quit without accepting or never chose a color.
    #[must_use]
    pub fn outcome(&self) -> Option<PaletteColor> {
        if self.cancelled {
            None
        } else {
            self.chosen.get()
        }
    }

    /// Updates the application state based on a message.
    pub fn update(&mut self, msg: Message) {
        // Pointer events are traced per grid hit in `handle_pointer`
        if !msg.is_pointer() {
            debug!(?msg, "message");
        }
        if msg.is_terminating() {
            self.should_quit = true;
            self.cancelled = msg == Message::Quit;
            return;
        }

        match msg {
            Message::Quit | Message::Confirm => {}
            Message::Resize { width, height } => {
                self.layout(Rect::new(0, 0, width, height));
            }
            Message::Press { column, row } => {
                self.handle_pointer(TouchAction::Down, column, row);
            }
            Message::Drag { column, row } => {
                self.handle_pointer(TouchAction::Move, column, row);
            }
            Message::Release { column, row } => {
                self.handle_pointer(TouchAction::Up, column, row);
            }
        }
    }

    /// Forwards a pointer event to the grid if it lands inside it.
    fn handle_pointer(&mut self, action: TouchAction, column: u16, row: u16) {
        if !self.grid_visible || !self.grid_area.contains(Position::new(column, row)) {
            return;
        }

        let event = TouchEvent::new(
            action,
            i32::from(column - self.grid_area.x),
            i32::from(row - self.grid_area.y),
        );
        let handled = self.grid.on_touch_event(&event);
        trace!(?event, handled, "pointer event");

        if handled && self.config.exit_on_choose && self.chosen.get().is_some() {
            debug!(chosen = ?self.chosen.get(), "exiting on choice");
            self.should_quit = true;
        }
    }

    /// Splits `area` into grid and status bar areas.
    ///
    /// Returns `None` if the area is below the minimum size.
    fn split(area: Rect) -> Option<(Rect, Rect)> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return None;
        }
        let [grid_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(area);
        Some((grid_area, status_area))
    }

    /// Lays out the screen and tells the grid when its size changed.
    fn layout(&mut self, area: Rect) -> Option<Rect> {
        let Some((grid_area, status_area)) = Self::split(area) else {
            self.grid_visible = false;
            return None;
        };

        let old = self.grid_area;
        self.grid_area = grid_area;
        if !self.grid_visible || old.width != grid_area.width || old.height != grid_area.height {
            self.grid.on_size_changed(
                i32::from(grid_area.width),
                i32::from(grid_area.height),
                i32::from(old.width),
                i32::from(old.height),
            );
        }
        self.grid_visible = true;
        Some(status_area)
    }

    /// Renders the application UI to the given frame.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let Some(status_area) = self.layout(area) else {
            Self::render_terminal_too_small(frame, area);
            return;
        };

        frame.render_widget(
            ColorGridWidget::new(&self.grid).labels(self.config.show_labels),
            self.grid_area,
        );
        render_status_bar(self.chosen.get(), status_area, frame.buffer_mut());
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!("Too small\nneed {MIN_WIDTH}×{MIN_HEIGHT}");
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// Returns the accepted color, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swatch_config::Config;
    /// use swatch_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Config::default());
    ///     let color = app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     println!("{color:?}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<Option<PaletteColor>> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(msg) = poll_event()?.as_ref().and_then(event_to_message) {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(self.outcome())
    }
}

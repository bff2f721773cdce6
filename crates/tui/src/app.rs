//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: messages go to the layout engine, the engine's
//! boxes go to the panes, and the panes are drawn at the placed regions.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tracing::debug;
use volley_config::{Config, LayoutPreferences};
use volley_layout::LayoutEngine;
use volley_protocol::{Message, RegionId, TerminalFrame, Workspace};

use crate::{
    AppState, Notice,
    event::{click_position, event_to_message, poll_event},
    layout::{RegionRects, chrome, place_regions, split_screen},
    terminal::AppTerminal,
    widgets::{
        Panes, render_command_bar, render_help_overlay, render_overlay, render_status_bar,
    },
};

/// The main application struct.
#[derive(Debug)]
pub struct App {
    engine: LayoutEngine,
    state: AppState,
    panes: Panes,
    /// Where each region was drawn last, used for click hit-testing.
    rects: RegionRects,
    should_quit: bool,
}

impl App {
    /// Creates an application with default layout state.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_config::Config;
    /// use volley_protocol::dummy::dummy_workspace;
    /// use volley_tui::App;
    ///
    /// let app = App::new(Config::default(), dummy_workspace());
    /// assert!(app.engine().state().workflows_present());
    /// ```
    #[must_use]
    pub fn new(config: Config, workspace: Workspace) -> Self {
        Self::with_engine(LayoutEngine::new(config.layout), workspace)
    }

    /// Creates an application around an existing engine, e.g. one restored
    /// from saved preferences.
    #[must_use]
    pub fn with_engine(mut engine: LayoutEngine, workspace: Workspace) -> Self {
        engine.set_workflows_present(workspace.has_workflows());
        Self {
            engine,
            state: AppState::new(workspace),
            panes: Panes::new(),
            rects: RegionRects::default(),
            should_quit: false,
        }
    }

    /// Returns the layout engine.
    #[must_use]
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the pane widgets.
    #[must_use]
    pub fn panes(&self) -> &Panes {
        &self.panes
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The layout state worth saving when the app exits.
    #[must_use]
    pub fn preferences(&self) -> LayoutPreferences {
        self.engine.preferences()
    }

    /// The notice shown in the status bar: the pending one-shot notice, or
    /// a warning while the terminal is below the minimum layout size.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        if self.state.notice.is_some() {
            return self.state.notice;
        }
        let frame = self.engine.frame();
        if !frame.is_known() {
            return None;
        }
        let config = self.engine.config();
        let width = config.min_layout_width();
        let height = config.min_layout_height(self.engine.chrome());
        (frame.width < width || frame.height < height).then_some(Notice::Cramped { width, height })
    }

    /// Updates the application state based on a message.
    ///
    /// While help is shown, any message other than `Quit` only dismisses
    /// it. While an overlay is open, only overlay messages and help act.
    pub fn update(&mut self, msg: Message) {
        debug!(?msg, "handling message");

        if let Message::Resize { width, height } = msg {
            self.fit(width, height);
            return;
        }
        self.state.notice = None;

        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    self.state.dismiss_help();
                }
            }
            return;
        }

        match self.engine.state().overlay() {
            Some(overlay) => self.update_overlay(overlay, msg),
            None => self.update_layout(msg),
        }
        self.sync_panes();
    }

    fn update_overlay(&mut self, overlay: RegionId, msg: Message) {
        match msg {
            Message::Escape | Message::CloseOverlay => {
                self.engine.close_overlay();
            }
            Message::OverlayNavigate { delta } => self.state.navigate_overlay(overlay, delta),
            Message::OpenOverlay { region } if region == overlay => {
                self.engine.close_overlay();
            }
            Message::OpenOverlay { region } => {
                if self.engine.open_overlay(region) {
                    self.state.reset_overlay_selection();
                }
            }
            Message::ToggleHelp => self.state.toggle_help(),
            _ => {}
        }
    }

    fn update_layout(&mut self, msg: Message) {
        match msg {
            Message::ToggleHelp => self.state.toggle_help(),
            Message::CycleFocus { direction } => {
                self.engine.cycle_focus(direction);
            }
            Message::FocusRegion { region } => {
                self.engine.focus(region);
            }
            Message::AdjustSplit { target, grow } => {
                let outcome = self.engine.step(target, grow);
                if outcome.hit_bound {
                    self.state.notice = Some(Notice::BoundReached(target));
                }
            }
            Message::ToggleOrientation { target } => {
                self.engine.toggle_orientation(target);
            }
            Message::ToggleCollapse { region } => {
                if !self.engine.toggle_collapsed(region) {
                    self.state.notice = Some(Notice::CollapseRefused(region));
                }
            }
            Message::ToggleCompare => {
                let enabled = self.engine.state().compare_enabled();
                self.engine.set_compare_enabled(!enabled);
            }
            Message::ToggleWorkflows => {
                let present = self.engine.state().workflows_present();
                if !present && !self.state.workspace.has_workflows() {
                    self.state.notice = Some(Notice::NoWorkflows);
                } else {
                    self.engine.set_workflows_present(!present);
                }
            }
            Message::OpenOverlay { region } => {
                if self.engine.open_overlay(region) {
                    self.state.reset_overlay_selection();
                }
            }
            Message::Quit
            | Message::Escape
            | Message::Resize { .. }
            | Message::CloseOverlay
            | Message::OverlayNavigate { .. } => {}
        }
    }

    /// Focuses the pane under a mouse click.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.state.help_visible || self.engine.state().overlay().is_some() {
            return;
        }
        let region = match self.rects.pane_at(column, row) {
            Some(RegionId::ResponseSecondary) => RegionId::Response,
            Some(region) => region,
            None => return,
        };
        self.update(Message::FocusRegion { region });
    }

    /// Brings the engine in line with a terminal of `width` x `height`.
    fn fit(&mut self, width: u16, height: u16) {
        let chrome = chrome(Rect::new(0, 0, width, height));
        if chrome != self.engine.chrome() {
            self.engine.set_chrome(chrome);
        }
        let frame = TerminalFrame::new(width, height);
        if frame != self.engine.frame() {
            self.engine.resize(frame);
        }
        self.sync_panes();
    }

    fn sync_panes(&mut self) {
        if let Some(boxes) = self.engine.boxes() {
            self.panes.apply_layout(boxes, self.engine.state());
        }
    }

    /// Renders the application UI to the given frame.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.fit(area.width, area.height);

        let screen = split_screen(area, self.engine.chrome());
        self.rects = match self.engine.boxes() {
            Some(boxes) => place_regions(boxes, self.engine.state().main_orientation(), screen.body),
            None => RegionRects::default(),
        };
        let notice = self.notice();

        let buf = frame.buffer_mut();
        if let Some(header) = screen.header {
            render_header(header, buf);
        }
        self.panes.render(&self.rects, &self.state.workspace, buf);

        if let Some(overlay) = self.engine.state().overlay() {
            if let Some(rect) = self.rects.get(overlay) {
                render_overlay(
                    overlay,
                    self.state.workspace.overlay_entries(overlay),
                    self.state.overlay_selection,
                    rect,
                    buf,
                );
            }
        }

        render_command_bar(screen.command_bar, buf);
        render_status_bar(self.engine.state(), notice, screen.status_bar, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use volley_config::Config;
    /// use volley_protocol::dummy::dummy_workspace;
    /// use volley_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Config::default(), dummy_workspace());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                if let Some((column, row)) = click_position(&event) {
                    self.click(column, row);
                } else if let Some(msg) = event_to_message(&event) {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Renders the one-row title header.
fn render_header(area: Rect, buf: &mut Buffer) {
    Line::from(vec![
        Span::styled(
            " volley",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("HTTP workbench", Style::default().fg(Color::White)),
    ])
    .render(area, buf);

    Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" for help ", Style::default().fg(Color::DarkGray)),
    ])
    .right_aligned()
    .render(area, buf);
}

//! Demo shell: two controlled selects over one options catalog.
//!
//! The shell owns both selection values. Each frame it hands the widgets a
//! snapshot of the catalog and the current values, and every proposal that
//! comes back from a dispatch is written into its own state - the widgets
//! remember nothing about the selection across frames.

use std::fs::File;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use droplist::event::{Key, KeyCombo, ScrollDirection};
use droplist::focus::FocusRing;
use droplist::select::{Select, SelectCtx, SelectOption, Selection};
use droplist::terminal::{self, TerminalSession};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use simplelog::{Config, LevelFilter, WriteLogger};

const SINGLE_ID: &str = "single";
const MULTI_ID: &str = "multi";

const SELECT_X: u16 = 2;
const SELECT_WIDTH: u16 = 36;
const SINGLE_ROW: u16 = 5;
const MULTI_ROW: u16 = 13;

fn main() -> Result<(), droplist::Error> {
    let log_file = File::create("droplist-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    terminal::install_panic_hook();
    let mut session = TerminalSession::new()?;
    let mut app = App::new();

    while app.running {
        session.draw(|frame| app.view(frame))?;
        let event = session.next_event()?;
        app.handle(event);
    }
    Ok(())
}

struct App {
    options: Vec<SelectOption<u32>>,
    single_value: Selection<u32>,
    multi_value: Selection<u32>,
    single: Select,
    multi: Select,
    focus: FocusRing,
    running: bool,
}

impl App {
    fn new() -> Self {
        let options: Vec<SelectOption<u32>> = vec![
            (1, "First").into(),
            (2, "Second").into(),
            (3, "Third").into(),
            (4, "Fourth").into(),
            (5, "Fifth").into(),
        ];
        let first = options[0].clone();
        Self {
            single_value: Selection::Single(Some(first.clone())),
            multi_value: Selection::Multiple(vec![first]),
            options,
            single: Select::new(SINGLE_ID).placeholder("Choose one..."),
            multi: Select::new(MULTI_ID),
            focus: FocusRing::new([SINGLE_ID, MULTI_ID]),
            running: true,
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn view(&mut self, frame: &mut Frame) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);
        text(frame, 0, "Single / multi select demo", bold);
        text(frame, 2, "Enter or Space opens and picks, arrows move the cursor", dim);
        text(frame, 3, "Tab switches fields, Escape closes, q quits", dim);

        text(frame, SINGLE_ROW - 1, "Single choice", Style::default());
        text(frame, MULTI_ROW - 1, "Multiple choice", Style::default());

        // Focused select draws last so its dropdown overlays the rest.
        if self.focus.is_focused(MULTI_ID) {
            self.view_single(frame);
            self.view_multi(frame);
        } else {
            self.view_multi(frame);
            self.view_single(frame);
        }
    }

    fn view_single(&mut self, frame: &mut Frame) {
        let area = row(frame, SINGLE_ROW, SELECT_WIDTH);
        let focused = self.focus.is_focused(SINGLE_ID);
        let ctx = SelectCtx::new(&self.options, &self.single_value);
        self.single.render(frame, area, &ctx, focused);
    }

    fn view_multi(&mut self, frame: &mut Frame) {
        let area = row(frame, MULTI_ROW, SELECT_WIDTH);
        let focused = self.focus.is_focused(MULTI_ID);
        let ctx = SelectCtx::new(&self.options, &self.multi_value);
        self.multi.render(frame, area, &ctx, focused);
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    fn handle(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.into()),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, combo: KeyCombo) {
        match combo.key {
            Key::Tab => {
                let blurred = self.focus.next();
                self.deliver_blur(blurred);
                return;
            }
            Key::BackTab => {
                let blurred = self.focus.prev();
                self.deliver_blur(blurred);
                return;
            }
            _ => {}
        }

        let handled = if self.focus.is_focused(SINGLE_ID) {
            self.key_single(&combo)
        } else if self.focus.is_focused(MULTI_ID) {
            self.key_multi(&combo)
        } else {
            false
        };

        if !handled {
            match combo.key {
                Key::Char('q') | Key::Escape => self.running = false,
                Key::Char('c') if combo.modifiers.ctrl => self.running = false,
                _ => {}
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.dispatch_click(x, y),
            MouseEventKind::Moved => {
                // At most one dropdown is open; hover is a no-op elsewhere.
                let ctx = SelectCtx::new(&self.options, &self.single_value);
                if !self.single.on_hover(x, y, &ctx).is_handled() {
                    let ctx = SelectCtx::new(&self.options, &self.multi_value);
                    self.multi.on_hover(x, y, &ctx);
                }
            }
            MouseEventKind::ScrollUp => self.dispatch_scroll(ScrollDirection::Up),
            MouseEventKind::ScrollDown => self.dispatch_scroll(ScrollDirection::Down),
            _ => {}
        }
    }

    fn dispatch_click(&mut self, x: u16, y: u16) {
        // The focused widget sits on top, so it gets first claim.
        let handled = if self.focus.is_focused(MULTI_ID) {
            self.click_multi(x, y) || self.click_single(x, y)
        } else {
            self.click_single(x, y) || self.click_multi(x, y)
        };
        if !handled {
            // Clicking empty space drops focus; blur closes any dropdown.
            let blurred = self.focus.clear();
            self.deliver_blur(blurred);
        }
    }

    fn dispatch_scroll(&mut self, direction: ScrollDirection) {
        let ctx = SelectCtx::new(&self.options, &self.single_value);
        if !self.single.on_scroll(direction, &ctx).is_handled() {
            let ctx = SelectCtx::new(&self.options, &self.multi_value);
            self.multi.on_scroll(direction, &ctx);
        }
    }

    fn key_single(&mut self, combo: &KeyCombo) -> bool {
        let ctx = SelectCtx::new(&self.options, &self.single_value);
        let outcome = self.single.on_key(combo, &ctx);
        let handled = outcome.is_handled();
        if let Some(value) = outcome.change {
            log::info!("single select changed: {value:?}");
            self.single_value = value;
        }
        handled
    }

    fn key_multi(&mut self, combo: &KeyCombo) -> bool {
        let ctx = SelectCtx::new(&self.options, &self.multi_value);
        let outcome = self.multi.on_key(combo, &ctx);
        let handled = outcome.is_handled();
        if let Some(value) = outcome.change {
            log::info!("multi select changed: {value:?}");
            self.multi_value = value;
        }
        handled
    }

    fn click_single(&mut self, x: u16, y: u16) -> bool {
        let ctx = SelectCtx::new(&self.options, &self.single_value);
        let outcome = self.single.on_click(x, y, &ctx);
        let handled = outcome.is_handled();
        if let Some(value) = outcome.change {
            log::info!("single select changed: {value:?}");
            self.single_value = value;
        }
        if handled {
            let blurred = self.focus.focus(SINGLE_ID);
            self.deliver_blur(blurred);
        }
        handled
    }

    fn click_multi(&mut self, x: u16, y: u16) -> bool {
        let ctx = SelectCtx::new(&self.options, &self.multi_value);
        let outcome = self.multi.on_click(x, y, &ctx);
        let handled = outcome.is_handled();
        if let Some(value) = outcome.change {
            log::info!("multi select changed: {value:?}");
            self.multi_value = value;
        }
        if handled {
            let blurred = self.focus.focus(MULTI_ID);
            self.deliver_blur(blurred);
        }
        handled
    }

    fn deliver_blur(&mut self, blurred: Option<String>) {
        match blurred.as_deref() {
            Some(SINGLE_ID) => self.single.on_blur(),
            Some(MULTI_ID) => self.multi.on_blur(),
            _ => {}
        }
    }
}

fn row(frame: &Frame, y: u16, width: u16) -> Rect {
    Rect::new(SELECT_X, y, width, 1).intersection(frame.area())
}

fn text(frame: &mut Frame, y: u16, content: &str, style: Style) {
    let area = row(frame, y, content.len() as u16);
    frame.render_widget(Paragraph::new(content).style(style), area);
}

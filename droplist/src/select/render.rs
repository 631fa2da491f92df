//! Rendering for the select widget.
//!
//! The trigger row is `[value region] [clear ×] [divider │] [caret]`; the
//! dropdown paints below it while open. Rendering also refreshes the hit
//! regions that pointer dispatch resolves against, so clicks always land
//! on what the last frame actually showed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{Select, SelectCtx, SelectOption};

/// Width of the fixed right-hand controls: " × │ ▼"
const CONTROLS_WIDTH: u16 = 6;

const FOCUS_BG: Color = Color::Rgb(70, 70, 95);

/// Hit regions cached by the last render.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitRegions {
    /// The whole trigger row; clicks here toggle open/closed.
    pub(crate) trigger: Rect,
    /// The clear control cell.
    pub(crate) clear: Rect,
    /// One region per removal badge, parallel to the selection order.
    pub(crate) badges: Vec<Rect>,
    /// The visible dropdown rows; zero-sized while closed.
    pub(crate) list: Rect,
}

/// One dropdown row in the derived projection.
///
/// Both flags are recomputed from the snapshot on every call, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionRow<'a, T> {
    /// Position in the catalog.
    pub index: usize,
    /// The catalog entry.
    pub option: &'a SelectOption<T>,
    /// Membership test against the current selection.
    pub selected: bool,
    /// Whether the highlight cursor sits on this row.
    pub highlighted: bool,
}

impl Select {
    /// The derived projection of the catalog against the current state.
    pub fn rows<'a, T: Clone + PartialEq>(
        &self,
        ctx: &SelectCtx<'a, T>,
    ) -> Vec<OptionRow<'a, T>> {
        ctx.options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionRow {
                index,
                option,
                selected: ctx.value.contains(option),
                highlighted: index == self.state.highlighted(),
            })
            .collect()
    }

    /// Draw the widget into `area` (one row for the trigger; the dropdown
    /// overflows below while open) and refresh the cached hit regions.
    pub fn render<T: Clone + PartialEq>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &SelectCtx<'_, T>,
        focused: bool,
    ) {
        let trigger = Rect {
            height: area.height.min(1),
            ..area
        };
        self.regions = HitRegions {
            trigger,
            ..HitRegions::default()
        };
        if trigger.height == 0 || trigger.width <= CONTROLS_WIDTH {
            return;
        }

        let base = if focused {
            Style::default().bg(FOCUS_BG).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_width = trigger.width - CONTROLS_WIDTH;

        let mut spans: Vec<Span<'static>> = Vec::new();
        let used = if ctx.value.is_multiple() {
            self.render_badges(ctx, trigger, value_width, base, &mut spans)
        } else {
            self.render_single_value(ctx, value_width, base, &mut spans)
        };
        if used < value_width {
            spans.push(Span::styled(" ".repeat((value_width - used) as usize), base));
        }

        let caret = if self.state.is_open() { "▲" } else { "▼" };
        let dim = base.add_modifier(Modifier::DIM);
        spans.push(Span::styled(" ", base));
        spans.push(Span::styled("×", dim));
        spans.push(Span::styled(" ", base));
        spans.push(Span::styled("│", dim));
        spans.push(Span::styled(" ", base));
        spans.push(Span::styled(caret, dim));

        frame.render_widget(Paragraph::new(Line::from(spans)), trigger);
        self.regions.clear = Rect::new(trigger.x + value_width + 1, trigger.y, 1, 1);

        if self.state.is_open() {
            self.render_list(frame, trigger, ctx);
        }
    }

    /// Badge tokens for the multiple-mode value region. Returns the cell
    /// width consumed; badges that do not fit are elided behind `…`.
    fn render_badges<T: Clone + PartialEq>(
        &mut self,
        ctx: &SelectCtx<'_, T>,
        trigger: Rect,
        value_width: u16,
        base: Style,
        spans: &mut Vec<Span<'static>>,
    ) -> u16 {
        let badge_style = base.add_modifier(Modifier::REVERSED);
        let mut used: u16 = 0;
        for (position, item) in ctx.value.items().iter().enumerate() {
            let token = format!("{} ×", item.label);
            let token_width = token.width() as u16;
            let gap = if position == 0 { 0 } else { 1 };
            if used + gap + token_width > value_width {
                if used < value_width {
                    spans.push(Span::styled("…", base.add_modifier(Modifier::DIM)));
                    used += 1;
                }
                break;
            }
            if gap > 0 {
                spans.push(Span::styled(" ", base));
            }
            self.regions.badges.push(Rect::new(
                trigger.x + used + gap,
                trigger.y,
                token_width,
                1,
            ));
            spans.push(Span::styled(token, badge_style));
            used += gap + token_width;
        }
        used
    }

    /// Label or dimmed placeholder for the single-mode value region.
    fn render_single_value<T: Clone + PartialEq>(
        &self,
        ctx: &SelectCtx<'_, T>,
        value_width: u16,
        base: Style,
        spans: &mut Vec<Span<'static>>,
    ) -> u16 {
        let (text, style) = match ctx.value.items().first() {
            Some(option) => (option.label.clone(), base),
            None => (
                self.placeholder.clone(),
                base.add_modifier(Modifier::DIM),
            ),
        };
        let (text, used) = truncate_to_width(&text, value_width);
        spans.push(Span::styled(text, style));
        used
    }

    fn render_list<T: Clone + PartialEq>(
        &mut self,
        frame: &mut Frame,
        trigger: Rect,
        ctx: &SelectCtx<'_, T>,
    ) {
        let top = trigger.y + 1;
        let available = frame.area().bottom().saturating_sub(top);
        let height = (ctx.options.len() as u16).min(available);
        if height == 0 {
            return;
        }
        let list = Rect::new(trigger.x, top, trigger.width, height);

        let lines: Vec<Line> = self
            .rows(ctx)
            .into_iter()
            .take(height as usize)
            .map(|row| {
                let mut style = Style::default();
                if row.selected {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if row.highlighted {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let (text, used) = truncate_to_width(&row.option.label, list.width);
                let pad = " ".repeat((list.width - used) as usize);
                Line::from(Span::styled(format!("{text}{pad}"), style))
            })
            .collect();

        frame.render_widget(Clear, list);
        frame.render_widget(Paragraph::new(lines), list);
        self.regions.list = list;
    }
}

/// Cut `text` down to at most `max` display cells, appending `…` when
/// anything was dropped. Returns the text and its cell width.
fn truncate_to_width(text: &str, max: u16) -> (String, u16) {
    let full = text.width() as u16;
    if full <= max {
        return (text.to_string(), full);
    }
    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used: u16 = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    (out, used + 1)
}

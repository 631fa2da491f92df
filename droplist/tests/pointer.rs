//! Tests for pointer dispatch: clicks, hover sync, and blur.
//!
//! Pointer handling resolves against the hit regions cached by the last
//! render, so every interaction here draws into a test backend first,
//! exactly like one frame of the real event loop.

use droplist::event::ScrollDirection;
use droplist::select::{Select, SelectCtx, SelectOption, Selection};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

const WIDTH: u16 = 40;

fn catalog() -> Vec<SelectOption<u32>> {
    vec![
        SelectOption::new(1, "First"),
        SelectOption::new(2, "Second"),
        SelectOption::new(3, "Third"),
    ]
}

fn draw(select: &mut Select, options: &[SelectOption<u32>], value: &Selection<u32>) {
    let backend = TestBackend::new(WIDTH, 10);
    let mut terminal = Terminal::new(backend).unwrap();
    let ctx = SelectCtx::new(options, value);
    terminal
        .draw(|frame| select.render(frame, Rect::new(0, 0, WIDTH, 1), &ctx, true))
        .unwrap();
}

fn click(
    select: &mut Select,
    x: u16,
    y: u16,
    options: &[SelectOption<u32>],
    value: &Selection<u32>,
) -> Option<Selection<u32>> {
    draw(select, options, value);
    let ctx = SelectCtx::new(options, value);
    select.on_click(x, y, &ctx).change
}

// The trigger row is [value region (34)] [ × │ ▼]: the clear control
// lands on column 35.
const CLEAR_X: u16 = WIDTH - 5;

#[test]
fn test_body_click_toggles_open_and_resets_cursor() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::single();

    let change = click(&mut select, 10, 0, &options, &value);
    assert!(select.is_open());
    assert_eq!(select.highlighted(), 0);
    assert_eq!(change, None, "toggling proposes nothing");

    let change = click(&mut select, 10, 0, &options, &value);
    assert!(!select.is_open());
    assert_eq!(change, None);
}

#[test]
fn test_option_click_selects_and_closes() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::multiple();

    click(&mut select, 10, 0, &options, &value);
    // Row 1 of the dropdown sits on screen row 2.
    let change = click(&mut select, 5, 2, &options, &value);
    assert!(!select.is_open());
    assert_eq!(
        change,
        Some(Selection::Multiple(vec![SelectOption::new(2, "Second")]))
    );
}

#[test]
fn test_option_click_on_current_single_value_closes_silently() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::Single(Some(SelectOption::new(1, "First")));

    click(&mut select, 10, 0, &options, &value);
    let change = click(&mut select, 5, 1, &options, &value);
    assert!(!select.is_open());
    assert_eq!(change, None);
}

#[test]
fn test_clear_click_proposes_empty_without_toggling() {
    let mut select = Select::new("s");
    let options = catalog();

    // Closed: clearing must not open the list.
    let value = Selection::Single(Some(SelectOption::new(2, "Second")));
    let change = click(&mut select, CLEAR_X, 0, &options, &value);
    assert_eq!(change, Some(Selection::Single(None)));
    assert!(!select.is_open());

    // Open: clearing must not close it either.
    let value = Selection::Multiple(vec![SelectOption::new(1, "First")]);
    click(&mut select, 10, 0, &options, &value);
    assert!(select.is_open());
    let change = click(&mut select, CLEAR_X, 0, &options, &value);
    assert_eq!(change, Some(Selection::Multiple(vec![])));
    assert!(select.is_open());
}

#[test]
fn test_clear_on_empty_selection_still_proposes() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::<u32>::multiple();
    let change = click(&mut select, CLEAR_X, 0, &options, &value);
    assert_eq!(change, Some(Selection::Multiple(vec![])));
}

#[test]
fn test_badge_click_removes_exactly_that_option() {
    let mut select = Select::new("s");
    let options = catalog();
    // Badges: "First ×" on columns 0..7, a gap, "Second ×" from column 8.
    let value = Selection::Multiple(vec![
        SelectOption::new(1, "First"),
        SelectOption::new(2, "Second"),
    ]);

    let change = click(&mut select, 1, 0, &options, &value);
    assert_eq!(
        change,
        Some(Selection::Multiple(vec![SelectOption::new(2, "Second")])),
        "order-preserving removal of the first badge"
    );
    assert!(!select.is_open(), "badge click does not reach the toggle");

    // Same removal while open: the list stays open. The two badges cover
    // columns 0..16, so the opening click lands past them.
    click(&mut select, 20, 0, &options, &value);
    assert!(select.is_open());
    let change = click(&mut select, 9, 0, &options, &value);
    assert_eq!(
        change,
        Some(Selection::Multiple(vec![SelectOption::new(1, "First")]))
    );
    assert!(select.is_open());
}

#[test]
fn test_hover_moves_the_shared_cursor() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::single();

    click(&mut select, 10, 0, &options, &value);
    draw(&mut select, &options, &value);
    let ctx = SelectCtx::new(&options, &value);
    let result = select.on_hover(5, 3, &ctx);
    assert!(result.is_handled());
    assert_eq!(select.highlighted(), 2);

    // Keyboard picks up where the pointer left the cursor.
    let result = select.on_hover(5, 2, &ctx);
    assert!(result.is_handled());
    assert_eq!(select.highlighted(), 1);
}

#[test]
fn test_hover_outside_the_list_is_ignored() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::single();
    let ctx = SelectCtx::new(&options, &value);

    // Closed: nothing to hover.
    draw(&mut select, &options, &value);
    assert!(!select.on_hover(5, 2, &ctx).is_handled());

    click(&mut select, 10, 0, &options, &value);
    draw(&mut select, &options, &value);
    assert!(!select.on_hover(5, 8, &ctx).is_handled());
    assert_eq!(select.highlighted(), 0);
}

#[test]
fn test_scroll_moves_the_cursor_while_open() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::single();
    let ctx = SelectCtx::new(&options, &value);

    assert!(!select.on_scroll(ScrollDirection::Down, &ctx).is_handled());

    click(&mut select, 10, 0, &options, &value);
    select.on_scroll(ScrollDirection::Down, &ctx);
    select.on_scroll(ScrollDirection::Down, &ctx);
    assert_eq!(select.highlighted(), 2);
    select.on_scroll(ScrollDirection::Up, &ctx);
    assert_eq!(select.highlighted(), 1);
}

#[test]
fn test_blur_closes_without_proposing() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::Multiple(vec![SelectOption::new(1, "First")]);

    click(&mut select, 10, 0, &options, &value);
    assert!(select.is_open());
    select.on_blur();
    assert!(!select.is_open());
}

#[test]
fn test_click_outside_is_ignored() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::single();
    draw(&mut select, &options, &value);
    let ctx = SelectCtx::new(&options, &value);
    let outcome = select.on_click(10, 5, &ctx);
    assert!(!outcome.is_handled());
    assert!(!select.is_open());
}

//! Tests for the rendered projection.

use droplist::event::{Key, KeyCombo};
use droplist::select::{Select, SelectCtx, SelectOption, Selection};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

const WIDTH: u16 = 30;

fn catalog() -> Vec<SelectOption<u32>> {
    vec![
        SelectOption::new(1, "First"),
        SelectOption::new(2, "Second"),
        SelectOption::new(3, "Third"),
    ]
}

fn draw(select: &mut Select, options: &[SelectOption<u32>], value: &Selection<u32>) -> Terminal<TestBackend> {
    let backend = TestBackend::new(WIDTH, 8);
    let mut terminal = Terminal::new(backend).unwrap();
    let ctx = SelectCtx::new(options, value);
    terminal
        .draw(|frame| select.render(frame, Rect::new(0, 0, WIDTH, 1), &ctx, false))
        .unwrap();
    terminal
}

fn line(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer.cell((x, y)).unwrap().symbol())
        .collect()
}

#[test]
fn test_trigger_shows_the_selected_label() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::Single(Some(SelectOption::new(2, "Second")));
    let terminal = draw(&mut select, &options, &value);
    let row = line(&terminal, 0);
    assert!(row.starts_with("Second"), "got {row:?}");
    assert!(row.contains('×'));
    assert!(row.contains('│'));
    assert!(row.ends_with('▼'));
}

#[test]
fn test_trigger_shows_placeholder_while_unset() {
    let mut select = Select::new("s").placeholder("Pick one");
    let options = catalog();
    let value = Selection::single();
    let terminal = draw(&mut select, &options, &value);
    assert!(line(&terminal, 0).starts_with("Pick one"));
}

#[test]
fn test_badges_render_as_dismissible_tokens() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::Multiple(vec![
        SelectOption::new(1, "First"),
        SelectOption::new(3, "Third"),
    ]);
    let terminal = draw(&mut select, &options, &value);
    assert!(line(&terminal, 0).starts_with("First × Third ×"));
}

#[test]
fn test_open_list_renders_below_with_flipped_caret() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::single();
    let ctx = SelectCtx::new(&options, &value);
    select.on_key(&KeyCombo::key(Key::Down), &ctx);

    let terminal = draw(&mut select, &options, &value);
    assert!(line(&terminal, 0).ends_with('▲'));
    assert!(line(&terminal, 1).starts_with("First"));
    assert!(line(&terminal, 2).starts_with("Second"));
    assert!(line(&terminal, 3).starts_with("Third"));
    assert!(line(&terminal, 4).trim().is_empty());
}

#[test]
fn test_long_labels_truncate_with_ellipsis() {
    let mut select = Select::new("s");
    let options = vec![SelectOption::new(1, "An unreasonably long option label")];
    let value = Selection::Single(Some(options[0].clone()));
    let terminal = draw(&mut select, &options, &value);
    let row = line(&terminal, 0);
    assert!(row.contains('…'), "got {row:?}");
    assert!(row.ends_with('▼'));
}

#[test]
fn test_projection_flags_follow_state_and_value() {
    let mut select = Select::new("s");
    let options = catalog();
    let value = Selection::Multiple(vec![SelectOption::new(3, "Third")]);
    let ctx = SelectCtx::new(&options, &value);
    select.on_key(&KeyCombo::key(Key::Down), &ctx);
    select.on_key(&KeyCombo::key(Key::Down), &ctx);

    let rows = select.rows(&ctx);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.index == r.option.value as usize - 1));
    assert_eq!(
        rows.iter().map(|r| r.highlighted).collect::<Vec<_>>(),
        [false, true, false]
    );
    assert_eq!(
        rows.iter().map(|r| r.selected).collect::<Vec<_>>(),
        [false, false, true]
    );
}

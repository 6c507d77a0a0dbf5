use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn create_test_picker_state() -> PickerState {
    let mut state = PickerState::new(DEFAULT_COLOR, Theme::Light, SmallRng::seed_from_u64(7));
    state.update_screen_dimensions(1280, 720);
    state.needs_redraw = false;
    state
}

fn click_center(state: &mut PickerState, rect: crate::util::Rect) {
    let (x, y) = rect.center();
    state.on_mouse_press(MouseButton::Left, x as i32, y as i32);
}

#[test]
fn test_initial_state() {
    let state = PickerState::new(DEFAULT_COLOR, Theme::default(), SmallRng::seed_from_u64(1));
    assert_eq!(state.selected_color(), "#ffffff");
    assert!(!state.is_dark_mode());
    assert!(state.bubbles().is_empty());
    assert!(state.needs_redraw);
    assert!(!state.should_exit);
}

#[test]
fn test_select_color_updates_text_color() {
    let mut state = create_test_picker_state();
    assert_eq!(state.text_color(), "#000000");

    assert!(state.select_color("#000000"));
    assert_eq!(state.selected_color(), "#000000");
    assert_eq!(state.text_color(), "#ffffff");
    assert!(state.needs_redraw);
}

#[test]
fn test_select_same_color_is_noop() {
    let mut state = create_test_picker_state();
    assert!(!state.select_color("#ffffff"));
    assert!(!state.needs_redraw);
}

#[test]
fn test_select_color_stores_value_verbatim() {
    let mut state = create_test_picker_state();
    assert!(state.select_color("not-a-color"));
    assert_eq!(state.selected_color(), "not-a-color");
    assert_eq!(state.text_color(), "#ffffff");
}

#[test]
fn test_toggle_theme_twice_restores() {
    let mut state = create_test_picker_state();
    state.toggle_theme();
    assert!(state.is_dark_mode());
    assert!(state.needs_redraw);
    state.toggle_theme();
    assert!(!state.is_dark_mode());
}

#[test]
fn test_toggle_does_not_touch_selection() {
    let mut state = create_test_picker_state();
    state.select_color("#5f27cd");
    state.toggle_theme();
    assert_eq!(state.selected_color(), "#5f27cd");
}

#[test]
fn test_t_key_toggles_theme() {
    let mut state = create_test_picker_state();
    state.on_key_press(Key::Char('t'));
    assert_eq!(state.theme(), Theme::Dark);
}

#[test]
fn test_escape_and_q_request_exit() {
    let mut state = create_test_picker_state();
    state.on_key_press(Key::Escape);
    assert!(state.should_exit);

    let mut state = create_test_picker_state();
    state.on_key_press(Key::Char('q'));
    assert!(state.should_exit);
}

#[test]
fn test_click_toggle_button() {
    let mut state = create_test_picker_state();
    let button = state.layout().toggle_button;
    click_center(&mut state, button);
    assert!(state.is_dark_mode());
    click_center(&mut state, button);
    assert!(!state.is_dark_mode());
}

#[test]
fn test_right_click_is_ignored() {
    let mut state = create_test_picker_state();
    let (x, y) = state.layout().toggle_button.center();
    state.on_mouse_press(MouseButton::Right, x as i32, y as i32);
    assert!(!state.is_dark_mode());
    assert!(!state.needs_redraw);
}

#[test]
fn test_click_input_then_type_commits_color() {
    let mut state = create_test_picker_state();
    let field = state.layout().color_input;
    click_center(&mut state, field);
    assert!(state.hex_input.is_focused());
    assert_eq!(state.hex_input.buffer(), "#ffffff");

    for _ in 0..7 {
        state.on_key_press(Key::Backspace);
    }
    for ch in "#FECA57".chars() {
        state.on_key_press(Key::Char(ch));
    }
    state.on_key_press(Key::Return);

    assert!(!state.hex_input.is_focused());
    assert_eq!(state.selected_color(), "#feca57");
    assert_eq!(state.text_color(), "#000000");
}

#[test]
fn test_keys_go_to_focused_input() {
    let mut state = create_test_picker_state();
    state.on_key_press(Key::Tab);
    assert!(state.hex_input.is_focused());

    // 't' is not a hex digit, so the field ignores it and the theme stays put
    state.on_key_press(Key::Char('t'));
    assert!(!state.is_dark_mode());

    state.on_key_press(Key::Escape);
    assert!(!state.hex_input.is_focused());
    assert!(!state.should_exit);
}

#[test]
fn test_invalid_commit_keeps_selection() {
    let mut state = create_test_picker_state();
    state.on_key_press(Key::Char('/'));
    for _ in 0..7 {
        state.on_key_press(Key::Backspace);
    }
    state.on_key_press(Key::Char('1'));
    state.on_key_press(Key::Char('2'));
    state.on_key_press(Key::Return);

    assert!(state.hex_input.is_focused());
    assert!(state.hex_input.is_invalid());
    assert_eq!(state.selected_color(), "#ffffff");
}

#[test]
fn test_click_background_blurs_input() {
    let mut state = create_test_picker_state();
    state.on_key_press(Key::Tab);
    state.on_mouse_press(MouseButton::Left, 2, 700);
    assert!(!state.hex_input.is_focused());
}

#[test]
fn test_bubbles_follow_stagger_schedule() {
    let mut state = create_test_picker_state();
    let t0 = Instant::now();
    state.mount(t0);

    assert!(state.advance_bubbles(t0));
    assert_eq!(state.bubbles().len(), 1);
    assert!(state.needs_redraw);

    state.advance_bubbles(t0 + Duration::from_secs(4));
    assert_eq!(state.bubbles().len(), 3);
    assert!(state.is_animating());

    state.advance_bubbles(t0 + Duration::from_secs(7));
    assert_eq!(state.bubbles().len(), 4);
    let next = state.next_bubble_deadline().unwrap();
    assert!(next > t0 + Duration::from_secs(7));
    assert!(next <= t0 + Duration::from_secs(10));
}

#[test]
fn test_unmount_stops_spawning() {
    let mut state = create_test_picker_state();
    let t0 = Instant::now();
    state.mount(t0);
    state.advance_bubbles(t0);
    state.unmount();

    state.advance_bubbles(t0 + Duration::from_secs(30));
    assert!(state.bubbles().is_empty());
    assert!(state.next_bubble_deadline().is_none());
}

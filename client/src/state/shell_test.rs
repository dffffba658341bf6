use super::*;

#[test]
fn default_shell_is_hidden_at_origin() {
    let state = ShellState::default();
    assert!(!state.visible);
    assert_eq!(state.pointer, Pointer::default());
}

#[test]
fn mark_visible_latches() {
    let mut state = ShellState::default();
    state.mark_visible();
    state.mark_visible();
    assert!(state.visible);
}

#[test]
fn entrance_class_gated_on_visibility() {
    let mut state = ShellState::default();
    assert_eq!(state.entrance("animate-fade-in-up"), "is-hidden");
    state.mark_visible();
    assert_eq!(state.entrance("animate-fade-in-up"), "animate-fade-in-up");
}

#[test]
fn dots_scale_pointer_by_factor() {
    let mut state = ShellState::default();
    state.track_pointer(1000.0, 400.0);
    let dots = state.dots();
    assert!((dots[0].left_pct - 10.0).abs() < 1e-9);
    assert!((dots[0].top_pct - 4.0).abs() < 1e-9);
    assert!((dots[1].left_pct - 20.0).abs() < 1e-9);
    assert!((dots[1].top_pct - 8.0).abs() < 1e-9);
    assert!((dots[2].left_pct - 5.0).abs() < 1e-9);
    assert!((dots[2].top_pct - 2.0).abs() < 1e-9);
}

#[test]
fn dots_at_origin_sit_at_zero() {
    let dots = ShellState::default().dots();
    assert!(dots.iter().all(|d| d.left_pct == 0.0 && d.top_pct == 0.0));
}

#[test]
fn dot_style_includes_position_and_delay() {
    let mut state = ShellState::default();
    state.track_pointer(200.0, 100.0);
    assert_eq!(state.dots()[1].style(), "left: 4%; top: 2%; animation-delay: 1s;");
}

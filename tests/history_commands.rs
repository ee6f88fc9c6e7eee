use egui::Pos2;
use freehand_canvas::{CanvasEvent, DrawingState, EventBus, InputEvent, Outcome};
use freehand_canvas::event::EventLog;

fn draw_stroke(state: &mut DrawingState, x: f32) {
    let _ = state.handle_input(InputEvent::PointerDown {
        position: Pos2::new(x, x),
    });
    let _ = state.handle_input(InputEvent::PointerMove {
        position: Pos2::new(x + 1.0, x),
    });
    let _ = state.handle_input(InputEvent::PointerUp);
}

#[test]
fn test_undo_removes_only_last_stroke() {
    let mut state = DrawingState::new();
    for x in [1.0, 2.0, 3.0] {
        draw_stroke(&mut state, x);
    }
    let first_two = state.history().snapshot()[..2].to_vec();

    assert_eq!(state.undo(), Outcome::Applied);
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.history().snapshot(), first_two.as_slice());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut state = DrawingState::new();
    assert_eq!(state.undo(), Outcome::Ignored);
    assert!(state.history().is_empty());
}

#[test]
fn test_clear_then_draw_again() {
    let mut state = DrawingState::new();
    draw_stroke(&mut state, 1.0);
    draw_stroke(&mut state, 2.0);

    assert_eq!(state.clear(), Outcome::Applied);
    assert_eq!(state.history().len(), 0);

    draw_stroke(&mut state, 7.0);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history().snapshot()[0].path().as_str(), "M7,7 L8,7");
}

#[test]
fn test_clear_always_yields_empty_idle_state() {
    // Empty, idle
    let mut state = DrawingState::new();
    let _ = state.clear();
    assert!(state.history().is_empty());
    assert!(!state.recorder().is_recording());

    // Strokes plus a gesture in progress
    draw_stroke(&mut state, 1.0);
    let _ = state.handle_input(InputEvent::PointerDown {
        position: Pos2::new(4.0, 4.0),
    });
    let _ = state.clear();
    assert!(state.history().is_empty());
    assert!(!state.recorder().is_recording());
    assert!(state.render_frame().is_empty());
}

#[test]
fn test_snapshot_is_idempotent() {
    let mut state = DrawingState::new();
    draw_stroke(&mut state, 1.0);
    draw_stroke(&mut state, 2.0);

    let first = state.history().snapshot().to_vec();
    let second = state.history().snapshot().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_history_subscribers_see_every_change() {
    let mut state = DrawingState::new();
    let log = EventLog::new(32);
    state.subscribe(Box::new(log.clone()));

    draw_stroke(&mut state, 1.0);
    let _ = state.undo();
    draw_stroke(&mut state, 2.0);
    let _ = state.clear();

    let history_events: Vec<CanvasEvent> = log
        .events()
        .into_iter()
        .filter(CanvasEvent::changes_history)
        .collect();
    assert_eq!(history_events.len(), 4);
    assert_eq!(history_events[1], CanvasEvent::StrokeUndone { remaining: 0 });
    assert_eq!(history_events[3], CanvasEvent::HistoryCleared);
}

#[test]
fn test_bus_without_subscribers_accepts_events() {
    let bus = EventBus::default();
    bus.emit(CanvasEvent::HistoryCleared);
    assert_eq!(bus.handler_count(), 0);
}

use egui::Pos2;
use freehand_canvas::{
    Color, DrawingState, InputEvent, Outcome, PenSettings, Stroke, StrokeRecorder, StrokeWidth,
};

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        position: Pos2::new(x, y),
    }
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        position: Pos2::new(x, y),
    }
}

fn count_commands(encoding: &str, command: char) -> usize {
    encoding
        .split_whitespace()
        .filter(|token| token.starts_with(command))
        .count()
}

#[test]
fn test_three_point_stroke_scenario() {
    let mut state = DrawingState::new();
    let _ = state.select_color(Color::Red);
    let _ = state.select_width(StrokeWidth::Medium);

    let _ = state.handle_input(down(10.0, 10.0));
    let _ = state.handle_input(moved(20.0, 10.0));
    let _ = state.handle_input(moved(20.0, 20.0));
    let stroke = state.commit_stroke().cloned().unwrap();

    assert_eq!(stroke.path().as_str(), "M10,10 L20,10 L20,20");
    assert_eq!(stroke.color().hex(), "#FF0000");
    assert_eq!(stroke.width().pixels(), 5);
    assert_eq!(state.history().len(), 1);
}

#[test]
fn test_single_tap_commits_dot_stroke() {
    let mut state = DrawingState::new();
    let _ = state.handle_input(down(5.0, 5.0));
    assert_eq!(state.handle_input(InputEvent::PointerUp), Outcome::Applied);

    let strokes = state.history().snapshot();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].path().as_str(), "M5,5");
    assert_eq!(strokes[0].color(), Color::Black);
    assert_eq!(strokes[0].width(), StrokeWidth::Thin);
}

#[test]
fn test_line_count_matches_extend_calls() {
    for extends in 0..12 {
        let mut recorder = StrokeRecorder::new();
        let _ = recorder.begin(Pos2::new(0.0, 0.0));
        for i in 0..extends {
            let _ = recorder.extend(Pos2::new(i as f32 * 1.5, 3.0));
        }
        let stroke = recorder.commit(&PenSettings::default()).unwrap();
        let encoding = stroke.path().as_str();

        assert!(encoding.starts_with('M'));
        assert_eq!(count_commands(encoding, 'M'), 1);
        assert_eq!(count_commands(encoding, 'L'), extends);
        assert_eq!(stroke.path().segment_count(), extends);
    }
}

#[test]
fn test_commit_while_idle_leaves_history_alone() {
    let mut state = DrawingState::new();
    assert!(state.commit_stroke().is_none());
    assert_eq!(state.handle_input(InputEvent::PointerUp), Outcome::Ignored);
    assert!(state.history().is_empty());
}

#[test]
fn test_extend_while_idle_is_noop() {
    let mut state = DrawingState::new();
    let _ = state.handle_input(down(1.0, 1.0));
    let _ = state.handle_input(InputEvent::PointerUp);
    let before: Vec<Stroke> = state.history().snapshot().to_vec();

    assert_eq!(state.handle_input(moved(9.0, 9.0)), Outcome::Ignored);
    assert_eq!(state.history().snapshot(), before.as_slice());
    assert!(state.recorder().current_encoding().is_none());
}

#[test]
fn test_color_change_mid_stroke_applies_to_whole_stroke() {
    let mut state = DrawingState::new();
    let _ = state.handle_input(down(0.0, 0.0));
    let _ = state.handle_input(moved(1.0, 0.0));
    let _ = state.select_color(Color::Orange);
    let _ = state.handle_input(moved(2.0, 0.0));
    let _ = state.handle_input(InputEvent::PointerUp);

    assert_eq!(state.history().snapshot()[0].color(), Color::Orange);
}

#[test]
fn test_live_encoding_tracks_gesture() {
    let mut state = DrawingState::new();
    assert!(state.render_frame().is_empty());

    let _ = state.handle_input(down(3.0, 4.0));
    let _ = state.handle_input(moved(5.5, 6.0));
    assert_eq!(
        state.recorder().current_encoding().map(|p| p.as_str()),
        Some("M3,4 L5.5,6")
    );

    let _ = state.handle_input(InputEvent::PointerUp);
    assert!(state.recorder().current_encoding().is_none());
    let frame = state.render_frame();
    assert_eq!(frame.len(), 1);
    assert!(!frame[0].live);
}

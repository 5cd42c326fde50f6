mod common;

use common::{ManualLoader, Recorder, editor, mounts};
use scene_editor::video::{DEFAULT_VIDEO_URL, HeadlessPlayer, PlaybackOptions, VideoPlayer};
use scene_editor::{
    Command, Editor, EditorConfig, EditorError, EditorEvent, EditorResult, PlaybackState,
};

/// Player whose sources never load
#[derive(Default)]
struct UnreachablePlayer;

impl VideoPlayer for UnreachablePlayer {
    fn load(&mut self, url: &str, _options: PlaybackOptions) -> EditorResult<()> {
        Err(EditorError::resource_load(url, "connection refused"))
    }
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn unload(&mut self) {}
    fn is_playing(&self) -> bool {
        false
    }
    fn current_time(&self) -> f64 {
        0.0
    }
}

fn editor_with(config: EditorConfig, player: Box<dyn VideoPlayer>) -> Editor {
    Editor::new(config, &mounts(), Box::new(ManualLoader::default()), player).unwrap()
}

fn video_state(editor: &scene_editor::Editor) -> PlaybackState {
    editor.state().video.state()
}

#[test]
fn test_toggle_sequence_cycles_play_and_pause() {
    let (mut editor, _loader) = editor();
    assert_eq!(video_state(&editor), PlaybackState::Absent);

    editor.execute(Command::ToggleVideo);
    assert_eq!(video_state(&editor), PlaybackState::Playing);
    assert_eq!(editor.state().video.url(), DEFAULT_VIDEO_URL);

    editor.execute(Command::ToggleVideo);
    assert_eq!(video_state(&editor), PlaybackState::Paused);

    editor.execute(Command::ToggleVideo);
    assert_eq!(video_state(&editor), PlaybackState::Playing);
}

#[test]
fn test_stop_is_idempotent() {
    let (mut editor, _loader) = editor();

    editor.execute(Command::StopVideo);
    assert_eq!(video_state(&editor), PlaybackState::Absent);

    editor.execute(Command::ToggleVideo);
    editor.execute(Command::StopVideo);
    assert_eq!(video_state(&editor), PlaybackState::Absent);
    assert_eq!(editor.state().video.url(), "");

    editor.execute(Command::StopVideo);
    assert_eq!(video_state(&editor), PlaybackState::Absent);
}

#[test]
fn test_stop_from_paused_then_toggle_plays_again() {
    let (mut editor, _loader) = editor();

    editor.execute(Command::ToggleVideo);
    editor.execute(Command::ToggleVideo);
    assert_eq!(video_state(&editor), PlaybackState::Paused);

    editor.execute(Command::StopVideo);
    editor.execute(Command::ToggleVideo);
    assert_eq!(video_state(&editor), PlaybackState::Playing);
}

#[test]
fn test_time_advances_only_while_playing() {
    let (mut editor, _loader) = editor();

    editor.tick(1.0);
    assert_eq!(editor.state().video.current_time(), 0.0);

    editor.execute(Command::ToggleVideo);
    editor.tick(1.5);
    let played = editor.state().video.current_time();
    assert!((played - 1.5).abs() < 1e-9);

    editor.execute(Command::ToggleVideo);
    editor.tick(3.0);
    assert_eq!(editor.state().video.current_time(), played);
}

#[test]
fn test_empty_video_source_stays_absent() {
    let config = EditorConfig::from_json(r#"{ "video_url": "" }"#).unwrap();
    let mut editor = editor_with(config, Box::new(HeadlessPlayer::new()));
    let recorder = Recorder::default();
    editor.subscribe(Box::new(recorder.clone()));

    for _ in 0..2 {
        editor.execute(Command::ToggleVideo);
        assert_eq!(video_state(&editor), PlaybackState::Absent);
        assert!(!editor.state().video.is_playing());
        assert_eq!(editor.state().video.url(), "");
    }

    let failures = recorder
        .events()
        .into_iter()
        .filter(|e| matches!(e, EditorEvent::ResourceLoadFailed { .. }))
        .count();
    assert_eq!(failures, 2);
}

#[test]
fn test_failed_video_load_reports_and_stays_absent() {
    let mut editor = editor_with(EditorConfig::default(), Box::new(UnreachablePlayer));
    let recorder = Recorder::default();
    editor.subscribe(Box::new(recorder.clone()));

    editor.execute(Command::ToggleVideo);

    assert_eq!(video_state(&editor), PlaybackState::Absent);
    assert!(!editor.state().video.is_playing());
    assert!(recorder.events().iter().any(|e| matches!(
        e,
        EditorEvent::ResourceLoadFailed { url, .. } if url == DEFAULT_VIDEO_URL
    )));

    // stopping an overlay that never loaded is still fine
    editor.execute(Command::StopVideo);
    assert_eq!(video_state(&editor), PlaybackState::Absent);
}

mod common;

use common::{ManualLoader, Recorder, editor, mounts};
use egui::Pos2;
use scene_editor::video::HeadlessPlayer;
use scene_editor::{
    Command, Editor, EditorConfig, EditorError, EditorEvent, ElementKind, FontFamily, MountPoint,
    PlaybackState,
};

#[test]
fn test_text_with_font_change_scenario() {
    let (mut editor, _loader) = editor();

    editor.execute(Command::SetPendingText("hello".to_owned()));
    editor.execute(Command::ToggleText);
    editor.execute(Command::SetFontFamily(FontFamily::Georgia));

    let state = editor.state();
    assert_eq!(state.surface.len(), 1);
    let id = state.text_tool.element_id().unwrap();
    let text = state.surface.element(id).unwrap().as_text().unwrap();
    assert_eq!(text.content(), "hello");
    assert_eq!(text.font_family(), FontFamily::Georgia);
    assert_eq!(state.surface.visible_ids(), &[id]);
}

#[test]
fn test_two_images_then_remove_scenario() {
    let (mut editor, loader) = editor();

    editor.execute(Command::AddImage("a.png".to_owned()));
    loader.succeed("a.png");
    editor.poll_image_decodes();
    editor.execute(Command::AddImage("b.png".to_owned()));
    loader.succeed("b.png");
    editor.poll_image_decodes();
    assert_eq!(editor.state().surface.len(), 2);

    editor.execute(Command::RemoveLastImage);

    let state = editor.state();
    assert_eq!(state.surface.len(), 1);
    let id = state.image_tool.images()[0];
    let image = state.surface.element(id).unwrap().as_image().unwrap();
    assert_eq!(image.source_url(), "a.png");
}

#[test]
fn test_mount_failure_when_container_missing() {
    let result = Editor::new(
        EditorConfig::default(),
        &[MountPoint::new("sidebar")],
        Box::new(ManualLoader::default()),
        Box::new(HeadlessPlayer::new()),
    );

    assert!(matches!(result, Err(EditorError::MountFailure(name)) if name == "container"));
}

#[test]
fn test_mixed_session_stays_consistent() {
    let (mut editor, loader) = editor();

    editor.execute(Command::SetPendingText("title".to_owned()));
    editor.execute(Command::ToggleText);
    editor.execute(Command::AddImage("a.png".to_owned()));
    editor.execute(Command::AddImage("b.png".to_owned()));
    assert!(editor.state().is_consistent());

    loader.succeed("a.png");
    editor.poll_image_decodes();
    editor.execute(Command::Click(Pos2::new(200.0, 60.0)));
    editor.execute(Command::ToggleVideo);
    editor.execute(Command::ToggleText);
    assert!(editor.state().is_consistent());

    loader.succeed("b.png");
    editor.poll_image_decodes();
    editor.execute(Command::RemoveLastImage);
    editor.execute(Command::RemoveLastImage);
    assert!(editor.state().is_consistent());
    assert!(editor.state().surface.is_empty());
    assert_eq!(editor.state().video.state(), PlaybackState::Playing);
}

#[test]
fn test_events_are_reported_in_order() {
    let (mut editor, _loader) = editor();
    let recorder = Recorder::default();
    editor.subscribe(Box::new(recorder.clone()));

    editor.execute(Command::SetPendingText("hi".to_owned()));
    editor.execute(Command::ToggleText);
    let id = editor.state().text_tool.element_id().unwrap();
    editor.execute(Command::Click(Pos2::new(101.0, 101.0)));
    editor.execute(Command::ToggleText);

    assert_eq!(
        recorder.events(),
        vec![
            EditorEvent::ElementAdded { id, kind: ElementKind::Text },
            EditorEvent::SelectionChanged(id),
            EditorEvent::SelectionCleared(id),
            EditorEvent::ElementRemoved { id, kind: ElementKind::Text },
        ]
    );
}

#[test]
fn test_shutdown_releases_everything_and_ignores_later_commands() {
    let (mut editor, loader) = editor();

    editor.execute(Command::SetPendingText("hello".to_owned()));
    editor.execute(Command::ToggleText);
    editor.execute(Command::ToggleVideo);
    editor.execute(Command::AddImage("a.png".to_owned()));
    loader.succeed("a.png");
    editor.poll_image_decodes();
    editor.execute(Command::Click(Pos2::new(110.0, 110.0)));
    editor.execute(Command::AddImage("late.png".to_owned()));

    editor.shutdown();
    let state = editor.state();
    assert!(editor.is_shut_down());
    assert!(state.surface.is_empty());
    assert_eq!(state.video.state(), PlaybackState::Absent);
    assert!(!state.text_tool.is_placed());
    assert!(state.image_tool.images().is_empty());
    assert!(state.image_tool.pending_decodes().is_empty());
    assert_eq!(state.selection.active(), None);
    assert!(state.is_consistent());

    // a decode finishing after shutdown never reaches the canvas
    loader.succeed("late.png");
    assert!(editor.poll_image_decodes().is_empty());
    editor.execute(Command::ToggleText);
    assert!(editor.state().surface.is_empty());
    assert!(editor.state().is_consistent());

    editor.shutdown();
}

#[test]
fn test_custom_container_from_config() {
    let config = EditorConfig {
        container: "stage".to_owned(),
        ..EditorConfig::default()
    };
    let mut all = mounts();
    all.push(MountPoint::new("stage"));

    let editor = Editor::new(
        config,
        &all,
        Box::new(ManualLoader::default()),
        Box::new(HeadlessPlayer::new()),
    )
    .unwrap();
    assert_eq!(editor.state().surface.container(), "stage");
}

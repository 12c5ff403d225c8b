use super::*;
use crate::foundation::core::FrameRect;

#[test]
fn array_layout_keeps_document_order() {
    let json = r#"{
      "frames": [
        {"filename": "hero/idle", "frame": {"x": 0, "y": 0, "w": 16, "h": 16}, "rotated": false, "trimmed": false},
        {"filename": "hero/run.png", "frame": {"x": 16, "y": 0, "w": 8, "h": 16}}
      ],
      "meta": {"app": "https://www.codeandweb.com/texturepacker", "image": "hero.png", "size": {"w": 32, "h": 16}, "scale": "1"}
    }"#;

    let m = Manifest::from_json_str(json).unwrap();
    assert_eq!(m.frames.len(), 2);
    assert_eq!(m.frames[0].name, "hero/idle");
    assert_eq!(m.frames[0].rect, FrameRect::new(0, 0, 16, 16));
    assert_eq!(m.frames[1].name, "hero/run.png");
    assert_eq!(m.frames[1].rect, FrameRect::new(16, 0, 8, 16));
    assert_eq!(
        m.size,
        CanvasSize {
            width: 32,
            height: 16
        }
    );
    assert_eq!(m.image.as_deref(), Some("hero.png"));
}

#[test]
fn hash_layout_uses_keys_as_names_in_document_order() {
    let json = r#"{
      "frames": {
        "z_last_alphabetically": {"frame": {"x": 0, "y": 0, "w": 1, "h": 1}},
        "a_first": {"frame": {"x": 1, "y": 0, "w": 1, "h": 1}, "rotated": true}
      },
      "meta": {"size": {"w": 2, "h": 1}}
    }"#;

    let m = Manifest::from_json_str(json).unwrap();
    let names: Vec<_> = m.frames.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["z_last_alphabetically", "a_first"]);
    assert!(!m.frames[0].rotated);
    assert!(m.frames[1].rotated);
}

#[test]
fn missing_meta_defaults_to_zero_canvas() {
    let m = Manifest::from_json_str(
        r#"{"frames":[{"filename":"a","frame":{"x":0,"y":0,"w":1,"h":1}}]}"#,
    )
    .unwrap();
    assert_eq!(m.size, CanvasSize::default());
    assert_eq!(m.image, None);
    assert_eq!(m.frames.len(), 1);
}

#[test]
fn missing_frame_fields_default_to_empty() {
    let m = Manifest::from_json_str(r#"{"frames":[{"frame":{"x":3}}, {}],"meta":{"size":{"w":5}}}"#)
        .unwrap();
    assert_eq!(m.frames[0].name, "");
    assert_eq!(m.frames[0].rect, FrameRect::new(3, 0, 0, 0));
    assert_eq!(m.frames[1].rect, FrameRect::default());
    assert_eq!(
        m.size,
        CanvasSize {
            width: 5,
            height: 0
        }
    );
}

#[test]
fn empty_object_and_null_frames_yield_no_frames() {
    assert!(Manifest::from_json_str("{}").unwrap().frames.is_empty());
    assert!(
        Manifest::from_json_str(r#"{"frames": null}"#)
            .unwrap()
            .frames
            .is_empty()
    );
}

#[test]
fn malformed_json_is_parse_error() {
    let err = Manifest::from_json_str(r#"{"frames": ["#).unwrap_err();
    assert!(matches!(err, AtlasError::Parse(_)));
}

#[test]
fn wrong_shape_is_parse_error() {
    assert!(matches!(
        Manifest::from_json_str("[1, 2, 3]"),
        Err(AtlasError::Parse(_))
    ));
    assert!(matches!(
        Manifest::from_json_str(r#"{"frames": 7}"#),
        Err(AtlasError::Parse(_))
    ));
    assert!(matches!(
        Manifest::from_json_str(r#"{"frames":[{"filename":"a","frame":{"x":-1,"y":0,"w":1,"h":1}}]}"#),
        Err(AtlasError::Parse(_))
    ));
}

#[test]
fn top_level_array_is_parse_error() {
    for json in [
        "[]",
        "[null, {}]",
        r#"[[{"filename":"a","frame":{"x":0,"y":0,"w":1,"h":1}}], {"size":{"w":2,"h":2}}]"#,
    ] {
        let err = Manifest::from_json_str(json).unwrap_err();
        assert!(matches!(err, AtlasError::Parse(_)), "{json}: {err:?}");
        assert!(err.to_string().contains("expected a JSON object"), "{json}: {err}");
    }
}

#[test]
fn positional_meta_or_size_is_parse_error() {
    assert!(matches!(
        Manifest::from_json_str(r#"{"frames":[],"meta":["hero.png", {"w":2,"h":2}]}"#),
        Err(AtlasError::Parse(_))
    ));
    assert!(matches!(
        Manifest::from_json_str(r#"{"frames":[],"meta":{"size":[4, 4]}}"#),
        Err(AtlasError::Parse(_))
    ));
}

#[test]
fn trailing_content_is_parse_error() {
    assert!(matches!(
        Manifest::from_json_str(r#"{"frames":[]} {"frames":[]}"#),
        Err(AtlasError::Parse(_))
    ));
}

#[test]
fn load_missing_path_is_not_found() {
    let path = std::env::temp_dir().join(format!(
        "sprite_atlas_missing_manifest_{}.json",
        std::process::id()
    ));
    assert!(matches!(load_manifest(&path), Err(AtlasError::NotFound(_))));
}

#[test]
fn load_from_disk_matches_in_memory_parse() {
    let json = r#"{"frames":[{"filename":"a/b","frame":{"x":0,"y":0,"w":2,"h":2}}],"meta":{"size":{"w":4,"h":4}}}"#;
    let path = std::env::temp_dir().join(format!(
        "sprite_atlas_manifest_{}_{}.json",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, json).unwrap();

    let from_disk = load_manifest(&path).unwrap();
    assert_eq!(from_disk, Manifest::from_json_str(json).unwrap());

    std::fs::remove_file(&path).ok();
}

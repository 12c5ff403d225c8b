use super::*;

fn extract_template(atlas: Option<&str>) -> ExtractTemplate {
    ExtractTemplate {
        atlas: atlas.map(|a| PathTemplate::new("atlas", a)),
        data: PathTemplate::new("data", "assets/{char}-atlas.json"),
        out: PathTemplate::new("out", "export/{char}"),
    }
}

#[test]
fn extract_expands_one_job_per_character() {
    let chars = vec!["matteo".to_string(), "noa".to_string()];
    let jobs = extract_template(Some("assets/{char}-atlas.png"))
        .jobs(&chars)
        .unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[1].character.as_deref(), Some("noa"));
    assert_eq!(jobs[1].atlas, Some(PathBuf::from("assets/noa-atlas.png")));
    assert_eq!(jobs[1].data, PathBuf::from("assets/noa-atlas.json"));
    assert_eq!(jobs[1].out, PathBuf::from("export/noa"));
}

#[test]
fn extract_without_characters_is_single_literal_job() {
    let jobs = extract_template(Some("a.png")).jobs(&[]).unwrap();
    assert_eq!(
        jobs,
        vec![ExtractJob {
            character: None,
            atlas: Some(PathBuf::from("a.png")),
            data: PathBuf::from("assets/{char}-atlas.json"),
            out: PathBuf::from("export/{char}"),
        }]
    );
}

#[test]
fn extract_requires_placeholder_on_atlas_when_batching() {
    let err = extract_template(Some("shared.png"))
        .jobs(&["fede".to_string()])
        .unwrap_err();
    assert!(err.to_string().contains("--atlas"));
}

#[test]
fn apply_base_never_requires_placeholder() {
    let t = ApplyTemplate {
        data: PathTemplate::new("data", "{char}.json"),
        sprites: PathTemplate::new("sprites", "export/{char}"),
        out: PathTemplate::new("out", "out/{char}.png"),
        base: Some(PathTemplate::new("base", "shared-base.png")),
    };
    let jobs = t.jobs(&["stanis".to_string()]).unwrap();
    assert_eq!(jobs[0].base, Some(PathBuf::from("shared-base.png")));
    assert_eq!(jobs[0].out, PathBuf::from("out/stanis.png"));
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "sprite_atlas_jobs_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn atlas_falls_back_to_meta_image_beside_manifest() {
    let dir = temp_dir("meta");
    let job = ExtractJob {
        character: None,
        atlas: None,
        data: dir.join("hero.json"),
        out: dir.join("out"),
    };

    let with_image = Manifest::from_json_str(r#"{"frames":[],"meta":{"image":"hero.png"}}"#).unwrap();
    assert_eq!(job.atlas_path(&with_image).unwrap(), dir.join("hero.png"));

    let without_image = Manifest::from_json_str(r#"{"frames":[]}"#).unwrap();
    assert!(matches!(
        job.atlas_path(&without_image),
        Err(AtlasError::Validation(_))
    ));

    let explicit = ExtractJob {
        atlas: Some(dir.join("other.png")),
        ..job
    };
    assert_eq!(explicit.atlas_path(&with_image).unwrap(), dir.join("other.png"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_resolves_meta_image_and_extracts() {
    let dir = temp_dir("run");
    let data = dir.join("hero.json");
    std::fs::write(
        &data,
        r#"{"frames":[{"filename":"body","frame":{"x":1,"y":0,"w":1,"h":2}}],"meta":{"image":"hero.png","size":{"w":2,"h":2}}}"#,
    )
    .unwrap();
    let atlas = image::RgbaImage::from_fn(2, 2, |x, y| image::Rgba([x as u8 * 100, y as u8 * 100, 0, 255]));
    io::save_png(&atlas, &dir.join("hero.png")).unwrap();

    let job = ExtractJob {
        character: None,
        atlas: None,
        data,
        out: dir.join("out"),
    };
    let report = job.run().unwrap();
    assert_eq!(report.written, vec![dir.join("out").join("body.png")]);

    let body = io::load_rgba(&dir.join("out/body.png")).unwrap();
    assert_eq!(body.dimensions(), (1, 2));
    assert_eq!(body.get_pixel(0, 1).0, [100, 100, 0, 255]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn run_without_atlas_or_meta_image_fails_before_writing() {
    let dir = temp_dir("no_image");
    let data = dir.join("hero.json");
    std::fs::write(
        &data,
        r#"{"frames":[{"filename":"body","frame":{"x":0,"y":0,"w":1,"h":1}}]}"#,
    )
    .unwrap();

    let job = ExtractJob {
        character: None,
        atlas: None,
        data,
        out: dir.join("out"),
    };
    assert!(matches!(job.run(), Err(AtlasError::Validation(_))));
    assert!(!dir.join("out").exists());

    std::fs::remove_dir_all(&dir).ok();
}

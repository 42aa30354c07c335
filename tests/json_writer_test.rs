//! File-backed tests for the JSON writer

use discogs_write::{
    Artist, Image, JsonWriter, Label, Master, Options, Release, ReleaseArtist, Track, WriteError,
    Writer,
};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn artist(name: &str, image: &str) -> Artist {
    Artist {
        name: name.to_string(),
        images: vec![Image::new(image)],
        ..Default::default()
    }
}

#[test]
fn test_batch_without_images_on_disk() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("artists.json");

    let mut writer = JsonWriter::create(&path, Options::default().with_exclude_images(true))?;
    writer.write_artists(&[artist("A", "x.jpg"), artist("B", "y.jpg")])?;
    writer.close()?;

    assert_eq!(fs::read_to_string(&path)?, r#"[{"Name":"A"},{"Name":"B"}]"#);
    Ok(())
}

#[test]
fn test_releases_parse_back_as_array() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("releases.json");

    let releases: Vec<Release> = (1..=50)
        .map(|i| Release {
            id: i.to_string(),
            title: format!("Release {}", i),
            artists: vec![ReleaseArtist {
                name: "Various".to_string(),
                ..Default::default()
            }],
            track_list: vec![Track {
                position: "A1".to_string(),
                title: "Intro".to_string(),
                duration: "1:02".to_string(),
            }],
            images: vec![Image::new(format!("{}.jpg", i))],
            ..Default::default()
        })
        .collect();

    let mut writer = JsonWriter::create(&path, Options::default())?;
    writer.write_releases(&releases)?;
    writer.close()?;

    let parsed: Vec<Release> = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(parsed, releases);
    Ok(())
}

#[test]
fn test_single_record_is_bare_value() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("label.json");

    let label = Label {
        id: "1".to_string(),
        name: "Blue Note".to_string(),
        images: vec![Image::new("logo.png")],
        ..Default::default()
    };

    let mut writer = JsonWriter::create(&path, Options::default())?;
    writer.write_label(&label)?;
    writer.close()?;

    let value: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert!(value.is_object());
    assert_eq!(value["Name"], "Blue Note");
    assert_eq!(value["Images"][0]["Uri"], "logo.png");
    Ok(())
}

#[test]
fn test_output_visible_before_close() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("masters.json");

    let mut writer = JsonWriter::create(&path, Options::default())?;
    writer.write_masters(&[Master::default()])?;

    assert_eq!(fs::read_to_string(&path)?, "[{}]");
    writer.close()?;
    Ok(())
}

#[test]
fn test_create_truncates_existing_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("artists.json");
    fs::write(&path, "stale contents that are longer than the new document")?;

    let mut writer = JsonWriter::create(&path, Options::default())?;
    writer.write_artists(&[])?;
    writer.close()?;

    assert_eq!(fs::read_to_string(&path)?, "[]");
    Ok(())
}

#[test]
fn test_close_without_writes() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.json");

    let mut writer = JsonWriter::create(&path, Options::default())?;
    writer.close()?;

    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path)?, "");
    assert!(matches!(writer.close(), Err(WriteError::Closed)));
    Ok(())
}

#[test]
fn test_eager_open_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let err = JsonWriter::create(&path, Options::default()).err().unwrap();
    assert!(matches!(err, WriteError::SinkOpen { .. }));
}

#[test]
fn test_deferred_open_failure_surfaces_on_first_use() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let mut writer = JsonWriter::new(&path, Options::default().with_exclude_images(true));
    assert!(writer.options().exclude_images);
    assert!(writer.get_ref().is_none());

    let err = writer.write_artist(&Artist::default()).unwrap_err();
    assert!(matches!(err, WriteError::SinkOpen { .. }));

    let err = writer.write_artists(&[Artist::default()]).unwrap_err();
    assert!(matches!(err, WriteError::Closed));
}

#[test]
fn test_deferred_open_failure_surfaces_on_close() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.json");

    let mut writer = JsonWriter::new(&path, Options::default());

    assert!(matches!(writer.close(), Err(WriteError::SinkOpen { .. })));
    assert!(matches!(writer.close(), Err(WriteError::Closed)));
}

#[test]
fn test_successive_batches_share_the_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("artists.json");

    let mut writer = JsonWriter::create(&path, Options::default())?;
    writer.write_artists(&[Artist {
        name: "A".to_string(),
        ..Default::default()
    }])?;
    writer.reset()?;
    writer.write_artists(&[Artist {
        name: "B".to_string(),
        ..Default::default()
    }])?;
    writer.close()?;

    assert_eq!(fs::read_to_string(&path)?, r#"[{"Name":"A"}][{"Name":"B"}]"#);
    Ok(())
}

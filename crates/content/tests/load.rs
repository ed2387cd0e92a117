use std::io::Write;

use dreamspell_content::{ContentError, ContentTable};
use dreamspell_kin::{Seal, Tone};

#[test]
fn from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "seals": [{{ "id": 18, "name": "Spiegel", "color": "Weiß" }}],
            "tones": [{{ "id": 10, "name": "Planetar", "essence": "Manifestation" }}]
        }}"#
    )
    .unwrap();

    let table = ContentTable::from_path(file.path()).unwrap();
    let mirror = table.seal(Seal::new(18).unwrap()).unwrap();
    assert_eq!(mirror.name, "Spiegel");
    assert_eq!(mirror.color.as_deref(), Some("Weiß"));
    let planetary = table.tone(Tone::new(10).unwrap()).unwrap();
    assert_eq!(planetary.essence.as_deref(), Some("Manifestation"));
}

#[test]
fn from_path_rejects_bad_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    std::fs::write(&path, r#"{ "seals": [{ "id": 21, "name": "x" }] }"#).unwrap();
    assert!(matches!(
        ContentTable::from_path(&path),
        Err(ContentError::SealId { id: 21 })
    ));
}

#[test]
fn empty_document_is_an_empty_table() {
    let table = ContentTable::from_json_str("{}").unwrap();
    assert_eq!(table.seal_count(), 0);
    assert_eq!(table.tone_count(), 0);
}

#[test]
fn builtin_serializes_back() {
    let table = ContentTable::builtin().unwrap();
    let entry = table.seal(Seal::new(14).unwrap()).unwrap();
    let json = serde_json::to_string(entry).unwrap();
    assert!(json.contains(r#""name":"White Wizard""#));
    assert!(!json.contains("psychology"));
}

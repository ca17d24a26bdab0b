use super::*;

#[test]
fn generated_codes_are_six_uppercase_letters() {
    for _ in 0..32 {
        let code = generate();
        assert_eq!(code.len(), CODE_LEN);
        assert!(code.chars().all(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn from_uuid_is_deterministic() {
    let id = Uuid::from_bytes([0, 1, 2, 25, 26, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    // 0→A, 1→B, 2→C, 25→Z, 26→A, 255→(255 % 26 = 21)→V
    assert_eq!(from_uuid(id), "ABCZAV");
}

#[test]
fn normalize_trims_and_uppercases() {
    assert_eq!(normalize("  abc123  ").as_deref(), Some("ABC123"));
    assert_eq!(normalize("QWERTY").as_deref(), Some("QWERTY"));
}

#[test]
fn normalize_rejects_empty_input() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("   "), None);
}

#[test]
fn normalize_rejects_non_alphanumeric_input() {
    assert_eq!(normalize("AB CD"), None);
    assert_eq!(normalize("AB-CD!"), None);
}

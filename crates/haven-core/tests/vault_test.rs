#![allow(clippy::expect_used, clippy::unwrap_used)]

use haven_core::vault::{
    empty_state_message, filter_items, sample_items, MediaKind, MinLengthPolicy, UnlockOutcome,
    VaultFilter, VaultState,
};

#[test]
fn three_characters_stay_locked() {
    let mut vault = VaultState::default();
    vault.set_password("abc");
    assert_eq!(
        vault.try_unlock(&MinLengthPolicy::default()),
        UnlockOutcome::TooShort { required: 4 }
    );
    assert!(!vault.is_unlocked());
}

#[test]
fn four_characters_unlock() {
    let mut vault = VaultState::default();
    for ch in "abcd".chars() {
        vault.type_char(ch);
    }
    assert_eq!(
        vault.try_unlock(&MinLengthPolicy::default()),
        UnlockOutcome::Unlocked
    );
    assert!(vault.is_unlocked());
    assert_eq!(vault.filter(), Some(VaultFilter::All));
    assert_eq!(vault.visible_items().len(), 3);
}

#[test]
fn audio_filter_returns_only_audio() {
    let mut vault = VaultState::default();
    vault.set_password("open sesame");
    vault.try_unlock(&MinLengthPolicy::default());
    vault.set_filter(VaultFilter::Audio);

    let visible = vault.visible_items();
    assert_eq!(visible.len(), 1);
    assert!(visible.iter().all(|item| item.kind == MediaKind::Audio));
}

#[test]
fn each_filter_is_a_pure_kind_predicate() {
    let items = sample_items();
    for filter in VaultFilter::ALL {
        let expected: Vec<&str> = items
            .iter()
            .filter(|item| filter.matches(item.kind))
            .map(|item| item.id.as_str())
            .collect();
        let got: Vec<&str> = filter_items(&items, filter)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(got, expected, "{filter:?}");
    }
}

#[test]
fn empty_filter_message_names_category() {
    let mut vault = VaultState::new(Vec::new());
    vault.set_password("1234");
    vault.try_unlock(&MinLengthPolicy::default());
    vault.set_filter(VaultFilter::Images);
    assert!(vault.visible_items().is_empty());
    assert_eq!(empty_state_message(VaultFilter::Images), "No images yet");
}

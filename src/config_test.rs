use super::*;

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = ClientConfig::from_values(None, None, None, None);
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.storage_keys.token, "token");
    assert_eq!(config.storage_keys.auth_snapshot, "auth-storage");
    assert_eq!(config.banner_dismiss_ms, 3000);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_values(Some("  "), Some(""), Some(" "), Some(""));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn api_base_drops_trailing_slashes() {
    let config = ClientConfig::from_values(Some("https://api.example.com/v1//"), None, None, None);
    assert_eq!(config.api_base, "https://api.example.com/v1");
}

#[test]
fn api_base_of_only_slashes_becomes_root() {
    let config = ClientConfig::from_values(Some("///"), None, None, None);
    assert_eq!(config.api_base, "/");
}

#[test]
fn custom_storage_keys_are_trimmed() {
    let config = ClientConfig::from_values(None, Some(" jwt "), Some(" auth "), None);
    assert_eq!(config.storage_keys.token, "jwt");
    assert_eq!(config.storage_keys.auth_snapshot, "auth");
}

#[test]
fn unparsable_dismiss_delay_uses_default() {
    let config = ClientConfig::from_values(None, None, None, Some("soon"));
    assert_eq!(config.banner_dismiss_ms, DEFAULT_BANNER_DISMISS_MS);
    let config = ClientConfig::from_values(None, None, None, Some("1500"));
    assert_eq!(config.banner_dismiss_ms, 1500);
}

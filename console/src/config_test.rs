use super::*;

#[test]
fn defaults_to_local_backend() {
    let cfg = ConsoleConfig::from_values(None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.token_key, "token");
}

#[test]
fn blank_value_falls_back_to_default() {
    assert_eq!(ConsoleConfig::from_values(Some("   ")).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn trailing_slashes_are_trimmed() {
    let cfg = ConsoleConfig::from_values(Some("https://api.example.com/v1//"));
    assert_eq!(cfg.api_base_url, "https://api.example.com/v1");
}

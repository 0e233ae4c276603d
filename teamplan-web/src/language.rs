use std::collections::HashMap;

/// Translation bundles for the chrome-level labels, keyed by language
/// code.
pub fn supported_languages() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("en", include_str!("../translations/en.json")),
        ("ko", include_str!("../translations/ko.json")),
    ])
}

use rtimebank::config::{Backend, Config, RemoteSettings};
use rtimebank::remote::rest_endpoint;

fn settings(url: Option<&str>, key: Option<&str>) -> Result<RemoteSettings, String> {
    RemoteSettings::from_values(url.map(str::to_string), key.map(str::to_string))
        .map_err(|e| e.to_string())
}

#[test]
fn remote_settings_need_an_http_url_and_a_key() {
    let ok = settings(Some("https://abc.supabase.co"), Some(" anon-key ")).unwrap();
    assert_eq!(ok.url.host_str(), Some("abc.supabase.co"));
    assert_eq!(ok.key, "anon-key");

    assert!(settings(None, Some("k")).unwrap_err().contains("TIMEBANK_URL"));
    assert!(settings(Some("  "), Some("k")).unwrap_err().contains("TIMEBANK_URL"));
    assert!(settings(Some("ftp://abc.example"), Some("k")).is_err());
    assert!(settings(Some("abc.supabase.co"), Some("k")).is_err());
    assert!(settings(Some("https://abc.supabase.co"), None).unwrap_err().contains("TIMEBANK_KEY"));
    assert!(settings(Some("https://abc.supabase.co"), Some("")).is_err());
}

#[test]
fn rest_endpoint_joins_base_and_table() {
    let s = settings(Some("https://abc.supabase.co/"), Some("k")).unwrap();
    assert_eq!(
        rest_endpoint(&s.url, "time_entries"),
        "https://abc.supabase.co/rest/v1/time_entries"
    );
}

#[test]
fn config_fields_default_when_missing() {
    let cfg: Config = serde_yaml::from_str("backend: rest\n").unwrap();
    assert_eq!(cfg.backend, Backend::Rest);
    assert_eq!(cfg.table, "time_entries");
    assert_eq!(cfg.min_work_duration, "8h");
    assert_eq!(cfg.separator(), '-');

    let cfg: Config = serde_yaml::from_str("separator_char: \"=\"\n").unwrap();
    assert_eq!(cfg.backend, Backend::Sqlite);
    assert_eq!(cfg.separator(), '=');
}

use std::sync::Mutex;

use tempfile::NamedTempFile;

use qrsweep::ScanConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [
        "QRSWEEP_CONFIG",
        "QRSWEEP_SAMPLE_INTERVAL",
        "QRSWEEP_MIN_CONFIRMATIONS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn loads_config_from_file_and_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = NamedTempFile::new().expect("temp config");
    let json = r#"{
        "sample_interval": 15,
        "min_confirmations": 2
    }"#;
    std::io::Write::write_all(&mut file, json.as_bytes()).expect("write config");

    std::env::set_var("QRSWEEP_CONFIG", file.path());
    std::env::set_var("QRSWEEP_MIN_CONFIRMATIONS", "5");

    let cfg = ScanConfig::load().expect("load config");
    assert_eq!(cfg.sample_interval, 15);
    assert_eq!(cfg.min_confirmations, 5);

    clear_env();
}

#[test]
fn defaults_apply_without_file_or_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = ScanConfig::load().expect("load config");
    assert_eq!(cfg.sample_interval, 10);
    assert_eq!(cfg.min_confirmations, 3);
}

#[test]
fn out_of_range_interval_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var("QRSWEEP_SAMPLE_INTERVAL", "120");
    let result = ScanConfig::load();
    assert!(result.is_err());

    clear_env();
}

use std::io::Write;

use voltree_charging::{AlertPolicy, ChargingConfig, ConfigError};

#[test]
fn default_config_validates() {
    ChargingConfig::default().validate().unwrap();
}

#[test]
fn non_positive_or_non_finite_tick_rates_are_rejected() {
    let mut config = ChargingConfig::default();

    config.tick_hz = 0.0;
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidTickRate(0.0))
    );

    config.tick_hz = -10.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTickRate(_))
    ));

    config.tick_hz = f32::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTickRate(_))
    ));
}

#[test]
fn zero_tick_budget_is_rejected() {
    let mut config = ChargingConfig::default();
    config.max_ticks = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroTickBudget));
}

#[test]
fn inverted_battery_thresholds_are_rejected() {
    let mut config = ChargingConfig::default();
    config.battery_lower_pct = 90.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvertedThresholds { .. })
    ));
}

#[test]
fn period_derives_from_the_tick_rate() {
    let config = ChargingConfig {
        tick_hz: 10.0,
        ..ChargingConfig::default()
    };
    assert!((config.period().as_secs_f32() - 0.1).abs() < 1e-6);

    let budget = config.budget();
    assert_eq!(budget.max_ticks, config.max_ticks);
    assert_eq!(budget.period, config.period());
}

#[test]
fn partial_yaml_fills_the_rest_with_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "tick_hz: 50.0\nmax_ticks: 10\ncomm_alert: report_handled\n"
    )
    .unwrap();

    let config = ChargingConfig::load(file.path()).unwrap();

    assert_eq!(config.tick_hz, 50.0);
    assert_eq!(config.max_ticks, 10);
    assert_eq!(config.comm_alert, AlertPolicy::ReportHandled);
    assert_eq!(config.fault_alert, AlertPolicy::ReportFailure);
    assert_eq!(config.battery_upper_pct, 80.0);
}

#[test]
fn missing_config_file_reports_the_path() {
    let err = ChargingConfig::load(std::path::Path::new("/nonexistent/charging.yaml"))
        .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/charging.yaml"));
}

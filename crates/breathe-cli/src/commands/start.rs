//! Session startup: spec resolution and the run itself.

use breathe_core::{
    preset, AppConfig, EndReason, SessionConfig, SessionEngine, SessionReport, ValidationError,
    WallClock,
};

use crate::ui;

pub struct StartOpts {
    /// Session length override in seconds.
    pub total: Option<u64>,
    pub silent: bool,
    pub journal: bool,
}

/// Run a session from the positional spec (`breathe box`, `breathe 120`,
/// `breathe 120 4 3 5 3`, or bare `breathe`).
pub fn run(spec: &[String], opts: &StartOpts) -> Result<(), Box<dyn std::error::Error>> {
    let app_config = load_config();
    let session = resolve_spec(spec, &app_config, opts.total)?;
    run_session(session, &app_config, opts)
}

/// Run a session with explicit durations (`breathe manual ...`).
pub fn run_manual(
    total: u64,
    inhale: u64,
    hold_in: u64,
    exhale: u64,
    hold_out: u64,
    opts: &StartOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_config = load_config();
    let session = SessionConfig::manual(total, inhale, hold_in, exhale, hold_out)?;
    run_session(session, &app_config, opts)
}

/// A broken config file should not block a breathing session.
fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {e}; using defaults");
            AppConfig::default()
        }
    }
}

/// Resolve the positional spec against presets and configured defaults.
///
/// Exactly one source wins: a preset name, a run of integers
/// (`TOTAL [INHALE HOLD_IN EXHALE HOLD_OUT]`), or -- with no spec at all --
/// the defaults from the config file.
fn resolve_spec(
    spec: &[String],
    defaults: &AppConfig,
    total_override: Option<u64>,
) -> Result<SessionConfig, Box<dyn std::error::Error>> {
    if spec.is_empty() {
        return resolve_defaults(defaults, total_override);
    }

    if let Some(preset) = preset::find(&spec[0]) {
        if spec.len() > 1 {
            return Err(ValidationError::InvalidValue {
                field: "spec".into(),
                message: format!("preset '{}' takes no further arguments", preset.name),
            }
            .into());
        }
        let total = total_override.unwrap_or(defaults.session.total_seconds);
        return Ok(SessionConfig::from_preset(preset, total));
    }

    if spec.len() > 5 {
        return Err(ValidationError::InvalidValue {
            field: "spec".into(),
            message: "expected at most TOTAL INHALE HOLD_IN EXHALE HOLD_OUT".into(),
        }
        .into());
    }

    // Numeric shortcut. A first argument that is neither a preset nor a
    // number is a failed preset lookup, not a bad number.
    let total = spec[0]
        .parse::<u64>()
        .map_err(|_| ValidationError::UnknownPreset(spec[0].clone()))?;
    let mut durations = [
        defaults.session.inhale,
        defaults.session.hold_in,
        defaults.session.exhale,
        defaults.session.hold_out,
    ];
    let names = ["inhale", "hold_in", "exhale", "hold_out"];
    for (i, raw) in spec.iter().skip(1).enumerate() {
        durations[i] = raw.parse::<u64>().map_err(|_| ValidationError::InvalidValue {
            field: names[i].into(),
            message: format!("'{raw}' is not a whole number of seconds"),
        })?;
    }

    let total = total_override.unwrap_or(total);
    Ok(SessionConfig::manual(
        total,
        durations[0],
        durations[1],
        durations[2],
        durations[3],
    )?)
}

/// No spec given: defaults come from the config file, which may name a
/// preset of its own.
fn resolve_defaults(
    defaults: &AppConfig,
    total_override: Option<u64>,
) -> Result<SessionConfig, Box<dyn std::error::Error>> {
    let total = total_override.unwrap_or(defaults.session.total_seconds);
    if defaults.session.mode != "manual" {
        let preset = preset::find(&defaults.session.mode)
            .ok_or_else(|| ValidationError::UnknownPreset(defaults.session.mode.clone()))?;
        return Ok(SessionConfig::from_preset(preset, total));
    }
    Ok(SessionConfig::manual(
        total,
        defaults.session.inhale,
        defaults.session.hold_in,
        defaults.session.exhale,
        defaults.session.hold_out,
    )?)
}

fn run_session(
    session: SessionConfig,
    app_config: &AppConfig,
    opts: &StartOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let sound_on = app_config.sound.enabled && !opts.silent;

    let screen = ui::screen::Screen::enter()?;
    let engine = SessionEngine::new(
        session,
        WallClock,
        ui::render::TerminalRenderer::new(),
        ui::input::Keys,
        ui::chime::Bell,
    )
    .with_policy(app_config.deadline_policy())
    .with_sound(sound_on);

    let report = engine.run();

    ui::farewell::play()?;
    drop(screen);

    println!("{}", summary_line(&report));
    if opts.journal {
        println!("{}", serde_json::to_string_pretty(&report.events)?);
    }
    Ok(())
}

fn summary_line(report: &SessionReport) -> String {
    let headline = match report.reason {
        EndReason::TimedOut => "Session complete",
        EndReason::Cancelled => "Session ended early",
    };
    let mut line = format!(
        "{headline} · {} cycle{}",
        report.cycles_completed,
        if report.cycles_completed == 1 { "" } else { "s" },
    );
    let paused = report.paused_total.as_secs();
    if paused > 0 {
        line.push_str(&format!(" · paused {paused}s"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn empty_spec_uses_config_defaults() {
        let config = resolve_spec(&[], &defaults(), None).unwrap();
        assert_eq!(config.mode_name, "manual");
        assert_eq!(config.total_seconds, 300);
        assert_eq!(config.durations(), (4, 3, 5, 3));
    }

    #[test]
    fn configured_preset_mode_wins_when_spec_is_empty() {
        let mut app = defaults();
        app.session.mode = "box".into();
        let config = resolve_spec(&[], &app, None).unwrap();
        assert_eq!(config.mode_name, "box");
        assert_eq!(config.durations(), (4, 4, 4, 4));
    }

    #[test]
    fn preset_name_resolves() {
        let spec = vec!["478".to_string()];
        let config = resolve_spec(&spec, &defaults(), None).unwrap();
        assert_eq!(config.mode_name, "478");
        assert_eq!(config.durations(), (4, 7, 8, 0));
        assert_eq!(config.total_seconds, 300);
    }

    #[test]
    fn total_override_applies_to_presets() {
        let spec = vec!["box".to_string()];
        let config = resolve_spec(&spec, &defaults(), Some(120)).unwrap();
        assert_eq!(config.total_seconds, 120);
    }

    #[test]
    fn numeric_shortcut_fills_missing_fields_from_defaults() {
        let spec: Vec<String> = vec!["120".into(), "6".into()];
        let config = resolve_spec(&spec, &defaults(), None).unwrap();
        assert_eq!(config.total_seconds, 120);
        assert_eq!(config.durations(), (6, 3, 5, 3));
        assert_eq!(config.mode_name, "manual");
    }

    #[test]
    fn full_numeric_spec_is_explicit() {
        let spec: Vec<String> = vec!["60".into(), "4".into(), "7".into(), "8".into(), "0".into()];
        let config = resolve_spec(&spec, &defaults(), None).unwrap();
        assert_eq!(config.durations(), (4, 7, 8, 0));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let spec = vec!["zen".to_string()];
        let err = resolve_spec(&spec, &defaults(), None).unwrap_err();
        assert!(err.to_string().contains("Unknown preset"));
    }

    #[test]
    fn preset_with_trailing_arguments_is_rejected() {
        let spec: Vec<String> = vec!["box".into(), "9".into()];
        assert!(resolve_spec(&spec, &defaults(), None).is_err());
    }

    #[test]
    fn overlong_spec_is_rejected() {
        let spec: Vec<String> = (0..6).map(|n| n.to_string()).collect();
        assert!(resolve_spec(&spec, &defaults(), None).is_err());
    }

    #[test]
    fn all_zero_shortcut_is_rejected() {
        let spec: Vec<String> = vec!["60".into(), "0".into(), "0".into(), "0".into(), "0".into()];
        assert!(resolve_spec(&spec, &defaults(), None).is_err());
    }
}

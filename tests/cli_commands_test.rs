use anyhow::Result;
use inkbook::app::{build_formatter, run};
use inkbook::{CliConfig, Command, FormatError, Formatter};
use tempfile::TempDir;

fn danish() -> Formatter {
    Formatter::default()
}

#[test]
fn test_date_and_duration_commands() -> Result<()> {
    let f = danish();
    assert_eq!(
        run(&Command::Date { instant: Some("2024-01-15T13:45:00Z".to_string()) }, &f)?,
        "15-01/2024, 14:45"
    );
    assert_eq!(run(&Command::Date { instant: None }, &f)?, "—");
    assert_eq!(
        run(&Command::Duration { minutes: Some("135".to_string()) }, &f)?,
        "2 timer, 15 minutter"
    );
    assert_eq!(run(&Command::Duration { minutes: None }, &f)?, "0 minutter");
    assert_eq!(
        run(&Command::Phone { number: "+4587654321".to_string() }, &f)?,
        "+45 87 65 43 21"
    );
    Ok(())
}

#[test]
fn test_countdown_command() -> Result<()> {
    let f = danish();
    let output = run(
        &Command::Countdown {
            target: "2024-01-02T15:15:00Z".to_string(),
            now: Some("2024-01-01T12:00:00Z".to_string()),
        },
        &f,
    )?;
    assert_eq!(output, "1 Dage, 3 Timer, 15 Minuter indtil bookingen");

    let err = run(
        &Command::Countdown {
            target: "later".to_string(),
            now: Some("2024-01-01T12:00:00Z".to_string()),
        },
        &f,
    )
    .unwrap_err();
    assert!(matches!(err, FormatError::InvalidInstant { ref input } if input == "later"));

    let err = run(
        &Command::Countdown {
            target: "2024-01-02T15:15:00Z".to_string(),
            now: Some("yesterday".to_string()),
        },
        &f,
    )
    .unwrap_err();
    assert!(matches!(err, FormatError::InvalidInstant { ref input } if input == "yesterday"));
    Ok(())
}

#[test]
fn test_toggle_command() -> Result<()> {
    let f = danish();
    let output = run(
        &Command::Toggle {
            map: r#"{"2024-03-01": true}"#.to_string(),
            date_key: "2024-03-02".to_string(),
        },
        &f,
    )?;
    assert_eq!(output, r#"{"2024-03-01":true,"2024-03-02":true}"#);

    let bad_key = run(
        &Command::Toggle {
            map: "{}".to_string(),
            date_key: "02/03/2024".to_string(),
        },
        &f,
    );
    assert!(matches!(bad_key, Err(FormatError::InvalidConfigValueError { .. })));

    let bad_map = run(
        &Command::Toggle {
            map: "[true]".to_string(),
            date_key: "2024-03-02".to_string(),
        },
        &f,
    );
    assert!(matches!(bad_map, Err(FormatError::SerializationError(_))));
    Ok(())
}

#[test]
fn test_booking_command_reads_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("booking.json");
    std::fs::write(
        &path,
        serde_json::json!({
            "id": 3,
            "name": "Mads",
            "phone": "+45 11223344",
            "date_and_time": "2024-06-15 12:00:00+00",
            "duration": "45",
            "accepted": false,
            "created_at": "2024-05-01T10:00:00Z"
        })
        .to_string(),
    )?;

    let output = run(
        &Command::Booking {
            input: path.to_string_lossy().to_string(),
            now: Some("2024-06-15T11:00:00Z".to_string()),
        },
        &danish(),
    )?;
    let summary: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(summary["when"], "15-06/2024, 14:00");
    assert_eq!(summary["date_key"], "2024-06-15");
    assert_eq!(summary["duration"], "45 minutter");
    assert_eq!(summary["phone"], "+45 11 22 33 44");
    assert_eq!(summary["countdown"], "0 Dage, 1 Timer, 0 Minuter indtil bookingen");
    assert_eq!(summary["accepted"], false);
    Ok(())
}

#[test]
fn test_build_formatter_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("inkbook.toml");
    std::fs::write(&path, "[locale]\ntimezone = \"UTC\"\n")?;

    let cli = CliConfig {
        config: Some(path.to_string_lossy().to_string()),
        verbose: false,
        json_logs: false,
        command: Command::Date { instant: None },
    };
    let f = build_formatter(&cli)?;
    assert_eq!(
        run(&Command::Date { instant: Some("2024-06-15T12:00:00Z".to_string()) }, &f)?,
        "15-06/2024, 12:00"
    );
    Ok(())
}

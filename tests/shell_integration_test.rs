use anyhow::Result;
use gof_patterns::config::toml_config::TomlConfig;
use gof_patterns::core::shell::ShellSettings;
use gof_patterns::core::{Demo, SinkEvent};
use gof_patterns::utils::validation::Validate;
use gof_patterns::{ConsoleSink, RecordingSink, RunSettings, Shell};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_toml_driven_run() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[shell]
demos = ["factory-method", "facade"]

[factory_method]
creators = ["B"]
pause = true
"#,
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;
    let settings = RunSettings::from_toml(&config)?;

    let shell = Shell::new(RecordingSink::new(), settings.shell_settings());
    shell.run_all(&settings.demos)?;

    assert_eq!(
        shell.sink().events(),
        vec![
            SinkEvent::Message("Created ConcreteProductB".to_string()),
            SinkEvent::WaitForInput,
            SinkEvent::Message("CPU freeze".to_string()),
            SinkEvent::Message("Memory loaded HardDrive read".to_string()),
            SinkEvent::Message("CPU jump".to_string()),
            SinkEvent::Message("CPU execute".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_every_button_runs() -> Result<()> {
    let shell = Shell::new(
        RecordingSink::new(),
        ShellSettings {
            pause: false,
            ..ShellSettings::default()
        },
    );
    shell.run_all(&Demo::ALL)?;

    let messages = shell.sink().messages();
    assert_eq!(messages.first().map(String::as_str), Some("CPU freeze"));
    assert!(messages.contains(&"Created ConcreteProductB".to_string()));
    assert!(messages.contains(&"Singleton3: same instance = true".to_string()));
    Ok(())
}

#[test]
fn test_interactive_shell_repeats_the_facade() -> Result<()> {
    let shell = Shell::new(RecordingSink::new(), ShellSettings::default());
    let mut output = Vec::new();

    let clicks = shell.run_interactive(Cursor::new(b"facade\nfacade\nquit\n".to_vec()), &mut output)?;

    assert_eq!(clicks, 2);
    assert_eq!(shell.sink().messages().len(), 8);
    assert!(String::from_utf8(output)?.starts_with("Buttons: "));
    Ok(())
}

#[test]
fn test_modal_console_shares_input_with_the_shell() -> Result<()> {
    // The four lines after `facade` acknowledge the boot messages; only
    // the first one is a command.
    let input = Cursor::new(b"facade\nsingleton\nsingleton\nsingleton\nsingleton\nquit\n".to_vec());
    let shell = Shell::new(
        ConsoleSink::new(input, Vec::new(), true),
        ShellSettings::default(),
    );

    let clicks = shell.run_interactive(shell.sink().input(), Vec::new())?;

    assert_eq!(clicks, 1);
    Ok(())
}

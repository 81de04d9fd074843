use std::fs;

use formai_core::{
    error::FormAiError,
    model::{Model, OpenAiModel},
};
use formai_proxy::{Settings, cli::Cli};
use tempfile::TempDir;

#[test]
fn defaults_without_a_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings::load(&temp_dir.path().join("missing.toml"))?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.server.route, "/api/generate");
    assert_eq!(settings.backend.model, "gpt-3.5-turbo");
    assert_eq!(settings.backend.temperature, 0.1);
    assert_eq!(settings.backend.api_key_env, "OPENAI_API_KEY");
    assert_eq!(settings.backend.base_url, None);
    assert_eq!(settings.backend.timeout_seconds, 30);

    let generation = settings.generation();
    assert_eq!(generation.model, Model::OpenAi(OpenAiModel::Gpt35Turbo));
    assert_eq!(generation.temperature, 0.1);
    Ok(())
}

#[test]
fn file_overrides_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formai.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8080
route = "/generate"

[backend]
model = "llama3.1"
temperature = 0.0
base_url = "http://localhost:11434/v1"
"#,
    )?;

    let settings = Settings::load(&path)?;

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.server.route, "/generate");
    assert_eq!(settings.backend.base_url.as_deref(), Some("http://localhost:11434/v1"));
    assert_eq!(settings.generation().model, Model::Custom("llama3.1".into()));
    assert_eq!(settings.generation().temperature, 0.0);
    Ok(())
}

#[test]
fn cli_overrides_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formai.toml");
    fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 8080\n")?;

    let cli = Cli {
        config: path,
        host: None,
        port: Some(9090),
    };
    let settings = Settings::new_with_cli(&cli)?;

    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 9090);
    Ok(())
}

#[test]
fn invalid_values_are_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    for (name, contents) in [
        ("route.toml", "[server]\nroute = \"api/generate\"\n"),
        ("temperature.toml", "[backend]\ntemperature = 3.5\n"),
        ("key.toml", "[backend]\napi_key_env = \"\"\n"),
    ] {
        let path = temp_dir.path().join(name);
        fs::write(&path, contents)?;

        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("validation failed"), "{name}: {err}");
    }
    Ok(())
}

#[test]
fn adapter_builder_reports_the_configured_variable() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formai.toml");
    fs::write(
        &path,
        "[backend]\napi_key_env = \"FORMAI_TEST_UNSET_CREDENTIAL\"\ntimeout_seconds = 5\n",
    )?;

    let settings = Settings::load(&path)?;
    let err = settings.backend.adapter_builder().build().err().unwrap();

    assert!(matches!(
        &err,
        FormAiError::BackendNotConfigured(name) if name == "FORMAI_TEST_UNSET_CREDENTIAL"
    ));
    assert_eq!(settings.generation().api_key_env, "FORMAI_TEST_UNSET_CREDENTIAL");
    Ok(())
}

use pkgup_core::config::{Config, PackageClient};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.defaults.client, PackageClient::Npm);
    assert!(!config.defaults.dev);
    assert!(config.defaults.reinstall);
    assert_eq!(config.prompt.page_size, 15);
}

#[test]
fn test_config_from_empty_toml() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.defaults.reinstall);
    assert_eq!(config.prompt.page_size, 15);
}

#[test]
fn test_config_from_toml() {
    let config: Config = toml::from_str(
        r#"
[defaults]
client = "yarn"
dev = true
reinstall = false

[prompt]
page-size = 30
"#,
    )
    .unwrap();
    assert_eq!(config.defaults.client, PackageClient::Yarn);
    assert!(config.defaults.dev);
    assert!(!config.defaults.reinstall);
    assert_eq!(config.prompt.page_size, 30);
}

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("config.toml")).unwrap();
    assert_eq!(config.prompt.page_size, 15);
}

#[test]
fn test_load_from_malformed_file_is_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[defaults\nclient = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_client_from_str() {
    assert_eq!("npm".parse::<PackageClient>(), Ok(PackageClient::Npm));
    assert_eq!(" Yarn ".parse::<PackageClient>(), Ok(PackageClient::Yarn));
    assert!("pnpm".parse::<PackageClient>().is_err());
}

#[test]
fn test_client_program() {
    assert_eq!(PackageClient::Npm.program(), "npm");
    assert_eq!(PackageClient::Yarn.to_string(), "yarn");
}

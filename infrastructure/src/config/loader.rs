//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Environment variable overriding `server.port`
pub const PORT_ENV_VAR: &str = "ECOBOT_SOCKET_PORT";

const PROJECT_FILES: &[&str] = &["ecobot.toml", ".ecobot.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ECOBOT_SOCKET_PORT` (port only)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ecobot.toml` or `./.ecobot.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/ecobot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Defaults plus the port environment override (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Figment::new().merge(Serialized::defaults(FileConfig::default())))
            .extract()
            .map_err(Box::new)
    }

    fn with_env(figment: Figment) -> Figment {
        figment.merge(
            Env::raw()
                .only(&[PORT_ENV_VAR])
                .map(|_| "server.port".into()),
        )
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ecobot").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        match std::env::var(PORT_ENV_VAR) {
            Ok(value) => println!("  [SET  ] Env:     {}={}", PORT_ENV_VAR, value),
            Err(_) => println!("  [     ] Env:     {}", PORT_ENV_VAR),
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./ecobot.toml or ./.ecobot.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("ecobot"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            jail.create_file("ecobot.toml", "[server]\nport = 6100\n")?;
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.port, 6100);
            assert_eq!(config.server.host, "0.0.0.0");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("ecobot.toml", "[history]\nmax_turns = 5\n")?;
            jail.create_file("custom.toml", "[history]\nmax_turns = 7\n")?;
            let path = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.history.max_turns, 7);
            Ok(())
        });
    }

    #[test]
    fn test_port_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("ecobot.toml", "[server]\nport = 6100\n")?;
            jail.set_env(PORT_ENV_VAR, "6200");
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.port, 6200);

            let defaults = ConfigLoader::load_defaults().map_err(|e| *e)?;
            assert_eq!(defaults.server.port, 6200);
            Ok(())
        });
    }
}

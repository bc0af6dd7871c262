use anyhow::{Context, bail};
use colored::{Color, ColoredString, Style};
use modem_client::{internet::DEFAULT_HELPER_API, modem::DEFAULT_SERVER};
use serde::{Deserialize, Serialize};
use tracing::debug;
use std::io;
use std::path::{Path, PathBuf};
use std::{collections::BTreeMap, fmt::Display};

const CONFIG_DIR: &str = ".modem-manager";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_PROFILE: &str = "default";

pub const SERVER_ENV: &str = "MM_SERVER";
pub const HELPER_ENV: &str = "MM_HELPER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub server: String,
    #[serde(default = "default_helper")]
    pub helper: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_helper() -> String {
    DEFAULT_HELPER_API.to_string()
}

fn default_color() -> String {
    "blue".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub current_profile: String,
    /// Exposes the raw AT commander and request timings.
    #[serde(default)]
    pub dev_mode: bool,
    profile: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        let profile = Profile {
            server: DEFAULT_SERVER.to_string(),
            helper: default_helper(),
            color: default_color(),
        };

        Self {
            current_profile: DEFAULT_PROFILE.to_string(),
            dev_mode: false,
            profile: BTreeMap::from([(DEFAULT_PROFILE.to_string(), profile)]),
        }
    }
}

impl Config {
    /// `None` when there is no home directory.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the config file, or the default profile when there is none.
    pub async fn load_or_default() -> anyhow::Result<Self> {
        match Self::path() {
            Some(path) => Self::load_or_default_from(&path).await,
            None => {
                debug!("No home directory, using the default profile");
                Ok(Self::default())
            }
        }
    }

    pub async fn load_or_default_from(path: &Path) -> anyhow::Result<Self> {
        match Self::load_from(path).await {
            Ok(config) => Ok(config),
            Err(err) => {
                if matches!(err.downcast_ref::<io::Error>(), Some(e) if e.kind() == io::ErrorKind::NotFound)
                {
                    debug!("No config file at {}, using the default profile", path.display());
                    return Ok(Self::default());
                }
                Err(err)
            }
        }
    }

    pub async fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config_str = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !config.profile.contains_key(&config.current_profile) {
            bail!(
                "Current profile '{}' is not defined in {}",
                config.current_profile,
                path.display()
            );
        }

        Ok(config)
    }

    pub async fn save(&self) -> anyhow::Result<()> {
        let path = Self::path().context("Could not find the home directory")?;
        self.save_to(&path).await
    }

    /// Writes next to `path` first, then renames over it.
    pub async fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let save_file = path.with_extension("toml.save");
        let config_str = toml::to_string(&self)?;
        tokio::fs::write(&save_file, config_str).await?;
        tokio::fs::rename(&save_file, path)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn change_profile(&mut self, profile: String) -> anyhow::Result<()> {
        if !self.profile.contains_key(&profile) {
            return Err(anyhow::anyhow!("Profile '{}' does not exist", profile));
        }

        self.current_profile = profile;
        Ok(())
    }

    pub fn profiles(&self) -> impl Iterator<Item = &str> {
        self.profile.keys().map(String::as_str)
    }

    fn current(&self) -> Option<&Profile> {
        self.profile.get(&self.current_profile)
    }

    /// Modem manager URL, `MM_SERVER` wins over the profile.
    pub fn server(&self) -> String {
        let profile = self.current().map(|p| p.server.as_str());
        resolve(std::env::var(SERVER_ENV).ok(), profile, DEFAULT_SERVER)
    }

    /// Helper service URL, `MM_HELPER` wins over the profile.
    pub fn helper(&self) -> String {
        let profile = self.current().map(|p| p.helper.as_str());
        resolve(std::env::var(HELPER_ENV).ok(), profile, DEFAULT_HELPER_API)
    }
}

fn resolve(env: Option<String>, profile: Option<&str>, fallback: &str) -> String {
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| profile.map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(current_profile) = self.current() else {
            return write!(f, "{} (undefined)", self.current_profile);
        };
        let color = Color::from(current_profile.color.as_str());
        let mut colored_string = ColoredString::from(self.current_profile.as_str());
        colored_string.fgcolor = Some(color);
        colored_string.style = Style::default().bold();
        let mut colored_server = ColoredString::from(self.server().as_str());
        colored_server.fgcolor = Some(color);
        write!(f, "{} {}", colored_string, colored_server)
    }
}

//! Project scaffolding for `folio init`.

use std::fs;

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::log;

/// Default config written by `folio init`.
const CONFIG_TEMPLATE: &str = r#"[build]
# Directory tree of design assets to scan (tilde paths allowed).
source = "assets"

# Manifest consumed by the portfolio front end.
output = "public/projects.json"
"#;

/// Create `folio.toml` and the asset directory in the project root.
///
/// Refuses to overwrite an existing config so a stray `init` can never
/// clobber a configured project.
pub fn new_project(config: &SiteConfig) -> Result<()> {
    let config_path = &config.config_path;

    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    fs::create_dir_all(config.get_root())
        .with_context(|| format!("cannot create {}", config.get_root().display()))?;
    fs::write(config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("cannot write {}", config_path.display()))?;
    fs::create_dir_all(&config.build.source)
        .with_context(|| format!("cannot create {}", config.build.source.display()))?;

    log!("init"; "created {}", config_path.display());
    log!("init"; "created {}/", config.root_relative(&config.build.source).display());
    log!("init"; "drop project folders into the asset directory and run 'folio build'");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scaffold_config(root: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = root.to_path_buf();
        config.config_path = root.join("folio.toml");
        config.build.source = root.join("assets");
        config.build.output = root.join("public/projects.json");
        config
    }

    #[test]
    fn test_init_scaffold() {
        let dir = TempDir::new().unwrap();
        let config = scaffold_config(dir.path());

        new_project(&config).unwrap();

        assert!(dir.path().join("assets").is_dir());
        let written = fs::read_to_string(dir.path().join("folio.toml")).unwrap();
        // The template must parse back into a valid config.
        let parsed: Result<SiteConfig, _> = toml::from_str(&written);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_init_refuses_existing_config() {
        let dir = TempDir::new().unwrap();
        let config = scaffold_config(dir.path());

        new_project(&config).unwrap();
        let err = new_project(&config).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}

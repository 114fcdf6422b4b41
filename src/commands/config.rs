//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use seekctl::Config;

/// Show effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the config file is read from by default.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write default settings to `path`, or to the default location.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    if target.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            target.display()
        );
    }

    let config = Config::default();
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    println!("Wrote {}", target.display());
    Ok(())
}

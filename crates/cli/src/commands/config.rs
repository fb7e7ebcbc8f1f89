use anyhow::{Context, Result};
use guestbook_core::AppConfig;

pub(crate) fn run() -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

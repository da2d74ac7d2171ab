use anyhow::{bail, Result};
use hearty_common::AppConfig;
use std::path::Path;

pub fn show(config: &AppConfig) -> Result<()> {
    println!("Hearty Configuration");
    println!("====================");
    println!();
    println!("Mock mode:    {}", config.mock_mode);
    println!("API base URL: {}", display_or_none(&config.api_base_url));
    println!("AI provider:  {}", config.ai_provider);
    println!("Report path:  {}", config.network.report_path);
    println!("Timeout:      {}s", config.network.timeout_secs);
    println!(
        "API token:    {}",
        if config.network.api_token.is_some() { "configured" } else { "none" }
    );
    println!("Log level:    {}", config.general.log_level);

    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    AppConfig::default().save_to_path(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn display_or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        "(none)"
    } else {
        value
    }
}

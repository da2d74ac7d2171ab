use anyhow::Result;
use hearty_common::{AppConfig, ProviderKind};

pub fn list(config: &AppConfig) -> Result<()> {
    let active = config.provider_kind().ok();

    println!("Report Providers");
    println!("================");
    for kind in ProviderKind::ALL {
        let marker = if Some(kind) == active { "*" } else { " " };
        println!(" {} {:<8} ({})", marker, kind, kind.config_name());
    }

    if active.is_none() {
        println!();
        println!("Configured provider {:?} is not recognised", config.ai_provider);
    }
    if config.mock_mode {
        println!();
        println!("Mock mode is on: reports will not reach any provider.");
    }

    Ok(())
}

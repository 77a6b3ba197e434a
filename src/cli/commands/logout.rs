//! Logout command handler

use crate::config::LocalConfig;

pub fn cmd_logout() -> anyhow::Result<()> {
    let mut config = LocalConfig::load();

    if config.username.take().is_some() {
        config.save()?;
        println!("Signed out. The database URL is still remembered.");
    } else {
        println!("No remembered user.");
    }

    Ok(())
}

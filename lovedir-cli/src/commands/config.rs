use anyhow::Result;
use lovedir_core::LoveDirConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = LoveDirConfig::config_path()?;
    let config = LoveDirConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Journal:  {}", config.journal_path().display());
    println!("  Blobs:    {}", config.blob_path().display());
    println!();
    println!("{}", "Effective config".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}

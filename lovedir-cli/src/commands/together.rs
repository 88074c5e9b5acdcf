use anyhow::Result;
use chrono::NaiveDate;
use lovedir_core::LoveDirConfig;
use lovedir_core::recurrence::days_since;
use owo_colors::OwoColorize;

pub fn run(config: &LoveDirConfig, today: NaiveDate) -> Result<()> {
    match days_since(&config.start_date, today) {
        Some(days) => {
            println!("{} days together", days.to_string().bold());
            println!("{}", format!("since {}", config.start_date).dimmed());
        }
        None => {
            println!(
                "{}",
                format!("Start date '{}' is invalid or in the future", config.start_date)
                    .dimmed()
            );
        }
    }

    Ok(())
}

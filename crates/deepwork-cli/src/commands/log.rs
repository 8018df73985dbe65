use chrono::NaiveDate;
use clap::Subcommand;
use deepwork_core::achievements::{purge_older_than, summarize_day};
use deepwork_core::{parse_date_key, AchievementLog};

use super::{day_or_today, parse_day, Context};

#[derive(Subcommand)]
pub enum LogAction {
    /// Today's achievements
    Today {
        #[arg(long)]
        json: bool,
    },
    /// Every day with at least one achievement
    List,
    /// Achievements logged on one day
    Show {
        /// Day to show (YYYY-MM-DD)
        #[arg(value_parser = parse_day)]
        date: NaiveDate,
        #[arg(long)]
        json: bool,
    },
    /// Delete days older than the retention horizon
    Purge {
        /// Override `retention.horizon_days`
        #[arg(long)]
        days: Option<u32>,
    },
}

pub fn run(ctx: &Context, action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = ctx.database()?;

    match action {
        LogAction::Today { json } => show_day(&db, day_or_today(None), json)?,
        LogAction::Show { date, json } => show_day(&db, date, json)?,
        LogAction::List => {
            for key in db.list_date_keys()? {
                let Some(date) = parse_date_key(&key) else {
                    println!("{key}\t(unreadable)");
                    continue;
                };
                println!("{key}\t{}", db.entries_on(date)?.len());
            }
        }
        LogAction::Purge { days } => {
            let config = ctx.config()?;
            let horizon = days.unwrap_or(config.retention.horizon_days);
            let removed =
                purge_older_than(&db, day_or_today(None), horizon, &config.walk_policy())?;
            println!("removed {} day(s)", removed.len());
            for key in removed {
                println!("  {key}");
            }
        }
    }
    Ok(())
}

fn show_day<L: AchievementLog>(
    log: &L,
    date: NaiveDate,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = summarize_day(log, date)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}: {} achievement(s)", summary.date, summary.count);
    for goal in &summary.goals {
        println!("  - {goal}");
    }
    Ok(())
}

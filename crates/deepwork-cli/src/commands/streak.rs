use chrono::NaiveDate;
use clap::Subcommand;
use deepwork_core::{StreakEngine, StreakRecord};

use super::{day_or_today, parse_day, Context};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Recompute the streak and print it
    Show {
        /// Compute as of this day instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_day)]
        today: Option<NaiveDate>,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(ctx: &Context, action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StreakAction::Show { today, json } => {
            let record = recompute(ctx, day_or_today(today))?;
            print_record(&record, json)?;
        }
    }
    Ok(())
}

/// Recompute with the configured lookback and persist the result.
pub fn recompute(
    ctx: &Context,
    today: NaiveDate,
) -> Result<StreakRecord, Box<dyn std::error::Error>> {
    let config = ctx.config()?;
    let db = ctx.database()?;
    Ok(StreakEngine::new(&db, &db)
        .with_policy(config.walk_policy())
        .recompute(today))
}

pub fn print_record(record: &StreakRecord, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    println!("Current streak: {} {}", record.current, workdays(record.current));
    println!("Longest streak: {} {}", record.longest, workdays(record.longest));
    if let Some(date) = record.last_achievement_date {
        println!("Last achievement: {date}");
    }
    if record.show_motivation {
        println!("You used your grace day. One more session keeps the streak alive.");
    }
    Ok(())
}

fn workdays(n: u32) -> &'static str {
    if n == 1 {
        "workday"
    } else {
        "workdays"
    }
}

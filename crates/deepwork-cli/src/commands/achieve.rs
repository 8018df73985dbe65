use chrono::{NaiveDate, Utc};
use clap::Args;
use deepwork_core::{date_key, local_today, Achievement, AchievementLog};

use super::{day_or_today, parse_day, streak, Context};

#[derive(Args)]
pub struct AchieveArgs {
    /// What the session accomplished
    pub goal: String,
    /// Log under this day instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    pub date: Option<NaiveDate>,
    /// Print the updated streak as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log a confirmed session, then refresh the streak as of today.
///
/// `--date` only picks the log day. The streak is always recomputed as of
/// today.
pub fn run(ctx: &Context, args: AchieveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let goal = args.goal.trim();
    if goal.is_empty() {
        return Err("goal must not be empty".into());
    }
    let day = day_or_today(args.date);

    let db = ctx.database()?;
    db.append(day, &Achievement::new(goal, Utc::now()))?;
    tracing::info!(day = %date_key(day), "achievement logged");

    if !args.json {
        println!("Achievement logged for {}", date_key(day));
    }
    let record = streak::recompute(ctx, local_today())?;
    streak::print_record(&record, args.json)
}

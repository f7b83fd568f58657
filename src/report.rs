use crate::errors::StatsResult;
use crate::match_stats::Statistics;
use crate::types::PlayerName;

const LINE_WIDTH: usize = 80;

/// Renders the per-player summary table to stdout. Players whose summary
/// failed get dash markers instead of numbers.
pub fn render(total_matches: usize, report: &[(PlayerName, StatsResult<Statistics>)]) {
    let line = "-".repeat(LINE_WIDTH);
    println!("{}", line);
    println!();
    println!("ANALYTICS");
    println!();
    println!(
        "{:<20} {:>9} {:>9} {:>17} {:>17}",
        "Player", "Max kills", "Avg kills", "Max time survived", "Avg time survived"
    );
    for (name, summary) in report {
        match summary {
            Ok(stats) => println!(
                "{:<20} {:>9} {:>9.3} {:>17} {:>17}",
                name,
                stats.max_kills,
                stats.avg_kills,
                stats.max_time_survived,
                stats.avg_time_survived
            ),
            Err(_) => println!(
                "{:<20} {:>9} {:>9} {:>17} {:>17}",
                name, "-", "-", "-", "-"
            ),
        }
    }
    println!();
    println!("Generated from {} matches.", total_matches);
    println!("{}", line);
}

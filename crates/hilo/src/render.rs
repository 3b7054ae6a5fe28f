//! Console rendering of a weekly report.

use hilo_stats::WeeklyReport;

/// Format a percentage cell; zero prints as "-" to keep the tables scannable.
fn pct(value: f64) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        format!("{value:.2}%")
    }
}

/// Print the full report to stdout.
pub fn print_report(symbol: &str, report: &WeeklyReport) {
    println!();
    println!("Weekly high/low timing for {symbol} ({} weeks)", report.total_weeks);

    println!();
    println!("By day of week:");
    println!("{:<5} {:>10} {:>10} {:>10}", "Day", "High", "Low", "Total");
    for row in &report.by_day {
        println!(
            "{:<5} {:>10} {:>10} {:>10}",
            row.day.label(),
            pct(row.high),
            pct(row.low),
            pct(row.total)
        );
    }

    println!();
    println!("By hour of day:");
    println!("{:<5} {:>10} {:>10} {:>10}", "Hour", "High", "Low", "Total");
    for row in &report.by_hour {
        if row.total == 0.0 {
            continue;
        }
        println!(
            "{:02}:00 {:>10} {:>10} {:>10}",
            row.hour,
            pct(row.high),
            pct(row.low),
            pct(row.total)
        );
    }

    println!();
    println!("Most frequent extremum slots per day:");
    println!("{:<5} {:<6} {:>10} {:>10} {:>10}", "Day", "Hour", "High", "Low", "Total");
    for row in &report.frequent_day_hours {
        println!(
            "{:<5} {:02}:00  {:>10} {:>10} {:>10}",
            row.day.label(),
            row.hour,
            pct(row.high),
            pct(row.low),
            pct(row.total)
        );
    }

    println!();
    println!(
        "Weekly range: mean {:.2}, median {:.2}",
        report.range_summary.mean, report.range_summary.median
    );

    println!();
    println!("Average volume by hour:");
    for (hour, volume) in &report.volume_by_hour {
        println!("{hour:02}:00 {volume:>14.2}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_formatting() {
        assert_eq!(pct(0.0), "-");
        assert_eq!(pct(50.0), "50.00%");
        assert_eq!(pct(33.333), "33.33%");
    }
}

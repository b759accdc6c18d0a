//! Output formatting for solver results

use crate::executor::DayResult;
use aoc_core::FactoryInfo;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print the answers of one day
    pub fn print_day(&self, result: &DayResult) {
        print!("{}", self.render_day(result));
    }

    fn render_day(&self, result: &DayResult) -> String {
        if self.quiet {
            return result
                .answers
                .iter()
                .map(|a| format!("{}\n", a.answer))
                .collect();
        }

        let mut out = format!("Day {:02}", result.key.day);
        if !result.title.is_empty() {
            out.push_str(": ");
            out.push_str(result.title);
        }
        out.push_str(&format!(
            " (parse: {})\n",
            format_duration(result.parse_duration)
        ));
        for answer in &result.answers {
            out.push_str(&format!(
                "  Part {}: {} (solve: {})\n",
                answer.part,
                answer.answer,
                format_duration(answer.elapsed)
            ));
        }
        out
    }

    /// Print a summary after all results
    ///
    /// Only printed when more than one day ran.
    pub fn print_summary(&self, results: &[DayResult]) {
        if self.quiet || results.len() < 2 {
            return;
        }

        let parts: usize = results.iter().map(|r| r.answers.len()).sum();
        let total_parse_time: TimeDelta = results.iter().map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .flat_map(|r| &r.answers)
            .map(|a| a.elapsed)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Days: {}, parts: {}", results.len(), parts);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Print one line per registered solver
pub fn print_listing(infos: &[FactoryInfo]) {
    for info in infos {
        println!("{}", format_listing_line(info));
    }
}

fn format_listing_line(info: &FactoryInfo) -> String {
    format!("{}  {} part(s)  {}", info.key, info.parts, info.title)
        .trim_end()
        .to_string()
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

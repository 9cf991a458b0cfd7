use std::time::Duration;

const HOURS_PER_DAY: u64 = 24;

/// Format a configured duration as whole days, whole hours, or seconds,
/// whichever is the largest exact unit.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs % 3600 != 0 {
        return plural(secs, "second");
    }
    let hours = secs / 3600;
    if hours % HOURS_PER_DAY == 0 {
        plural(hours / HOURS_PER_DAY, "day")
    } else {
        plural(hours, "hour")
    }
}

/// Format a branch age for reports.
///
/// `None` (commit time unknown) shows as "unknown". Ages under a day show
/// in hours; negative ages (commit dated in the future) clamp to zero.
pub fn format_age(age: Option<chrono::Duration>) -> String {
    let Some(age) = age else {
        return "unknown".to_string();
    };
    let hours = age.num_hours().max(0) as u64;
    if hours < HOURS_PER_DAY {
        plural(hours, "hour")
    } else {
        plural(hours / HOURS_PER_DAY, "day")
    }
}

/// "1 branch", "3 branches"
pub fn pluralize(count: usize, singular: &str, plural_form: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural_form}")
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

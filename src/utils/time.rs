use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAgo {
    pub label: String,
    pub recent: bool,
}

/// Coarse relative-time label for a stored UTC timestamp. The largest
/// nonzero unit wins; months and years are day-based (30 / 365), not
/// calendar-based. `recent` is true only while the age is under 6 minutes.
pub fn humanize(then: DateTime<Utc>, now: DateTime<Utc>) -> TimeAgo {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_seconds() < 0 {
        // clock skew; treat as brand new
        return TimeAgo { label: "Just now".to_string(), recent: true };
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    let months = days / 30;
    let years = days / 365;

    if years > 0 {
        return TimeAgo { label: unit(years, "year"), recent: false };
    }
    if months > 0 {
        return TimeAgo { label: unit(months, "month"), recent: false };
    }
    if days > 0 {
        return TimeAgo { label: unit(days, "day"), recent: false };
    }
    if hours > 0 {
        return TimeAgo { label: unit(hours, "hour"), recent: false };
    }
    if minutes > 0 {
        return TimeAgo { label: unit(minutes, "minute"), recent: minutes < 6 };
    }
    TimeAgo { label: "Just now".to_string(), recent: true }
}

fn unit(n: i64, name: &str) -> String {
    if n == 1 {
        format!("1 {} ago", name)
    } else {
        format!("{} {}s ago", n, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(ago: Duration) -> TimeAgo {
        let now = Utc::now();
        humanize(now - ago, now)
    }

    #[test]
    fn thirty_seconds_is_just_now_and_recent() {
        let t = at(Duration::seconds(30));
        assert_eq!(t.label, "Just now");
        assert!(t.recent);
    }

    #[test]
    fn five_minutes_is_still_recent() {
        let t = at(Duration::minutes(5));
        assert_eq!(t.label, "5 minutes ago");
        assert!(t.recent);
    }

    #[test]
    fn ten_minutes_is_not_recent() {
        let t = at(Duration::minutes(10));
        assert_eq!(t.label, "10 minutes ago");
        assert!(!t.recent);
    }

    #[test]
    fn ninety_minutes_reports_hours() {
        let t = at(Duration::minutes(90));
        assert_eq!(t.label, "1 hour ago");
        assert!(!t.recent);
    }

    #[test]
    fn forty_days_reports_day_based_months() {
        let t = at(Duration::days(40));
        assert_eq!(t.label, "1 month ago");
        assert!(!t.recent);
    }

    #[test]
    fn four_hundred_days_is_one_year() {
        let t = at(Duration::days(400));
        assert_eq!(t.label, "1 year ago");
        assert!(!t.recent);
    }

    #[test]
    fn plural_units() {
        assert_eq!(at(Duration::days(3)).label, "3 days ago");
        assert_eq!(at(Duration::days(800)).label, "2 years ago");
    }

    #[test]
    fn future_timestamp_degrades_to_just_now() {
        let now = Utc::now();
        let t = humanize(now + Duration::minutes(2), now);
        assert_eq!(t.label, "Just now");
        assert!(t.recent);
    }
}

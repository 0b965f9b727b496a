use chrono::{DateTime, NaiveDate, Utc};

/// Clock abstracts access to the current timestamp so queries and
/// projections remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the current month as a `YYYY-MM` key, the unit used by
    /// month-window queries.
    fn month_key(&self) -> String {
        self.now().format("%Y-%m").to_string()
    }
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn month_key_is_zero_padded() {
        let instant = DateTime::parse_from_rfc3339("2025-03-05T23:59:59Z")
            .expect("timestamp")
            .with_timezone(&Utc);
        assert_eq!(FixedClock(instant).month_key(), "2025-03");
    }
}

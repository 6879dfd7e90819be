use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Clock abstraction so progress timestamps are deterministic in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Fixed clock at the given epoch milliseconds; falls back to the epoch when out of range.
    pub fn fixed_millis(ms: i64) -> Self {
        Self::Fixed(DateTime::from_timestamp_millis(ms).unwrap_or_default())
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(t) => *t,
        }
    }

    pub fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Advance a fixed clock. No effect on the system clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Self::Fixed(t) = self {
            *t += delta;
        }
    }
}

/// `D-n` while the end date is today or ahead, `D+n` once it has passed.
pub fn dday_label(end: NaiveDate, today: NaiveDate) -> String {
    let left = (end - today).num_days();
    if left >= 0 {
        format!("D-{left}")
    } else {
        format!("D+{}", left.abs())
    }
}

//! Optional-value resolution with an explicit counter.

/// Value the counter is set to when no input value is present.
pub const DEFAULT_VALUE: i64 = 99;

/// Caller-owned counter updated by [`resolve_status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter(i64);

impl Counter {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    fn set(&mut self, value: i64) {
        self.0 = value;
    }
}

/// Which path [`resolve_status`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Updated(i64),
    Defaulted(i64),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Updated(value) => write!(f, "UPDATED WITH {value}"),
            Status::Defaulted(value) => write!(f, "DEFAULTED WITH {value}"),
        }
    }
}

/// Store `value` in `counter`, or [`DEFAULT_VALUE`] when it is absent.
///
/// The default branch only runs when `value` is `None`.
pub fn resolve_status(value: Option<i64>, counter: &mut Counter) -> Status {
    let status = match value {
        Some(value) => {
            counter.set(value);
            Status::Updated(value)
        }
        None => {
            counter.set(DEFAULT_VALUE);
            Status::Defaulted(DEFAULT_VALUE)
        }
    };
    tracing::debug!(%status, counter = counter.get(), "status resolved");
    status
}

#[cfg(test)]
mod tests {
    use super::{Counter, DEFAULT_VALUE, Status, resolve_status};

    #[test]
    fn present_value_updates_counter() {
        let mut counter = Counter::default();
        let status = resolve_status(Some(1), &mut counter);
        assert_eq!(status, Status::Updated(1));
        assert_eq!(status.to_string(), "UPDATED WITH 1");
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn absent_value_defaults_counter() {
        let mut counter = Counter::default();
        let status = resolve_status(None, &mut counter);
        assert_eq!(status.to_string(), "DEFAULTED WITH 99");
        assert_eq!(counter.get(), DEFAULT_VALUE);
    }

    #[test]
    fn last_write_wins() {
        let mut counter = Counter::new(5);
        resolve_status(None, &mut counter);
        resolve_status(Some(-3), &mut counter);
        assert_eq!(counter, Counter::new(-3));
    }
}

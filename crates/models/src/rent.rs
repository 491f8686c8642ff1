use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

/// Lifecycle of a movie rent. A rent only ever moves from open to closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RentState {
    Open,
    Closed { at: NaiveDateTime },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("is_closed and closed_datetime disagree")]
    Inconsistent,
    #[error("a closed rent cannot be reopened")]
    Reopen,
    #[error("a closed rent cannot be modified")]
    AlreadyClosed,
}

impl RentState {
    /// Builds the state from the stored `is_closed` flag and timestamp
    pub fn from_columns(
        is_closed: bool,
        closed_datetime: Option<NaiveDateTime>,
    ) -> Result<Self, TransitionError> {
        match (is_closed, closed_datetime) {
            (false, None) => Ok(Self::Open),
            (true, Some(at)) => Ok(Self::Closed { at }),
            _ => Err(TransitionError::Inconsistent),
        }
    }

    /// The `(is_closed, closed_datetime)` pair to persist
    pub fn into_columns(self) -> (bool, Option<NaiveDateTime>) {
        match self {
            Self::Open => (false, None),
            Self::Closed { at } => (true, Some(at)),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }

    /// Closes the rent. Closing twice keeps the first timestamp.
    pub fn close(self, now: NaiveDateTime) -> Self {
        match self {
            Self::Open => Self::Closed { at: now },
            closed => closed,
        }
    }

    /// Applies the status requested by an update of the whole rent.
    ///
    /// Closed rents are immutable, so any update of one is rejected.
    pub fn apply(self, requested: Option<bool>, now: NaiveDateTime) -> Result<Self, TransitionError> {
        match (self, requested) {
            (Self::Closed { .. }, Some(false)) => Err(TransitionError::Reopen),
            (Self::Closed { .. }, _) => Err(TransitionError::AlreadyClosed),
            (Self::Open, Some(true)) => Ok(self.close(now)),
            (Self::Open, _) => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_columns_round_trip() {
        assert_eq!(RentState::from_columns(false, None), Ok(RentState::Open));
        assert_eq!(
            RentState::from_columns(true, Some(at(9))),
            Ok(RentState::Closed { at: at(9) })
        );
        assert_eq!(
            RentState::Closed { at: at(9) }.into_columns(),
            (true, Some(at(9)))
        );
    }

    #[test]
    fn test_inconsistent_columns_rejected() {
        assert_eq!(
            RentState::from_columns(true, None),
            Err(TransitionError::Inconsistent)
        );
        assert_eq!(
            RentState::from_columns(false, Some(at(1))),
            Err(TransitionError::Inconsistent)
        );
    }

    #[test]
    fn test_close_is_idempotent() {
        let closed = RentState::Open.close(at(10));
        assert_eq!(closed, RentState::Closed { at: at(10) });
        assert_eq!(closed.close(at(12)), RentState::Closed { at: at(10) });
    }

    #[test]
    fn test_apply_on_open_rent() {
        assert_eq!(RentState::Open.apply(None, at(8)), Ok(RentState::Open));
        assert_eq!(RentState::Open.apply(Some(false), at(8)), Ok(RentState::Open));
        assert_eq!(
            RentState::Open.apply(Some(true), at(8)),
            Ok(RentState::Closed { at: at(8) })
        );
    }

    #[test]
    fn test_apply_on_closed_rent() {
        let closed = RentState::Closed { at: at(8) };
        assert_eq!(closed.apply(Some(false), at(9)), Err(TransitionError::Reopen));
        assert_eq!(
            closed.apply(Some(true), at(9)),
            Err(TransitionError::AlreadyClosed)
        );
        assert_eq!(closed.apply(None, at(9)), Err(TransitionError::AlreadyClosed));
    }
}

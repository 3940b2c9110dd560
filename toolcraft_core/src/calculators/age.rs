//! # Age Calculator
//!
//! Calendar-accurate elapsed years/months/days between a birth date and a
//! reference date. This is a field-wise subtraction with borrow over real
//! month lengths, not a total-day division: "1 month" means reaching the
//! same day-of-month one month later, however long that month was.
//!
//! ## Borrow rule
//!
//! Subtract year, month, and day fields independently, then repair:
//!
//! 1. If the day difference is negative, borrow one month and count days
//!    through the month immediately preceding the reference month. The birth
//!    day-of-month is clamped to that month's length, so a day-31 birth
//!    borrowing across February still yields a non-negative day count.
//! 2. If the month difference is negative, borrow one year.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toolcraft_core::calculators::age::{calculate, AgeInput};
//!
//! let input = AgeInput {
//!     birth_date: NaiveDate::from_ymd_opt(2000, 1, 31).unwrap(),
//!     as_of: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
//! };
//! let age = calculate(&input).unwrap();
//! assert_eq!((age.years, age.months, age.days), (24, 1, 1));
//! ```

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcResult, NotComputable};

/// Input parameters for an age calculation.
///
/// ## JSON Example
///
/// ```json
/// { "birth_date": "2000-01-31", "as_of": "2024-03-01" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeInput {
    /// Date of birth (calendar date, no time component)
    pub birth_date: NaiveDate,

    /// Reference date; the current local date when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

/// Elapsed time split into calendar fields, all non-negative.
///
/// ## JSON Example
///
/// ```json
/// { "years": 24, "months": 1, "days": 1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    /// Whole years elapsed
    pub years: i32,

    /// Whole months past the last year boundary (0-11)
    pub months: u32,

    /// Days past the last month boundary
    pub days: u32,
}

/// Day count of the given month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Calculate elapsed age as of the input's reference date (or today).
///
/// # Returns
///
/// * `Ok(AgeResult)` - years/months/days, all non-negative
/// * `Err(NotComputable)` - the birth date lies after the reference date
pub fn calculate(input: &AgeInput) -> CalcResult<AgeResult> {
    let as_of = input.as_of.unwrap_or_else(|| Local::now().date_naive());
    calculate_at(input.birth_date, as_of)
}

/// Calculate elapsed age between two explicit dates.
pub fn calculate_at(birth: NaiveDate, as_of: NaiveDate) -> CalcResult<AgeResult> {
    if birth > as_of {
        return Err(NotComputable::new(
            "birth_date",
            birth.to_string(),
            "Birth date cannot be in the future",
        ));
    }

    let mut years = as_of.year() - birth.year();
    let mut months = as_of.month() as i32 - birth.month() as i32;
    let mut days = as_of.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        // Borrow through the month before the reference month; a year rolls
        // back when that month is December.
        let (prev_year, prev_month) = if as_of.month() == 1 {
            (as_of.year() - 1, 12)
        } else {
            (as_of.year(), as_of.month() - 1)
        };
        let dim_prev = days_in_month(prev_year, prev_month);
        let anchor_day = birth.day().min(dim_prev);
        days = (dim_prev - anchor_day) as i32 + as_of.day() as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeResult {
        years,
        months: months as u32,
        days: days as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn age(by: i32, bm: u32, bd: u32, ty: i32, tm: u32, td: u32) -> (i32, u32, u32) {
        let r = calculate_at(date(by, bm, bd), date(ty, tm, td)).unwrap();
        (r.years, r.months, r.days)
    }

    #[test]
    fn test_exact_birthday() {
        assert_eq!(age(2000, 5, 10, 2020, 5, 10), (20, 0, 0));
    }

    #[test]
    fn test_simple_difference() {
        assert_eq!(age(1990, 3, 10, 2024, 6, 25), (34, 3, 15));
    }

    #[test]
    fn test_day_borrow() {
        // 2024-03-10 minus 1990-06-15: borrow through February 2024 (29 days)
        assert_eq!(age(1990, 6, 15, 2024, 3, 10), (33, 8, 24));
    }

    #[test]
    fn test_month_borrow() {
        assert_eq!(age(2000, 11, 5, 2024, 3, 5), (23, 4, 0));
    }

    #[test]
    fn test_february_borrow_with_clamp() {
        // Day-31 birth borrowing across a 29-day February: the birth day
        // clamps to the month length, leaving one day past the anniversary.
        assert_eq!(age(2000, 1, 31, 2024, 3, 1), (24, 1, 1));
    }

    #[test]
    fn test_borrow_across_year_boundary() {
        // Reference in January borrows through December of the prior year
        assert_eq!(age(2000, 12, 20, 2024, 1, 10), (23, 0, 21));
    }

    #[test]
    fn test_leap_day_birth() {
        assert_eq!(age(2000, 2, 29, 2024, 2, 28), (23, 11, 30));
        assert_eq!(age(2000, 2, 29, 2024, 2, 29), (24, 0, 0));
        assert_eq!(age(2000, 2, 29, 2024, 3, 1), (24, 0, 1));
    }

    #[test]
    fn test_newborn() {
        assert_eq!(age(2024, 3, 1, 2024, 3, 1), (0, 0, 0));
        assert_eq!(age(2024, 2, 28, 2024, 3, 1), (0, 0, 2));
    }

    #[test]
    fn test_future_birth_not_computable() {
        let err = calculate_at(date(2030, 1, 1), date(2024, 3, 1)).unwrap_err();
        assert_eq!(err.field, "birth_date");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_default_reference_is_today() {
        // Yesterday's birth is one day of age regardless of when this runs.
        let today = Local::now().date_naive();
        let yesterday = today.pred_opt().unwrap();
        let result = calculate(&AgeInput {
            birth_date: yesterday,
            as_of: None,
        })
        .unwrap();
        assert_eq!((result.years, result.months), (0, 0));
        assert_eq!(result.days, 1);
    }

    #[test]
    fn test_serialization() {
        let input = AgeInput {
            birth_date: date(2000, 1, 31),
            as_of: Some(date(2024, 3, 1)),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("2000-01-31"));
        let roundtrip: AgeInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.birth_date, input.birth_date);

        // as_of is optional in the JSON form
        let bare: AgeInput = serde_json::from_str(r#"{"birth_date":"2010-06-01"}"#).unwrap();
        assert!(bare.as_of.is_none());
    }
}

//! Month grid layout for the calendar view.

use chrono::{Datelike, Months, NaiveDate};

/// Monday-first month layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first_day: NaiveDate,
    /// Empty cells before the 1st (Monday = 0).
    pub leading_blanks: u32,
    pub days_in_month: u32,
}

impl MonthGrid {
    /// Layout for `month` (1-12) of `year`; `None` for an invalid month.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = first_day.checked_add_months(Months::new(1))?;
        let days_in_month = u32::try_from((next_first - first_day).num_days()).ok()?;
        Some(Self {
            first_day,
            leading_blanks: first_day.weekday().num_days_from_monday(),
            days_in_month,
        })
    }

    /// Layout of the month containing `day`.
    pub fn containing(day: NaiveDate) -> Option<Self> {
        Self::for_month(day.year(), day.month())
    }

    /// Layout `offset` months away (negative goes back).
    pub fn shifted(&self, offset: i32) -> Option<Self> {
        let months = Months::new(offset.unsigned_abs());
        let first = if offset >= 0 {
            self.first_day.checked_add_months(months)?
        } else {
            self.first_day.checked_sub_months(months)?
        };
        Self::containing(first)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Grid cells in display order: `None` for leading blanks, then each day.
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        let blanks = (0..self.leading_blanks).map(|_| None);
        let days = self
            .first_day
            .iter_days()
            .take(self.days_in_month as usize)
            .map(Some);
        blanks.chain(days).collect()
    }
}

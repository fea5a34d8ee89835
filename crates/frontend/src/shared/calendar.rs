//! Month grid arithmetic for the calendar popover.

use chrono::{Datelike, NaiveDate};

/// Year and month (1-12) shown by the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Move by `delta` months, carrying into the year.
    pub fn shift(&self, delta: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Month to open the popover on: the selection, else `today` clamped into the bounds.
    pub fn initial(
        selected: Option<NaiveDate>,
        today: NaiveDate,
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
    ) -> Self {
        let anchor = selected.unwrap_or_else(|| match (min, max) {
            (Some(min), _) if today < min => min,
            (_, Some(max)) if today > max => max,
            _ => today,
        });
        Self::of(anchor)
    }
}

/// Whole weeks covering the month, each starting on `first_day_of_week` (0 = Sunday).
pub fn month_grid(view: MonthView, first_day_of_week: u8) -> Vec<[NaiveDate; 7]> {
    let Some(first) = view.first_day() else {
        return Vec::new();
    };
    let days_in_month = view
        .shift(1)
        .first_day()
        .map(|next| next.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31);

    let offset = (first.weekday().num_days_from_sunday() + 7 - u32::from(first_day_of_week % 7)) % 7;
    let weeks = (offset + days_in_month).div_ceil(7) as usize;

    let Some(start) = first.checked_sub_days(chrono::Days::new(u64::from(offset))) else {
        return Vec::new();
    };

    let days: Vec<NaiveDate> = start.iter_days().take(weeks * 7).collect();
    days.chunks_exact(7)
        .filter_map(|week| <[NaiveDate; 7]>::try_from(week).ok())
        .collect()
}

/// Whether `date` lies inside the optional inclusive bounds.
pub fn is_selectable(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.map_or(true, |min| date >= min) && max.map_or(true, |max| date <= max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_across_years() {
        let jan = MonthView { year: 2024, month: 1 };
        assert_eq!(jan.shift(-1), MonthView { year: 2023, month: 12 });
        assert_eq!(jan.shift(11), MonthView { year: 2024, month: 12 });
        assert_eq!(jan.shift(12), MonthView { year: 2025, month: 1 });
        assert_eq!(jan.shift(-25), MonthView { year: 2021, month: 12 });
    }

    #[test]
    fn test_grid_sunday_start() {
        // March 2024 starts on a Friday.
        let grid = month_grid(MonthView { year: 2024, month: 3 }, 0);

        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0][0], date(2024, 2, 25));
        assert_eq!(grid[0][5], date(2024, 3, 1));
        assert_eq!(grid[5][6], date(2024, 4, 6));
        assert!(grid.iter().all(|week| week[0].weekday() == Weekday::Sun));
    }

    #[test]
    fn test_grid_monday_start() {
        let grid = month_grid(MonthView { year: 2024, month: 3 }, 1);

        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][0], date(2024, 2, 26));
        assert_eq!(grid[0][4], date(2024, 3, 1));
        assert_eq!(grid[4][6], date(2024, 3, 31));
        assert!(grid.iter().all(|week| week[0].weekday() == Weekday::Mon));
    }

    #[test]
    fn test_grid_exact_fit() {
        // February 2015 starts on Sunday and has 28 days.
        let grid = month_grid(MonthView { year: 2015, month: 2 }, 0);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[3][6], date(2015, 2, 28));
    }

    #[test]
    fn test_grid_saturday_start_covers_month() {
        let grid = month_grid(MonthView { year: 2024, month: 2 }, 6);
        let days: Vec<_> = grid.iter().flatten().copied().collect();

        assert!(days.contains(&date(2024, 2, 1)));
        assert!(days.contains(&date(2024, 2, 29)));
        assert_eq!(days[0].weekday(), Weekday::Sat);
    }

    #[test]
    fn test_is_selectable() {
        let min = Some(date(2024, 2, 1));
        let max = Some(date(2024, 2, 29));

        assert!(is_selectable(date(2024, 2, 1), min, max));
        assert!(is_selectable(date(2024, 2, 29), min, max));
        assert!(!is_selectable(date(2024, 1, 31), min, max));
        assert!(!is_selectable(date(2024, 3, 1), min, max));
        assert!(is_selectable(date(1900, 1, 1), None, None));
    }

    #[test]
    fn test_initial_month() {
        let today = date(2024, 6, 15);
        let min = Some(date(2024, 8, 1));

        assert_eq!(
            MonthView::initial(Some(date(2023, 1, 9)), today, min, None),
            MonthView { year: 2023, month: 1 }
        );
        assert_eq!(
            MonthView::initial(None, today, min, None),
            MonthView { year: 2024, month: 8 }
        );
        assert_eq!(
            MonthView::initial(None, today, None, Some(date(2024, 3, 3))),
            MonthView { year: 2024, month: 3 }
        );
        assert_eq!(MonthView::initial(None, today, None, None), MonthView::of(today));
    }
}

//! Month grid generation
//!
//! A grid always starts on the Monday on or before the 1st and ends on a
//! Sunday. A month whose last day is already a Sunday still gets one full
//! week of the next month appended, so grids are 35 or 42 cells long.

use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// Month names, indexed by 0-based month
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of years offered by the default year picker
pub const YEAR_SPAN: i32 = 15;

/// Which month a grid cell belongs to, relative to the grid's month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPlacement {
    Previous,
    Current,
    Next,
}

/// One day in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub placement: CellPlacement,
    pub is_today: bool,
}

impl CalendarCell {
    pub fn in_current_month(&self) -> bool {
        self.placement == CellPlacement::Current
    }
}

/// `(name, 0-based month)` pairs, January first
pub fn months() -> impl Iterator<Item = (&'static str, u32)> {
    MONTH_NAMES.iter().zip(0u32..).map(|(name, i)| (*name, i))
}

/// Name of a 0-based month
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// `YEAR_SPAN` consecutive years starting at `start`
pub fn years_from(start: i32) -> Vec<i32> {
    (start..start.saturating_add(YEAR_SPAN)).collect()
}

/// Year list starting at the current year
pub fn default_years() -> Vec<i32> {
    years_from(Local::now().year())
}

/// Fold an out-of-range month into the neighbouring year
fn normalize(month: i32, year: i32) -> Option<(u32, i32)> {
    let year = year.checked_add(month.div_euclid(12))?;
    Some((month.rem_euclid(12) as u32, year))
}

fn month_bounds(month: u32, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}

/// Dates of the grid for a 0-based `month` of `year`
///
/// `month` may be -1 or 12 (or further out); it is folded into the adjacent
/// year. Dates chrono cannot represent produce an empty grid.
pub fn generate(month: i32, year: i32) -> Vec<NaiveDate> {
    let Some((first, last)) = normalize(month, year).and_then(|(m, y)| month_bounds(m, y)) else {
        return Vec::new();
    };

    // Monday = 1 .. Sunday = 7
    let leading = first.weekday().number_from_monday() - 1;
    // Sunday counts as 0 here, which yields a whole trailing week
    let trailing = 7 - last.weekday().num_days_from_sunday();

    let Some(start) = first.checked_sub_days(Days::new(u64::from(leading))) else {
        return Vec::new();
    };
    let total = (leading + last.day() + trailing) as usize;
    start.iter_days().take(total).collect()
}

/// Grid cells tagged with their placement and whether they are `today`
pub fn generate_cells(month: i32, year: i32, today: NaiveDate) -> Vec<CalendarCell> {
    let Some((first, last)) = normalize(month, year).and_then(|(m, y)| month_bounds(m, y)) else {
        return Vec::new();
    };

    generate(month, year)
        .into_iter()
        .map(|date| CalendarCell {
            date,
            placement: if date < first {
                CellPlacement::Previous
            } else if date > last {
                CellPlacement::Next
            } else {
                CellPlacement::Current
            },
            is_today: date == today,
        })
        .collect()
}

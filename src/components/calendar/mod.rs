//! Calendar - month grid with month/year pickers
//!
//! Provides:
//! - A Monday-first day grid regenerated after every month/year change
//! - Previous/next month stepping with year rollover
//! - A floor at the first year of the year list (no ceiling)
//! - Year and month pickers built on controlled [`Select`]s
//!
//! # Example
//!
//! ```ignore
//! let mut calendar = Calendar::new()?
//!     .on_select_day(|date| println!("picked {}", date))
//!     .on_select_month(|m| println!("month {}", m));
//!
//! calendar.next_month();
//! for cell in calendar.cells() {
//!     // draw cell.date, dimmed unless cell.in_current_month()
//! }
//! ```

mod grid;

pub use grid::{
    default_years, generate, generate_cells, month_name, months, years_from, CalendarCell,
    CellPlacement, MONTH_NAMES, YEAR_SPAN,
};

use crate::components::select::Select;
use crate::config::CalendarConfig;
use crate::error::{Result, WidgetError};
use chrono::{Datelike, Local, NaiveDate};

pub type OnSelectDay = Box<dyn FnMut(NaiveDate)>;
pub type OnSelectMonth = Box<dyn FnMut(u32)>;
pub type OnSelectYear = Box<dyn FnMut(i32)>;

/// Calendar widget state
pub struct Calendar {
    years: Vec<i32>,

    /// 0-based
    month: u32,
    year: i32,
    today: NaiveDate,

    /// Derived from `month`/`year`, never edited directly
    cells: Vec<CalendarCell>,

    show_change_month_buttons: bool,
    year_select: Select,
    month_select: Select,

    on_select_day: Option<OnSelectDay>,
    on_select_month: Option<OnSelectMonth>,
    on_select_year: Option<OnSelectYear>,
}

impl std::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("month", &self.month)
            .field("year", &self.year)
            .field("today", &self.today)
            .field("years", &self.years)
            .field("show_change_month_buttons", &self.show_change_month_buttons)
            .finish()
    }
}

impl Calendar {
    /// Calendar on the current month, offering the next 15 years
    pub fn new() -> Result<Self> {
        Self::starting_at(Local::now().date_naive(), default_years())
    }

    /// Calendar on `today`'s month with an explicit year list
    pub fn starting_at(today: NaiveDate, years: Vec<i32>) -> Result<Self> {
        if years.is_empty() {
            return Err(WidgetError::EmptyYearList);
        }

        let year_select = Select::controlled("year", "Year", today.year().to_string())
            .with_options(years.iter().map(|y| (y.to_string(), y.to_string())));
        let month_select =
            Select::controlled("month", "Month", month_name(today.month0()).unwrap_or_default())
                .with_options(months().map(|(name, i)| (i.to_string(), name)));

        let mut calendar = Self {
            years,
            month: today.month0(),
            year: today.year(),
            today,
            cells: Vec::new(),
            show_change_month_buttons: false,
            year_select,
            month_select,
            on_select_day: None,
            on_select_month: None,
            on_select_year: None,
        };
        calendar.regenerate();
        Ok(calendar)
    }

    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        let today = Local::now().date_naive();
        let years = match (&config.years, config.first_year) {
            (Some(years), _) => years.clone(),
            (None, Some(first)) => years_from(first),
            (None, None) => years_from(today.year()),
        };
        Ok(Self::starting_at(today, years)?
            .with_change_month_buttons(config.show_change_month_buttons))
    }

    /// Show previous/next month buttons next to the pickers
    pub fn with_change_month_buttons(mut self, show: bool) -> Self {
        self.show_change_month_buttons = show;
        self
    }

    pub fn on_select_day<F>(mut self, callback: F) -> Self
    where
        F: FnMut(NaiveDate) + 'static,
    {
        self.on_select_day = Some(Box::new(callback));
        self
    }

    pub fn on_select_month<F>(mut self, callback: F) -> Self
    where
        F: FnMut(u32) + 'static,
    {
        self.on_select_month = Some(Box::new(callback));
        self
    }

    pub fn on_select_year<F>(mut self, callback: F) -> Self
    where
        F: FnMut(i32) + 'static,
    {
        self.on_select_year = Some(Box::new(callback));
        self
    }

    /// Selected month, 0-based
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn shows_change_month_buttons(&self) -> bool {
        self.show_change_month_buttons
    }

    pub fn year_select(&self) -> &Select {
        &self.year_select
    }

    pub fn month_select(&self) -> &Select {
        &self.month_select
    }

    /// Year picker, for routing keyboard input to it
    pub fn year_select_mut(&mut self) -> &mut Select {
        &mut self.year_select
    }

    /// Month picker, for routing keyboard input to it
    pub fn month_select_mut(&mut self) -> &mut Select {
        &mut self.month_select
    }

    /// Step back one month; returns false at the floor of the year list
    pub fn prev_month(&mut self) -> bool {
        self.change_month(self.month as i32 - 1)
    }

    /// Step forward one month
    pub fn next_month(&mut self) -> bool {
        self.change_month(self.month as i32 + 1)
    }

    /// Jump to a year
    pub fn select_year(&mut self, year: i32) {
        self.set_year(year);
        self.regenerate();
    }

    /// Jump to a 0-based month; 12 and above roll into the next year
    pub fn select_month(&mut self, month: u32) {
        self.change_month(i32::try_from(month).unwrap_or(i32::MAX));
    }

    /// Report a clicked day
    pub fn select_day(&mut self, date: NaiveDate) {
        tracing::debug!(%date, "calendar day selected");
        if let Some(callback) = self.on_select_day.as_mut() {
            callback(date);
        }
    }

    /// Report the day in grid cell `index`; returns its date
    pub fn select_cell(&mut self, index: usize) -> Option<NaiveDate> {
        let date = self.cells.get(index)?.date;
        self.select_day(date);
        Some(date)
    }

    /// Commit an option of the year picker
    pub fn commit_year_option(&mut self, index: usize) -> Result<()> {
        let value = self.year_select.commit(index)?;
        let year = value.parse().map_err(|_| WidgetError::UnknownOption {
            index,
            len: self.year_select.options().len(),
        })?;
        self.select_year(year);
        Ok(())
    }

    /// Commit an option of the month picker
    pub fn commit_month_option(&mut self, index: usize) -> Result<()> {
        let value = self.month_select.commit(index)?;
        let month = value.parse().map_err(|_| WidgetError::UnknownOption {
            index,
            len: self.month_select.options().len(),
        })?;
        self.select_month(month);
        Ok(())
    }

    fn set_year(&mut self, year: i32) {
        tracing::debug!(year, "calendar year selected");
        if let Some(callback) = self.on_select_year.as_mut() {
            callback(year);
        }
        self.year = year;
    }

    fn change_month(&mut self, month: i32) -> bool {
        let floor = self.years.first().copied();
        if month < 0 && Some(self.year) == floor {
            tracing::debug!(year = self.year, "calendar at earliest year, ignoring previous month");
            return false;
        }

        let (month, year) = if month < 0 {
            (11, self.year.checked_sub(1))
        } else if month > 11 {
            (0, self.year.checked_add(1))
        } else {
            (month as u32, Some(self.year))
        };
        let Some(year) = year else {
            tracing::debug!(year = self.year, "calendar year out of range, ignoring month change");
            return false;
        };
        if year != self.year {
            self.set_year(year);
        }

        tracing::debug!(month, "calendar month selected");
        if let Some(callback) = self.on_select_month.as_mut() {
            callback(month);
        }
        self.month = month;
        self.regenerate();
        true
    }

    /// Rebuild the grid and resync the pickers
    fn regenerate(&mut self) {
        self.cells = generate_cells(self.month as i32, self.year, self.today);
        self.year_select.set_external_value(self.year.to_string());
        self.month_select
            .set_external_value(month_name(self.month).unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Notice {
        Day(NaiveDate),
        Month(u32),
        Year(i32),
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar(today: NaiveDate) -> (Calendar, Rc<RefCell<Vec<Notice>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (days, months, years) = (log.clone(), log.clone(), log.clone());
        let calendar = Calendar::starting_at(today, years_from(2024))
            .unwrap()
            .on_select_day(move |d| days.borrow_mut().push(Notice::Day(d)))
            .on_select_month(move |m| months.borrow_mut().push(Notice::Month(m)))
            .on_select_year(move |y| years.borrow_mut().push(Notice::Year(y)));
        (calendar, log)
    }

    #[test]
    fn test_starts_on_today() {
        let (cal, log) = calendar(ymd(2024, 2, 14));

        assert_eq!((cal.month(), cal.year()), (1, 2024));
        assert_eq!(cal.cells().len(), 35);
        assert_eq!(cal.cells()[0].date, ymd(2024, 1, 29));
        assert_eq!(cal.year_select().displayed(), "2024");
        assert_eq!(cal.month_select().displayed(), "February");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_prev_month_floor() {
        let (mut cal, log) = calendar(ymd(2024, 1, 10));

        assert!(!cal.prev_month());
        assert_eq!((cal.month(), cal.year()), (0, 2024));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_prev_month_rolls_year() {
        let (mut cal, log) = calendar(ymd(2025, 1, 10));

        assert!(cal.prev_month());
        assert_eq!((cal.month(), cal.year()), (11, 2024));
        assert_eq!(*log.borrow(), vec![Notice::Year(2024), Notice::Month(11)]);
        assert_eq!(cal.cells()[0].date, ymd(2024, 11, 25));
        assert_eq!(cal.month_select().displayed(), "December");
    }

    #[test]
    fn test_next_month_has_no_ceiling() {
        let (mut cal, log) = calendar(ymd(2038, 12, 1));

        assert!(cal.next_month());
        assert!(cal.next_month());
        assert_eq!((cal.month(), cal.year()), (1, 2039));
        assert!(cal.next_month());

        for _ in 0..12 {
            cal.next_month();
        }
        assert_eq!((cal.month(), cal.year()), (2, 2040));
        assert_eq!(cal.year_select().displayed(), "2040");
        assert!(log.borrow().contains(&Notice::Year(2040)));
    }

    #[test]
    fn test_extreme_years_do_not_overflow() {
        let (mut cal, log) = calendar(ymd(2024, 6, 1));

        cal.select_year(i32::MAX);
        cal.select_month(11);
        log.borrow_mut().clear();

        assert!(!cal.next_month());
        assert_eq!((cal.month(), cal.year()), (11, i32::MAX));
        assert!(cal.cells().is_empty());
        assert!(log.borrow().is_empty());

        cal.select_year(i32::MIN);
        cal.select_month(0);
        log.borrow_mut().clear();

        assert!(!cal.prev_month());
        assert_eq!((cal.month(), cal.year()), (0, i32::MIN));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_direct_selection_notifies_once() {
        let (mut cal, log) = calendar(ymd(2024, 6, 1));

        cal.select_year(2030);
        cal.select_month(3);
        assert_eq!(*log.borrow(), vec![Notice::Year(2030), Notice::Month(3)]);
        assert_eq!(cal.cells(), generate_cells(3, 2030, cal.today()).as_slice());
    }

    #[test]
    fn test_picker_commits_route_to_calendar() {
        let (mut cal, log) = calendar(ymd(2024, 6, 1));

        cal.commit_year_option(2).unwrap();
        cal.commit_month_option(0).unwrap();
        assert_eq!((cal.month(), cal.year()), (0, 2026));
        assert_eq!(*log.borrow(), vec![Notice::Year(2026), Notice::Month(0)]);
        assert_eq!(cal.month_select().displayed(), "January");

        assert!(cal.commit_year_option(99).is_err());
    }

    #[test]
    fn test_day_selection() {
        let (mut cal, log) = calendar(ymd(2024, 2, 14));

        assert_eq!(cal.select_cell(0), Some(ymd(2024, 1, 29)));
        assert_eq!(cal.select_cell(500), None);
        assert_eq!(*log.borrow(), vec![Notice::Day(ymd(2024, 1, 29))]);

        let today: Vec<_> = cal.cells().iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
    }

    #[test]
    fn test_empty_year_list_rejected() {
        let err = Calendar::starting_at(ymd(2024, 1, 1), Vec::new()).unwrap_err();
        assert_eq!(err, WidgetError::EmptyYearList);
    }
}

//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validated, persisted mutations and the pure budget calculations.

pub mod calculator;
pub mod expense;
pub mod limit;

pub use calculator::{
    BudgetCalculator, CalendarDay, DailyStatus, DayDetail, DayMarker, MonthCalendar,
    MonthlyStatus,
};
pub use expense::ExpenseService;
pub use limit::LimitService;

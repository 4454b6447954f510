//! Budget calculator
//!
//! Pure derivations over a ledger snapshot and the daily limit: per-day
//! status, monthly totals, the previous-month debt that shrinks a month's
//! allowance, and calendar markers. Nothing here mutates state.

use chrono::{NaiveDate, Weekday};

use crate::config::settings::DebtRollover;
use crate::models::{BudgetLimit, ExpenseRecord, Money, MonthPeriod};
use crate::storage::ExpenseLedger;

/// Spending state of a single day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStatus {
    pub date: NaiveDate,
    pub total: Money,
    /// `None` when no limit is set
    pub limit: Option<Money>,
    /// `limit - total`, `None` when no limit is set
    pub remaining: Option<Money>,
    pub exceeded: bool,
    /// Share of the limit spent, capped at 100; 0 without a limit
    pub progress_pct: f64,
}

/// Spending state of a calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStatus {
    pub month: MonthPeriod,
    pub total: Money,
    /// Overspending carried in from earlier months
    pub debt: Money,
    /// Daily limit times days in month, less debt; `None` when no limit is set
    pub effective_limit: Option<Money>,
    /// `effective_limit - total`; `None` when no limit is set
    pub remaining: Option<Money>,
    pub exceeded: bool,
}

/// Calendar cell decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMarker {
    pub has_spending: bool,
    pub exceeded: bool,
}

/// Everything shown when drilling into a day with spending
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub total: Money,
    pub limit: Option<Money>,
    pub remaining: Option<Money>,
    /// How far over the limit the day went, when it did
    pub exceeded_by: Option<Money>,
    /// Most recent first
    pub records: Vec<ExpenseRecord>,
}

/// One day cell of a month calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub total: Money,
    pub marker: DayMarker,
}

/// A month laid out for a calendar grid
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCalendar {
    pub month: MonthPeriod,
    pub week_start: Weekday,
    /// Empty cells before the first day
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
    pub status: MonthlyStatus,
}

/// Stateless calculator over one ledger snapshot and limit
pub struct BudgetCalculator<'a> {
    ledger: &'a ExpenseLedger,
    limit: BudgetLimit,
    rollover: DebtRollover,
}

impl<'a> BudgetCalculator<'a> {
    /// Create a calculator using the single-month debt lookback
    pub fn new(ledger: &'a ExpenseLedger, limit: BudgetLimit) -> Self {
        Self {
            ledger,
            limit,
            rollover: DebtRollover::default(),
        }
    }

    /// Choose the debt rollover policy
    pub fn with_rollover(mut self, rollover: DebtRollover) -> Self {
        self.rollover = rollover;
        self
    }

    pub fn limit(&self) -> BudgetLimit {
        self.limit
    }

    /// Total spent on `date`
    pub fn daily_total(&self, date: NaiveDate) -> Money {
        self.ledger.total_for(date)
    }

    /// Spending state of `date` against the daily limit
    pub fn daily_status(&self, date: NaiveDate) -> DailyStatus {
        let total = self.daily_total(date);
        let limit = self.limit.get();
        let remaining = limit.map(|l| l - total);

        let progress_pct = limit
            .and_then(|l| total.percent_of(l))
            .map(|pct| pct.min(100.0))
            .unwrap_or(0.0);

        DailyStatus {
            date,
            total,
            limit,
            remaining,
            exceeded: remaining.is_some_and(|r| r.is_negative()),
            progress_pct,
        }
    }

    /// Total spent across every day of `month`
    pub fn monthly_total(&self, month: MonthPeriod) -> Money {
        self.ledger.total_for_month(month)
    }

    /// Overspending carried into `month` from earlier months
    pub fn previous_month_debt(&self, month: MonthPeriod) -> Money {
        match self.rollover {
            DebtRollover::SingleMonth => self.overspend(month.prev(), Money::zero()),
            DebtRollover::Cascading => self.cascading_debt(month),
        }
    }

    /// Allowance for `month`: daily limit times days, minus carried debt
    ///
    /// May be negative when the debt exceeds the base allowance.
    pub fn effective_monthly_limit(&self, month: MonthPeriod) -> Money {
        self.limit.for_days(month.days_in_month()) - self.previous_month_debt(month)
    }

    /// Spending state of `month` against its effective limit
    pub fn monthly_status(&self, month: MonthPeriod) -> MonthlyStatus {
        let total = self.monthly_total(month);

        if !self.limit.is_set() {
            return MonthlyStatus {
                month,
                total,
                debt: Money::zero(),
                effective_limit: None,
                remaining: None,
                exceeded: false,
            };
        }

        let debt = self.previous_month_debt(month);
        let effective_limit = self.limit.for_days(month.days_in_month()) - debt;
        let remaining = effective_limit - total;

        MonthlyStatus {
            month,
            total,
            debt,
            effective_limit: Some(effective_limit),
            remaining: Some(remaining),
            exceeded: remaining.is_negative(),
        }
    }

    /// Calendar decoration for `date`
    pub fn day_marker(&self, date: NaiveDate) -> DayMarker {
        self.marker_for_total(self.daily_total(date))
    }

    /// Detail of a day's spending; `None` for days with nothing logged
    pub fn day_detail(&self, date: NaiveDate) -> Option<DayDetail> {
        let total = self.daily_total(date);
        if !total.is_positive() {
            return None;
        }

        let limit = self.limit.get();
        let remaining = limit.map(|l| l - total);

        Some(DayDetail {
            date,
            total,
            limit,
            remaining,
            exceeded_by: remaining.filter(|r| r.is_negative()).map(|r| r.abs()),
            records: self
                .ledger
                .records_for(date)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    /// Lay out `month` for a calendar grid starting weeks on `week_start`
    pub fn month_calendar(&self, month: MonthPeriod, week_start: Weekday) -> MonthCalendar {
        let first = month.first_weekday().num_days_from_monday();
        let start = week_start.num_days_from_monday();
        let leading_blanks = (first + 7 - start) % 7;

        let days = month
            .days()
            .map(|date| {
                let total = self.daily_total(date);
                CalendarDay {
                    date,
                    total,
                    marker: self.marker_for_total(total),
                }
            })
            .collect();

        MonthCalendar {
            month,
            week_start,
            leading_blanks,
            days,
            status: self.monthly_status(month),
        }
    }

    fn marker_for_total(&self, total: Money) -> DayMarker {
        let has_spending = total.is_positive();
        DayMarker {
            has_spending,
            exceeded: has_spending && self.limit.get().is_some_and(|l| total > l),
        }
    }

    /// Amount by which `month` overran its allowance reduced by `carried`
    fn overspend(&self, month: MonthPeriod, carried: Money) -> Money {
        let allowance = self.limit.for_days(month.days_in_month()) - carried;
        let over = self.monthly_total(month) - allowance;
        over.max(Money::zero())
    }

    /// Debt chained month by month from the first month with any spending
    fn cascading_debt(&self, month: MonthPeriod) -> Money {
        let Some(earliest) = self.ledger.earliest_date() else {
            return Money::zero();
        };

        let mut cursor = MonthPeriod::containing(earliest);
        let mut carried = Money::zero();
        while cursor < month {
            carried = self.overspend(cursor, carried);
            cursor = cursor.next();
        }
        carried
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> MonthPeriod {
        MonthPeriod::new(y, m).unwrap()
    }

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn limit(n: i64) -> BudgetLimit {
        BudgetLimit::new(units(n)).unwrap()
    }

    /// Spread `total` units over `month`, one expense on day 1 and the rest on day 2
    fn spend_in_month(ledger: &mut ExpenseLedger, m: MonthPeriod, total: i64) {
        let first = m.start_date();
        ledger.add(first, units(total / 2), "first half").unwrap();
        ledger
            .add(first.succ_opt().unwrap(), units(total - total / 2), "second half")
            .unwrap();
    }

    #[test]
    fn test_daily_status_under_limit() {
        let mut ledger = ExpenseLedger::new();
        let day = date(2025, 6, 10);
        ledger.add(day, units(30), "Groceries").unwrap();

        let status = BudgetCalculator::new(&ledger, limit(120)).daily_status(day);
        assert_eq!(status.total, units(30));
        assert_eq!(status.limit, Some(units(120)));
        assert_eq!(status.remaining, Some(units(90)));
        assert!(!status.exceeded);
        assert_eq!(status.progress_pct, 25.0);
    }

    #[test]
    fn test_daily_status_over_limit_caps_progress() {
        let mut ledger = ExpenseLedger::new();
        let day = date(2025, 6, 10);
        ledger.add(day, units(150), "Shoes").unwrap();

        let status = BudgetCalculator::new(&ledger, limit(100)).daily_status(day);
        assert_eq!(status.remaining, Some(units(-50)));
        assert!(status.exceeded);
        assert_eq!(status.progress_pct, 100.0);
    }

    #[test]
    fn test_daily_status_without_limit() {
        let mut ledger = ExpenseLedger::new();
        let day = date(2025, 6, 10);
        ledger.add(day, units(9999), "Laptop").unwrap();

        let status = BudgetCalculator::new(&ledger, BudgetLimit::UNSET).daily_status(day);
        assert_eq!(status.remaining, None);
        assert_eq!(status.limit, None);
        assert!(!status.exceeded);
        assert_eq!(status.progress_pct, 0.0);
    }

    #[test]
    fn test_monthly_total_is_sum_of_days() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(date(2024, 2, 1), units(10), "a").unwrap();
        ledger.add(date(2024, 2, 29), units(5), "leap day").unwrap();
        ledger.add(date(2024, 3, 1), units(100), "next month").unwrap();

        let calc = BudgetCalculator::new(&ledger, limit(50));
        let feb = month(2024, 2);
        let by_day: Money = feb.days().map(|d| calc.daily_total(d)).sum();

        assert_eq!(calc.monthly_total(feb), units(15));
        assert_eq!(calc.monthly_total(feb), by_day);
    }

    #[test]
    fn test_debt_rollover_example() {
        // 30-day April overspent by 500, 31-day May gets 3100 - 500
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2025, 4), 3500);

        let calc = BudgetCalculator::new(&ledger, limit(100));
        let may = month(2025, 5);

        assert_eq!(calc.previous_month_debt(may), units(500));
        assert_eq!(calc.effective_monthly_limit(may), units(2600));
    }

    #[test]
    fn test_no_debt_when_previous_month_within_limit() {
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2025, 4), 2999);

        let calc = BudgetCalculator::new(&ledger, limit(100));
        assert_eq!(calc.previous_month_debt(month(2025, 5)), Money::zero());
        assert_eq!(calc.effective_monthly_limit(month(2025, 5)), units(3100));
    }

    #[test]
    fn test_january_looks_back_to_december() {
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2024, 12), 3200);

        let calc = BudgetCalculator::new(&ledger, limit(100));
        assert_eq!(calc.previous_month_debt(month(2025, 1)), units(100));
    }

    #[test]
    fn test_effective_limit_can_go_negative() {
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2025, 1), 10_000);
        ledger.add(date(2025, 2, 3), units(10), "bus").unwrap();

        let calc = BudgetCalculator::new(&ledger, limit(100));
        let feb = month(2025, 2);
        // January allowance 3100, debt 6900, February base 2800
        assert_eq!(calc.effective_monthly_limit(feb), units(-4100));

        let status = calc.monthly_status(feb);
        assert_eq!(status.debt, units(6900));
        assert_eq!(status.remaining, Some(units(-4110)));
        assert!(status.exceeded);
    }

    #[test]
    fn test_single_month_lookback_does_not_cascade() {
        let mut ledger = ExpenseLedger::new();
        // March overspent by 1000; April spent exactly its base allowance
        spend_in_month(&mut ledger, month(2025, 3), 4100);
        spend_in_month(&mut ledger, month(2025, 4), 3000);

        let calc = BudgetCalculator::new(&ledger, limit(100));
        assert_eq!(calc.previous_month_debt(month(2025, 4)), units(1000));
        assert_eq!(calc.previous_month_debt(month(2025, 5)), Money::zero());
    }

    #[test]
    fn test_cascading_lookback_carries_unpaid_debt() {
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2025, 3), 4100);
        spend_in_month(&mut ledger, month(2025, 4), 3000);

        let calc =
            BudgetCalculator::new(&ledger, limit(100)).with_rollover(DebtRollover::Cascading);
        // April allowance was 3000 - 1000 = 2000, it spent 3000
        assert_eq!(calc.previous_month_debt(month(2025, 4)), units(1000));
        assert_eq!(calc.previous_month_debt(month(2025, 5)), units(1000));
        // June: May had no spending, so the debt is paid off
        assert_eq!(calc.previous_month_debt(month(2025, 6)), Money::zero());
    }

    #[test]
    fn test_cascading_matches_single_month_for_one_month_history() {
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2025, 4), 3500);

        let single = BudgetCalculator::new(&ledger, limit(100));
        let cascading =
            BudgetCalculator::new(&ledger, limit(100)).with_rollover(DebtRollover::Cascading);

        for m in [month(2025, 3), month(2025, 4), month(2025, 5)] {
            assert_eq!(single.previous_month_debt(m), cascading.previous_month_debt(m));
        }
    }

    #[test]
    fn test_cascading_with_empty_ledger() {
        let ledger = ExpenseLedger::new();
        let calc =
            BudgetCalculator::new(&ledger, limit(100)).with_rollover(DebtRollover::Cascading);
        assert_eq!(calc.previous_month_debt(month(2025, 5)), Money::zero());
    }

    #[test]
    fn test_monthly_status_without_limit() {
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2025, 4), 500);
        spend_in_month(&mut ledger, month(2025, 5), 70);

        let status =
            BudgetCalculator::new(&ledger, BudgetLimit::UNSET).monthly_status(month(2025, 5));
        assert_eq!(status.total, units(70));
        assert_eq!(status.effective_limit, None);
        assert_eq!(status.remaining, None);
        assert!(!status.exceeded);
    }

    #[test]
    fn test_monthly_status_with_limit() {
        let mut ledger = ExpenseLedger::new();
        spend_in_month(&mut ledger, month(2025, 4), 3500);
        spend_in_month(&mut ledger, month(2025, 5), 1000);

        let status = BudgetCalculator::new(&ledger, limit(100)).monthly_status(month(2025, 5));
        assert_eq!(status.debt, units(500));
        assert_eq!(status.effective_limit, Some(units(2600)));
        assert_eq!(status.remaining, Some(units(1600)));
        assert!(!status.exceeded);
    }

    #[test]
    fn test_largest_limit_and_spending_do_not_overflow() {
        let mut ledger = ExpenseLedger::new();
        let day = date(2025, 4, 30);
        ledger.add(day, Money::MAX_AMOUNT, "house").unwrap();
        ledger.add(day, Money::MAX_AMOUNT, "another house").unwrap();

        let calc = BudgetCalculator::new(&ledger, BudgetLimit::new(Money::MAX_AMOUNT).unwrap());
        let status = calc.monthly_status(month(2025, 5));
        assert_eq!(status.debt, Money::zero());
        assert_eq!(status.effective_limit, Some(Money::MAX_AMOUNT * 31));

        let daily = calc.daily_status(day);
        assert_eq!(daily.remaining, Some(-Money::MAX_AMOUNT));
        assert!(daily.exceeded);
    }

    #[test]
    fn test_day_marker() {
        let mut ledger = ExpenseLedger::new();
        let over = date(2025, 6, 1);
        let under = date(2025, 6, 2);
        ledger.add(over, units(75), "Dinner").unwrap();
        ledger.add(under, units(20), "Lunch").unwrap();

        let calc = BudgetCalculator::new(&ledger, limit(50));
        assert_eq!(
            calc.day_marker(over),
            DayMarker {
                has_spending: true,
                exceeded: true
            }
        );
        assert_eq!(
            calc.day_marker(under),
            DayMarker {
                has_spending: true,
                exceeded: false
            }
        );
        assert_eq!(calc.day_marker(date(2025, 6, 3)), DayMarker::default());

        let unset = BudgetCalculator::new(&ledger, BudgetLimit::UNSET);
        assert!(!unset.day_marker(over).exceeded);
    }

    #[test]
    fn test_marker_at_exact_limit_is_not_exceeded() {
        let mut ledger = ExpenseLedger::new();
        let day = date(2025, 6, 1);
        ledger.add(day, units(50), "exact").unwrap();

        let calc = BudgetCalculator::new(&ledger, limit(50));
        assert!(!calc.day_marker(day).exceeded);
        assert!(!calc.daily_status(day).exceeded);
    }

    #[test]
    fn test_day_detail() {
        let mut ledger = ExpenseLedger::new();
        let day = date(2025, 6, 1);
        ledger.add(day, units(40), "Tickets").unwrap();
        let latest = ledger.add(day, units(25), "Snacks").unwrap();

        let calc = BudgetCalculator::new(&ledger, limit(50));
        let detail = calc.day_detail(day).unwrap();
        assert_eq!(detail.total, units(65));
        assert_eq!(detail.remaining, Some(units(-15)));
        assert_eq!(detail.exceeded_by, Some(units(15)));
        assert_eq!(detail.records[0], latest);

        assert!(calc.day_detail(date(2025, 6, 2)).is_none());
    }

    #[test]
    fn test_month_calendar_layout() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(date(2025, 6, 15), units(80), "Gift").unwrap();
        let calc = BudgetCalculator::new(&ledger, limit(50));

        // June 1st 2025 is a Sunday
        let june = month(2025, 6);
        let monday_first = calc.month_calendar(june, Weekday::Mon);
        assert_eq!(monday_first.leading_blanks, 6);
        assert_eq!(monday_first.days.len(), 30);
        assert!(monday_first.days[14].marker.exceeded);
        assert_eq!(monday_first.status.total, units(80));

        let sunday_first = calc.month_calendar(june, Weekday::Sun);
        assert_eq!(sunday_first.leading_blanks, 0);
    }
}

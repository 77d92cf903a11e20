//! Pay period service
//!
//! Resolves the current pay period from a schedule and a caller-supplied
//! "today", including the rollover when the stored payday has passed.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{PayPeriod, PaySchedule, ResolvedPeriod};

/// Service for pay period resolution
pub struct PeriodService;

impl PeriodService {
    /// Get the pay period containing `today`
    ///
    /// The period ends on the schedule's `next_payday` and starts one cadence
    /// earlier. When `today` is on or after the stored payday, the payday is
    /// advanced by the fewest whole cadences that put it strictly after
    /// `today`, and the result is flagged stale.
    pub fn current_period(schedule: &PaySchedule, today: NaiveDate) -> ResolvedPeriod {
        let cadence = schedule.cadence_days();
        let stored = schedule.next_payday;

        let (next_payday, is_stale) = if today >= stored {
            let behind = (today - stored).num_days();
            let steps = behind / cadence + 1;
            (stored + Duration::days(steps * cadence), true)
        } else {
            (stored, false)
        };

        let period = PayPeriod::ending_on(next_payday, cadence);
        debug!(%period, is_stale, %today, "resolved pay period");

        ResolvedPeriod {
            period,
            next_payday,
            is_stale,
        }
    }

    /// The next `count` paydays after `today`, nearest first
    pub fn upcoming_paydays(schedule: &PaySchedule, today: NaiveDate, count: usize) -> Vec<NaiveDate> {
        let resolved = Self::current_period(schedule, today);
        let cadence = schedule.cadence_days();

        (0..count as i64)
            .map(|i| resolved.next_payday + Duration::days(i * cadence))
            .collect()
    }

    /// The current period followed by earlier ones, most recent first
    pub fn recent_periods(schedule: &PaySchedule, today: NaiveDate, count: usize) -> Vec<PayPeriod> {
        let mut periods = Vec::with_capacity(count);
        let mut current = Self::current_period(schedule, today).period;

        for _ in 0..count {
            periods.push(current);
            current = current.prev();
        }

        periods
    }

    /// Days left in the period counting `today` and the last day, at least 1
    pub fn days_remaining(period: &PayPeriod, today: NaiveDate) -> i64 {
        ((period.last_day() - today).num_days() + 1).max(1)
    }

    /// Format a period in a human-friendly way, e.g. "Mar 01 - Mar 14, 2024"
    pub fn format_period_friendly(period: &PayPeriod) -> String {
        format!(
            "{} - {}",
            period.start.format("%b %d"),
            period.last_day().format("%b %d, %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule(next_payday: NaiveDate) -> PaySchedule {
        PaySchedule::biweekly(next_payday, Money::from_cents(200000))
    }

    #[test]
    fn test_fresh_schedule() {
        let resolved = PeriodService::current_period(&schedule(date(2024, 3, 15)), date(2024, 3, 10));

        assert_eq!(resolved.period.start, date(2024, 3, 1));
        assert_eq!(resolved.period.end, date(2024, 3, 15));
        assert_eq!(resolved.next_payday, date(2024, 3, 15));
        assert!(!resolved.is_stale);
    }

    #[test]
    fn test_today_on_payday_starts_new_period() {
        let resolved = PeriodService::current_period(&schedule(date(2024, 3, 15)), date(2024, 3, 15));

        assert!(resolved.is_stale);
        assert_eq!(resolved.period.start, date(2024, 3, 15));
        assert_eq!(resolved.period.end, date(2024, 3, 29));
        assert_eq!(resolved.next_payday, date(2024, 3, 29));
    }

    #[test]
    fn test_stale_by_several_cadences() {
        // 2024-04-20 is 36 days past 2024-03-15: two cadences plus 8 days
        let resolved = PeriodService::current_period(&schedule(date(2024, 3, 15)), date(2024, 4, 20));

        assert!(resolved.is_stale);
        assert_eq!(resolved.next_payday, date(2024, 4, 26));
        assert_eq!(resolved.period.start, date(2024, 4, 12));
    }

    #[test]
    fn test_today_on_later_boundary() {
        // Exactly two cadences past the stored payday
        let resolved = PeriodService::current_period(&schedule(date(2024, 3, 15)), date(2024, 4, 12));

        assert_eq!(resolved.period.start, date(2024, 4, 12));
        assert_eq!(resolved.period.end, date(2024, 4, 26));
    }

    #[test]
    fn test_half_open_invariant_holds_across_days() {
        let sched = schedule(date(2024, 3, 15));
        let mut today = date(2024, 3, 1);

        while today < date(2024, 6, 1) {
            let resolved = PeriodService::current_period(&sched, today);
            assert!(resolved.period.start <= today, "start after {}", today);
            assert!(today < resolved.period.end, "end not after {}", today);
            assert_eq!(resolved.period.len_days(), 14);
            assert_eq!(resolved.is_stale, today >= sched.next_payday);
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_upcoming_paydays() {
        let paydays = PeriodService::upcoming_paydays(&schedule(date(2024, 3, 15)), date(2024, 3, 20), 3);
        assert_eq!(
            paydays,
            vec![date(2024, 3, 29), date(2024, 4, 12), date(2024, 4, 26)]
        );
    }

    #[test]
    fn test_recent_periods() {
        let periods = PeriodService::recent_periods(&schedule(date(2024, 3, 15)), date(2024, 3, 10), 3);
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0].start, date(2024, 3, 1));
        assert_eq!(periods[1].end, date(2024, 3, 1));
        assert!(periods[2] < periods[1]);
    }

    #[test]
    fn test_days_remaining() {
        let period = PayPeriod::ending_on(date(2024, 3, 15), 14);
        assert_eq!(PeriodService::days_remaining(&period, date(2024, 3, 1)), 14);
        assert_eq!(PeriodService::days_remaining(&period, date(2024, 3, 14)), 1);
        assert_eq!(PeriodService::days_remaining(&period, date(2024, 3, 20)), 1);
    }

    #[test]
    fn test_format_period_friendly() {
        let period = PayPeriod::ending_on(date(2024, 3, 15), 14);
        assert_eq!(
            PeriodService::format_period_friendly(&period),
            "Mar 01 - Mar 14, 2024"
        );
    }
}

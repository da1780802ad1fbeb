use chrono::{Datelike, Duration, NaiveDate, Weekday};
use gantt_tool::calendar::{ProjectCalendar, week_number};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn weekdays_only() -> ProjectCalendar {
    ProjectCalendar::new(false, [])
}

#[test]
fn weekends_are_non_working_by_default_policy() {
    let cal = weekdays_only();
    // 2025-09-06 is a Saturday, 2025-09-07 a Sunday
    assert!(!cal.is_working_day(d(2025, 9, 6)));
    assert!(!cal.is_working_day(d(2025, 9, 7)));
    assert!(cal.is_working_day(d(2025, 9, 8)));
}

#[test]
fn work_weekends_makes_saturday_working() {
    let cal = ProjectCalendar::new(true, []);
    assert!(cal.is_working_day(d(2025, 9, 6)));
    assert!(cal.is_working_day(d(2025, 9, 7)));
}

#[test]
fn holidays_block_weekdays() {
    let cal = ProjectCalendar::new(false, [d(2025, 9, 8)]);
    assert!(!cal.is_working_day(d(2025, 9, 8)));
    assert!(cal.is_working_day(d(2025, 9, 9)));
}

#[test]
fn next_working_day_skips_weekend_and_holiday() {
    let cal = weekdays_only();
    // From Friday 2025-09-05 the next working day is Monday
    assert_eq!(cal.next_working_day(d(2025, 9, 5)).unwrap(), d(2025, 9, 8));

    let with_holiday = ProjectCalendar::new(false, [d(2025, 9, 8)]);
    assert_eq!(
        with_holiday.next_working_day(d(2025, 9, 5)).unwrap(),
        d(2025, 9, 9)
    );
}

#[test]
fn previous_working_day_skips_weekend() {
    let cal = weekdays_only();
    assert_eq!(
        cal.previous_working_day(d(2025, 9, 8)).unwrap(),
        d(2025, 9, 5)
    );
}

#[test]
fn next_working_day_is_strictly_later_and_working() {
    let cal = ProjectCalendar::new(false, [d(2025, 9, 8), d(2025, 9, 9)]);
    let mut date = d(2025, 9, 1);
    for _ in 0..30 {
        let next = cal.next_working_day(date).unwrap();
        assert!(next > date);
        assert!(cal.is_working_day(next));
        date = next;
    }
}

#[test]
fn add_business_days_counts_start_as_day_one() {
    let cal = weekdays_only();
    // Monday + 5 working days ends on Friday of the same week
    assert_eq!(
        cal.add_business_days(d(2025, 9, 1), 5).unwrap(),
        d(2025, 9, 5)
    );
    assert_eq!(
        cal.add_business_days(d(2025, 9, 1), 1).unwrap(),
        d(2025, 9, 1)
    );
}

#[test]
fn add_business_days_snaps_non_working_start_forward() {
    let cal = weekdays_only();
    // Saturday start begins on Monday
    assert_eq!(
        cal.add_business_days(d(2025, 9, 6), 1).unwrap(),
        d(2025, 9, 8)
    );
    assert_eq!(
        cal.add_business_days(d(2025, 9, 6), 3).unwrap(),
        d(2025, 9, 10)
    );
}

#[test]
fn add_business_days_with_working_weekends_runs_straight_through() {
    let cal = ProjectCalendar::new(true, []);
    // Saturday counts as day 1, so three days land on Monday
    assert_eq!(
        cal.add_business_days(d(2025, 9, 6), 3).unwrap(),
        d(2025, 9, 8)
    );
}

#[test]
fn subtract_business_days_mirrors_add() {
    let cal = weekdays_only();
    assert_eq!(
        cal.subtract_business_days(d(2025, 9, 5), 5).unwrap(),
        d(2025, 9, 1)
    );
    // Sunday end snaps back to Friday, which counts as day 1
    assert_eq!(
        cal.subtract_business_days(d(2025, 9, 7), 1).unwrap(),
        d(2025, 9, 5)
    );
    // Crossing the weekend backward
    assert_eq!(
        cal.subtract_business_days(d(2025, 9, 10), 3).unwrap(),
        d(2025, 9, 8)
    );
}

#[test]
fn count_working_days_over_a_week() {
    let cal = weekdays_only();
    assert_eq!(cal.count_working_days(d(2025, 9, 1), d(2025, 9, 7)), 5);
    assert_eq!(cal.count_working_days(d(2025, 9, 7), d(2025, 9, 1)), 0);
}

#[test]
fn week_number_is_iso_8601() {
    assert_eq!(week_number(d(2025, 1, 1)), 1);
    // 2025-09-01 is the Monday of ISO week 36
    assert_eq!(d(2025, 9, 1).weekday(), Weekday::Mon);
    assert_eq!(week_number(d(2025, 9, 1)), 36);
    // Jan 1 2027 falls in the last ISO week of 2026
    assert_eq!(week_number(d(2027, 1, 1)), 53);
}

#[test]
fn blanket_holidays_exhaust_the_search_instead_of_looping() {
    let start = d(2025, 1, 1);
    let holidays: Vec<NaiveDate> = (0..=3700).map(|i| start + Duration::days(i)).collect();
    let cal = ProjectCalendar::new(true, holidays);

    assert!(cal.next_working_day(start).is_err());
    assert!(cal.add_business_days(start, 1).is_err());
    assert!(cal.subtract_business_days(d(2035, 1, 1), 1).is_err());
}

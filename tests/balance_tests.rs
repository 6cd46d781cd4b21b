use rtimebank::core::calculator::balance::day_balance;
use rtimebank::core::calculator::totals::aggregate;
use rtimebank::core::calculator::worked::{pair_minutes, worked_minutes};
use rtimebank::core::calculator::{BalancePolicy, parse_work_duration};
use rtimebank::core::logic::Core;
use rtimebank::models::{DayEntry, Period, Reason};
use rtimebank::utils::time::{minutes_to_time, parse_time, time_to_minutes};

mod common;
use common::day;

const NO_TIMES: [&str; 4] = ["", "", "", ""];
const FULL_DAY: [&str; 4] = ["07:00", "12:00", "13:00", "16:00"];

#[test]
fn worked_minutes_is_the_difference_of_clock_minutes() {
    for (a, b) in [("00:00", "00:00"), ("08:15", "12:40"), ("09:59", "23:01"), ("00:00", "23:59")] {
        let (ta, tb) = (parse_time(a).unwrap(), parse_time(b).unwrap());
        let expected = time_to_minutes(b).unwrap() - time_to_minutes(a).unwrap();
        assert_eq!(pair_minutes(Some(ta), Some(tb)), expected, "{a}-{b}");
    }
}

#[test]
fn incomplete_pairs_count_as_zero() {
    let t = parse_time("08:00");
    assert_eq!(pair_minutes(t, None), 0);
    assert_eq!(pair_minutes(None, t), 0);

    let d = day(2026, 1, 5, ["08:00", "", "13:00", "17:00"], None);
    assert_eq!(worked_minutes(&d), 240);
}

#[test]
fn minutes_to_time_round_trips_canonical_strings() {
    for s in ["00:00", "00:01", "08:00", "-00:30", "-06:00", "123:59", "-100:05"] {
        assert_eq!(minutes_to_time(time_to_minutes(s).unwrap()), s);
    }
    for m in [-i64::MAX, -10_000, -481, -1, 0, 1, 59, 60, 480, 99_999, i64::MAX] {
        assert_eq!(time_to_minutes(&minutes_to_time(m)).unwrap(), m);
    }
    assert!(time_to_minutes(&minutes_to_time(i64::MIN)).is_err());
}

#[test]
fn time_to_minutes_treats_empty_as_zero_and_rejects_garbage() {
    assert_eq!(time_to_minutes("").unwrap(), 0);
    assert_eq!(time_to_minutes("00:00").unwrap(), 0);
    assert!(time_to_minutes("8h").is_err());
    assert!(time_to_minutes("08-00").is_err());
    assert!(time_to_minutes("08:75").is_err());
}

#[test]
fn absence_is_a_full_day_deficit_whatever_was_recorded() {
    let policy = BalancePolicy::default();
    let idle = day(2026, 1, 6, NO_TIMES, Some("absence"));
    let worked = day(2026, 1, 6, ["08:00", "12:00", "13:00", "18:00"], Some("absence"));

    assert_eq!(day_balance(&idle, &policy).balance, -480);
    assert_eq!(day_balance(&worked, &policy).balance, -480);
}

#[test]
fn leave_and_holidays_count_as_complete_days() {
    let policy = BalancePolicy::default();
    for reason in ["vacation", "medical", "optional"] {
        let d = day(2026, 1, 7, ["09:00", "10:00", "", ""], Some(reason));
        assert_eq!(day_balance(&d, &policy).balance, 0, "{reason}");
    }

    let mut holiday = day(2026, 1, 7, NO_TIMES, None);
    holiday.is_holiday = true;
    assert_eq!(day_balance(&holiday, &policy).balance, 0);
}

#[test]
fn compensation_day_draws_from_the_positive_pool() {
    let policy = BalancePolicy::default();

    // 300 minutes worked: 180 short
    let short = day(2026, 1, 8, ["08:00", "13:00", "", ""], Some("compensation"));
    let b = day_balance(&short, &policy);
    assert_eq!(b.worked, 300);
    assert_eq!(b.balance, 0);
    assert_eq!(b.compensation_used, 180);

    // 500 minutes worked: still a surplus
    let long = day(2026, 1, 9, ["08:00", "12:00", "13:00", "17:20"], Some("compensation"));
    let b = day_balance(&long, &policy);
    assert_eq!(b.worked, 500);
    assert_eq!(b.balance, 20);
    assert_eq!(b.compensation_used, 0);

    // Saturday with 240 minutes of surplus pays for the short day
    let saturday = day(2026, 1, 10, ["08:00", "12:00", "", ""], None);
    let totals = aggregate([&short, &saturday], &policy);
    assert_eq!(totals.compensation_used, 180);
    assert_eq!(totals.positive, 60);
    assert_eq!(totals.negative, 0);
    assert_eq!(totals.balance, 60);
}

#[test]
fn final_positive_never_goes_below_zero() {
    let policy = BalancePolicy::default();
    let short = day(2026, 1, 8, ["08:00", "09:00", "", ""], Some("compensation"));
    let totals = aggregate([&short], &policy);
    assert_eq!(totals.compensation_used, 420);
    assert_eq!(totals.positive, 0);
    assert_eq!(totals.balance, 0);
}

#[test]
fn weekend_work_is_pure_surplus() {
    let policy = BalancePolicy::default();
    let saturday = day(2026, 1, 10, ["09:00", "11:00", "", ""], None);
    let sunday = day(2026, 1, 11, NO_TIMES, None);

    assert_eq!(day_balance(&saturday, &policy).balance, 120);
    assert_eq!(day_balance(&sunday, &policy).balance, 0);
}

#[test]
fn rules_apply_in_order() {
    let policy = BalancePolicy::default();

    // absence wins over the holiday flag
    let mut d = day(2026, 1, 10, NO_TIMES, Some("absence"));
    d.is_holiday = true;
    assert_eq!(day_balance(&d, &policy).balance, -480);

    // a holiday compensation day is a complete day: no deficit is drawn
    let mut holiday = day(2026, 1, 8, ["08:00", "10:00", "", ""], Some("compensation"));
    holiday.is_holiday = true;
    let b = day_balance(&holiday, &policy);
    assert_eq!(b.balance, 0);
    assert_eq!(b.compensation_used, 0);

    let saturday = day(2026, 1, 10, ["08:00", "12:00", "", ""], None);
    let totals = aggregate([&holiday, &saturday], &policy);
    assert_eq!(totals.compensation_used, 0);
    assert_eq!(totals.positive, 240);
    assert_eq!(totals.balance, 240);

    // a weekend compensation day still uses the compensation rule
    let d = day(2026, 1, 10, ["09:00", "11:00", "", ""], Some("compensation"));
    let b = day_balance(&d, &policy);
    assert_eq!(b.balance, 0);
    assert_eq!(b.compensation_used, 360);
}

#[test]
fn month_scenario_nets_minus_six_hours() {
    let policy = BalancePolicy::default();
    let entries = vec![
        DayEntry::new("1", day(2026, 1, 5, FULL_DAY, None)),
        DayEntry::new("2", day(2026, 1, 6, NO_TIMES, Some("absence"))),
        DayEntry::new("3", day(2026, 1, 10, ["09:00", "11:00", "", ""], None)),
    ];

    let summary = Core::build_month_summary(Period::new(2026, 1).unwrap(), &entries, &policy);
    let t = summary.totals;

    assert_eq!(t.positive, 120);
    assert_eq!(t.negative, 480);
    assert_eq!(t.compensation_used, 0);
    assert_eq!(minutes_to_time(t.balance), "-06:00");

    assert_eq!(summary.rows.len(), 31);
    assert_eq!(summary.rows.iter().filter(|r| r.entry.is_some()).count(), 3);
    assert_eq!(summary.rows[4].balance.map(|b| b.balance), Some(0));
}

#[test]
fn configured_work_day_changes_the_baseline() {
    assert_eq!(parse_work_duration("8h").unwrap(), 480);
    assert_eq!(parse_work_duration("7h30m").unwrap(), 450);
    assert_eq!(parse_work_duration("450m").unwrap(), 450);
    assert_eq!(parse_work_duration("07:30").unwrap(), 450);
    assert!(parse_work_duration("eight").is_err());

    let policy = BalancePolicy::from_work_duration("6h").unwrap();
    let d = day(2026, 1, 5, FULL_DAY, None);
    assert_eq!(day_balance(&d, &policy).balance, 120);
    assert_eq!(day_balance(&day(2026, 1, 6, NO_TIMES, Some("absence")), &policy).balance, -360);
}

#[test]
fn every_reason_survives_the_table_string() {
    for r in Reason::ALL {
        assert_eq!(Reason::from_db_str(r.to_db_str()), Some(r));
    }
    assert_eq!(Reason::from_db_str("Falta"), Some(Reason::Absence));
}

#[test]
fn periods_step_across_year_boundaries() {
    let jan = Period::parse("2026-01").unwrap();
    assert_eq!(jan.prev(), Period::new(2025, 12).unwrap());
    assert_eq!(jan.prev().next(), jan);
    assert_eq!(Period::new(2024, 2).unwrap().days().len(), 29);
    assert_eq!(Period::new(2026, 2).unwrap().days().len(), 28);
    assert_eq!(jan.label(), "January 2026");
    assert!(Period::parse("2026-13").is_err());
    assert!(Period::parse("202601").is_err());
}

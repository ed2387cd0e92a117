use dreamspell_calendar::{
    CalendarError, DayKin, Doy, GregorianDate, KinConfig, compute_kin, is_leap_year,
};
use dreamspell_kin::Kin;

fn date(y: i32, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn kin(y: i32, m: u8, d: u8) -> u16 {
    compute_kin(y, m, d, &KinConfig::default()).unwrap().value()
}

#[test]
fn reference_dates() {
    let cases = [
        ((1986, 5, 19), 121),
        ((1986, 5, 20), 122),
        ((1986, 5, 18), 120),
        ((1987, 2, 3), 121),
        ((1988, 2, 28), 251),
        ((1988, 3, 1), 252),
        ((1900, 1, 1), 53),
        ((1999, 12, 31), 152),
        ((2000, 1, 1), 153),
        ((2012, 12, 21), 207),
        ((2013, 7, 25), 163),
        ((2019, 7, 26), 14),
        ((2024, 1, 1), 73),
        ((2024, 2, 28), 131),
        ((2024, 3, 1), 132),
        ((2025, 7, 26), 124),
        ((1, 1, 1), 78),
    ];
    for ((y, m, d), expected) in cases {
        assert_eq!(kin(y, m, d), expected, "kin mismatch for {y:04}-{m:02}-{d:02}");
    }
}

#[test]
fn every_leap_day_is_out_of_cycle() {
    let config = KinConfig::default();
    for year in (4..=5000).step_by(4).filter(|&y| is_leap_year(y)) {
        assert_eq!(
            compute_kin(year, 2, 29, &config).unwrap(),
            DayKin::OutOfCycle,
            "Feb 29 {year}"
        );
    }
}

#[test]
fn consecutive_days_advance_by_one() {
    // Walk 1980..1990 day by day; leap days are skipped by the count.
    let config = KinConfig::default();
    let mut d = date(1980, 1, 1);
    let mut prev = config.kin_of(d).unwrap().kin().unwrap();
    while d < date(1990, 1, 1) {
        d = d.next();
        match config.kin_of(d).unwrap() {
            DayKin::OutOfCycle => assert!(d.is_leap_day()),
            DayKin::InCycle(k) => {
                assert_eq!(k, prev.next(), "step into {d}");
                prev = k;
            }
        }
    }
}

#[test]
fn values_stay_in_cycle_bounds() {
    let config = KinConfig::default();
    let mut d = date(1899, 12, 1);
    for _ in 0..2000 {
        let v = config.kin_of(d).unwrap().value();
        if d.is_leap_day() {
            assert_eq!(v, 0);
        } else {
            assert!((1..=260).contains(&v), "{d} gave {v}");
        }
        d = d.next();
    }
}

#[test]
fn period_is_260_counted_days() {
    let config = KinConfig::default();
    let start = date(2001, 1, 1);
    let mut d = start;
    let mut counted = 0;
    while counted < 260 {
        d = d.next();
        if !d.is_leap_day() {
            counted += 1;
        }
    }
    assert_eq!(config.kin_of(start).unwrap(), config.kin_of(d).unwrap());
}

#[test]
fn moving_the_anchor_along_the_count_changes_nothing() {
    let canonical = KinConfig::default();
    let shifted = KinConfig::new(date(2019, 7, 26), Kin::new(14).unwrap());
    let mut d = date(2010, 1, 1);
    for _ in 0..1500 {
        assert_eq!(canonical.kin_of(d).unwrap(), shifted.kin_of(d).unwrap(), "{d}");
        d = d.next();
    }
}

#[test]
fn invalid_dates_rejected() {
    let config = KinConfig::default();
    assert!(matches!(
        compute_kin(2024, 13, 1, &config),
        Err(CalendarError::InvalidMonth { month: 13 })
    ));
    assert!(matches!(
        compute_kin(2023, 4, 31, &config),
        Err(CalendarError::InvalidDay { day: 31, month: 4, .. })
    ));
    assert!(matches!(
        compute_kin(0, 1, 1, &config),
        Err(CalendarError::DateOutOfRange { .. })
    ));
    assert!(matches!(
        compute_kin(5001, 1, 1, &config),
        Err(CalendarError::DateOutOfRange { .. })
    ));
}

#[test]
fn feb_29_short_circuits_even_outside_calendar() {
    // Not a leap year, still reported as out of cycle.
    let config = KinConfig::default();
    assert_eq!(compute_kin(2023, 2, 29, &config).unwrap(), DayKin::OutOfCycle);
}

#[test]
fn doy_counts_every_day_but_feb_29() {
    let mut d = date(2024, 1, 1);
    let mut expected = 1u16;
    while d.year() == 2024 {
        match Doy::of_date(d) {
            Some(doy) => {
                assert_eq!(doy.get(), expected, "{d}");
                expected += 1;
            }
            None => assert!(d.is_leap_day()),
        }
        d = d.next();
    }
    assert_eq!(expected, 366);
}

#[test]
fn parse_and_display_agree() {
    for s in ["0001-01-01", "1986-05-19", "2024-02-29", "5000-12-31"] {
        let d: GregorianDate = s.parse().unwrap();
        assert_eq!(d.to_string(), s);
    }
}

use zonedate::{Components, DateInRegion, DateRepresentable, Region, Unit};


fn utc(year: i64, month: i64, day: i64) -> DateInRegion {
    DateInRegion::from_fields(year, month, day, 0, 0, 0, 0, Region::utc())
}


#[test]
fn adding_days() {
    assert_eq!(utc(2019, 6, 29) + Components::days(2), utc(2019, 7, 1));
}

#[test]
fn adding_weeks_adds_seven_days_each() {
    assert_eq!(utc(2019, 6, 29) + Components::weeks(2), utc(2019, 7, 13));
}

#[test]
fn adding_a_month_clamps_at_the_end() {
    assert_eq!(utc(2019, 1, 31) + Components::months(1), utc(2019, 2, 28));
    assert_eq!(utc(2020, 1, 31) + Components::months(1), utc(2020, 2, 29));
}

#[test]
fn adding_a_year_to_a_leap_day() {
    assert_eq!(utc(2020, 2, 29) + Components::years(1), utc(2021, 2, 28));
}

#[test]
fn subtraction_undoes_addition_off_the_month_ends() {
    let date = utc(2019, 6, 15);
    let record = Components::months(2) + Components::days(3);
    assert_eq!(date.clone() + record.clone() - record, date);
}

#[test]
fn mixed_records_apply_months_first() {
    let date = utc(2019, 1, 31) + (Components::months(1) + Components::days(1));
    assert_eq!((date.month(), date.day()), (3, 1));
}

#[test]
fn position_fields_do_not_shift_anything() {
    let mut record = Components::days(1);
    record.weekday = Some(3);
    record.quarter = Some(2);
    assert_eq!(utc(2019, 6, 29) + record, utc(2019, 6, 30));
}

#[test]
fn checked_addition_mirrors_the_operator() {
    let date = utc(2019, 6, 29);
    assert_eq!(date.checked_add(&Components::days(2)), Some(utc(2019, 7, 1)));
    assert_eq!(date.checked_sub(&Components::days(29)), Some(utc(2019, 5, 31)));
}

#[test]
fn measuring_whole_months() {
    assert_eq!(utc(2019, 1, 15).component_to(Unit::Month, &utc(2019, 3, 14)), 1);
    assert_eq!(utc(2019, 1, 15).component_to(Unit::Month, &utc(2019, 3, 15)), 2);
}

#[test]
fn measuring_backwards_negates() {
    assert_eq!(utc(2019, 3, 15).component_to(Unit::Month, &utc(2019, 1, 15)), -2);
    assert_eq!(utc(2019, 3, 15).component_to(Unit::Day, &utc(2019, 3, 14)), -1);
}

#[test]
fn components_before_now_and_since_now_cancel() {
    let date = DateInRegion::now();
    let since = date.date_components_since_now();
    assert_eq!(since.day.unwrap_or(0), 0);
}

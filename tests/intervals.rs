use zonedate::{Components, DateInRegion, DateInterval, DateRepresentable, Region, Unit};


fn start() -> DateInRegion {
    DateInRegion::from_fields(2018, 9, 14, 15, 0, 0, 0, Region::utc())
}

fn end() -> DateInRegion {
    DateInRegion::from_fields(2018, 9, 15, 20, 0, 0, 0, Region::utc())
}


#[test]
fn subtracting_dates_builds_the_interval() {
    assert_eq!(end() - start(), DateInterval::new(&start(), &end()));
}

#[test]
fn the_span_in_one_unit() {
    assert_eq!(start().component_to(Unit::Hour, &end()), 29);
    assert_eq!(end().component_to(Unit::Hour, &start()), -29);
}

#[test]
fn the_span_split_across_units() {
    let elapsed = end().date_components_since(&start());
    assert_eq!(elapsed.day, Some(1));
    assert_eq!(elapsed.hour, Some(5));
    assert_eq!(elapsed.minute, Some(0));
    assert_eq!(elapsed.month, None);
}

#[test]
fn interval_duration() {
    let interval = end() - start();
    assert_eq!(interval.duration(), 29 * 3600);
    assert_eq!(interval.duration_nanoseconds(), 29 * 3600 * 1_000_000_000);
    assert!(interval == Components::hours(29));
}

#[test]
fn interval_endpoints_survive() {
    let interval = end() - start();
    assert_eq!(interval.start_date(), start());
    assert_eq!(interval.end_date(), end());
}

#[test]
fn an_hour_long_interval_measures_like_one() {
    let one_hour = DateInterval::with_duration(&start(), 3600);
    assert!(one_hour == Components::hours(1));
    assert!(one_hour > Components::minutes(59) + Components::seconds(59));
    assert!(one_hour < Components::hours(1) + Components::seconds(1));
}

#[test]
fn components_build_the_same_interval_as_seconds() {
    let by_seconds = DateInterval::with_duration(&start(), 86400 + 5 * 3600);
    let by_components = DateInterval::with_components(
        &start(), &(Components::days(1) + Components::hours(5))).unwrap();
    assert_eq!(by_seconds, by_components);
    assert_eq!(by_components.end_date(), end());
}

#[test]
fn interval_components_never_contain_months() {
    let wide = DateInterval::with_duration(&start(), 90 * 86400);
    let components = wide.components();
    assert_eq!(components.day, Some(90));
    assert_eq!(components.month, None);
    assert_eq!(components.year, None);
}

use zonedate::{Components, DateInRegion, DateRepresentable, Region, Rounding};


fn at(hour: i64, minute: i64, second: i64) -> DateInRegion {
    DateInRegion::from_fields(2019, 12, 12, hour, minute, second, 0, Region::utc())
}


#[test]
fn up_to_the_next_quarter_hour() {
    let snapped = at(3, 30, 1).to_nearest(&Components::minutes(15), Rounding::Up);
    assert_eq!((snapped.hour(), snapped.minute(), snapped.second()), (3, 45, 0));
}

#[test]
fn down_to_the_previous_quarter_hour() {
    let snapped = at(3, 30, 1).to_nearest(&Components::minutes(15), Rounding::Down);
    assert_eq!((snapped.hour(), snapped.minute(), snapped.second()), (3, 30, 0));
}

#[test]
fn a_grid_point_stays_put() {
    let exact = at(3, 45, 0);
    assert_eq!(exact.to_nearest(&Components::minutes(15), Rounding::Up), exact);
    assert_eq!(exact.to_nearest(&Components::minutes(15), Rounding::Down), exact);
}

#[test]
fn nearest_picks_the_closer_point() {
    let snapped = at(3, 7, 0).to_nearest(&Components::minutes(15), Rounding::Nearest);
    assert_eq!((snapped.hour(), snapped.minute()), (3, 0));

    let snapped = at(3, 8, 0).to_nearest(&Components::minutes(15), Rounding::Nearest);
    assert_eq!((snapped.hour(), snapped.minute()), (3, 15));
}

#[test]
fn next_nearest_moves_forward() {
    let snapped = at(3, 0, 1).to_next_nearest(&Components::hours(1));
    assert_eq!((snapped.hour(), snapped.minute(), snapped.second()), (4, 0, 0));
}

#[test]
fn snapping_to_whole_days() {
    let snapped = at(13, 0, 0).to_nearest(&Components::days(1), Rounding::Nearest);
    assert_eq!((snapped.day(), snapped.hour()), (13, 0));

    let snapped = at(11, 0, 0).to_nearest(&Components::days(1), Rounding::Nearest);
    assert_eq!((snapped.day(), snapped.hour()), (12, 0));
}

#[test]
fn nearest_hour_rounds_at_half_past() {
    assert_eq!(at(10, 29, 59).nearest_hour(), 10);
    assert_eq!(at(10, 30, 0).nearest_hour(), 11);
    assert_eq!(at(23, 45, 0).nearest_hour(), 0);
}

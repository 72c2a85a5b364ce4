//! Integration tests for versions, collections and structured values.

mod common;

use seedling::{SamplingError, Version, system};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Free,
    Team,
    Enterprise,
}

#[test]
fn test_version_equal_bounds() {
    assert_eq!(system::version("1.2.3.4", "1.2.3.4").unwrap().to_string(), "1.2.3.4");
}

#[test]
fn test_version_revision_only_range() {
    let mut generator = common::system_generator();
    for _ in 0..500 {
        let value = generator.version("1.0.0.0", "1.0.0.5").unwrap();
        assert_eq!((value.major, value.minor, value.build), (1, 0, 0));
        assert!(value.revision <= 5, "{value}");
    }
}

#[test]
fn test_version_within_bounds() {
    let mut generator = common::system_generator();
    let low: Version = "2.5.0.10".parse().unwrap();
    let high: Version = "4.1.7.0".parse().unwrap();
    for _ in 0..1_000 {
        let value = generator.version_between(low, high).unwrap();
        assert!(low <= value && value <= high, "{value}");
    }
}

#[test]
fn test_version_reversed_bounds_fail() {
    assert!(matches!(
        system::version("3.0", "2.9"),
        Err(SamplingError::RangeInvalid { .. })
    ));
}

#[test]
fn test_pick_empty_and_singleton() {
    assert_eq!(system::pick(Some(Vec::<i32>::new()), -1), -1);
    assert_eq!(system::pick(None::<Vec<i32>>, -1), -1);
    assert_eq!(system::pick(Some(vec![7]), -1), 7);
}

#[test]
fn test_pick_ref_borrows_member() {
    let mut generator = common::system_generator();
    let names = ["ada", "grace", "barbara"];
    let chosen = generator.pick_ref(&names).unwrap();
    assert!(names.contains(chosen));
    assert!(generator.pick_ref::<u8>(&[]).is_none());
}

#[test]
fn test_enum_value_covers_all_variants() {
    let variants = [Tier::Free, Tier::Team, Tier::Enterprise];
    let mut generator = common::system_generator();
    let mut seen = Vec::new();
    for _ in 0..500 {
        let value = generator.enum_value(&variants).unwrap();
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    assert_eq!(seen.len(), 3);
    assert!(matches!(
        system::enum_value::<Tier>(&[]),
        Err(SamplingError::RangeInvalid { .. })
    ));
}

#[test]
fn test_ipv4_address_renders_four_octets() {
    for _ in 0..500 {
        let rendered = system::ipv4_address().to_string();
        let octets: Vec<&str> = rendered.split('.').collect();
        assert_eq!(octets.len(), 4, "{rendered}");
        assert!(octets.iter().all(|o| o.parse::<u8>().is_ok()), "{rendered}");
    }
}

#[test]
fn test_coordinate_within_earth_bounds() {
    let mut generator = common::system_generator();
    for _ in 0..500 {
        let point = generator.coordinate();
        assert!((-90.0..=90.0).contains(&point.latitude));
        assert!((-180.0..=180.0).contains(&point.longitude));
        assert_eq!(point.to_string().split(',').count(), 2);
    }
}

#[test]
fn test_uuid_is_version_four() {
    let id = system::uuid();
    assert_eq!(id.get_version_num(), 4);
    assert_ne!(id, system::uuid());
}

//! Character-limit properties across every platform profile.

use socialpulse_core::{CharLimit, LimitStatus, Platform, StyleTables, Tone};
use strum::IntoEnumIterator;

#[test]
fn every_platform_has_documented_limit() {
    let tables = StyleTables::new();
    assert_eq!(tables.platform(Platform::LinkedIn).max_length, 3000);
    assert_eq!(tables.platform(Platform::Twitter).max_length, 280);
    assert_eq!(tables.platform(Platform::Facebook).max_length, 63206);
}

#[test]
fn remaining_is_limit_minus_length_for_all_platforms() {
    let tables = StyleTables::new();
    let topics = ["", "Launch of our new product", "ünïcödé topic 🚀"];

    for platform in Platform::iter() {
        let max = tables.platform(platform).max_length as i64;
        for topic in topics {
            let limit = tables.char_limit(topic, platform);
            assert_eq!(limit.remaining, max - topic.chars().count() as i64);
            assert_eq!(
                limit.is_near_limit(),
                (0..=20).contains(&limit.remaining),
                "near-limit mismatch for {platform}"
            );
            assert_eq!(limit.is_over_limit(), limit.remaining < 0);
        }
    }
}

#[test]
fn near_and_over_limit_sweep_around_twitter_boundary() {
    let tables = StyleTables::new();
    for len in 250..=300 {
        let topic = "x".repeat(len);
        let limit = tables.char_limit(&topic, Platform::Twitter);
        let expected = match 280 - len as i64 {
            r if r < 0 => LimitStatus::OverLimit,
            r if r <= 20 => LimitStatus::NearLimit,
            _ => LimitStatus::Ok,
        };
        assert_eq!(limit.status, expected, "length {len}");
    }
}

#[test]
fn every_tone_has_a_description() {
    let tables = StyleTables::new();
    for tone in Tone::iter() {
        assert!(!tables.tone(tone).description.is_empty(), "{tone}");
    }
}

#[test]
fn placeholders_differ_per_platform() {
    let tables = StyleTables::default();
    let placeholders: Vec<_> = Platform::iter()
        .map(|p| tables.platform(p).placeholder)
        .collect();
    assert_eq!(placeholders.len(), 3);
    assert_ne!(placeholders[0], placeholders[1]);
    assert_ne!(placeholders[1], placeholders[2]);
}

#[test]
fn measure_matches_table_lookup() {
    let tables = StyleTables::new();
    assert_eq!(
        tables.char_limit("hello", Platform::LinkedIn),
        CharLimit::measure("hello", 3000)
    );
}

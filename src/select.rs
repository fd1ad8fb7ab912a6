//! Latest-entry selection over an unordered series
//!
//! Series keys are local wall-clock times in the zone named by the metadata.
//! Selection parses every key, drops the ones that do not parse and keeps the
//! entry with the greatest instant. The map's iteration order never matters,
//! except that among keys naming the same instant any one may win.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use log::warn;

use crate::error::{Error, Result};
use crate::model::{IntradayResponse, Quote};

/// Layout of every series key.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const TIMESTAMP_LEN: usize = "YYYY-MM-DD HH:MM:SS".len();

/// The chronologically latest entry of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestEntry<'a> {
    /// Parsed instant, in the series' zone
    pub timestamp: DateTime<Tz>,
    /// Series key the instant was parsed from
    pub key: &'a str,
    /// Quote stored under `key`
    pub quote: &'a Quote,
}

/// Resolve an IANA zone name, falling back to UTC when it is unknown.
pub fn resolve_time_zone(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(e) => {
            warn!("Unknown time zone '{name}' ({e}); falling back to UTC");
            Tz::UTC
        }
    }
}

/// Parse a series key as a wall-clock time in `tz`.
///
/// A wall time repeated by a DST fall-back resolves to the earlier instant. One
/// skipped by a spring-forward gap does not exist and is an error.
pub fn parse_timestamp(key: &str, tz: Tz) -> Result<DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(key, TIMESTAMP_FORMAT).map_err(|e| Error::TimestampParse {
        timestamp: key.to_string(),
        reason: e.to_string(),
    })?;
    // chrono accepts unpadded fields; the layout is fixed-width.
    if key.len() != TIMESTAMP_LEN || naive.format(TIMESTAMP_FORMAT).to_string() != key {
        return Err(Error::TimestampParse {
            timestamp: key.to_string(),
            reason: "expected layout YYYY-MM-DD HH:MM:SS".to_string(),
        });
    }
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::TimestampParse {
            timestamp: key.to_string(),
            reason: format!("local time does not exist in {tz}"),
        })
}

/// Pick the entry with the latest instant, or `None` when no key parses.
pub fn select_latest(response: &IntradayResponse) -> Option<LatestEntry<'_>> {
    let tz = resolve_time_zone(&response.metadata.time_zone);

    let candidates = response
        .series
        .iter()
        .filter_map(|(key, quote)| match parse_timestamp(key, tz) {
            Ok(timestamp) => Some(LatestEntry {
                timestamp,
                key: key.as_str(),
                quote,
            }),
            Err(e) => {
                warn!("{e}");
                None
            }
        });

    latest(candidates)
}

/// Fold candidates into the one with the greatest instant.
///
/// Only a strictly later candidate replaces the running maximum, so among equal
/// instants the first one seen is kept.
pub fn latest<'a>(candidates: impl IntoIterator<Item = LatestEntry<'a>>) -> Option<LatestEntry<'a>> {
    candidates.into_iter().fold(None, |latest, candidate| match latest {
        Some(current) if candidate.timestamp <= current.timestamp => Some(current),
        _ => Some(candidate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetaData;
    use chrono::{Duration, NaiveDate, Utc};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn quote(close: &str) -> Quote {
        Quote {
            close: close.to_string(),
            ..Quote::default()
        }
    }

    fn response(time_zone: &str, entries: &[(&str, &str)]) -> IntradayResponse {
        IntradayResponse {
            metadata: MetaData {
                time_zone: time_zone.to_string(),
                ..MetaData::default()
            },
            series: entries
                .iter()
                .map(|(key, close)| (key.to_string(), quote(close)))
                .collect(),
        }
    }

    #[test]
    fn empty_series_selects_nothing() {
        assert!(select_latest(&response("US/Eastern", &[])).is_none());
    }

    #[test]
    fn unparseable_keys_are_skipped() {
        let resp = response("US/Eastern", &[("not a time", "1.00"), ("2025-04-20 11:20:00", "2.00")]);
        let latest = select_latest(&resp).unwrap();
        assert_eq!(latest.key, "2025-04-20 11:20:00");
        assert_eq!(latest.quote.close, "2.00");
    }

    #[test]
    fn unpadded_keys_are_rejected() {
        let tz = resolve_time_zone("US/Eastern");
        for key in ["2025-4-20 9:5:0", "2025-04-20 9:05:00", "2025-04-20 09:05:00.000", "+2025-04-20 09:05:00"] {
            let err = parse_timestamp(key, tz).unwrap_err();
            assert!(matches!(err, Error::TimestampParse { .. }), "{key}");
        }

        let resp = response("US/Eastern", &[("2025-4-20 9:5:0", "late"), ("2025-04-20 09:00:00", "kept")]);
        assert_eq!(select_latest(&resp).unwrap().quote.close, "kept");
    }

    #[test]
    fn all_keys_unparseable_selects_nothing() {
        let resp = response("US/Eastern", &[("2025-04-20", "1.00"), ("11:20:00", "2.00")]);
        assert!(select_latest(&resp).is_none());
    }

    #[test]
    fn picks_maximum_regardless_of_map_order() {
        let keys = [
            ("2025-04-18 15:55:00", "1"),
            ("2025-04-21 09:30:00", "4"),
            ("2025-04-20 23:59:59", "3"),
            ("2024-12-31 16:00:00", "0"),
            ("2025-04-21 09:25:00", "2"),
        ];
        let resp = response("US/Eastern", &keys);
        let tz = resolve_time_zone("US/Eastern");
        let expected = keys
            .iter()
            .map(|(k, _)| parse_timestamp(k, tz).unwrap())
            .max()
            .unwrap();

        let latest = select_latest(&resp).unwrap();
        assert_eq!(latest.timestamp, expected);
        assert_eq!(latest.quote.close, "4");
    }

    #[test]
    fn identical_instants_select_either_quote() {
        let tz = resolve_time_zone("US/Eastern");
        let timestamp = parse_timestamp("2025-04-20 11:20:00", tz).unwrap();
        let (a, b) = (quote("A"), quote("B"));
        let candidates = vec![
            LatestEntry { timestamp, key: "first", quote: &a },
            LatestEntry { timestamp, key: "second", quote: &b },
        ];

        let chosen = latest(candidates).unwrap();
        assert!(["A", "B"].contains(&chosen.quote.close.as_str()));
    }

    #[test]
    fn latest_of_no_candidates_is_none() {
        assert!(latest(Vec::new()).is_none());
    }

    #[test]
    fn unknown_zone_falls_back_to_utc() {
        assert_eq!(resolve_time_zone("Mars/Olympus_Mons"), Tz::UTC);
        assert_eq!(resolve_time_zone(""), Tz::UTC);

        let resp = response("Mars/Olympus_Mons", &[("2025-04-20 11:20:00", "1")]);
        let latest = select_latest(&resp).unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 4, 20, 11, 20, 0).unwrap();
        assert_eq!(latest.timestamp.with_timezone(&Utc), expected);
    }

    #[test]
    fn keys_are_anchored_to_the_metadata_zone() {
        let ts = parse_timestamp("2025-04-20 11:20:00", resolve_time_zone("US/Eastern")).unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 4, 20, 15, 20, 0).unwrap();
        assert_eq!(ts.with_timezone(&Utc), expected);
    }

    #[test]
    fn fall_back_ambiguity_takes_earlier_instant() {
        let ts = parse_timestamp("2025-11-02 01:30:00", resolve_time_zone("US/Eastern")).unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 11, 2, 5, 30, 0).unwrap();
        assert_eq!(ts.with_timezone(&Utc), expected);
    }

    #[test]
    fn spring_forward_gap_is_a_parse_error() {
        let err = parse_timestamp("2025-03-09 02:30:00", resolve_time_zone("US/Eastern")).unwrap_err();
        assert!(matches!(err, Error::TimestampParse { .. }));
    }

    proptest! {
        #[test]
        fn selects_maximum_of_distinct_keys(
            // 5-minute slots across roughly two years, covering both DST transitions
            slots in proptest::collection::hash_set(0i64..210_000, 1..40),
            zone in prop::sample::select(vec!["UTC", "US/Eastern", "Asia/Tokyo", "Europe/London"]),
        ) {
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
            let keys: Vec<String> = slots
                .iter()
                .map(|slot| (base + Duration::minutes(slot * 5)).format(TIMESTAMP_FORMAT).to_string())
                .collect();
            let entries: Vec<(&str, &str)> = keys.iter().map(|k| (k.as_str(), k.as_str())).collect();
            let resp = response(zone, &entries);

            // Keys falling in a spring-forward gap are skipped; every other key must parse.
            let tz = resolve_time_zone(zone);
            let parsed: Vec<_> = keys.iter().filter_map(|k| parse_timestamp(k, tz).ok()).collect();
            let instants: HashSet<_> = parsed.iter().collect();
            prop_assume!(instants.len() == parsed.len());

            match (select_latest(&resp), parsed.iter().max()) {
                (Some(latest), Some(expected)) => {
                    prop_assert_eq!(&latest.timestamp, expected);
                    prop_assert_eq!(latest.quote.close.as_str(), latest.key);
                    prop_assert_eq!(&parse_timestamp(latest.key, tz).unwrap(), expected);
                }
                (None, None) => {}
                (got, want) => prop_assert!(false, "selected {:?}, expected {:?}", got, want),
            }
        }
    }
}

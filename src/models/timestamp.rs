use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo, SqliteValueRef};
use sqlx::{Decode, Type, TypeInfo, ValueRef};

/// A timestamp column as the external writer stored it.
///
/// The monitor that fills the database is not ours, so both epoch
/// milliseconds (`INTEGER`/`REAL`) and text (`TEXT`, RFC 3339 or SQLite's
/// `YYYY-MM-DD HH:MM:SS`) are accepted. Serialization keeps the stored form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Mirrors JavaScript truthiness: `0` and `""` count as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            Timestamp::Millis(ms) => *ms == 0,
            Timestamp::Text(s) => s.is_empty(),
        }
    }

    /// The stored instant expressed in `tz`; `None` when the value cannot be
    /// read as a date.
    ///
    /// Epoch values and text carrying an offset name an exact instant. Text
    /// without an offset is wall-clock time in `tz` itself, except a bare
    /// date, which is midnight UTC.
    pub fn in_zone<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            Timestamp::Millis(ms) => {
                DateTime::from_timestamp_millis(*ms).map(|utc| utc.with_timezone(tz))
            }
            Timestamp::Text(s) => parse_text(s.trim(), tz),
        }
    }
}

fn parse_text<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_to_zone(naive, tz);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().with_timezone(tz))
}

// A wall-clock time skipped by a DST jump is read an hour later.
fn local_to_zone<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        let later = naive.checked_add_signed(TimeDelta::hours(1))?;
        tz.from_local_datetime(&later).earliest()
    })
}

impl Type<Sqlite> for Timestamp {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &SqliteTypeInfo) -> bool {
        <String as Type<Sqlite>>::compatible(ty)
            || <i64 as Type<Sqlite>>::compatible(ty)
            || <f64 as Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for Timestamp {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        let storage = value.type_info().name().to_owned();
        match storage.as_str() {
            "INTEGER" => Ok(Timestamp::Millis(<i64 as Decode<Sqlite>>::decode(value)?)),
            "REAL" => Ok(Timestamp::Millis(
                <f64 as Decode<Sqlite>>::decode(value)?.trunc() as i64,
            )),
            _ => Ok(Timestamp::Text(<String as Decode<Sqlite>>::decode(value)?)),
        }
    }
}

//! Time source for the application.
//!
//! Every timestamp the app assigns or compares lives in KST (UTC+9).
//! Production code uses [`SystemClock`]; tests inject a [`FixedClock`]
//! so activity windows can be checked against a known instant.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

const KST_SECS: i32 = 9 * 3600;

/// The fixed civil timezone of the service.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_SECS).expect("valid KST offset")
}

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock, converted to KST.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&kst())
    }
}

/// A clock pinned to one instant.
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Build from civil date/time fields, interpreted in KST.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, min: u32) -> Self {
        let dt = kst()
            .with_ymd_and_hms(year, month, day, hour, min, 0)
            .single()
            .expect("valid fixed clock instant");
        FixedClock(dt)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

//! Calendar, clock, and time zone generators.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

use crate::mock::generators::pick;

const WEEK_DAYS: &[&str] = &["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const MONTH_NAMES: &[&str] = &[
	"January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November", "December",
];

const TIME_ZONES: &[&str] = &[
	"Alaskan Standard Time", "Central Standard Time", "China Standard Time", "Eastern Standard Time", "GMT Standard Time",
	"Hawaiian Standard Time", "India Standard Time", "Kaliningrad Standard Time", "Mountain Standard Time", "New Zealand Standard Time",
	"Pacific Standard Time", "Tokyo Standard Time", "W. Europe Standard Time",
];

const TIME_ZONE_ABVS: &[&str] = &["AKST", "CST", "EST", "GMT", "HST", "IST", "JST", "MST", "NZST", "PST", "UTC", "WET"];

const TIME_ZONE_FULLS: &[&str] = &[
	"(UTC-10:00) Hawaii",
	"(UTC-09:00) Alaska",
	"(UTC-08:00) Pacific Time (US & Canada)",
	"(UTC-07:00) Mountain Time (US & Canada)",
	"(UTC-06:00) Central Time (US & Canada)",
	"(UTC-05:00) Eastern Time (US & Canada)",
	"(UTC) Dublin, Edinburgh, Lisbon, London",
	"(UTC+01:00) Amsterdam, Berlin, Bern, Rome",
	"(UTC+02:00) Kaliningrad",
	"(UTC+05:30) Chennai, Kolkata, Mumbai, New Delhi",
	"(UTC+08:00) Beijing, Chongqing, Hong Kong",
	"(UTC+09:00) Osaka, Sapporo, Tokyo",
	"(UTC+12:00) Auckland, Wellington",
];

const TIME_ZONE_REGIONS: &[&str] = &[
	"America/Anchorage", "America/Chicago", "America/Denver", "America/Los_Angeles", "America/New_York", "Asia/Kolkata",
	"Asia/Shanghai", "Asia/Tokyo", "Australia/Sydney", "Europe/Berlin", "Europe/London", "Pacific/Auckland",
];

// 1900-01-01T00:00:00Z.
const EPOCH_FLOOR_SECS: i64 = -2_208_988_800;

/// Generate a timestamp between 1900 and now.
pub fn date() -> String {
	let mut rng = rand::thread_rng();
	let secs = rng.gen_range(EPOCH_FLOOR_SECS..=Utc::now().timestamp());
	DateTime::from_timestamp(secs, 0).map(|moment| moment.to_string()).unwrap_or_default()
}

/// Generate a nanosecond count within one second.
pub fn nano_second() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(0..=999_999_999_u32).to_string()
}

/// Generate a second of a minute.
pub fn second() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(0..=59).to_string()
}

/// Generate a minute of an hour.
pub fn minute() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(0..=59).to_string()
}

/// Generate an hour of a day.
pub fn hour() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(0..=23).to_string()
}

/// Generate a month number.
pub fn month() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(1..=12).to_string()
}

/// Generate a month name.
pub fn month_string() -> String {
	pick(MONTH_NAMES).to_owned()
}

/// Generate a day of a month.
pub fn day() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(1..=31).to_string()
}

/// Generate a weekday name.
pub fn week_day() -> String {
	pick(WEEK_DAYS).to_owned()
}

/// Generate a year between 1900 and now.
pub fn year() -> String {
	let mut rng = rand::thread_rng();
	rng.gen_range(1900..=Utc::now().year()).to_string()
}

/// Generate a time zone name.
pub fn time_zone() -> String {
	pick(TIME_ZONES).to_owned()
}

/// Generate a time zone abbreviation.
pub fn time_zone_abv() -> String {
	pick(TIME_ZONE_ABVS).to_owned()
}

/// Generate a descriptive time zone label with its UTC offset.
pub fn time_zone_full() -> String {
	pick(TIME_ZONE_FULLS).to_owned()
}

/// Generate a UTC offset in hours with three decimal places.
pub fn time_zone_offset() -> String {
	let mut rng = rand::thread_rng();
	format!("{:.3}", rng.gen_range(-12.0..=14.0))
}

/// Generate an IANA time zone region.
pub fn time_zone_region() -> String {
	pick(TIME_ZONE_REGIONS).to_owned()
}

#[cfg(test)]
mod tests {
	use chrono::{Datelike, Utc};

	use super::{date, day, hour, minute, month, nano_second, second, time_zone_offset, year};

	#[test]
	fn date_is_utc_and_after_floor() {
		for _ in 0..8 {
			let out = date();
			assert!(out.ends_with(" UTC"));
			let year: i32 = out[..4].parse().expect("year prefix must parse");
			assert!(year >= 1900);
		}
	}

	#[test]
	fn clock_fields_stay_in_range() {
		for _ in 0..32 {
			assert!((0..=59).contains(&second().parse::<u32>().expect("second must parse")));
			assert!((0..=59).contains(&minute().parse::<u32>().expect("minute must parse")));
			assert!((0..=23).contains(&hour().parse::<u32>().expect("hour must parse")));
			assert!((1..=12).contains(&month().parse::<u32>().expect("month must parse")));
			assert!((1..=31).contains(&day().parse::<u32>().expect("day must parse")));
			assert!((0..=999_999_999).contains(&nano_second().parse::<u32>().expect("nano must parse")));
		}
	}

	#[test]
	fn year_never_exceeds_current() {
		for _ in 0..16 {
			let value: i32 = year().parse().expect("year must parse");
			assert!((1900..=Utc::now().year()).contains(&value));
		}
	}

	#[test]
	fn offset_has_three_decimals() {
		let out = time_zone_offset();
		let (_, frac) = out.split_once('.').expect("offset must carry decimals");
		assert_eq!(frac.len(), 3);
		let value: f64 = out.parse().expect("offset must parse");
		assert!((-12.0..=14.0).contains(&value));
	}
}

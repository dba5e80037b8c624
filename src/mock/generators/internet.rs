//! Network, web, and user agent generators.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::mock::generators::{pick, words};

const DOMAIN_SUFFIXES: &[&str] = &["com", "net", "org", "io", "dev", "info", "biz", "name"];

const STATUS_CODES: &[u16] = &[
	200, 201, 202, 203, 204, 205, 206, 300, 301, 302, 303, 304, 305, 306, 307, 400, 401, 402, 403, 404, 405, 406, 407, 408, 409, 410,
	411, 412, 413, 414, 415, 416, 417, 500, 501, 502, 503, 504, 505,
];

const STATUS_CODES_SIMPLE: &[u16] = &[200, 301, 302, 400, 404, 500];

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warning", "error", "fatal"];

const HTTP_METHODS: &[&str] = &["HEAD", "GET", "POST", "PUT", "PATCH", "DELETE"];

const UA_PLATFORMS: &[&str] = &["Windows NT 10.0; Win64; x64", "Macintosh; Intel Mac OS X 10_15_7", "X11; Linux x86_64"];

/// Generate an http(s) URL with a short random path.
pub fn url() -> String {
	let mut rng = rand::thread_rng();
	let scheme = if rng.gen_bool(0.5) { "https" } else { "http" };
	let mut path = String::new();
	for _ in 0..rng.gen_range(1..=4) {
		path.push('/');
		path.push_str(&words::noun());
	}
	format!("{scheme}://www.{}{path}", domain_name())
}

/// Generate a domain name.
pub fn domain_name() -> String {
	format!("{}{}.{}", words::adjective(), words::noun(), domain_suffix())
}

/// Generate a top level domain suffix.
pub fn domain_suffix() -> String {
	pick(DOMAIN_SUFFIXES).to_owned()
}

/// Generate a dotted quad IPv4 address.
pub fn ipv4_address() -> String {
	let mut rng = rand::thread_rng();
	format!("{}.{}.{}.{}", rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255))
}

/// Generate an IPv6 address in the 2001:cafe document range.
pub fn ipv6_address() -> String {
	let mut rng = rand::thread_rng();
	format!(
		"2001:cafe:{:x}:{:x}:{:x}:{:x}:{:x}:{:x}",
		rng.gen_range(0..0x10000),
		rng.gen_range(0..0x10000),
		rng.gen_range(0..0x10000),
		rng.gen_range(0..0x10000),
		rng.gen_range(0..0x10000),
		rng.gen_range(0..0x10000),
	)
}

/// Generate a colon separated MAC address.
pub fn mac_address() -> String {
	let mut rng = rand::thread_rng();
	format!(
		"{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
		rng.gen_range(0..=255),
		rng.gen_range(0..=255),
		rng.gen_range(0..=255),
		rng.gen_range(0..=255),
		rng.gen_range(0..=255),
		rng.gen_range(0..=255),
	)
}

/// Generate an HTTP status code from the full table.
pub fn http_status_code() -> String {
	let mut rng = rand::thread_rng();
	STATUS_CODES.choose(&mut rng).copied().unwrap_or(200).to_string()
}

/// Generate an HTTP status code from the short everyday set.
pub fn http_status_code_simple() -> String {
	let mut rng = rand::thread_rng();
	STATUS_CODES_SIMPLE.choose(&mut rng).copied().unwrap_or(200).to_string()
}

/// Generate a log level name.
pub fn log_level() -> String {
	pick(LOG_LEVELS).to_owned()
}

/// Generate an HTTP method.
pub fn http_method() -> String {
	pick(HTTP_METHODS).to_owned()
}

/// Generate a user agent from a randomly chosen browser family.
pub fn user_agent() -> String {
	let mut rng = rand::thread_rng();
	let agents: &[fn() -> String] = &[chrome_user_agent, firefox_user_agent, opera_user_agent, safari_user_agent];
	agents.choose(&mut rng).map(|agent| agent()).unwrap_or_default()
}

/// Generate a Chrome user agent.
pub fn chrome_user_agent() -> String {
	let mut rng = rand::thread_rng();
	let webkit = rng.gen_range(531..=537);
	format!(
		"Mozilla/5.0 ({}) AppleWebKit/{webkit}.36 (KHTML, like Gecko) Chrome/{}.0.{}.{} Safari/{webkit}.36",
		pick(UA_PLATFORMS),
		rng.gen_range(90..=125),
		rng.gen_range(3000..=6400),
		rng.gen_range(0..=220),
	)
}

/// Generate a Firefox user agent.
pub fn firefox_user_agent() -> String {
	let mut rng = rand::thread_rng();
	let version = rng.gen_range(78..=128);
	format!("Mozilla/5.0 ({}; rv:{version}.0) Gecko/20100101 Firefox/{version}.0", pick(UA_PLATFORMS))
}

/// Generate an Opera user agent.
pub fn opera_user_agent() -> String {
	let mut rng = rand::thread_rng();
	format!(
		"Opera/9.{} ({}; en) Presto/2.{}.{} Version/{}.00",
		rng.gen_range(10..=99),
		pick(UA_PLATFORMS),
		rng.gen_range(8..=12),
		rng.gen_range(160..=355),
		rng.gen_range(10..=13),
	)
}

/// Generate a Safari user agent.
pub fn safari_user_agent() -> String {
	let mut rng = rand::thread_rng();
	let webkit = rng.gen_range(601..=605);
	let minor = rng.gen_range(1..=50);
	format!(
		"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/{webkit}.{minor}.15 (KHTML, like Gecko) Version/{}.{} Safari/{webkit}.{minor}.15",
		rng.gen_range(13..=17),
		rng.gen_range(0..=7),
	)
}

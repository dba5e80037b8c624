use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::mock::generators::{address, beer, car, color, food, internet, misc, person, time, words};

/// Prefix shared by every replaceable marker string.
pub const MARKER_PREFIX: &str = "@fake:";

/// Generator function producing one fresh value per call.
pub type Generator = fn() -> String;

/// Named group of related markers.
#[derive(Debug, Clone, Copy)]
pub struct MarkerGroup {
	/// Group label used in vocabulary listings.
	pub name: &'static str,
	/// Marker names paired with their generator functions.
	pub entries: &'static [(&'static str, Generator)],
}

/// Marker vocabulary in listing order.
pub static GROUPS: &[MarkerGroup] = &[
	MarkerGroup {
		name: "person",
		entries: &[
			("Name", person::name),
			("NamePrefix", person::name_prefix),
			("NameSuffix", person::name_suffix),
			("FirstName", person::first_name),
			("LastName", person::last_name),
			("Gender", person::gender),
			("SSN", person::ssn),
			("Email", person::email),
			("Phone", person::phone),
			("PhoneFormatted", person::phone_formatted),
		],
	},
	MarkerGroup {
		name: "auth",
		entries: &[("Username", person::username), ("Password", person::password)],
	},
	MarkerGroup {
		name: "address",
		entries: &[
			("City", address::city),
			("Country", address::country),
			("CountryAbr", address::country_abr),
			("State", address::state),
			("StateAbr", address::state_abr),
			("Street", address::street),
			("StreetName", address::street_name),
			("StreetNumber", address::street_number),
			("StreetPrefix", address::street_prefix),
			("StreetSuffix", address::street_suffix),
			("Zip", address::zip),
			("Latitude", address::latitude),
			("Longitude", address::longitude),
		],
	},
	MarkerGroup {
		name: "game",
		entries: &[("Gamertag", misc::gamertag)],
	},
	MarkerGroup {
		name: "beer",
		entries: &[
			("BeerAlcohol", beer::alcohol),
			("BeerBlg", beer::blg),
			("BeerHop", beer::hop),
			("BeerIbu", beer::ibu),
			("BeerMalt", beer::malt),
			("BeerName", beer::name),
			("BeerStyle", beer::style),
			("BeerYeast", beer::yeast),
		],
	},
	MarkerGroup {
		name: "car",
		entries: &[
			("CarMaker", car::maker),
			("CarModel", car::model),
			("CarType", car::car_type),
			("CarFuelType", car::fuel_type),
			("CarTransmissionType", car::transmission_type),
		],
	},
	MarkerGroup {
		name: "words",
		entries: &[
			("Noun", words::noun),
			("Verb", words::verb),
			("Adverb", words::adverb),
			("Preposition", words::preposition),
			("Adjective", words::adjective),
			("Word", words::word),
			("Sentence", words::sentence),
			("LoremIpsumWord", words::lorem_ipsum_word),
			("LoremIpsumSentence", words::lorem_ipsum_sentence),
			("Question", words::question),
			("Quote", words::quote),
			("Phrase", words::phrase),
		],
	},
	MarkerGroup {
		name: "foods",
		entries: &[
			("Fruit", food::fruit),
			("Vegetable", food::vegetable),
			("Breakfast", food::breakfast),
			("Lunch", food::lunch),
			("Dinner", food::dinner),
			("Snack", food::snack),
			("Dessert", food::dessert),
		],
	},
	MarkerGroup {
		name: "misc",
		entries: &[("UUID", misc::uuid), ("FlipACoin", misc::flip_a_coin)],
	},
	MarkerGroup {
		name: "colors",
		entries: &[
			("Color", color::color),
			("HexColor", color::hex_color),
			("RGBColor", color::rgb_color),
			("SafeColor", color::safe_color),
		],
	},
	MarkerGroup {
		name: "internet",
		entries: &[
			("URL", internet::url),
			("DomainName", internet::domain_name),
			("DomainSuffix", internet::domain_suffix),
			("IPv4Address", internet::ipv4_address),
			("IPv6Address", internet::ipv6_address),
			("MacAddress", internet::mac_address),
			("HTTPStatusCode", internet::http_status_code),
			("HTTPStatusCodeSimple", internet::http_status_code_simple),
			("LogLevel", internet::log_level),
			("HTTPMethod", internet::http_method),
			("UserAgent", internet::user_agent),
			("ChromeUserAgent", internet::chrome_user_agent),
			("FirefoxUserAgent", internet::firefox_user_agent),
			("OperaUserAgent", internet::opera_user_agent),
			("SafariUserAgent", internet::safari_user_agent),
		],
	},
	MarkerGroup {
		name: "time",
		entries: &[
			("Date", time::date),
			("NanoSecond", time::nano_second),
			("Second", time::second),
			("Minute", time::minute),
			("Hour", time::hour),
			("Month", time::month),
			("MonthString", time::month_string),
			("Day", time::day),
			("WeekDay", time::week_day),
			("Year", time::year),
			("TimeZone", time::time_zone),
			("TimeZoneAbv", time::time_zone_abv),
			("TimeZoneFull", time::time_zone_full),
			("TimeZoneOffset", time::time_zone_offset),
			("TimeZoneRegion", time::time_zone_region),
		],
	},
];

static REGISTRY: Lazy<HashMap<&'static str, Generator>> = Lazy::new(|| {
	let mut map = HashMap::new();
	for group in GROUPS {
		for (name, generator) in group.entries {
			map.insert(*name, *generator);
		}
	}
	map
});

/// Look up the generator registered under a marker name without its prefix.
pub fn lookup(name: &str) -> Option<Generator> {
	REGISTRY.get(name).copied()
}

/// Total number of registered markers.
pub fn marker_count() -> usize {
	REGISTRY.len()
}

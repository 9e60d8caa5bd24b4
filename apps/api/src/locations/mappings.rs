//! Hand-curated city mappings that resolve common locations without an API
//! call.
//!
//! The entries are kept in their upstream order. The data contains duplicate
//! keys and asymmetric pairs; at table build time a later duplicate silently
//! overrides an earlier one, and that override-wins-last behavior is part of
//! the data contract (tested below), not something to normalize away here.

use std::collections::HashMap;
use std::sync::LazyLock;

const CITY_MAPPINGS: &[(&str, &str)] = &[
    ("san jose, ca", "Mountain View, CA"),
    ("san francisco, ca", "Mountain View, CA"),
    ("san francisco bay area", "Mountain View, CA"),
    ("mountain view, ca", "San Jose, CA"),
    ("san diego, ca", "Los Angeles, CA"),
    ("los angeles, ca", "Los Angeles, CA"),
    ("austin, tx", "San Antonio, TX"),
    ("san antonio, tx", "Austin, TX"),
    ("houston, tx", "San Antonio, TX"),
    ("dallas, tx", "Fort Worth, TX"),
    ("fort worth, tx", "Dallas, TX"),
    ("frisco, tx", "Plano, TX"),
    ("seattle, wa", "Tacoma, WA"),
    ("tacoma, wa", "Seattle, WA"),
    ("bellevue, wa", "Tacoma, WA"),
    ("new york city, ny", "Newark, NJ"),
    ("new york, ny", "Newark, NJ"),
    ("newark, nj", "New York, NY"),
    ("cambridge, ma", "Worcester, MA"),
    ("worcester, ma", "Cambridge, MA"),
    ("chicago, il", "Naperville, IL"),
    ("naperville, il", "Chicago, IL"),
    ("atlanta, ga", "Alpharetta, GA"),
    ("alpharetta, ga", "Atlanta, GA"),
    ("birmingham, nc", "Alpharetta, GA"),
    ("raleigh, nc", "Durham, NC"),
    ("charlotte, nc", "Durham, NC"),
    ("durham, nc", "Raleigh, NC"),
    ("denver, co", "Boulder, CO"),
    ("boulder, co", "Denver, CO"),
    ("arlington, va", "Alexandria, VA"),
    ("alexandria, va", "Arlington, VA"),
    ("miami, fl", "Fort Lauderdale, FL"),
    ("tampa, fl", "Fort Lauderdale, FL"),
    ("fort lauderdale, fl", "Miami, FL"),
    ("philadelphia, pa", "Wilmington, DE"),
    ("wilmington, de", "Philadelphia, PA"),
    ("phoenix, az", "Scottsdale, AZ"),
    ("tempe, az", "Scottsdale, AZ"),
    ("scottsdale, az", "Phoenix, AZ"),
    ("columbus, oh", "Dayton, OH"),
    ("dayton, oh", "Columbus, OH"),
    ("cleveland, oh", "Lakewood, OH"),
    ("lakewood, oh", "Cleveland, OH"),
    ("blue ash, oh", "Cincinnati, OH"),
    ("cincinnati, oh", "Dayton, OH"),
    ("mason, oh", "Cincinnati, OH"),
    ("detroit, mi", "Ann Arbor, MI"),
    ("ann arbor, mi", "Detroit, MI"),
    ("minneapolis, mn", "St. Paul, MN"),
    ("st. paul, mn", "Minneapolis, MN"),
    ("portland, or", "Beaverton, OR"),
    ("beaverton, or", "Portland, OR"),
    ("salt lake city, ut", "Provo, UT"),
    ("provo, ut", "Salt Lake City, UT"),
    ("odgen, ut", "Salt Lake City, UT"),
    ("draper, ut", "Salt Lake City, UT"),
    ("st. louis, mo", "Clayton, MO"),
    ("clayton, mo", "St. Louis, MO"),
    ("nashville, tn", "Murfreesboro, TN"),
    ("murfreesboro, tn", "Nashville, TN"),
    ("indianapolis, in", "Carmel, IN"),
    ("carmel, in", "Indianapolis, IN"),
    ("madison, wi", "Milwaukee, WI"),
    ("milwaukee, wi", "Madison, WI"),
    ("huntsville, al", "Decatur, AL"),
    ("decatur, al", "Huntsville, AL"),
    ("new orleans, la", "Baton Rouge, LA"),
    ("baton rouge, la", "New Orleans, LA"),
    ("charleston, sc", "Mount Pleasant, SC"),
    ("mount pleasant, sc", "Charleston, SC"),
    ("las vegas, nv", "Henderson, NV"),
    ("henderson, nv", "Las Vegas, NV"),
    ("lexington, ky", "Louisville, KY"),
    ("louisville, ky", "Lexington, KY"),
    ("oklahoma city, ok", "Norman, OK"),
    ("norman, ok", "Oklahoma City, OK"),
    ("des moines, ia", "Ames, IA"),
    ("ames, ia", "Des Moines, IA"),
    ("kansas city, ks", "Overland Park, KS"),
    ("overland park, ks", "Kansas City, KS"),
    ("little rock, ar", "Conway, AR"),
    ("conway, ar", "Little Rock, AR"),
    ("albuquerque, nm", "Santa Fe, NM"),
    ("santa fe, nm", "Albuquerque, NM"),
    ("omaha, ne", "Lincoln, NE"),
    ("lincoln, ne", "Omaha, NE"),
    ("boise, id", "Meridian, ID"),
    ("meridian, id", "Boise, ID"),
    ("jackson, ms", "Madison, MS"),
    ("madison, ms", "Jackson, MS"),
    ("morgantown, wv", "Fairmont, WV"),
    ("fairmont, wv", "Morgantown, WV"),
    ("portland, me", "Lewiston, ME"),
    ("lewiston, me", "Portland, ME"),
    ("manchester, nh", "Nashua, NH"),
    ("nashua, nh", "Manchester, NH"),
    ("burlington, vt", "Montpelier, VT"),
    ("montpelier, vt", "Burlington, VT"),
    ("providence, ri", "Warwick, RI"),
    ("warwick, ri", "Providence, RI"),
    ("newark, de", "Wilmington, DE"),
    ("anchorage, ak", "Wasilla, AK"),
    ("wasilla, ak", "Anchorage, AK"),
    ("honolulu, hi", "Kailua, HI"),
    ("kailua, hi", "Honolulu, HI"),
    ("irvine, ca", "Los Angeles, CA"),
    ("los angeles, ca", "Irvine, CA"),
    ("lehi, ut", "Salt Lake City, UT"),
    ("baltimore, md", "Washington, DC"),
    ("washington, dc", "Baltimore, MD"),
    ("rockville, md", "Washington, DC"),
    ("north bethesda, md", "North Bethesda, MD"),
    ("warren, mi", "Detroit, MI"),
    ("jersey city, nj", "New York, NY"),
    ("fort mill, sc", "Charlotte, NC"),
    ("somerville, ma", "Boston, MA"),
    ("boston, ma", "Somerville, MA"),
    ("madison, wi", "Milwaukee, WI"),
    ("hartford, ct", "New Haven, CT"),
    ("new haven, ct", "Hartford, CT"),
    ("mclean, va", "Arlington, VA"),
    ("reston, va", "Tysons Corner, VA"),
    ("palo alto, ca", "San Jose, CA"),
    ("district of columbia, united states", "Arlington, VA"),
    ("columbia, sc", "Greenville, SC"),
    ("tulsa, ok", "Broken Arrow, OK"),
];

static LOOKUP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(CITY_MAPPINGS.len());
    for &(key, value) in CITY_MAPPINGS {
        table.insert(key, value);
    }
    table
});

/// Exact-match lookup on the normalized (lowercased, trimmed) location.
pub fn suggest(raw: &str) -> Option<&'static str> {
    let key = raw.trim().to_lowercase();
    LOOKUP.get(key.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_after_normalization() {
        assert_eq!(suggest("San Francisco, CA"), Some("Mountain View, CA"));
        assert_eq!(suggest("  seattle, wa  "), Some("Tacoma, WA"));
        assert_eq!(suggest("SAN JOSE, CA"), Some("Mountain View, CA"));
    }

    #[test]
    fn test_unknown_city_misses() {
        assert_eq!(suggest("Zurich, Switzerland"), None);
        assert_eq!(suggest(""), None);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        // Exact match only; a missing state suffix misses.
        assert_eq!(suggest("San Francisco"), None);
    }

    /// `los angeles, ca` is defined twice upstream; the later entry
    /// (Irvine) must win. A deliberate data change is required to alter
    /// this.
    #[test]
    fn test_duplicate_key_last_definition_wins() {
        assert_eq!(suggest("Los Angeles, CA"), Some("Irvine, CA"));
    }

    #[test]
    fn test_mappings_are_not_symmetric() {
        assert_eq!(suggest("san jose, ca"), Some("Mountain View, CA"));
        assert_eq!(suggest("mountain view, ca"), Some("San Jose, CA"));
        // Asymmetric pair: cincinnati maps to dayton, not back to blue ash.
        assert_eq!(suggest("blue ash, oh"), Some("Cincinnati, OH"));
        assert_eq!(suggest("cincinnati, oh"), Some("Dayton, OH"));
    }

    #[test]
    fn test_self_mapping_entry_preserved() {
        // north bethesda maps to itself in the source data.
        assert_eq!(suggest("North Bethesda, MD"), Some("North Bethesda, MD"));
    }
}

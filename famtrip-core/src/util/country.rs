//! Country flags of free text location names.

/// Shown when no country can be recognized.
pub const WORLD: &str = "🌍";

/// ISO 3166 alpha-2 and alpha-3 codes of the recognized countries.
const CODES: &[(&str, &str)] = &[
    ("CZ", "CZE"),
    ("DE", "DEU"),
    ("AT", "AUT"),
    ("SK", "SVK"),
    ("PL", "POL"),
    ("HU", "HUN"),
    ("IT", "ITA"),
    ("FR", "FRA"),
    ("ES", "ESP"),
    ("PT", "PRT"),
    ("GB", "GBR"),
    ("IE", "IRL"),
    ("NL", "NLD"),
    ("BE", "BEL"),
    ("CH", "CHE"),
    ("NO", "NOR"),
    ("SE", "SWE"),
    ("DK", "DNK"),
    ("FI", "FIN"),
    ("IS", "ISL"),
    ("GR", "GRC"),
    ("HR", "HRV"),
    ("SI", "SVN"),
    ("RS", "SRB"),
    ("BG", "BGR"),
    ("RO", "ROU"),
    ("LT", "LTU"),
    ("LV", "LVA"),
    ("EE", "EST"),
    ("RU", "RUS"),
    ("UA", "UKR"),
    ("US", "USA"),
    ("CA", "CAN"),
    ("MX", "MEX"),
    ("JP", "JPN"),
    ("CN", "CHN"),
    ("KR", "KOR"),
    ("IN", "IND"),
    ("TH", "THA"),
    ("VN", "VNM"),
    ("SG", "SGP"),
    ("MY", "MYS"),
    ("ID", "IDN"),
    ("PH", "PHL"),
    ("TR", "TUR"),
    ("IL", "ISR"),
    ("AE", "ARE"),
    ("AU", "AUS"),
    ("NZ", "NZL"),
    ("ZA", "ZAF"),
    ("EG", "EGY"),
    ("MA", "MAR"),
    ("KE", "KEN"),
    ("TZ", "TZA"),
    ("BR", "BRA"),
    ("AR", "ARG"),
    ("CL", "CHL"),
    ("PE", "PER"),
    ("CO", "COL"),
];

/// Lower case country names in English, the local language and Czech.
const NAMES: &[(&str, &str)] = &[
    ("czech republic", "CZ"),
    ("czechia", "CZ"),
    ("czech", "CZ"),
    ("česká republika", "CZ"),
    ("česko", "CZ"),
    ("germany", "DE"),
    ("deutschland", "DE"),
    ("německo", "DE"),
    ("austria", "AT"),
    ("österreich", "AT"),
    ("rakousko", "AT"),
    ("slovakia", "SK"),
    ("slovensko", "SK"),
    ("poland", "PL"),
    ("polska", "PL"),
    ("polsko", "PL"),
    ("hungary", "HU"),
    ("magyarország", "HU"),
    ("maďarsko", "HU"),
    ("italy", "IT"),
    ("italia", "IT"),
    ("itálie", "IT"),
    ("france", "FR"),
    ("francie", "FR"),
    ("spain", "ES"),
    ("españa", "ES"),
    ("španělsko", "ES"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("britain", "GB"),
    ("velká británie", "GB"),
    ("spojené království", "GB"),
    ("united states", "US"),
    ("america", "US"),
    ("spojené státy", "US"),
];

/// Well-known cities whose names rarely come with a country.
const CITIES: &[(&str, &str)] = &[
    ("prague", "CZ"),
    ("praha", "CZ"),
    ("warsaw", "PL"),
    ("warszawa", "PL"),
    ("krakow", "PL"),
    ("kraków", "PL"),
    ("vienna", "AT"),
    ("wien", "AT"),
    ("budapest", "HU"),
    ("berlin", "DE"),
    ("munich", "DE"),
    ("münchen", "DE"),
];

/// Flag emoji of an ISO 3166 alpha-2 code.
pub fn flag(alpha2: &str) -> Option<String> {
    if alpha2.len() != 2 || !alpha2.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    alpha2
        .bytes()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}

/// Recognizes the country of a location name.
///
/// Upper case country codes (`Brno, CZ`) win over country names,
/// the longest contained name wins over shorter ones. A few
/// capitals are recognized without any country.
pub fn country_code(location: &str) -> Option<&'static str> {
    let by_code = location
        .split(|c: char| c == ',' || c == '-' || c == '(' || c == ')' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .find_map(|word| {
            CODES
                .iter()
                .find(|(alpha2, alpha3)| word == *alpha2 || word == *alpha3)
                .map(|(alpha2, _)| *alpha2)
        });
    if by_code.is_some() {
        return by_code;
    }
    let lower = location.to_lowercase();
    longest_contained(&lower, NAMES).or_else(|| longest_contained(&lower, CITIES))
}

fn longest_contained(
    lower: &str,
    names: &'static [(&'static str, &'static str)],
) -> Option<&'static str> {
    names
        .iter()
        .filter(|(name, _)| lower.contains(name))
        .max_by_key(|(name, _)| name.len())
        .map(|(_, code)| *code)
}

/// Flag of the country of a location name, the globe if unknown.
pub fn location_flag(location: &str) -> String {
    country_code(location)
        .and_then(flag)
        .unwrap_or_else(|| WORLD.to_owned())
}

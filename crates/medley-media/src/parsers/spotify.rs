use regex::Regex;

const TRACK_PATTERNS: [&str; 3] = [
    r"open\.spotify\.com/track/([A-Za-z0-9]+)",
    r"spotify\.com/track/([A-Za-z0-9]+)",
    r"/embed/track/([A-Za-z0-9]+)",
];

pub fn parse_spotify_track_id(input: &str) -> Option<String> {
    for pattern in TRACK_PATTERNS {
        let regex = Regex::new(pattern).ok()?;
        if let Some(captures) = regex.captures(input) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

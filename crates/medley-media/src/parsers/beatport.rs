use regex::Regex;
use url::Url;

const TRACK_PATTERNS: [&str; 3] = [
    r"beatport\.com/track/([^/?\s]+)/(\d+)",
    r"beatport\.com/track/(\d+)",
    r"/track/(\d+)",
];

pub fn parse_beatport_track_id(input: &str) -> Option<String> {
    for pattern in TRACK_PATTERNS {
        let regex = Regex::new(pattern).ok()?;
        if let Some(captures) = regex.captures(input) {
            // The slug pattern captures two groups and the id is the second,
            // so always take the last group that matched.
            return (1..captures.len())
                .rev()
                .find_map(|i| captures.get(i))
                .map(|m| m.as_str().to_string());
        }
    }
    fallback_from_parsed_url(input)
}

fn fallback_from_parsed_url(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    let mut segments = url.path_segments()?;
    segments
        .find(|segment| *segment == "track")
        .and_then(|_| segments.next())
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::parse_beatport_track_id;

    #[test]
    fn parses_slug_and_id() {
        let url = "https://www.beatport.com/track/some-song-name/12345678";
        assert_eq!(
            parse_beatport_track_id(url),
            Some("12345678".to_string())
        );
    }

    #[test]
    fn parses_bare_id() {
        let url = "https://www.beatport.com/track/12345678";
        assert_eq!(
            parse_beatport_track_id(url),
            Some("12345678".to_string())
        );
    }

    #[test]
    fn parses_id_deeper_in_the_path() {
        let url = "https://embed.beatport.com/player/track/12345678";
        assert_eq!(
            parse_beatport_track_id(url),
            Some("12345678".to_string())
        );
    }

    #[test]
    fn slug_is_never_returned_as_the_id() {
        let url = "https://www.beatport.com/track/9th-symphony/555";
        assert_eq!(parse_beatport_track_id(url), Some("555".to_string()));
    }

    #[test]
    fn rejects_non_track_urls() {
        assert_eq!(
            parse_beatport_track_id("https://www.beatport.com/genre/techno/6"),
            None
        );
        assert_eq!(parse_beatport_track_id("not a url"), None);
        assert_eq!(parse_beatport_track_id(""), None);
    }
}

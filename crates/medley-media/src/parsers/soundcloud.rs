use regex::Regex;
use url::Url;

// The two-segment pattern must stay ahead of the one-segment pattern:
// artist/track URLs would otherwise be truncated to the artist alone.
const PATH_PATTERNS: [&str; 2] = [
    r"soundcloud\.com/[^/?\s]+/[^/?\s]+",
    r"soundcloud\.com/[^/?\s]+",
];

pub fn parse_soundcloud_track_path(input: &str) -> Option<String> {
    for pattern in PATH_PATTERNS {
        let regex = Regex::new(pattern).ok()?;
        if let Some(m) = regex.find(input) {
            return Some(m.as_str().to_string());
        }
    }
    fallback_from_parsed_url(input)
}

fn fallback_from_parsed_url(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    let host = url.host_str()?;
    if !host.contains("soundcloud.com") {
        return None;
    }
    let path = url.path().trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::parse_soundcloud_track_path;

    #[test]
    fn parses_artist_and_track() {
        let url = "https://soundcloud.com/forss/flickermood";
        assert_eq!(
            parse_soundcloud_track_path(url),
            Some("soundcloud.com/forss/flickermood".to_string())
        );
    }

    #[test]
    fn parses_artist_only() {
        let url = "https://soundcloud.com/forss";
        assert_eq!(
            parse_soundcloud_track_path(url),
            Some("soundcloud.com/forss".to_string())
        );
    }

    #[test]
    fn strips_scheme_and_query() {
        let url = "http://www.soundcloud.com/forss/flickermood?in=forss/sets/soulhack";
        assert_eq!(
            parse_soundcloud_track_path(url),
            Some("soundcloud.com/forss/flickermood".to_string())
        );
    }

    #[test]
    fn trailing_slash_falls_back_to_artist_segment() {
        let url = "https://soundcloud.com/forss/";
        assert_eq!(
            parse_soundcloud_track_path(url),
            Some("soundcloud.com/forss".to_string())
        );
    }

    #[test]
    fn rejects_other_hosts() {
        assert_eq!(
            parse_soundcloud_track_path("https://example.com/forss/flickermood"),
            None
        );
        assert_eq!(parse_soundcloud_track_path("not a url"), None);
        assert_eq!(parse_soundcloud_track_path(""), None);
    }
}

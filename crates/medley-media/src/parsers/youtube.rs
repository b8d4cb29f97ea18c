use regex::Regex;

// A video id is exactly 11 characters; anchoring on the length keeps
// trailing query parameters out of the capture.
const VIDEO_PATTERNS: [&str; 4] = [
    r"watch\?v=([A-Za-z0-9_-]{11})",
    r"youtu\.be/([A-Za-z0-9_-]{11})",
    r"embed/([A-Za-z0-9_-]{11})",
    r"/v/([A-Za-z0-9_-]{11})",
];

pub fn parse_youtube_video_id(input: &str) -> Option<String> {
    for pattern in VIDEO_PATTERNS {
        let regex = Regex::new(pattern).ok()?;
        if let Some(captures) = regex.captures(input) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

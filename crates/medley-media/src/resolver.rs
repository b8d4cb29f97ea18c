use medley_core::{MediaType, ResolvedMedia};

use crate::detect::detect_media_type;
use crate::embed::embed_markup;
use crate::parsers::{
    parse_beatport_track_id, parse_soundcloud_track_path, parse_spotify_track_id,
    parse_youtube_video_id,
};

pub fn extract_embed_id(url: &str, media_type: MediaType) -> Option<String> {
    match media_type {
        MediaType::Image => None,
        MediaType::Spotify => parse_spotify_track_id(url),
        MediaType::Youtube => parse_youtube_video_id(url),
        MediaType::Soundcloud => parse_soundcloud_track_path(url),
        MediaType::Beatport => parse_beatport_track_id(url),
    }
}

pub fn resolve(url: &str) -> ResolvedMedia {
    let media_type = detect_media_type(url);
    let embed_id = media_type.and_then(|kind| extract_embed_id(url, kind));
    let embed_html = media_type
        .map(|kind| embed_markup(url, kind))
        .filter(|html| !html.is_empty());

    ResolvedMedia {
        source_url: url.to_string(),
        media_type,
        embed_id,
        embed_html,
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_embed_id, resolve};
    use crate::validate::validate_media_url;
    use medley_core::MediaType;

    #[test]
    fn resolves_a_spotify_url_end_to_end() {
        let url = "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh";
        let resolved = resolve(url);
        assert_eq!(resolved.media_type, Some(MediaType::Spotify));
        assert_eq!(
            resolved.embed_id.as_deref(),
            Some("4iV5W9uYEdYUVa79Axb7Rh")
        );
        let html = resolved.embed_html.unwrap();
        assert!(html.contains("4iV5W9uYEdYUVa79Axb7Rh"));
    }

    // For every provider: detect, then validate against the detected type,
    // then confirm the markup carries the extracted identifier.
    #[test]
    fn detect_validate_embed_round_trip() {
        let urls = [
            "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://soundcloud.com/forss/flickermood",
            "https://www.beatport.com/track/some-song-name/12345678",
        ];
        for url in urls {
            let resolved = resolve(url);
            let media_type = resolved.media_type.expect("provider url must classify");
            assert!(validate_media_url(url, media_type).is_valid, "{url}");
            let id = extract_embed_id(url, media_type).expect("id must extract");
            let html = resolved.embed_html.expect("markup must render");
            assert!(html.contains(&id), "{url}");
        }
    }

    #[test]
    fn image_urls_resolve_without_markup() {
        let resolved = resolve("https://example.com/cover.jpg");
        assert_eq!(resolved.media_type, Some(MediaType::Image));
        assert_eq!(resolved.embed_id, None);
        assert_eq!(resolved.embed_html, None);
    }

    #[test]
    fn unknown_urls_resolve_to_nothing() {
        let resolved = resolve("not a url at all");
        assert_eq!(resolved.media_type, None);
        assert_eq!(resolved.embed_id, None);
        assert_eq!(resolved.embed_html, None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let url = "https://soundcloud.com/forss/flickermood";
        let first = extract_embed_id(url, MediaType::Soundcloud);
        let second = extract_embed_id(url, MediaType::Soundcloud);
        assert_eq!(first, second);
    }
}

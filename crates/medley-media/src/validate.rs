use medley_core::{MediaType, Validation};
use url::Url;

use crate::parsers::{
    parse_beatport_track_id, parse_soundcloud_track_path, parse_spotify_track_id,
    parse_youtube_video_id,
};

pub fn validate_media_url(url: &str, media_type: MediaType) -> Validation {
    if url.trim().is_empty() {
        return Validation::invalid("URL is required");
    }
    if Url::parse(url).is_err() {
        return Validation::invalid("Invalid URL format");
    }

    let extracted = match media_type {
        // Any well-formed URL is accepted as an image source.
        MediaType::Image => return Validation::valid(),
        MediaType::Spotify => parse_spotify_track_id(url),
        MediaType::Youtube => parse_youtube_video_id(url),
        MediaType::Soundcloud => parse_soundcloud_track_path(url),
        MediaType::Beatport => parse_beatport_track_id(url),
    };

    match extracted {
        Some(_) => Validation::valid(),
        None => Validation::invalid(expected_format(media_type)),
    }
}

fn expected_format(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Image => "Invalid image URL",
        MediaType::Spotify => {
            "Invalid Spotify URL. Please use a track URL like https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh"
        }
        MediaType::Youtube => {
            "Invalid YouTube URL. Please use a video URL like https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        }
        MediaType::Soundcloud => {
            "Invalid SoundCloud URL. Please use a track URL like https://soundcloud.com/artist/track-name"
        }
        MediaType::Beatport => {
            "Invalid Beatport URL. Please use a track URL like https://www.beatport.com/track/track-name/12345678"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validate_media_url;
    use medley_core::MediaType;

    #[test]
    fn empty_input_is_required() {
        let result = validate_media_url("", MediaType::Spotify);
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("URL is required"));

        let result = validate_media_url("   ", MediaType::Youtube);
        assert_eq!(result.error.as_deref(), Some("URL is required"));
    }

    #[test]
    fn malformed_input_is_invalid_format() {
        let result = validate_media_url("not a url", MediaType::Spotify);
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Invalid URL format"));
    }

    #[test]
    fn valid_spotify_track_url_passes() {
        let result = validate_media_url(
            "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh",
            MediaType::Spotify,
        );
        assert!(result.is_valid);
        assert!(result.error.is_none());
    }

    #[test]
    fn wrong_provider_shape_names_the_expected_format() {
        let result = validate_media_url(
            "https://open.spotify.com/album/4iV5W9uYEdYUVa79Axb7Rh",
            MediaType::Spotify,
        );
        assert!(!result.is_valid);
        let message = result.error.unwrap();
        assert!(message.contains("Spotify"));
        assert!(message.contains("https://open.spotify.com/track/"));
    }

    #[test]
    fn each_provider_validates_its_own_shape() {
        assert!(
            validate_media_url("https://youtu.be/dQw4w9WgXcQ", MediaType::Youtube).is_valid
        );
        assert!(
            validate_media_url(
                "https://soundcloud.com/forss/flickermood",
                MediaType::Soundcloud
            )
            .is_valid
        );
        assert!(
            validate_media_url(
                "https://www.beatport.com/track/some-song/12345678",
                MediaType::Beatport
            )
            .is_valid
        );
        assert!(!validate_media_url("https://youtu.be/short", MediaType::Youtube).is_valid);
    }

    #[test]
    fn image_only_needs_a_well_formed_url() {
        assert!(validate_media_url("https://example.com/whatever", MediaType::Image).is_valid);
        assert!(!validate_media_url("nope", MediaType::Image).is_valid);
    }
}

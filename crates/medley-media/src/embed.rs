use medley_core::MediaType;

use crate::parsers::{
    parse_beatport_track_id, parse_soundcloud_track_path, parse_spotify_track_id,
    parse_youtube_video_id,
};

pub fn embed_markup(url: &str, media_type: MediaType) -> String {
    match media_type {
        MediaType::Spotify => parse_spotify_track_id(url)
            .map(|id| spotify_frame(&id))
            .unwrap_or_default(),
        MediaType::Youtube => parse_youtube_video_id(url)
            .map(|id| youtube_frame(&id))
            .unwrap_or_default(),
        MediaType::Soundcloud => parse_soundcloud_track_path(url)
            .map(|path| soundcloud_frame(&path))
            .unwrap_or_default(),
        MediaType::Beatport => parse_beatport_track_id(url)
            .map(|id| beatport_frame(&id))
            .unwrap_or_default(),
        // Images are rendered by the caller as a plain <img> tag.
        MediaType::Image => String::new(),
    }
}

fn spotify_frame(id: &str) -> String {
    format!(
        r#"<iframe src="https://open.spotify.com/embed/track/{id}" width="100%" height="152" frameborder="0" loading="lazy" allow="autoplay; clipboard-write; fullscreen; picture-in-picture"></iframe>"#
    )
}

fn youtube_frame(id: &str) -> String {
    format!(
        r#"<iframe src="https://www.youtube.com/embed/{id}" width="100%" height="315" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#
    )
}

fn soundcloud_frame(path: &str) -> String {
    format!(
        r#"<iframe src="https://w.soundcloud.com/player/?url=https://{path}&color=%23ff5500&auto_play=false&show_comments=true&show_artwork=true&show_playcount=true&show_user=true&show_reposts=false&download=false&sharing=false&buying=false&liking=false" width="100%" height="166" scrolling="no" frameborder="no" allow="autoplay"></iframe>"#
    )
}

fn beatport_frame(id: &str) -> String {
    format!(
        r#"<iframe src="https://embed.beatport.com/track/{id}?show_artwork=true&show_playcount=true&show_user=true&autoplay=false" width="100%" height="96" frameborder="0"></iframe>"#
    )
}

mod beatport;
mod soundcloud;
mod spotify;
mod youtube;

pub use beatport::parse_beatport_track_id;
pub use soundcloud::parse_soundcloud_track_path;
pub use spotify::parse_spotify_track_id;
pub use youtube::parse_youtube_video_id;

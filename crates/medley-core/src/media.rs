use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Spotify,
    Youtube,
    Soundcloud,
    Beatport,
}

impl MediaType {
    pub fn all() -> [MediaType; 5] {
        [
            MediaType::Image,
            MediaType::Spotify,
            MediaType::Youtube,
            MediaType::Soundcloud,
            MediaType::Beatport,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Spotify => "spotify",
            MediaType::Youtube => "youtube",
            MediaType::Soundcloud => "soundcloud",
            MediaType::Beatport => "beatport",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MediaType::Image => "Image",
            MediaType::Spotify => "Spotify",
            MediaType::Youtube => "YouTube",
            MediaType::Soundcloud => "SoundCloud",
            MediaType::Beatport => "Beatport",
        }
    }

    pub fn from_input(input: &str) -> Option<MediaType> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "image" | "img" => Some(MediaType::Image),
            "spotify" => Some(MediaType::Spotify),
            "youtube" | "yt" => Some(MediaType::Youtube),
            "soundcloud" | "sc" => Some(MediaType::Soundcloud),
            "beatport" => Some(MediaType::Beatport),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validation {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedMedia {
    pub source_url: String,
    pub media_type: Option<MediaType>,
    pub embed_id: Option<String>,
    pub embed_html: Option<String>,
}

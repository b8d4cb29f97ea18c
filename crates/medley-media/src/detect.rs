use medley_core::MediaType;

const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

// Provider checks run before the image fallback: a provider URL could
// coincidentally contain an image-like substring.
pub fn detect_media_type(url: &str) -> Option<MediaType> {
    let lower = url.to_lowercase();
    if lower.contains("spotify.com") {
        return Some(MediaType::Spotify);
    }
    if lower.contains("youtube.com") || lower.contains("youtu.be") {
        return Some(MediaType::Youtube);
    }
    if lower.contains("soundcloud.com") {
        return Some(MediaType::Soundcloud);
    }
    if lower.contains("beatport.com") {
        return Some(MediaType::Beatport);
    }
    if lower.starts_with("data:image") || IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext)) {
        return Some(MediaType::Image);
    }
    None
}

mod detect;
mod embed;
pub mod parsers;
mod resolver;
mod validate;

pub use detect::detect_media_type;
pub use embed::embed_markup;
pub use resolver::{extract_embed_id, resolve};
pub use validate::validate_media_url;

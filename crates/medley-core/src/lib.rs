mod error;
mod media;

pub use error::{MedleyError, MedleyResult};
pub use media::{MediaType, ResolvedMedia, Validation};

pub fn validate_url(url: &str) -> MedleyResult<()> {
    url::Url::parse(url).map_err(|err| MedleyError::InvalidInput(format!("invalid url: {err}")))?;
    Ok(())
}

use medley_core::{MediaType, MedleyError, MedleyResult, validate_url};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct CmsClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl CmsClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent("medley/0.1")
            .build()
            .expect("failed to build http client");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub async fn fetch_articles(&self, page: u32, per_page: u32) -> MedleyResult<ArticlePage> {
        let endpoint = format!("{}/articles", self.base_url);
        validate_url(&endpoint)?;

        let mut request = self
            .client
            .get(&endpoint)
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())])
            .header("Accept", "application/json");
        if let Some(token) = &self.token
            && !token.trim().is_empty()
        {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| MedleyError::Network(format!("articles request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MedleyError::Api(format!(
                "articles error: status={status} body={body}"
            )));
        }

        response
            .json::<ArticlePage>()
            .await
            .map_err(|err| MedleyError::Parse(format!("articles response parse failed: {err}")))
    }

    pub async fn fetch_article(&self, id: u64) -> MedleyResult<Article> {
        let endpoint = format!("{}/articles/{id}", self.base_url);
        validate_url(&endpoint)?;

        let mut request = self.client.get(&endpoint).header("Accept", "application/json");
        if let Some(token) = &self.token
            && !token.trim().is_empty()
        {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| MedleyError::Network(format!("article request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MedleyError::Api(format!(
                "article error: status={status} body={body}"
            )));
        }

        response
            .json::<Article>()
            .await
            .map_err(|err| MedleyError::Parse(format!("article response parse failed: {err}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticlePage {
    pub data: Vec<Article>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub embedded_media: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
    pub published_at: Option<String>,
}

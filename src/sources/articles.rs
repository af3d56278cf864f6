//! Article index source

use super::traits::*;
use crate::network::HttpClient;
use async_trait::async_trait;

/// Article index backed by `GET {base}/articles`
pub struct BackendArticles {
    client: HttpClient,
    base_url: String,
}

impl BackendArticles {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn request(&self, term: &str) -> SourceRequest {
        SourceRequest::get(format!("{}/articles", self.base_url)).param("search", term)
    }

    fn response(&self, response: SourceResponse) -> Result<Vec<Article>, SourceError> {
        if !response.is_success() {
            return Err(SourceError::Http(response.status));
        }
        response.json()
    }
}

#[async_trait]
impl ArticleLookup for BackendArticles {
    async fn search(&self, term: &str) -> Result<Vec<Article>, SourceError> {
        let response = self.client.execute(self.request(term)).await?;
        self.response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_shape() {
        let source = BackendArticles::new(HttpClient::new().unwrap(), "http://backend");
        let request = source.request("gizi");
        assert_eq!(request.url, "http://backend/articles");
        assert_eq!(request.params.get("search").unwrap(), "gizi");
    }

    #[tokio::test]
    async fn test_search_against_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(query_param("search", "gizi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "a1", "title": "Gizi Seimbang", "slug": "gizi-seimbang",
                 "categories": [{"name": "Gizi"}]}
            ])))
            .mount(&server)
            .await;

        let source = BackendArticles::new(HttpClient::new().unwrap(), server.uri());
        let articles = source.search("gizi").await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].categories[0].name, "Gizi");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = BackendArticles::new(HttpClient::new().unwrap(), server.uri());
        let err = source.search("gizi").await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}

//! Doctor directory source

use super::traits::*;
use crate::network::HttpClient;
use async_trait::async_trait;

/// Doctor directory backed by `GET {base}/doctors`
pub struct BackendDoctors {
    client: HttpClient,
    base_url: String,
}

impl BackendDoctors {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn request(&self, term: &str, limit: u32) -> SourceRequest {
        SourceRequest::get(format!("{}/doctors", self.base_url))
            .param("search", term)
            .param("limit", limit.to_string())
    }

    fn response(&self, response: SourceResponse) -> Result<Vec<Doctor>, SourceError> {
        if !response.is_success() {
            return Err(SourceError::Http(response.status));
        }
        response.json()
    }
}

#[async_trait]
impl DoctorLookup for BackendDoctors {
    async fn search(&self, term: &str, limit: u32) -> Result<Vec<Doctor>, SourceError> {
        let response = self.client.execute(self.request(term, limit)).await?;
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
        let source = BackendDoctors::new(HttpClient::new().unwrap(), "http://backend");
        let request = source.request("budi", 5);
        assert_eq!(request.url, "http://backend/doctors");
        assert_eq!(request.params.get("search").unwrap(), "budi");
        assert_eq!(request.params.get("limit").unwrap(), "5");
    }

    #[test]
    fn test_http_error_maps() {
        let source = BackendDoctors::new(HttpClient::new().unwrap(), "http://backend");
        let response = SourceResponse {
            status: 503,
            text: String::new(),
        };
        assert_eq!(source.response(response).unwrap_err(), SourceError::Http(503));
    }

    #[tokio::test]
    async fn test_search_against_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doctors"))
            .and(query_param("search", "budi"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "d1", "name": "Dr. Budi", "specialization": "Jantung", "slug": "dr-budi"}
            ])))
            .mount(&server)
            .await;

        let source = BackendDoctors::new(HttpClient::new().unwrap(), server.uri());
        let doctors = source.search("budi", 5).await.unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].name, "Dr. Budi");
        assert_eq!(doctors[0].slug.as_deref(), Some("dr-budi"));
    }
}

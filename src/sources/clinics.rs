//! Active clinic directory source

use super::traits::*;
use crate::network::HttpClient;
use async_trait::async_trait;

/// Active clinic directory backed by `GET {base}/doctors/active-poli`.
/// The endpoint has no server-side term filter; callers filter the
/// returned set locally.
pub struct BackendClinics {
    client: HttpClient,
    base_url: String,
}

impl BackendClinics {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn request(&self) -> SourceRequest {
        SourceRequest::get(format!("{}/doctors/active-poli", self.base_url))
    }

    fn response(&self, response: SourceResponse) -> Result<Vec<Clinic>, SourceError> {
        if !response.is_success() {
            return Err(SourceError::Http(response.status));
        }
        response.json()
    }
}

#[async_trait]
impl ClinicLookup for BackendClinics {
    async fn list_active(&self) -> Result<Vec<Clinic>, SourceError> {
        let response = self.client.execute(self.request()).await?;
        self.response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_shape() {
        let source = BackendClinics::new(HttpClient::new().unwrap(), "http://backend");
        let request = source.request();
        assert_eq!(request.url, "http://backend/doctors/active-poli");
        assert!(request.params.is_empty());
    }

    #[tokio::test]
    async fn test_list_active_against_backend() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doctors/active-poli"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"kd_poli": "01", "nm_poli": "Poli Umum"},
                {"kd_poli": "02", "nm_poli": "Poli Jantung"}
            ])))
            .mount(&server)
            .await;

        let source = BackendClinics::new(HttpClient::new().unwrap(), server.uri());
        let clinics = source.list_active().await.unwrap();
        assert_eq!(clinics.len(), 2);
        assert_eq!(clinics[1].code, "02");
        assert_eq!(clinics[1].name, "Poli Jantung");
    }

    #[tokio::test]
    async fn test_server_error_maps() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doctors/active-poli"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = BackendClinics::new(HttpClient::new().unwrap(), server.uri());
        assert_eq!(
            source.list_active().await.unwrap_err(),
            SourceError::Http(500)
        );
    }
}

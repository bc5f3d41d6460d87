//! API client for the employee REST backend

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{DeleteResponse, Employee};

/// The five employee operations the UI depends on.
///
/// Calls block, so the UI runs them on the background executor.
pub trait EmployeeService: Send + Sync {
    fn list_all(&self) -> Result<Vec<Employee>, ApiError>;
    fn get_by_id(&self, id: i64) -> Result<Employee, ApiError>;
    fn create(&self, draft: &Employee) -> Result<Employee, ApiError>;
    fn update(&self, id: i64, employee: &Employee) -> Result<Employee, ApiError>;
    /// Returns whether the backend actually removed a record
    fn delete(&self, id: i64) -> Result<bool, ApiError>;
}

/// Blocking HTTP client for `/employees`
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder, method: &str, path: &str) -> Result<Response, ApiError> {
        tracing::debug!(method, path, "sending request");

        let response = request.send().map_err(|e| {
            tracing::warn!(method, path, error = %e, "request failed");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().unwrap_or_default().trim().to_string();
        tracing::warn!(method, path, status = status.as_u16(), "backend returned error status");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl EmployeeService for ApiClient {
    fn list_all(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.send(self.http.get(self.url("/employees")), "GET", "/employees")?;
        let employees: Vec<Employee> = Self::decode(response)?;
        tracing::debug!(count = employees.len(), "fetched employees");
        Ok(employees)
    }

    fn get_by_id(&self, id: i64) -> Result<Employee, ApiError> {
        let path = format!("/employees/{}", id);
        match self.send(self.http.get(self.url(&path)), "GET", &path) {
            Ok(response) => Self::decode(response),
            Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ApiError::NotFound { id })
            }
            Err(e) => Err(e),
        }
    }

    fn create(&self, draft: &Employee) -> Result<Employee, ApiError> {
        let request = self.http.post(self.url("/employees")).json(draft);
        let created: Employee = Self::decode(self.send(request, "POST", "/employees")?)?;
        tracing::info!(id = ?created.id, "employee created");
        Ok(created)
    }

    fn update(&self, id: i64, employee: &Employee) -> Result<Employee, ApiError> {
        let path = format!("/employees/{}", id);
        let request = self.http.put(self.url(&path)).json(employee);
        let updated = Self::decode(self.send(request, "PUT", &path)?)?;
        tracing::info!(id, "employee updated");
        Ok(updated)
    }

    fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let path = format!("/employees/{}", id);
        let response = self.send(self.http.delete(self.url(&path)), "DELETE", &path)?;
        let DeleteResponse { deleted } = Self::decode(response)?;
        tracing::info!(id, deleted, "delete request finished");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// The blocking client must not run on an async worker thread.
    async fn call<T, F>(server: &MockServer, f: F) -> T
    where
        T: Send + 'static,
        F: FnOnce(ApiClient) -> T + Send + 'static,
    {
        let base = server.uri();
        tokio::task::spawn_blocking(move || f(ApiClient::new(base)))
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_all_keeps_backend_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "firstName": "Zed", "lastName": "Ames", "emailId": "zed@x.com"},
                {"id": 1, "firstName": "Ann", "lastName": "Lee", "emailId": "ann@x.com"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let employees = call(&server, |client| client.list_all()).await.unwrap();
        let ids: Vec<_> = employees.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![Some(2), Some(1)]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_by_id_maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees/42"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = call(&server, |client| client.get_by_id(42)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { id: 42 }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_posts_draft_without_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/employees"))
            .and(body_json(json!({
                "firstName": "Ann",
                "lastName": "Lee",
                "emailId": "ann@x.com"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 9, "firstName": "Ann", "lastName": "Lee", "emailId": "ann@x.com"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = call(&server, |client| {
            client.create(&Employee::draft("Ann", "Lee", "ann@x.com"))
        })
        .await
        .unwrap();
        assert_eq!(created.id, Some(9));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_puts_to_record_path() {
        let server = MockServer::start().await;
        let body = json!({"id": 3, "firstName": "Ann", "lastName": "Park", "emailId": "ann@x.com"});
        Mock::given(method("PUT"))
            .and(path("/employees/3"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let updated = call(&server, |client| {
            client.update(3, &Employee::draft("Ann", "Park", "ann@x.com").with_id(3))
        })
        .await
        .unwrap();
        assert_eq!(updated.last_name, "Park");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_returns_backend_flag() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/employees/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": false})))
            .mount(&server)
            .await;

        let deleted = call(&server, |client| client.delete(5)).await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn server_error_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
            .mount(&server)
            .await;

        let err = call(&server, |client| client.list_all()).await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 500: database down");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = call(&server, |client| client.list_all()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn unreachable_backend_is_a_network_error() {
        // Port 9 (discard) is closed on test hosts
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.list_all().unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}

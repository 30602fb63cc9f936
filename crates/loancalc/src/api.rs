use gloo_net::http::Response;
use std::collections::HashMap;

use crate::data::ErrorBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

fn describe(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no details")
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {}", describe(.0))]
    NotFound(Option<String>),
    #[error("Bad Request: {}", describe(.0))]
    BadRequest(Option<String>),
    #[error("Internal Server Error: {}", describe(.0))]
    InternalServerError(Option<String>),
    #[error("Unauthorized Access")]
    UnauthorizedAccess,
    #[error("Forbidden Access: {}", describe(.0))]
    ForbiddenAccess(Option<String>),
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
    #[error("Unexpected response status code {status}: {}", describe(.message))]
    UnexpectedStatusCode { status: u16, message: Option<String> },
}

impl ApiError {
    /// Builds the error for a non-2xx status, or `None` for a success status.
    pub fn from_status(status: u16, message: Option<String>) -> Option<Self> {
        let error = match status {
            200..=299 => return None,
            400 => ApiError::BadRequest(message),
            401 => ApiError::UnauthorizedAccess,
            403 => ApiError::ForbiddenAccess(message),
            404 => ApiError::NotFound(message),
            500..=599 => ApiError::InternalServerError(message),
            status => ApiError::UnexpectedStatusCode { status, message },
        };
        Some(error)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::UnauthorizedAccess)
    }

    /// The human-readable `message` the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::NotFound(message)
            | ApiError::BadRequest(message)
            | ApiError::InternalServerError(message)
            | ApiError::ForbiddenAccess(message)
            | ApiError::UnexpectedStatusCode { message, .. } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Default)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

async fn handle_response_status(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    // The body is best-effort; a missing or non-JSON body just means no message
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);

    match ApiError::from_status(status, message) {
        Some(error) => Err(error),
        None => Ok(response),
    }
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

async fn handle_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response).await?;
    parse_json_response(validated_response).await
}

#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response>;

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;

    /// DELETE where only the status matters; any response body is discarded.
    async fn delete(&self, endpoint: &str) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::new(),
        }
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key, value);
    }

    /// A copy of this client that sends `Authorization: Bearer <token>`.
    pub fn authorized(&self, token: &str) -> Self {
        let mut client = self.clone();
        client.set_header("Authorization", format!("Bearer {token}"));
        client
    }

    pub fn headers(&self) -> &ApiHeaders {
        &self.headers
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.root_url, endpoint)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn make_request(&self, method: HttpMethod, endpoint: &str) -> ApiResult<Response> {
        let url = self.url(endpoint);

        let request = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
        };

        request
            .headers(self.headers.clone().into())
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn make_request_with_body<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize,
    {
        let url = self.url(endpoint);

        let request = match method {
            HttpMethod::Post => gloo_net::http::Request::post(&url),
            HttpMethod::Delete => gloo_net::http::Request::delete(&url),
            HttpMethod::Get => {
                return Err(ApiError::UnexpectedStatusCode {
                    status: 405,
                    message: Some("GET requests cannot carry a body".to_string()),
                });
            }
        };

        // `json` also sets `Content-Type: application/json`
        request
            .headers(self.headers.clone().into())
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.make_request(HttpMethod::Get, endpoint).await?;
        handle_json_response(response).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request_with_body(HttpMethod::Post, endpoint, body)
            .await?;
        handle_json_response(response).await
    }

    async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        let response = self.make_request(HttpMethod::Delete, endpoint).await?;
        handle_response_status(response).await.map(|_| ())
    }
}

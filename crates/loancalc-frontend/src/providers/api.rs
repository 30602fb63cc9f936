use loancalc::api::{ApiClient, ApiResult, HttpApiClient};
use loancalc::data::{JoinRoom, Room, RoomJoined};
use loancalc::id::RoomId;
use loancalc::panel::RoomsApi;

/// Base URL used when `LOANCALC_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `LOANCALC_API_URL` as baked in by the compiler.
    pub fn from_build_env() -> Self {
        Self::with_override(option_env!("LOANCALC_API_URL"))
    }

    fn with_override(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// The rooms API of the loancalc backend.
pub struct Api {
    client: HttpApiClient,
}

impl Api {
    pub fn new(config: &ApiConfig) -> Self {
        Api {
            client: HttpApiClient::new(&config.base_url),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl RoomsApi for Api {
    async fn list_rooms(&self, token: &str) -> ApiResult<Vec<Room>> {
        self.client.authorized(token).get("/user/rooms").await
    }

    async fn join_room(&self, token: &str, request: &JoinRoom) -> ApiResult<RoomJoined> {
        self.client.authorized(token).post("/rooms", request).await
    }

    async fn leave_room(&self, token: &str, room_id: RoomId) -> ApiResult<()> {
        self.client
            .authorized(token)
            .delete(&format!("/rooms/{room_id}/members"))
            .await
    }
}

/// Create the API client for the configured base URL.
pub fn create() -> Api {
    Api::new(&ApiConfig::from_build_env())
}

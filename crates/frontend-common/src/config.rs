//! Frontend configuration

/// Session bootstrap configuration
pub struct SessionConfig;

impl SessionConfig {
    /// Session refresh interval in milliseconds
    pub const REFRESH_INTERVAL_MS: u32 = 900_000; // 15 minutes

    /// localStorage key mirroring the signed-in user
    pub const USER_STORAGE_KEY: &'static str = "user";

    /// Cookie-authenticated profile endpoint
    pub const PROFILE_ENDPOINT: &'static str = "/oauth/v1/profile";

    /// Session refresh endpoint
    pub const REFRESH_ENDPOINT: &'static str = "/oauth/v1/refresh";

    /// Supply list API root
    pub const SUPPLY_LIST_ENDPOINT: &'static str = "/api/v1/supplylist";
}

/// How a completed call to the refresh endpoint is interpreted.
///
/// The backend contract here is unconfirmed: the original client funneled
/// every refresh response, 2xx included, into its error path. Until the
/// intended behavior is pinned down both readings stay available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// A 2xx refresh response is a no-op; only error statuses are recorded.
    #[default]
    IgnoreSuccess,
    /// Every completed refresh response is recorded as a session error.
    ErrorOnAnyResponse,
}

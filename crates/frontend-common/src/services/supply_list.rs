//! Supply list API service

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

/// A single supply entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplyItem {
    pub id: i64,
    pub supply: String,
    pub desc: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// A school supply list as served by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplyList {
    pub list_id: i64,
    pub grade: i64,
    pub school_id: i64,
    pub list_name: String,
    #[serde(default)]
    pub basic_supplies: Vec<SupplyItem>,
    #[serde(default)]
    pub categorized_supplies: HashMap<String, Vec<SupplyItem>>,
    pub published: bool,
}

/// Fetch a supply list by id.
///
/// Errors are view-local strings; a failed list fetch never touches the
/// session.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_supply_list(id: &str) -> Result<SupplyList, String> {
    let url = format!("{}/{id}", SessionConfig::SUPPLY_LIST_ENDPOINT);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    if !resp.ok() {
        return Err(format!("supply list request failed: {}", resp.status()));
    }
    resp.json().await.map_err(|err| err.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_supply_list(id: &str) -> Result<SupplyList, String> {
    let _ = id;
    Err("supply list API is only reachable in the browser".to_owned())
}

//! REST calls against the CodeBros backend.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::stores::users::User;

const API_BASE: &str = "/api";

/// Fetch a single user record from the backend.
///
/// A 404 means the id does not belong to any member; the profile page turns
/// that into its not-found card.
pub async fn fetch_user(id: i64) -> Result<User, String> {
    let url = format!("{}/users/{}", API_BASE, id);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Failed to cast to Response")?;

    if resp.status() == 404 {
        return Err(format!("User {} not found", id));
    }

    if !resp.ok() {
        return Err(format!("API returned status: {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("Failed to get JSON: {:?}", e))?)
        .await
        .map_err(|e| format!("Failed to parse JSON: {:?}", e))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("Failed to deserialize user: {:?}", e))
}

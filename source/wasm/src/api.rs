use {
    crate::js::Env,
    gloo::utils::window,
    serde::de::DeserializeOwned,
    shared::interface::wire::{
        c2s::{
            ApiRejection,
            SignupOk,
        },
        url::signup_url,
    },
    thiserror::Error,
    wasm_bindgen::JsCast,
    wasm_bindgen_futures::JsFuture,
    web_sys::{
        Request,
        RequestCache,
        RequestInit,
        Response,
    },
};

/// The two terminal failure classes of a backend call: the transport threw or
/// the body was undecodable, vs the server answered with a rejection status.
#[derive(Error, Debug)]
pub enum ReqError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },
}

async fn run_fetch(method: &str, url: &str) -> Result<(u16, String), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_cache(RequestCache::NoStore);
    let req =
        Request::new_with_str_and_init(
            url,
            &opts,
        ).map_err(|e| format!("Error building {} request for [{}]: {:?}", method, url, e.as_string()))?;
    let resp =
        JsFuture::from(window().fetch_with_request(&req))
            .await
            .map_err(|e| format!("Error sending {} request to [{}]: {:?}", method, url, e.as_string()))?;
    let resp =
        resp
            .dyn_into::<Response>()
            .map_err(|_| format!("Fetch result for [{}] is not a response object", url))?;
    let status = resp.status();
    let body =
        JsFuture::from(resp.text().map_err(|e| format!("Error reading response body: {:?}", e.as_string()))?)
            .await
            .map_err(|e| format!("Error reading response body: {:?}", e.as_string()))?;
    let body = body.as_string().ok_or_else(|| format!("Response body for [{}] is not text", url))?;
    return Ok((status, body));
}

pub async fn req_get_json<T: DeserializeOwned>(env: &Env, path: &str) -> Result<T, String> {
    let url = format!("{}{}", env.base_url, path);
    let (status, body) = run_fetch("GET", &url).await?;
    if status / 100 != 2 {
        return Err(format!("GET [{}] returned status {}", url, status));
    }
    return serde_json::from_str(&body).map_err(|e| format!("Error parsing response from [{}]: {}", url, e));
}

async fn req_mutate(method: &str, env: &Env, activity: &str, email: &str) -> Result<SignupOk, ReqError> {
    let url = format!("{}{}", env.base_url, signup_url(activity, email));
    let (status, body) = run_fetch(method, &url).await.map_err(ReqError::Transport)?;
    if status / 100 != 2 {
        // Rejection bodies are best effort; a malformed one just loses the detail.
        let detail = serde_json::from_str::<ApiRejection>(&body).ok().and_then(|r| r.detail);
        return Err(ReqError::Rejected {
            status: status,
            detail: detail,
        });
    }
    return serde_json::from_str(
        &body,
    ).map_err(|e| ReqError::Transport(format!("Error parsing response from [{}]: {}", url, e)));
}

pub async fn req_signup(env: &Env, activity: &str, email: &str) -> Result<SignupOk, ReqError> {
    return req_mutate("POST", env, activity, email).await;
}

pub async fn req_unregister(env: &Env, activity: &str, email: &str) -> Result<SignupOk, ReqError> {
    return req_mutate("DELETE", env, activity, email).await;
}

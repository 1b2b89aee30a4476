//! Session middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::SET_COOKIE, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{debug, warn};

use common::{AppError, SessionConfig};
use domain::SessionData;

use super::handle::{CookieChange, Session};
use crate::state::AppState;

/// Load the session named by the request cookie and expose it to handlers.
///
/// After the handler runs, a newly saved session gets its cookie and a
/// destroyed one gets a removal cookie.
pub async fn with_session(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let config = &state.config.session;

    let cookie_id = CookieJar::from_headers(request.headers())
        .get(&config.cookie_name)
        .map(|cookie| cookie.value().to_string());

    let loaded = match &cookie_id {
        Some(id) => state.session_store.load(id).await?,
        None => None,
    };

    // Unknown or expired ids are never reused
    let session = match loaded {
        Some(data) => Session::new(
            cookie_id,
            data,
            state.session_store.clone(),
            config.ttl_seconds,
        ),
        None => {
            if cookie_id.is_some() {
                debug!("Session cookie did not match a live session");
            }
            Session::new(
                None,
                SessionData::default(),
                state.session_store.clone(),
                config.ttl_seconds,
            )
        }
    };

    request.extensions_mut().insert(session.clone());
    let mut response = next.run(request).await;

    let cookie = match session.cookie_change().await {
        CookieChange::Issue(id) => Some(session_cookie(config, id)),
        CookieChange::Remove => Some(removal_cookie(config)),
        CookieChange::None => None,
    };

    if let Some(cookie) = cookie {
        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!("Could not encode session cookie: {}", e),
        }
    }

    Ok(response)
}

fn session_cookie(config: &SessionConfig, id: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}

fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((config.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build();
    cookie.make_removal();
    cookie
}

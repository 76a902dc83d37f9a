use axum::Form;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use url::form_urlencoded;

use crate::domain::Language;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub first_name: String,
    pub last_name: String,
    pub language: String,
}

pub async fn root_handler() -> Redirect {
    Redirect::to("/login")
}

/// Maps the language key to its display name and sends the visitor on to the
/// chat page with their identity in the query string.
#[tracing::instrument(skip(form), fields(language = %form.language))]
pub async fn login_handler(Form(form): Form<LoginForm>) -> Response {
    let language = match form.language.parse::<Language>() {
        Ok(language) => language,
        Err(e) => {
            tracing::warn!(error = %e, "Login with unknown language");
            return ApiError::bad_request(e.to_string()).into_response();
        }
    };

    tracing::info!(
        first_name = %form.first_name,
        last_name = %form.last_name,
        language = %language,
        "Visitor logged in"
    );

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("first_name", &form.first_name)
        .append_pair("last_name", &form.last_name)
        .append_pair("language", language.name())
        .finish();

    Redirect::to(&format!("/chat?{query}")).into_response()
}

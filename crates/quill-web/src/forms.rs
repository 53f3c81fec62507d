//! Form and query payloads for the HTML surface.
//!
//! Every field is optional at the wire level; blank-field validation
//! happens in the services so the error messages stay uniform.

use serde::Deserialize;

/// POST /auth/register body.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /auth/login body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /submit body. The author field is deliberately unvalidated.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /view body: how many random posts to show.
#[derive(Debug, Deserialize)]
pub struct ViewForm {
    #[serde(default)]
    pub num: Option<String>,
}

/// Query string for /randomview.
#[derive(Debug, Deserialize)]
pub struct RandomViewParams {
    #[serde(default)]
    pub num_messages: Option<String>,
}

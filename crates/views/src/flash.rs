//! One-shot flash messages carried in a cookie across a redirect

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

/// Name of the cookie carrying the pending flash code
pub const FLASH_COOKIE: &str = "flash";

/// Messages shown once on the next rendered page.
///
/// Only the short code travels in the cookie; the text is looked up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    WeakPassword,
    EmailTaken,
    InvalidSignup,
    Registered,
    InvalidCredentials,
    ProfileUpdated,
    Unexpected,
}

/// Severity used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

const ALL: [Flash; 7] = [
    Flash::WeakPassword,
    Flash::EmailTaken,
    Flash::InvalidSignup,
    Flash::Registered,
    Flash::InvalidCredentials,
    Flash::ProfileUpdated,
    Flash::Unexpected,
];

impl Flash {
    pub fn code(&self) -> &'static str {
        match self {
            Flash::WeakPassword => "weak_password",
            Flash::EmailTaken => "email_taken",
            Flash::InvalidSignup => "invalid_signup",
            Flash::Registered => "registered",
            Flash::InvalidCredentials => "invalid_credentials",
            Flash::ProfileUpdated => "profile_updated",
            Flash::Unexpected => "unexpected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ALL.into_iter().find(|f| f.code() == code)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Flash::WeakPassword => "Password must be 8+ characters with uppercase and digit.",
            Flash::EmailTaken => "Email already registered.",
            Flash::InvalidSignup => "Please provide an email (up to 120 characters) and a password.",
            Flash::Registered => "Registration successful! Please log in.",
            Flash::InvalidCredentials => "Invalid credentials.",
            Flash::ProfileUpdated => "Profile updated.",
            Flash::Unexpected => "Something went wrong. Please try again.",
        }
    }

    pub fn level(&self) -> FlashLevel {
        match self {
            Flash::Registered | Flash::ProfileUpdated => FlashLevel::Success,
            _ => FlashLevel::Error,
        }
    }

    /// Queue this message for the next rendered page
    pub fn set(self, jar: CookieJar) -> CookieJar {
        jar.add(
            Cookie::build((FLASH_COOKIE, self.code()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build(),
        )
    }

    /// Pop the pending message, if any, clearing the cookie
    pub fn take(jar: CookieJar) -> (CookieJar, Option<FlashView>) {
        let flash = jar
            .get(FLASH_COOKIE)
            .and_then(|c| Flash::from_code(c.value()));
        let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
        (jar, flash.map(FlashView::from))
    }
}

/// Template-facing flash message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlashView {
    pub level: &'static str,
    pub message: &'static str,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        Self {
            level: flash.level().as_str(),
            message: flash.message(),
        }
    }
}

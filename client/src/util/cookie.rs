//! Cookie lookup for CSRF-protected requests.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the cookie holding the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Find `name` in a `document.cookie` string and percent-decode its value.
/// Only an exact name match counts.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(urlencoding::decode(value).map_or_else(|_| value.to_owned(), std::borrow::Cow::into_owned))
    })
}

/// The CSRF token from the page cookies, or empty when unset.
#[cfg(feature = "csr")]
pub fn csrf_token() -> String {
    use wasm_bindgen::JsCast;

    let cookies = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default();
    cookie_value(&cookies, CSRF_COOKIE).unwrap_or_default()
}

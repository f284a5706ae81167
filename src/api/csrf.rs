// src/api/csrf.rs
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;
use log::debug;

/// Header the service expects the CSRF token in
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Name of the meta tag the service renders the token into
pub const CSRF_META_NAME: &str = "csrf-token";

#[derive(Error, Debug)]
pub enum CsrfError {
    #[error("Failed to fetch the form page: {0}")]
    PageFetch(#[from] reqwest::Error),

    #[error("No <meta name=\"csrf-token\"> tag found in the form page")]
    MetaTagMissing,

    #[error("The csrf-token meta tag has no content attribute")]
    ContentMissing,

    #[error("CSRF token is not a valid header value")]
    InvalidToken,
}

// Where the CSRF token for a request comes from. The meta tag variant
// re-reads the page on every request; tokens are never cached.
#[derive(Debug, Clone)]
pub enum TokenSource {
    /// Scrape the token from the meta tag of the service's form page
    MetaTag { page_url: String },
    /// Use a token supplied out of band (tests, scripted use)
    Fixed(String),
}

impl TokenSource {
    pub async fn acquire(&self, http: &reqwest::Client) -> Result<String, CsrfError> {
        match self {
            TokenSource::Fixed(token) => Ok(token.clone()),
            TokenSource::MetaTag { page_url } => {
                debug!("Fetching CSRF token from {}", page_url);
                let page = http
                    .get(page_url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                extract_meta_token(&page, CSRF_META_NAME)
            }
        }
    }
}

/// Extract the content attribute of `<meta name="...">` from an HTML page
pub fn extract_meta_token(html: &str, meta_name: &str) -> Result<String, CsrfError> {
    let mut rest = html;

    // Scan meta tags one at a time until one carries the wanted name
    while let Some(start) = rest.find("<meta") {
        let tag_body = &rest[start..];
        let end = match tag_body.find('>') {
            Some(end) => end,
            None => break,
        };
        let tag = &tag_body[..end];

        if attribute_value(tag, "name") == Some(meta_name) {
            return match attribute_value(tag, "content") {
                Some(content) => Ok(content.to_string()),
                None => Err(CsrfError::ContentMissing),
            };
        }

        rest = &tag_body[end..];
    }

    Err(CsrfError::MetaTagMissing)
}

// Pull attr="value" (or attr='value') out of a single tag
fn attribute_value<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    for quote in ['"', '\''] {
        let needle = format!("{}={}", attr, quote);
        if let Some(start) = tag.find(&needle) {
            let value_text = &tag[start + needle.len()..];
            if let Some(end) = value_text.find(quote) {
                return Some(&value_text[..end]);
            }
        }
    }
    None
}

/// Force the CSRF header into an outgoing header map. Pre-existing headers
/// are kept; a stale token under the same name is overwritten.
pub fn apply_csrf_header(headers: &mut HeaderMap, token: &str) -> Result<(), CsrfError> {
    let name = HeaderName::from_static("x-csrftoken");
    let value = HeaderValue::from_str(token).map_err(|_| CsrfError::InvalidToken)?;
    headers.insert(name, value);
    Ok(())
}

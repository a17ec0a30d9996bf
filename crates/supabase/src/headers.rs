//! HTTP headers for the Supabase REST API

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};

use crate::errors::SupabaseError;

const DEFAULT_USER_AGENT: &str = concat!("denarii-gallery/", env!("CARGO_PKG_VERSION"));

/// Header carrying the project's anon key
pub const API_KEY_HEADER: &str = "apikey";

/// Create headers for PostgREST requests authenticated with the anon key
pub fn supabase_headers(anon_key: &str) -> Result<HeaderMap, SupabaseError> {
    let invalid_key = |_| SupabaseError::Config("anon key is not a valid header value".into());

    let mut api_key = HeaderValue::from_str(anon_key).map_err(invalid_key)?;
    api_key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", anon_key)).map_err(invalid_key)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_headers_has_required_fields() {
        let headers = supabase_headers("anon-key").unwrap();
        let api_key = headers.get(API_KEY_HEADER).unwrap().to_str().unwrap();
        let bearer = headers.get(AUTHORIZATION).unwrap().to_str().unwrap();
        assert_eq!(api_key, "anon-key");
        assert_eq!(bearer, "Bearer anon-key");
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key(USER_AGENT));
    }

    #[test]
    fn test_supabase_headers_rejects_invalid_key() {
        assert!(matches!(
            supabase_headers("bad\nkey"),
            Err(SupabaseError::Config(_))
        ));
    }
}

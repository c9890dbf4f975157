//! Fetched feed bodies.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// A fetched body with the status it came back with.
///
/// Local files always report status 200.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Wrap the contents of a local file.
    pub fn from_file(body: Vec<u8>) -> Self {
        Self::new(200, body)
    }

    /// Buffer a `reqwest` response.
    pub async fn from_http(response: reqwest::Response) -> Result<Self, FetchError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, body))
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_response_is_success() {
        assert!(Response::new(200, vec![]).is_success());
        assert!(Response::new(204, vec![]).is_success());
        assert!(!Response::new(304, vec![]).is_success());
        assert!(!Response::new(404, vec![]).is_success());
        assert!(Response::from_file(vec![]).is_success());
    }

    #[test]
    fn test_response_json() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Rule {
            base: f64,
        }

        let resp = Response::from_file(br#"{"base": 10}"#.to_vec());
        assert_eq!(resp.json::<Rule>().unwrap(), Rule { base: 10.0 });
    }

    #[test]
    fn test_response_json_invalid() {
        let resp = Response::from_file(b"<html>".to_vec());
        assert!(matches!(
            resp.json::<serde_json::Value>(),
            Err(FetchError::ParseError(_))
        ));
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        assert!(Response::new(200, vec![0xff, 0xfe]).text().is_err());
    }

    #[test]
    fn test_response_error_for_status() {
        assert!(Response::new(200, b"[]".to_vec()).error_for_status().is_ok());

        let err = Response::new(404, b"Not Found".to_vec())
            .error_for_status()
            .unwrap_err();
        assert!(matches!(err, FetchError::HttpError { status: 404, ref message } if message == "Not Found"));
    }
}

//! Route segments carrying serde state as URL-safe base64 CBOR.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


/// Route segment wrapper; anything serde can handle fits in the URL.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// must stay parseable by FromStr below
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Cbor(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE
            .decode(s.as_bytes())
            .map_err(UrlParamError::Base64)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(bytes))
            .map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(parsed))
    }
}

#[cfg(test)]
mod tests {
    use common::catalog_api::FilterResourcesRequest;

    use super::*;

    #[test]
    fn catalog_query_survives_the_url() {
        let query = FilterResourcesRequest {
            countries: Some(vec!["Côte d'Ivoire".to_string()]),
            ..Default::default()
        };
        let segment = UrlParam(query.clone()).to_string();
        assert!(segment.chars().all(|c| c.is_ascii_alphanumeric() || "-_=".contains(c)));
        let parsed: UrlParam<FilterResourcesRequest> = segment.parse().expect("parse");
        assert_eq!(parsed.0, query);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("not base64!".parse::<UrlParam<FilterResourcesRequest>>().is_err());
    }
}

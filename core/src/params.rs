//! Form-style request parameters.
//!
//! # Design
//! Most gateway endpoints take their arguments in the query string of an
//! otherwise empty POST. `FormParams` keeps the pairs in insertion order so
//! the encoded URL is deterministic, and offers presence-aware setters so
//! unset optional fields never reach the wire as empty values.

use std::fmt::Display;

use serde::Serialize;
use url::form_urlencoded;

use crate::error::{ApiError, Result};

/// Ordered key/value pairs destined for the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an existing value in place.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Sets `key` only for `Some` non-empty strings.
    pub fn set_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.set(key, value);
        }
        self
    }

    /// Sets `key` only for `Some` values greater than zero.
    pub fn set_positive<N>(&mut self, key: &str, value: Option<N>) -> &mut Self
    where
        N: Into<i64> + Copy,
    {
        if let Some(value) = value.map(Into::<i64>::into).filter(|v| *v > 0) {
            self.set(key, value.to_string());
        }
        self
    }

    /// Sets `key` to the display form of `value` whenever it is present.
    pub fn set_display(&mut self, key: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
        self
    }

    /// Sets `key` to `value` encoded as a JSON document.
    pub fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<&mut Self> {
        let encoded =
            serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.set(key, encoded))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering of the pairs.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FormParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = FormParams::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Request records sent form-style.
pub trait ToFormParams {
    fn to_form_params(&self) -> Result<FormParams>;
}

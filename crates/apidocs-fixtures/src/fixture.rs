//! Fixture data model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single field value: a scalar or a flat list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

/// A scalar field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    String(String),
}

/// Request body submitted to an endpoint, in declaration order.
pub type Payload = IndexMap<String, FieldValue>;

/// An endpoint together with the payloads submitted to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFixture {
    /// Endpoint path (e.g., "/api/v1/user/privilege")
    pub url: String,

    /// Payloads submitted with create requests, in order
    #[serde(default)]
    pub post_payloads: Vec<Payload>,

    /// Payloads submitted with delete requests, in order
    #[serde(default)]
    pub delete_payloads: Vec<Payload>,
}

impl ApiFixture {
    /// Check the endpoint path is usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("url must not be empty".to_string());
        }
        if !self.url.starts_with('/') {
            return Err(format!("url must start with '/': {}", self.url));
        }
        Ok(())
    }

    /// Total number of payloads across both request kinds.
    pub fn payload_count(&self) -> usize {
        self.post_payloads.len() + self.delete_payloads.len()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(
            values
                .into_iter()
                .map(|v| Scalar::String(v.to_string()))
                .collect(),
        )
    }
}

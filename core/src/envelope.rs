// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Response envelope shared by every API response.
//!
//! ```json
//! {"status": "ok", "version": "20240204"}
//! ```
//!
//! Anything other than [`STATUS_OK`] in `status` is an application level
//! failure, described by [`ErrorResponse`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope status of a successful call.
pub const STATUS_OK: &str = "ok";

/// Deserialize `null` as the default value, like a missing field.
///
/// Use with `#[serde(deserialize_with = "null_as_default")]` on fields the
/// API may send as `null`.
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// The fields every response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponse {
    /// `ok` on success.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// API version that served the call.
    #[serde(default, alias = "s_version", deserialize_with = "null_as_default")]
    pub version: String,
}

impl BaseResponse {
    /// Check whether the envelope reports success.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Envelope of a failed call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Field level errors.
    #[serde(rename = "a_error", default, deserialize_with = "null_as_default")]
    pub errors: Vec<ErrorItem>,
    /// Server side exception class.
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: String,
    /// Numeric error code, if any.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human readable message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Envelope status, never `ok` here.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// API version that served the call.
    #[serde(default, alias = "s_version", deserialize_with = "null_as_default")]
    pub version: String,
}

/// One entry of `a_error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// Message with html markup.
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_message: String,
    /// Numeric id of the error.
    #[serde(default)]
    pub id: Option<i64>,
    /// Name of the request field the error refers to.
    #[serde(rename = "s_field", default)]
    pub field: Option<String>,
    /// Plain text message.
    #[serde(rename = "s_message", default, deserialize_with = "null_as_default")]
    pub message: String,
    /// String id of the error.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sid: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {:?}", self.status)?;
        if let Some(code) = self.code {
            write!(f, " code {code}")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        for item in &self.errors {
            match &item.field {
                Some(field) if !field.is_empty() => write!(f, "; {field}: {}", item.message)?,
                _ => write!(f, "; {}", item.message)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_response_version_alias() {
        let v: BaseResponse = serde_json::from_str(r#"{"status":"ok","s_version":"1"}"#).unwrap();
        assert!(v.is_ok());
        assert_eq!(v.version, "1");

        let v: BaseResponse = serde_json::from_str(r#"{"status":"ok","version":"2"}"#).unwrap();
        assert_eq!(v.version, "2");
    }

    #[test]
    fn test_error_response_minimal() {
        let v: ErrorResponse =
            serde_json::from_str(r#"{"status":"fail","a_error":[{"s_message":"bad field"}]}"#)
                .unwrap();
        assert_eq!(v.status, "fail");
        assert_eq!(v.errors.len(), 1);
        assert_eq!(v.errors[0].message, "bad field");
        assert_eq!(v.errors[0].field, None);
        assert_eq!(v.code, None);
        assert_eq!(v.to_string(), r#"status "fail"; bad field"#);
    }

    #[test]
    fn test_null_fields_decode_as_default() {
        let v: ErrorResponse = serde_json::from_str(
            r#"{
                "status": "fail",
                "class": null,
                "message": null,
                "version": null,
                "a_error": [{"html_message": null, "s_message": "bad field", "sid": null}]
            }"#,
        )
        .unwrap();
        assert_eq!(v.class, "");
        assert_eq!(v.message, "");
        assert_eq!(v.errors[0].html_message, "");
        assert_eq!(v.errors[0].sid, "");
        assert_eq!(v.to_string(), r#"status "fail"; bad field"#);

        let v: ErrorResponse = serde_json::from_str(r#"{"status":"fail","a_error":null}"#).unwrap();
        assert!(v.errors.is_empty());

        let v: BaseResponse = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert!(!v.is_ok());
    }

    #[test]
    fn test_error_response_full() {
        let v: ErrorResponse = serde_json::from_str(
            r#"{
                "a_error": [{
                    "html_message": "<b>Business</b> is required.",
                    "id": 12,
                    "s_field": "k_business",
                    "s_message": "Business is required.",
                    "sid": "business-empty"
                }],
                "class": "Core\\Request\\Exception",
                "code": null,
                "message": "Business is required.",
                "status": "business-empty",
                "version": "20240204"
            }"#,
        )
        .unwrap();

        assert_eq!(v.errors[0].id, Some(12));
        assert_eq!(v.errors[0].field.as_deref(), Some("k_business"));
        assert_eq!(v.errors[0].sid, "business-empty");
        assert_eq!(v.class, "Core\\Request\\Exception");
        assert_eq!(
            v.to_string(),
            r#"status "business-empty": Business is required.; k_business: Business is required."#
        );
    }
}

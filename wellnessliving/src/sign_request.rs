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

//! WellnessLiving request signature.
use std::fmt::{Debug, Formatter};

use http::Method;
use log::{log_enabled, trace, Level};
use wellnessliving_core::hash::hex_sha256;
use wellnessliving_core::time::{format_http_date, DateTime};
use wellnessliving_core::utils::Redact;

use crate::constants::{SIGNATURE_SCHEME, SIGNATURE_VERSION};

/// Everything folded into the signature of one request.
///
/// Build a fresh one per request; all fields must be resolved up front.
#[derive(Clone)]
pub struct SigningContext {
    /// Signing time, also sent as the `Date` header.
    pub time: DateTime,
    /// HTTP method, used as given.
    pub method: Method,
    /// Target host, `host[:port]`.
    pub host: String,
    /// Request path without the leading slash.
    pub resource: String,
    /// Query or form variables, keys unique.
    ///
    /// A `None` value signs as `key=`, the same as an empty string.
    pub variables: Vec<(String, Option<String>)>,
    /// Extra headers that are part of the signature.
    pub headers: Vec<(String, String)>,
    /// Value of the persistent session cookie.
    pub cookie_persistent: Option<String>,
    /// Value of the transient session cookie.
    pub cookie_transient: Option<String>,
    /// Secret authorization code.
    pub authorization_code: String,
    /// Public authorization id.
    pub authorization_id: String,
}

impl Debug for SigningContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningContext")
            .field("time", &self.time)
            .field("method", &self.method)
            .field("host", &self.host)
            .field("resource", &self.resource)
            .field("variables", &self.variables)
            .field("headers", &self.headers)
            .field("cookie_persistent", &Redact::from(&self.cookie_persistent))
            .field("cookie_transient", &Redact::from(&self.cookie_transient))
            .field("authorization_code", &Redact::from(&self.authorization_code))
            .field("authorization_id", &self.authorization_id)
            .finish()
    }
}

/// Compute the `Authorization` header value.
///
/// ## Format
///
/// ```text
/// 20150518,<authorization id>,,<hex sha256 of string to sign>
/// ```
pub fn compute_authorization(ctx: &SigningContext) -> String {
    let digest = hex_sha256(string_to_sign(ctx).as_bytes());
    format!("{SIGNATURE_VERSION},{},,{digest}", ctx.authorization_id)
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// "Core\Request\Api::20150518" + "\n" +
/// Date + "\n" +
/// AuthorizationCode + "\n" +
/// Host + "\n" +
/// AuthorizationId + "\n" +
/// Method + "\n" +
/// Resource + "\n" +
/// CookiePersistent + "\n" +
/// CookieTransient +
/// ("\n" + key + "=" + value)* +
/// ("\n" + lowercase(header) + ":" + trim(value))*
/// ```
///
/// Variables are sorted by key, headers by lowercased name.
pub fn string_to_sign(ctx: &SigningContext) -> String {
    let fragments = fragments(ctx);
    let s = fragments.join("\n");

    if log_enabled!(Level::Trace) {
        let mut redacted = fragments;
        redacted[2] = format!("{:?}", Redact::from(&ctx.authorization_code));
        trace!("string to sign: {:?}", redacted.join("\n"));
    }
    s
}

fn fragments(ctx: &SigningContext) -> Vec<String> {
    let mut parts = Vec::with_capacity(9 + ctx.variables.len() + ctx.headers.len());
    parts.push(SIGNATURE_SCHEME.to_string());

    parts.push(format_http_date(ctx.time));
    parts.push(ctx.authorization_code.clone());
    parts.push(ctx.host.clone());
    parts.push(ctx.authorization_id.clone());
    parts.push(ctx.method.as_str().to_string());
    parts.push(ctx.resource.clone());
    parts.push(ctx.cookie_persistent.clone().unwrap_or_default());
    parts.push(ctx.cookie_transient.clone().unwrap_or_default());

    {
        let mut variables = ctx.variables.iter().collect::<Vec<_>>();
        // Stable on purpose, keys are expected to be unique.
        variables.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (key, value) in variables {
            parts.push(format!("{key}={}", value.as_deref().unwrap_or_default()));
        }
    }

    {
        let mut headers = ctx
            .headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.trim()))
            .collect::<Vec<_>>();
        headers.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (key, value) in headers {
            parts.push(format!("{key}:{value}"));
        }
    }

    parts
}

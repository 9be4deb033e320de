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

use std::fmt::{Debug, Formatter};

use crate::constants::*;
use wellnessliving_core::{utils::Redact, Context};

/// Config carries all the configuration for the WellnessLiving client.
#[derive(Clone, Default)]
pub struct Config {
    /// Base endpoint of the API.
    ///
    /// Falls back to [`DEFAULT_ENDPOINT`] when unset or empty.
    pub endpoint: Option<String>,
    /// `authorization_code` will be loaded from
    ///
    /// - this field if it's set and not empty
    /// - env value: [`WELLNESSLIVING_AUTHORIZATION_CODE`]
    pub authorization_code: Option<String>,
    /// `authorization_id` will be loaded from
    ///
    /// - this field if it's set and not empty
    /// - env value: [`WELLNESSLIVING_AUTHORIZATION_ID`]
    pub authorization_id: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set authorization_code
    pub fn with_authorization_code(mut self, authorization_code: impl Into<String>) -> Self {
        self.authorization_code = Some(authorization_code.into());
        self
    }

    /// Set authorization_id
    pub fn with_authorization_id(mut self, authorization_id: impl Into<String>) -> Self {
        self.authorization_id = Some(authorization_id.into());
        self
    }

    /// Load config from env.
    ///
    /// Only fields that are unset or empty are taken from the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        fill_from_env(&mut self.endpoint, ctx, WELLNESSLIVING_URL);
        fill_from_env(
            &mut self.authorization_code,
            ctx,
            WELLNESSLIVING_AUTHORIZATION_CODE,
        );
        fill_from_env(
            &mut self.authorization_id,
            ctx,
            WELLNESSLIVING_AUTHORIZATION_ID,
        );

        self
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        match self.endpoint.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_ENDPOINT,
        }
    }
}

fn fill_from_env(field: &mut Option<String>, ctx: &Context, key: &str) {
    if field.as_deref().is_some_and(|v| !v.is_empty()) {
        return;
    }
    if let Some(v) = ctx.env_var(key) {
        *field = Some(v);
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field(
                "authorization_code",
                &self.authorization_code.as_ref().map(Redact::from),
            )
            .field(
                "authorization_id",
                &self.authorization_id.as_ref().map(Redact::from),
            )
            .finish()
    }
}

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

//! Signed client for the WellnessLiving API.
//!
//! Every request carries an `Authorization` header computed from a canonical
//! string of the request (see [`SigningContext`]). [`Client`] builds that
//! string, sends the call through the [`wellnessliving_core::Context`] and
//! tells transport, HTTP, application and decode failures apart.
//!
//! ```no_run
//! use std::collections::BTreeMap;
//!
//! use wellnessliving::types::EventListResponse;
//! use wellnessliving::{Client, Config};
//! use wellnessliving_core::{Context, OsEnv, Result};
//!
//! # async fn example(http: impl wellnessliving_core::HttpSend) -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv).with_http_send(http);
//! let client = Client::new(ctx, Config::new());
//!
//! let vars = BTreeMap::from([("k_business".to_string(), "1".to_string())]);
//! let events: EventListResponse = client
//!     .request(http::Method::GET, "/Wl/Event/EventList.json", &vars, None)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::{DefaultCredentialProvider, StaticCredentialProvider};

mod sign_request;
pub use sign_request::{compute_authorization, string_to_sign, SigningContext};

mod client;
pub use client::{Client, Variables};

pub mod types;

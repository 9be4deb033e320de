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

use clap::Subcommand;
use http::Method;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a signed request and print the raw response body.
    Raw {
        /// HTTP method, sent as given.
        #[arg(value_parser = parse_method)]
        method: Method,
        /// Path below the endpoint, or an absolute URL.
        path: String,
        /// Request variables.
        #[arg(value_name = "KEY=VALUE", value_parser = parse_variable)]
        variables: Vec<(String, String)>,
        /// Send this body verbatim and put the variables in the query string.
        #[arg(long)]
        body: Option<String>,
    },
    /// List the events of a business, e.g. `list-events k_business=1`.
    ListEvents {
        /// Request variables.
        #[arg(value_name = "KEY=VALUE", value_parser = parse_variable)]
        variables: Vec<(String, String)>,
    },
}

fn parse_method(s: &str) -> Result<Method, String> {
    s.parse::<Method>()
        .map_err(|e| format!("invalid method {s:?}: {e}"))
}

/// Parse `KEY=VALUE`, splitting at the first `=`.
pub fn parse_variable(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("invalid variable {s:?}: expected KEY=VALUE")),
    }
}

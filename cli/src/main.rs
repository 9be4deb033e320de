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

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use http::Method;
use log::{debug, error, LevelFilter};
use reqwest::cookie::Jar;
use wellnessliving::types::EventListResponse;
use wellnessliving::{Client, Config, Variables};
use wellnessliving_core::{Context, Error, OsEnv};
use wellnessliving_http_send_reqwest::ReqwestHttpSend;

mod commands;
mod exit_codes;

use commands::Command;

const EVENT_LIST_PATH: &str = "/Wl/Event/EventList.json";

#[derive(Debug, Parser)]
#[command(name = "wellnessliving", version, about = "WellnessLiving API client")]
struct Cli {
    /// Enable verbose logging.
    #[arg(long, global = true)]
    verbose: bool,
    /// API endpoint, defaults to `WELLNESSLIVING_URL` or the US production endpoint.
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Authorization code, defaults to `WELLNESSLIVING_AUTHORIZATION_CODE`.
    #[arg(long, global = true)]
    authorization_code: Option<String>,
    /// Authorization id, defaults to `WELLNESSLIVING_AUTHORIZATION_ID`.
    #[arg(long, global = true)]
    authorization_id: Option<String>,
    /// Connect and request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run(cli));
    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> i32 {
    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            error!("could not set up client: {e}");
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let result = match cli.command {
        Command::Raw {
            method,
            path,
            variables,
            body,
        } => raw(&client, method, &path, variables, body.as_deref()).await,
        Command::ListEvents { variables } => list_events(&client, variables).await,
    };

    match result {
        Ok(output) => {
            println!("{output}");
            exit_codes::SUCCESS
        }
        Err(e) => {
            error!("could not perform request: {e}");
            if let Some(body) = e.body() {
                debug!("response body: {}", String::from_utf8_lossy(body));
            }
            exit_codes::REQUEST_FAILED
        }
    }
}

fn build_client(cli: &Cli) -> wellnessliving_core::Result<Client> {
    let timeout = Duration::from_secs(cli.timeout);
    let jar = Arc::new(Jar::default());
    let http = reqwest::Client::builder()
        .cookie_provider(jar.clone())
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
        .map_err(|e| Error::config_invalid("failed to build http client").with_source(e))?;

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::new(http));

    let mut config = Config::new();
    config.endpoint = cli.endpoint.clone();
    config.authorization_code = cli.authorization_code.clone();
    config.authorization_id = cli.authorization_id.clone();
    let config = config.from_env(&ctx);
    debug!("using config: {config:?}");

    Ok(Client::new(ctx, config).with_cookie_store(jar))
}

async fn raw(
    client: &Client,
    method: Method,
    path: &str,
    variables: Vec<(String, String)>,
    body: Option<&str>,
) -> wellnessliving_core::Result<String> {
    let variables: Variables = variables.into_iter().collect();
    let bs = client.raw(method, path, &variables, body).await?;
    Ok(String::from_utf8_lossy(&bs).into_owned())
}

async fn list_events(
    client: &Client,
    variables: Vec<(String, String)>,
) -> wellnessliving_core::Result<String> {
    let variables: Variables = variables.into_iter().collect();
    let resp: EventListResponse = client
        .request(Method::GET, EVENT_LIST_PATH, &variables, None)
        .await?;
    Ok(serde_json::to_string_pretty(&resp)?)
}

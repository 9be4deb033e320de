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

use async_trait::async_trait;
use wellnessliving_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

/// DefaultCredentialProvider resolves the credential field by field.
///
/// Resolution order for both the authorization code and id:
///
/// 1. The value from [`Config`], if it is not empty
/// 2. Environment variables, read through [`Context::env_var`]
/// 3. An empty string
///
/// It always returns a credential. An incomplete one still signs the
/// request and the server rejects it with an application error.
#[derive(Debug, Clone, Default)]
pub struct DefaultCredentialProvider {
    config: Config,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.clone().from_env(ctx);

        Ok(Some(Credential {
            authorization_code: config.authorization_code.unwrap_or_default(),
            authorization_id: config.authorization_id.unwrap_or_default(),
        }))
    }
}

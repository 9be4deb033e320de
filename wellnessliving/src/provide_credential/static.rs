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

use crate::Credential;
use async_trait::async_trait;
use wellnessliving_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed WellnessLiving credential.
///
/// No environment lookup happens, even when a value is empty.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    authorization_code: String,
    authorization_id: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with authorization code and id.
    pub fn new(authorization_code: &str, authorization_id: &str) -> Self {
        Self {
            authorization_code: authorization_code.to_string(),
            authorization_id: authorization_id.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(
            self.authorization_code.clone(),
            self.authorization_id.clone(),
        )))
    }
}

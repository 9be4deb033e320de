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

use wellnessliving_core::{utils::Redact, SigningCredential};

/// Credential for the WellnessLiving API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Secret authorization code, only ever used as signature input.
    pub authorization_code: String,
    /// Public authorization id, sent in the `Authorization` header.
    pub authorization_id: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(authorization_code: impl Into<String>, authorization_id: impl Into<String>) -> Self {
        Self {
            authorization_code: authorization_code.into(),
            authorization_id: authorization_id.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("authorization_code", &Redact::from(&self.authorization_code))
            .field("authorization_id", &Redact::from(&self.authorization_id))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.authorization_code.is_empty() && !self.authorization_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("code", "id").is_valid());
        assert!(!Credential::new("", "id").is_valid());
        assert!(!Credential::new("code", "").is_valid());
        assert!(!Credential::default().is_valid());
    }
}

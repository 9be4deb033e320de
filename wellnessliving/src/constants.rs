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

//! Fixed values of the WellnessLiving wire protocol.

/// Production endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://us.wellnessliving.com";

/// Product identifier sent as `User-Agent`.
pub const USER_AGENT: &str = "WellnessLiving SDK/1.1 (WellnessLiving SDK)";

/// First line of every string to sign.
pub const SIGNATURE_SCHEME: &str = "Core\\Request\\Api::20150518";
/// First part of the `Authorization` header.
pub const SIGNATURE_VERSION: &str = "20150518";

// Session cookies set by a login and folded into the signature.
pub const COOKIE_PERSISTENT: &str = "p";
pub const COOKIE_TRANSIENT: &str = "t";

// Env values used by the wellnessliving client.
pub const WELLNESSLIVING_AUTHORIZATION_CODE: &str = "WELLNESSLIVING_AUTHORIZATION_CODE";
pub const WELLNESSLIVING_AUTHORIZATION_ID: &str = "WELLNESSLIVING_AUTHORIZATION_ID";
pub const WELLNESSLIVING_URL: &str = "WELLNESSLIVING_URL";

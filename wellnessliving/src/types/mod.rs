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

//! Response types of the WellnessLiving API.
//!
//! The API is loose about scalar encodings, so every scalar field uses one of
//! the tolerant scalars from this module instead of a plain Rust type.

mod scalar;
pub use scalar::{Bool, Currency, Date, DateTime, Float, Integer, StringMap};

mod event;
pub use event::{Event, EventListResponse, Image, Logo, Schedule, StaffMember};

pub use wellnessliving_core::envelope::{BaseResponse, ErrorItem, ErrorResponse};

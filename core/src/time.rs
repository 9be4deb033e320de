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

//! Time related utils.

use crate::Error;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Timelike;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Date layout used by the API: "2024-02-04"
const DATE: &str = "%Y-%m-%d";

/// Date time layout used by the API: "2024-02-04 00:00:00"
const DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";

/// HTTP date layout: "Sun, 04 Feb 2024 00:00:00 GMT"
const HTTP_DATE: &str = "%a, %d %b %Y %T GMT";

/// Create datetime of now, truncated to whole seconds.
pub fn now() -> DateTime {
    let now = Utc::now();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Format time into http date: `Sun, 04 Feb 2024 00:00:00 GMT`
///
/// Used both by the `Date` header and the request signature.
pub fn format_http_date(t: DateTime) -> String {
    t.format(HTTP_DATE).to_string()
}

/// Format date as the API does: `2024-02-04`
pub fn format_date(t: NaiveDate) -> String {
    t.format(DATE).to_string()
}

/// Format time as the API does: `2024-02-04 00:00:00`
pub fn format_date_time(t: DateTime) -> String {
    t.format(DATE_TIME).to_string()
}

/// Parse http date like `Sun, 04 Feb 2024 00:00:00 GMT`.
pub fn parse_http_date(s: &str) -> crate::Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc2822(s).map_err(|e| {
        Error::unexpected(format!("parse {s} into http date failed")).with_source(e)
    })?;
    Ok(t.with_timezone(&Utc))
}

/// Check that `s` has the zero padded shape of `layout`, with `N` for a digit.
fn matches_layout(s: &str, layout: &str) -> bool {
    s.len() == layout.len()
        && s.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'N' => c.is_ascii_digit(),
            _ => c == l,
        })
}

/// Parse a `YYYY-MM-DD` date.
///
/// Month and day must be zero padded.
pub fn parse_date(s: &str) -> crate::Result<NaiveDate> {
    if !matches_layout(s, "NNNN-NN-NN") {
        return Err(Error::decode(format!("parse {s:?} into date failed")));
    }
    NaiveDate::parse_from_str(s, DATE)
        .map_err(|e| Error::decode(format!("parse {s:?} into date failed")).with_source(e))
}

/// Parse a `YYYY-MM-DD HH:MM:SS` date time, taken as UTC.
pub fn parse_date_time(s: &str) -> crate::Result<DateTime> {
    if !matches_layout(s, "NNNN-NN-NN NN:NN:NN") {
        return Err(Error::decode(format!("parse {s:?} into date time failed")));
    }
    let t = NaiveDateTime::parse_from_str(s, DATE_TIME)
        .map_err(|e| Error::decode(format!("parse {s:?} into date time failed")).with_source(e))?;
    Ok(t.and_utc())
}

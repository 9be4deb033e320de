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

//! Scalars that accept every JSON encoding the API uses for them.
//!
//! The API sends the same logical value as a native JSON type, as a string
//! holding it, or as an empty string meaning "nothing". Each type here has a
//! dedicated [`Visitor`] that takes the native form first, then the string
//! forms, and fails with the raw input and the target kind otherwise.
//!
//! `null` decodes to the default value, like a missing field.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use wellnessliving_core::time::{
    format_date, format_date_time, parse_date, parse_date_time, DateTime as UtcDateTime,
};

/// Date sentinel meaning "no date".
const ZERO_DATE: &str = "0000-00-00";
/// Date time sentinel meaning "no date time".
const ZERO_DATE_TIME: &str = "0000-00-00 00:00:00";

/// Boolean sent as `true`, `1`, `"1"`, `"true"` or `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Bool(pub bool);

/// Integer sent as `42`, `"42"` or `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Integer(pub i64);

/// Floating point number sent as `1.5`, `"1.5"` or `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Float(pub f64);

/// Amount of money, always sent as a string like `"10.00"`, or `""`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Currency(pub f64);

/// Calendar date sent as `"2024-02-04"`.
///
/// `""` and `"0000-00-00"` decode to an absent date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(pub Option<NaiveDate>);

/// Point in time sent as `"2024-02-04 00:00:00"`, in UTC.
///
/// `""` and `"0000-00-00 00:00:00"` decode to an absent date time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(pub Option<UtcDateTime>);

/// String map that the API sends as `[]` when it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringMap(pub BTreeMap<String, String>);

impl From<Bool> for bool {
    fn from(v: Bool) -> Self {
        v.0
    }
}

impl From<Integer> for i64 {
    fn from(v: Integer) -> Self {
        v.0
    }
}

impl From<Float> for f64 {
    fn from(v: Float) -> Self {
        v.0
    }
}

impl From<Currency> for f64 {
    fn from(v: Currency) -> Self {
        v.0
    }
}

impl Date {
    /// The date, `None` when the API sent no date.
    pub fn get(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Check whether the API sent no date.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }
}

impl DateTime {
    /// The date time, `None` when the API sent no date time.
    pub fn get(&self) -> Option<UtcDateTime> {
        self.0
    }

    /// Check whether the API sent no date time.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }
}

/// `strconv.ParseBool` compatible literals.
fn parse_bool(v: &str) -> Option<bool> {
    match v {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = Bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a bool, a number or a string holding a bool")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Bool, E> {
        Ok(Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Bool, E> {
        Ok(Bool(v != 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Bool, E> {
        Ok(Bool(v != 0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Bool, E> {
        Ok(Bool(v != 0.0))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Bool, E> {
        if v.is_empty() {
            return Ok(Bool::default());
        }
        parse_bool(v)
            .map(Bool)
            .ok_or_else(|| E::custom(format!("bool: could not parse {v:?}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Bool, E> {
        Ok(Bool::default())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(BoolVisitor)
    }
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = Integer;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a string holding an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Integer, E> {
        Ok(Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Integer, E> {
        i64::try_from(v)
            .map(Integer)
            .map_err(|_| E::custom(format!("integer: {v} is out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Integer, E> {
        if v.is_empty() {
            return Ok(Integer::default());
        }
        v.parse::<i64>()
            .map(Integer)
            .map_err(|e| E::custom(format!("integer: could not parse {v:?}: {e}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Integer, E> {
        Ok(Integer::default())
    }
}

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(IntegerVisitor)
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = Float;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a string holding a number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Float, E> {
        Ok(Float(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Float, E> {
        Ok(Float(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Float, E> {
        Ok(Float(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Float, E> {
        parse_float(v, "float").map(Float)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Float, E> {
        Ok(Float::default())
    }
}

impl<'de> Deserialize<'de> for Float {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(FloatVisitor)
    }
}

struct CurrencyVisitor;

impl<'de> Visitor<'de> for CurrencyVisitor {
    type Value = Currency;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string holding an amount")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Currency, E> {
        parse_float(v, "currency").map(Currency)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Currency, E> {
        Ok(Currency::default())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(CurrencyVisitor)
    }
}

fn parse_float<E: de::Error>(v: &str, kind: &str) -> Result<f64, E> {
    if v.is_empty() {
        return Ok(0.0);
    }
    v.parse::<f64>()
        .map_err(|e| E::custom(format!("{kind}: could not parse {v:?}: {e}")))
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
    type Value = Date;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string holding a YYYY-MM-DD date")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Date, E> {
        if v.is_empty() || v == ZERO_DATE {
            return Ok(Date(None));
        }
        parse_date(v)
            .map(|d| Date(Some(d)))
            .map_err(|_| E::custom(format!("date: could not parse {v:?}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Date, E> {
        Ok(Date(None))
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(DateVisitor)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(d) => s.serialize_str(&format_date(d)),
            None => s.serialize_str(""),
        }
    }
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string holding a YYYY-MM-DD HH:MM:SS date time")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DateTime, E> {
        if v.is_empty() || v == ZERO_DATE_TIME {
            return Ok(DateTime(None));
        }
        parse_date_time(v)
            .map(|t| DateTime(Some(t)))
            .map_err(|_| E::custom(format!("datetime: could not parse {v:?}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<DateTime, E> {
        Ok(DateTime(None))
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(DateTimeVisitor)
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(t) => s.serialize_str(&format_date_time(t)),
            None => s.serialize_str(""),
        }
    }
}

struct StringMapVisitor;

impl<'de> Visitor<'de> for StringMapVisitor {
    type Value = StringMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of strings or an empty array")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StringMap, A::Error> {
        let mut m = BTreeMap::new();
        while let Some((k, v)) = map.next_entry::<String, String>()? {
            m.insert(k, v);
        }
        Ok(StringMap(m))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StringMap, A::Error> {
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom("string map: expected an empty array"));
        }
        Ok(StringMap::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<StringMap, E> {
        Ok(StringMap::default())
    }
}

impl<'de> Deserialize<'de> for StringMap {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_any(StringMapVisitor)
    }
}

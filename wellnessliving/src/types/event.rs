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

//! Schema of `/Wl/Event/EventList.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wellnessliving_core::envelope::{null_as_default, BaseResponse};

use super::{Bool, Currency, Date, DateTime, Integer, StringMap};

/// Response of `/Wl/Event/EventList.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventListResponse {
    /// Envelope.
    #[serde(flatten)]
    pub base: BaseResponse,
    /// Enrollment block titles by id.
    #[serde(rename = "a_enrollment_block_list")]
    pub enrollment_block_list: StringMap,
    /// Events matching the query.
    #[serde(rename = "a_event_list", deserialize_with = "null_as_default")]
    pub event_list: Vec<Event>,
}

/// One event of the business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "a_class_tab", deserialize_with = "null_as_default")]
    pub class_tab: Vec<String>,
    #[serde(rename = "a_logo")]
    pub logo: Logo,
    #[serde(rename = "a_schedule", deserialize_with = "null_as_default")]
    pub schedule: Vec<Schedule>,
    pub can_cancel: Bool,
    #[serde(rename = "dl_end")]
    pub end_date: Date,
    #[serde(rename = "dl_start")]
    pub start_date: Date,
    #[serde(rename = "dtu_session")]
    pub session_dtu: DateTime,
    #[serde(rename = "i_session_all")]
    pub session_all: Integer,
    #[serde(rename = "i_session_future")]
    pub session_future: Integer,
    #[serde(rename = "i_session_past")]
    pub session_past: Integer,
    pub is_age_restrict: Bool,
    pub is_available: Bool,
    pub is_block: Bool,
    pub is_bookable: Bool,
    pub is_booked: Bool,
    pub is_closed: Bool,
    pub is_full: Bool,
    pub is_online: Bool,
    pub is_online_private: Bool,
    pub is_open: Bool,
    pub is_promotion_only: Bool,
    pub is_prorate: Bool,
    pub is_virtual: Bool,
    #[serde(rename = "k_class", deserialize_with = "null_as_default")]
    pub class_id: String,
    #[serde(rename = "k_class_period", deserialize_with = "null_as_default")]
    pub class_period_id: String,
    #[serde(rename = "k_enrollment_block", deserialize_with = "null_as_default")]
    pub enrollment_block_id: String,
    #[serde(rename = "k_location", deserialize_with = "null_as_default")]
    pub location_id: String,
    #[serde(rename = "m_price_total")]
    pub price_total: Currency,
    /// Early booking price, `None` when the event has none.
    #[serde(rename = "m_price_total_early")]
    pub price_total_early: Option<Currency>,
    #[serde(rename = "text_age_restrict", deserialize_with = "null_as_default")]
    pub age_restrict_text: String,
    #[serde(rename = "text_title", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url_book: String,
    #[serde(deserialize_with = "null_as_default")]
    pub xml_description: String,
}

/// Logo of an event.
///
/// The `*_src`, resize and url fields are only sent when `a_image` is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    #[serde(rename = "k_business", deserialize_with = "null_as_default")]
    pub business: String,
    #[serde(rename = "k_class", deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(rename = "a_image")]
    pub image: Image,
    pub is_own: Bool,
    #[serde(rename = "i_height")]
    pub height: Integer,
    #[serde(rename = "i_height_src")]
    pub height_source: Integer,
    #[serde(rename = "i_rotate")]
    pub rotate: Integer,
    #[serde(rename = "i_width")]
    pub width: Integer,
    #[serde(rename = "i_width_src")]
    pub width_source: Integer,
    #[serde(rename = "id_type_src")]
    pub id_type_source: Integer,
    #[serde(rename = "is-resize")]
    pub is_resize: Bool,
    #[serde(rename = "url-view", deserialize_with = "null_as_default")]
    pub url_view: String,
    #[serde(rename = "url-thumbnail", deserialize_with = "null_as_default")]
    pub url_thumbnail: String,
    pub is_old: Bool,
    #[serde(rename = "s_url", deserialize_with = "null_as_default")]
    pub url: String,
}

/// Image of a logo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(rename = "i_height")]
    pub height: Integer,
    #[serde(rename = "i_height_src")]
    pub height_source: Integer,
    #[serde(rename = "i_rotate")]
    pub rotate: Integer,
    #[serde(rename = "i_width")]
    pub width: Integer,
    #[serde(rename = "i_width_src")]
    pub width_source: Integer,
    #[serde(rename = "id_type_src")]
    pub id_type_source: Integer,
    #[serde(rename = "is-resize")]
    pub is_resize: Bool,
    #[serde(rename = "url-view", deserialize_with = "null_as_default")]
    pub url_view: String,
    #[serde(rename = "url-thumbnail", deserialize_with = "null_as_default")]
    pub url_thumbnail: String,
}

/// Recurring schedule of an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// Weekdays the session runs on.
    #[serde(rename = "a_day", deserialize_with = "null_as_default")]
    pub day: BTreeMap<String, Integer>,
    #[serde(rename = "a_staff_member", deserialize_with = "null_as_default")]
    pub staff_member: Vec<StaffMember>,
    #[serde(rename = "dl_end")]
    pub end_date: Date,
    #[serde(rename = "dl_start")]
    pub start_date: Date,
    pub is_day: Bool,
    #[serde(rename = "k_class_period", deserialize_with = "null_as_default")]
    pub class_period_id: String,
    #[serde(rename = "k_location", deserialize_with = "null_as_default")]
    pub location_id: String,
    #[serde(rename = "text_location", deserialize_with = "null_as_default")]
    pub location_text: String,
    #[serde(rename = "text_time", deserialize_with = "null_as_default")]
    pub time_text: String,
}

/// Staff member running a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffMember {
    #[serde(rename = "k_staff_member")]
    pub staff_member_id: Integer,
    #[serde(rename = "text_business_role", deserialize_with = "null_as_default")]
    pub business_role: String,
    #[serde(rename = "text_mail", deserialize_with = "null_as_default")]
    pub mail: String,
    #[serde(rename = "text_name_first", deserialize_with = "null_as_default")]
    pub name_first: String,
    #[serde(rename = "text_name_full", deserialize_with = "null_as_default")]
    pub name_full: String,
    #[serde(rename = "text_name_last", deserialize_with = "null_as_default")]
    pub name_last: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uid: String,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    const EVENT_LIST: &str = r#"{
        "status": "ok",
        "version": "20240204",
        "a_enrollment_block_list": [],
        "a_event_list": [
            {
                "a_class_tab": ["3"],
                "a_logo": {
                    "k_business": "1",
                    "k_class": "10",
                    "a_image": {"i_height": 100, "i_width": "200", "is-resize": "1"},
                    "is_own": true,
                    "s_url": "https://example.com/logo.png"
                },
                "a_schedule": [
                    {
                        "a_day": {"1": 1, "3": "1"},
                        "a_staff_member": [
                            {"k_staff_member": "42", "text_name_full": "Jane Doe", "uid": "7"}
                        ],
                        "dl_end": "2024-03-01",
                        "dl_start": "2024-02-04",
                        "is_day": "",
                        "k_location": "5",
                        "text_time": "9:00am - 10:00am"
                    }
                ],
                "can_cancel": "1",
                "dl_early": null,
                "dl_end": "0000-00-00",
                "dl_start": "2024-02-04",
                "dtu_session": "2024-02-04 09:00:00",
                "i_session_all": 8,
                "i_session_future": "6",
                "i_session_past": "",
                "is_bookable": true,
                "k_class": "10",
                "m_price_total": "120.50",
                "m_price_total_early": null,
                "text_title": "Yoga Basics",
                "url_book": "https://example.com/book"
            }
        ]
    }"#;

    #[test]
    fn test_decode_event_list() {
        let resp: EventListResponse = serde_json::from_str(EVENT_LIST).unwrap();
        assert!(resp.base.is_ok());
        assert_eq!(resp.base.version, "20240204");
        assert!(resp.enrollment_block_list.0.is_empty());
        assert_eq!(resp.event_list.len(), 1);

        let event = &resp.event_list[0];
        assert_eq!(event.title, "Yoga Basics");
        assert_eq!(event.can_cancel, Bool(true));
        assert!(event.end_date.is_absent());
        assert_eq!(event.start_date.get(), NaiveDate::from_ymd_opt(2024, 2, 4));
        assert!(!event.session_dtu.is_absent());
        assert_eq!(event.session_all, Integer(8));
        assert_eq!(event.session_future, Integer(6));
        assert_eq!(event.session_past, Integer(0));
        assert_eq!(event.price_total, Currency(120.5));
        assert_eq!(event.price_total_early, None);
        assert_eq!(event.logo.image.width, Integer(200));
        assert_eq!(event.logo.image.is_resize, Bool(true));

        let schedule = &event.schedule[0];
        assert_eq!(schedule.day.get("3"), Some(&Integer(1)));
        assert_eq!(schedule.is_day, Bool(false));
        assert_eq!(schedule.staff_member[0].staff_member_id, Integer(42));
        assert_eq!(schedule.staff_member[0].name_full, "Jane Doe");
    }

    #[test]
    fn test_decode_enrollment_block_list() {
        let resp: EventListResponse = serde_json::from_str(
            r#"{"status":"ok","a_enrollment_block_list":{"9":"Spring"},"a_event_list":[]}"#,
        )
        .unwrap();
        assert_eq!(
            resp.enrollment_block_list.0.get("9").map(String::as_str),
            Some("Spring")
        );
    }

    #[test]
    fn test_null_strings_decode_as_empty() {
        let resp: EventListResponse = serde_json::from_str(
            r#"{
                "status": "ok",
                "a_event_list": [{
                    "a_class_tab": null,
                    "a_schedule": [{"a_day": null, "a_staff_member": null, "text_location": null}],
                    "k_class": "10",
                    "k_class_period": null,
                    "k_enrollment_block": null,
                    "text_title": "Yoga",
                    "url_book": null,
                    "xml_description": null
                }]
            }"#,
        )
        .unwrap();

        let event = &resp.event_list[0];
        assert_eq!(event.title, "Yoga");
        assert_eq!(event.class_period_id, "");
        assert_eq!(event.enrollment_block_id, "");
        assert_eq!(event.url_book, "");
        assert!(event.class_tab.is_empty());
        assert!(event.schedule[0].day.is_empty());
        assert!(event.schedule[0].staff_member.is_empty());
        assert_eq!(event.schedule[0].location_text, "");
    }

    #[test]
    fn test_bad_scalar_fails_whole_response() {
        let err = serde_json::from_str::<EventListResponse>(
            r#"{"status":"ok","a_event_list":[{"i_session_all":"many"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("integer: could not parse \"many\""));
    }
}

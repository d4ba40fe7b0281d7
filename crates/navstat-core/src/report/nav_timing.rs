use serde::{Deserialize, Serialize};

use crate::flatten::{FieldDescriptor, Flatten};

/// Navigation Timing API beacon.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavTimingReport {
    /// Page the timings were measured on.
    #[serde(rename = "page-uri", default)]
    pub page: String,
    #[serde(rename = "nav-timing", default)]
    pub details: NavTimingDetails,
}

/// Durations in milliseconds. No arithmetic relationship is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NavTimingDetails {
    pub dns: i64,
    pub connect: i64,
    pub ttfb: i64,
    #[serde(rename = "basePage")]
    pub base_page: i64,
    #[serde(rename = "frontEnd")]
    pub front_end: i64,
}

impl Flatten for NavTimingDetails {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor { name: "dns", get: |d| d.dns },
        FieldDescriptor { name: "connect", get: |d| d.connect },
        FieldDescriptor { name: "ttfb", get: |d| d.ttfb },
        FieldDescriptor { name: "basePage", get: |d| d.base_page },
        FieldDescriptor { name: "frontEnd", get: |d| d.front_end },
    ];
}

//! The certificate data a render consumes.
//!
//! Everything defaults at the boundary: any field may be missing from the input and then
//! prints as a placeholder. Optional sections are `Option`s so that "absent" (skip the
//! section) stays distinct from "present but empty" (print its headers).

mod functional;
mod inspection;
mod measurement;
mod value;

pub use functional::*;
pub use inspection::*;
pub use measurement::*;
pub use value::*;

use crate::RenderError;
use chrono::{DateTime, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: FieldValue,
    pub address: FieldValue,
    pub contact: FieldValue,
    pub accreditation_number: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateTitle {
    /// Printed heading; the configured default title is used when missing
    #[serde(alias = "muayene_turu")]
    pub title: FieldValue,
    #[serde(alias = "sertifika_no", alias = "number")]
    pub certificate_number: FieldValue,
    #[serde(alias = "tarih")]
    pub issue_date: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyInfo {
    #[serde(alias = "musteri_adi")]
    pub customer_name: FieldValue,
    #[serde(alias = "musteri_adres")]
    pub address: FieldValue,
    #[serde(alias = "istek_no")]
    pub request_number: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    #[serde(alias = "cihaz_tipi")]
    pub device_class: FieldValue,
    #[serde(alias = "cihaz_marka", alias = "marka")]
    pub manufacturer: FieldValue,
    #[serde(alias = "cihaz_model", alias = "model")]
    pub device_type: FieldValue,
    #[serde(alias = "seri_no")]
    pub serial_number: FieldValue,
    #[serde(alias = "kalibrasyon_tarihi")]
    pub calibration_date: FieldValue,
    #[serde(alias = "olcme_araligi")]
    pub measurement_range: FieldValue,
    #[serde(alias = "cozunurluk")]
    pub resolution: FieldValue,
    /// When set, a next-calibration date is printed
    pub calibration_interval_months: Option<u32>,
}

const DATE_FORMATS: [&str; 3] = ["%d.%m.%Y", "%Y-%m-%d", "%d/%m/%Y"];

impl DeviceInfo {
    /// Calibration date plus the calibration interval, printed in the same format the
    /// calibration date was given in. [None] when either is missing or the date can't be read.
    pub fn next_calibration_date(&self) -> Option<String> {
        let months = self.calibration_interval_months?;
        let text = self.calibration_date.as_str()?;
        let parsed = DATE_FORMATS.iter().find_map(|format| {
            NaiveDate::parse_from_str(text, format)
                .ok()
                .map(|date| (date, *format))
        });
        let Some((date, format)) = parsed else {
            tracing::warn!(date = text, "unrecognised calibration date");
            return None;
        };
        date.checked_add_months(Months::new(months))
            .map(|next| next.format(format).to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalConditions {
    #[serde(alias = "sicaklik")]
    pub temperature: FieldValue,
    #[serde(alias = "nem")]
    pub humidity: FieldValue,
    #[serde(alias = "notlar")]
    pub note: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConformityAssessment {
    /// Overall verdict; printed as a placeholder when unknown
    #[serde(alias = "uygunluk")]
    pub passed: Option<bool>,
    pub decision_rule: FieldValue,
    pub disclaimers: Vec<String>,
    pub uncertainty_statement: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Performer {
    pub name: FieldValue,
    pub title: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Approver {
    pub name: FieldValue,
    pub title: FieldValue,
    pub date: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignOff {
    pub performer: Performer,
    pub approver: Approver,
}

/// A standard or guideline the calibration was carried out against
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceStandard {
    /// Such as "ISO/IEC 17025" or "EURAMET cg-17"
    pub code: FieldValue,
    pub title: FieldValue,
    pub organization: FieldValue,
    pub year: Option<u16>,
}

/// Everything printed on one certificate. Built once by the caller, read once by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateDocument {
    pub company: CompanyInfo,
    pub certificate: CertificateTitle,
    pub party: PartyInfo,
    pub device: DeviceInfo,
    pub environment: EnvironmentalConditions,
    pub functional_check: Option<FunctionalCheckResult>,
    pub measurements: Measurements,
    pub conformity: Option<ConformityAssessment>,
    pub sign_off: Option<SignOff>,
    pub standards: Option<Vec<ReferenceStandard>>,
}

impl CertificateDocument {
    /// Parse loosely structured JSON, such as LLM extraction output, filling in whatever
    /// is missing with defaults
    pub fn from_json(json: &str) -> Result<CertificateDocument, RenderError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A certificate number of the form `<prefix>-YYYYMMDD-HHMMSS`
pub fn certificate_number<Tz: TimeZone>(prefix: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{prefix}-{}", now.format("%Y%m%d-%H%M%S"))
}

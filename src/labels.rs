//! Every fixed piece of text printed on a certificate. English by default; a translated set
//! can be supplied through the configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub default_title: String,
    pub document_subject: String,
    pub page: String,
    pub accreditation: String,
    pub contact: String,

    pub certificate_number: String,
    pub issue_date: String,

    pub party_section: String,
    pub customer_name: String,
    pub address: String,
    pub request_number: String,

    pub device_section: String,
    pub device_class: String,
    pub manufacturer: String,
    pub device_type: String,
    pub serial_number: String,
    pub calibration_date: String,
    pub next_calibration: String,
    pub measurement_range: String,
    pub resolution: String,

    pub environment_section: String,
    pub temperature: String,
    pub humidity: String,
    pub note: String,

    pub functional_section: String,
    pub check: String,
    pub result: String,
    pub pass: String,
    pub fail: String,

    pub outer_diameter_section: String,
    pub inner_diameter_section: String,
    pub depth_section: String,
    pub step_section: String,
    pub reference: String,
    pub measured: String,
    pub deviation: String,
    pub uncertainty: String,
    pub inner: String,
    pub mid: String,
    pub outer: String,
    pub deviation_inner: String,
    pub deviation_mid: String,

    pub conformity_section: String,
    pub verdict: String,
    pub conforms: String,
    pub does_not_conform: String,
    pub decision_rule: String,
    pub disclaimers: String,
    pub uncertainty_statement: String,

    pub sign_off_section: String,
    pub performed_by: String,
    pub approved_by: String,
    pub name: String,
    pub title: String,
    pub date: String,
    pub signature: String,

    pub standards_section: String,
    pub standard_code: String,
    pub organization: String,
    pub year: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            default_title: "CALIBRATION CERTIFICATE".into(),
            document_subject: "Calibration certificate".into(),
            page: "Page".into(),
            accreditation: "Accreditation No".into(),
            contact: "Contact".into(),

            certificate_number: "Certificate No".into(),
            issue_date: "Date of Issue".into(),

            party_section: "Customer Information".into(),
            customer_name: "Customer".into(),
            address: "Address".into(),
            request_number: "Request No".into(),

            device_section: "Device Information".into(),
            device_class: "Device".into(),
            manufacturer: "Manufacturer".into(),
            device_type: "Type / Model".into(),
            serial_number: "Serial No".into(),
            calibration_date: "Calibration Date".into(),
            next_calibration: "Next Calibration".into(),
            measurement_range: "Measurement Range".into(),
            resolution: "Resolution".into(),

            environment_section: "Environmental Conditions".into(),
            temperature: "Temperature".into(),
            humidity: "Relative Humidity".into(),
            note: "Notes".into(),

            functional_section: "Functional Checks".into(),
            check: "Check".into(),
            result: "Result".into(),
            pass: "Pass".into(),
            fail: "Fail".into(),

            outer_diameter_section: "Outer Diameter Measurements".into(),
            inner_diameter_section: "Inner Diameter Measurements".into(),
            depth_section: "Depth Measurements".into(),
            step_section: "Step Measurements".into(),
            reference: "Reference (mm)".into(),
            measured: "Measured (mm)".into(),
            deviation: "Deviation (mm)".into(),
            uncertainty: "Uncertainty U (mm)".into(),
            inner: "Inner (mm)".into(),
            mid: "Mid (mm)".into(),
            outer: "Outer (mm)".into(),
            deviation_inner: "Dev. Inner (mm)".into(),
            deviation_mid: "Dev. Mid (mm)".into(),

            conformity_section: "Statement of Conformity".into(),
            verdict: "Verdict".into(),
            conforms: "CONFORMS".into(),
            does_not_conform: "DOES NOT CONFORM".into(),
            decision_rule: "Decision Rule".into(),
            disclaimers: "Remarks".into(),
            uncertainty_statement: "Measurement Uncertainty".into(),

            sign_off_section: "Approval".into(),
            performed_by: "Calibrated by".into(),
            approved_by: "Approved by".into(),
            name: "Name".into(),
            title: "Title".into(),
            date: "Date".into(),
            signature: "Signature".into(),

            standards_section: "Reference Standards".into(),
            standard_code: "Standard".into(),
            organization: "Organization".into(),
            year: "Year".into(),
        }
    }
}

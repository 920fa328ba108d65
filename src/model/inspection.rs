use super::{
    CertificateDocument, CertificateTitle, CheckOutcome, DeviceInfo, EnvironmentalConditions,
    FieldValue, FunctionalCheck, Performer, SignOff,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionDevice {
    #[serde(alias = "marka")]
    pub brand: FieldValue,
    pub model: FieldValue,
    #[serde(alias = "seri_no")]
    pub serial_number: FieldValue,
}

/// The short inspection report produced from a spoken transcript: free key/value results
/// rather than measurement tables. Results keep the order they were given in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionReport {
    #[serde(alias = "muayene_turu")]
    pub inspection_type: FieldValue,
    #[serde(alias = "tarih")]
    pub date: FieldValue,
    #[serde(alias = "teknisyen")]
    pub technician: FieldValue,
    #[serde(alias = "cihaz_bilgileri")]
    pub device: InspectionDevice,
    #[serde(alias = "olcum_sonuclari")]
    pub results: Map<String, Value>,
    #[serde(alias = "notlar")]
    pub notes: FieldValue,
}

impl From<InspectionReport> for CertificateDocument {
    fn from(report: InspectionReport) -> Self {
        let checks = report
            .results
            .into_iter()
            .map(|(name, value)| FunctionalCheck::new(name, CheckOutcome::from_value(value)))
            .collect();
        CertificateDocument {
            certificate: CertificateTitle {
                title: report.inspection_type,
                issue_date: report.date.clone(),
                ..Default::default()
            },
            device: DeviceInfo {
                manufacturer: report.device.brand,
                device_type: report.device.model,
                serial_number: report.device.serial_number,
                calibration_date: report.date,
                ..Default::default()
            },
            environment: EnvironmentalConditions {
                note: report.notes,
                ..Default::default()
            },
            functional_check: Some(checks),
            sign_off: report.technician.is_present().then(|| SignOff {
                performer: Performer {
                    name: report.technician,
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_a_transcript_report() {
        let report: InspectionReport = serde_json::from_value(json!({
            "muayene_turu": "Kalibrasyon Muayenesi",
            "tarih": "12.06.2024",
            "teknisyen": "A. Yılmaz",
            "cihaz_bilgileri": {"marka": "Mitutoyo", "model": "500-196", "seri_no": "X1"},
            "olcum_sonuclari": {"sıfır ayarı": "uygun", "çene paralelliği": 0.01},
            "notlar": "Cihaz temiz.",
        }))
        .unwrap();
        let document = CertificateDocument::from(report);
        assert_eq!(document.certificate.title.display(), "Kalibrasyon Muayenesi");
        assert_eq!(document.device.manufacturer.display(), "Mitutoyo");
        assert_eq!(document.device.calibration_date.display(), "12.06.2024");
        assert_eq!(document.environment.note.display(), "Cihaz temiz.");
        let checks = document.functional_check.unwrap().checks;
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].name.display(), "sıfır ayarı");
        assert_eq!(checks[0].result, CheckOutcome::Pass);
        assert_eq!(checks[1].result, CheckOutcome::Narrative("0.01".into()));
        let sign_off = document.sign_off.unwrap();
        assert_eq!(sign_off.performer.name.display(), "A. Yılmaz");
    }

    #[test]
    fn no_technician_means_no_sign_off() {
        let document = CertificateDocument::from(InspectionReport::default());
        assert!(document.sign_off.is_none());
        assert_eq!(document.functional_check.unwrap().checks.len(), 0);
    }
}

use super::value::lenient_number;
use serde::{Deserialize, Serialize};

/// One row of an inner-diameter, depth, or step table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reading {
    #[serde(alias = "referans_deger", deserialize_with = "lenient_number")]
    pub reference: Option<f64>,
    #[serde(alias = "olculen_deger", deserialize_with = "lenient_number")]
    pub measured: Option<f64>,
    #[serde(alias = "sapma", deserialize_with = "lenient_number")]
    pub deviation: Option<f64>,
    /// Expanded measurement uncertainty
    #[serde(alias = "belirsizlik", deserialize_with = "lenient_number")]
    pub uncertainty: Option<f64>,
}

impl Reading {
    /// A complete reading. All values are printed as given, so they should already be rounded
    /// to the resolution of the device.
    pub fn new(reference: f64, measured: f64, deviation: f64, uncertainty: f64) -> Reading {
        Reading {
            reference: Some(reference),
            measured: Some(measured),
            deviation: Some(deviation),
            uncertainty: Some(uncertainty),
        }
    }
}

/// Values at the three outer-jaw positions of a caliper. Any of them may be missing when a
/// reading did not exercise that position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubChannels {
    #[serde(alias = "ic", deserialize_with = "lenient_number")]
    pub inner: Option<f64>,
    #[serde(alias = "orta", deserialize_with = "lenient_number")]
    pub mid: Option<f64>,
    #[serde(alias = "dis", deserialize_with = "lenient_number")]
    pub outer: Option<f64>,
}

/// One row of the outer-diameter table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OuterDiameterReading {
    #[serde(alias = "referans_deger", deserialize_with = "lenient_number")]
    pub reference: Option<f64>,
    pub measured: SubChannels,
    pub deviation: SubChannels,
    #[serde(alias = "belirsizlik", deserialize_with = "lenient_number")]
    pub uncertainty: Option<f64>,
}

/// The measurement categories of a caliper calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    OuterDiameter,
    InnerDiameter,
    Depth,
    Step,
}

/// Measurement tables, one per category. A missing category is skipped; a present but empty
/// one still prints its headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    #[serde(alias = "dis_cap")]
    pub outer_diameter: Option<Vec<OuterDiameterReading>>,
    #[serde(alias = "ic_cap")]
    pub inner_diameter: Option<Vec<Reading>>,
    #[serde(alias = "derinlik")]
    pub depth: Option<Vec<Reading>>,
    #[serde(alias = "kademe")]
    pub step: Option<Vec<Reading>>,
}

impl Measurements {
    /// The four-column categories that are present, in print order
    pub fn simple_tables(&self) -> impl Iterator<Item = (MeasurementKind, &[Reading])> {
        [
            (MeasurementKind::InnerDiameter, self.inner_diameter.as_deref()),
            (MeasurementKind::Depth, self.depth.as_deref()),
            (MeasurementKind::Step, self.step.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, rows)| rows.map(|rows| (kind, rows)))
    }

    pub fn is_empty(&self) -> bool {
        self.outer_diameter.is_none() && self.simple_tables().next().is_none()
    }
}

use super::{band, label_value_row, SectionContext};
use crate::canvas::Canvas;
use crate::model::{DeviceInfo, PLACEHOLDER};

/// Device identification rows. The next-calibration row only appears when the device has a
/// calibration interval.
pub fn render_device(canvas: &mut Canvas<'_>, device: &DeviceInfo, ctx: &SectionContext<'_>) {
    let labels = ctx.labels;
    band(canvas, &labels.device_section, ctx);
    let rows = [
        (&labels.device_class, device.device_class.display()),
        (&labels.manufacturer, device.manufacturer.display()),
        (&labels.device_type, device.device_type.display()),
        (&labels.serial_number, device.serial_number.display()),
        (&labels.measurement_range, device.measurement_range.display()),
        (&labels.resolution, device.resolution.display()),
        (&labels.calibration_date, device.calibration_date.display()),
    ];
    for (label, value) in rows {
        label_value_row(canvas, label, value, ctx);
    }
    if device.calibration_interval_months.is_some() {
        let next = device.next_calibration_date();
        label_value_row(
            canvas,
            &labels.next_calibration,
            next.as_deref().unwrap_or(PLACEHOLDER),
            ctx,
        );
    }
}

use super::{band, SectionContext};
use crate::canvas::Canvas;
use crate::model::{ReferenceStandard, PLACEHOLDER};
use crate::table::{Column, ColumnSpec, TableRenderer, TableRow};

impl TableRow for ReferenceStandard {
    fn cells(&self) -> Vec<String> {
        vec![
            self.code.display().to_string(),
            self.title.display().to_string(),
            self.organization.display().to_string(),
            self.year
                .map(|year| year.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ]
    }
}

/// Closing list of the standards and guidelines the calibration refers to
pub fn render_standards(
    canvas: &mut Canvas<'_>,
    standards: &[ReferenceStandard],
    ctx: &SectionContext<'_>,
) {
    let labels = ctx.labels;
    band(canvas, &labels.standards_section, ctx);
    let spec = ColumnSpec::new(vec![
        Column::new(&labels.standard_code, 1.2),
        Column::new(&labels.title, 3.0),
        Column::new(&labels.organization, 1.2),
        Column::new(&labels.year, 0.6),
    ]);
    TableRenderer::new(ctx.policy, ctx.theme).render(canvas, standards, &spec);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_year_prints_placeholder() {
        let standard = ReferenceStandard {
            code: "EURAMET cg-17".into(),
            title: "Guidelines on the Calibration of Electromechanical Manometers".into(),
            organization: "EURAMET".into(),
            year: None,
        };
        assert_eq!(standard.cells()[3], "-");
        assert_eq!(standard.cells()[0], "EURAMET cg-17");
    }
}

//! Measurement tables: a header row in inverted colours followed by one bordered row per
//! reading. Rows are checked against the space left on the page one at a time, and the
//! header row is repeated at the top of every page a table continues onto.

use crate::canvas::Canvas;
use crate::labels::Labels;
use crate::model::{MeasurementKind, OuterDiameterReading, Reading, PLACEHOLDER};
use crate::pagination::PaginationPolicy;
use crate::style::{Border, Theme};
use crate::units::Mm;

/// Line height of wrapped header text
const HEADER_LINE_HEIGHT: Mm = Mm(4.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    /// Share of the table width relative to the other columns
    pub weight: f32,
}

impl Column {
    pub fn new<S: Into<String>>(header: S, weight: f32) -> Column {
        Column {
            header: header.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub columns: Vec<Column>,
}

impl ColumnSpec {
    pub fn new(columns: Vec<Column>) -> ColumnSpec {
        ColumnSpec { columns }
    }

    /// Columns of the table for one measurement category: seven for outer diameter (the
    /// three jaw positions plus the inner and mid deviations), four for everything else.
    pub fn for_kind(kind: MeasurementKind, labels: &Labels) -> ColumnSpec {
        let columns = match kind {
            MeasurementKind::OuterDiameter => vec![
                Column::new(&labels.reference, 1.0),
                Column::new(&labels.inner, 1.0),
                Column::new(&labels.mid, 1.0),
                Column::new(&labels.outer, 1.0),
                Column::new(&labels.deviation_inner, 1.0),
                Column::new(&labels.deviation_mid, 1.0),
                Column::new(&labels.uncertainty, 1.0),
            ],
            _ => vec![
                Column::new(&labels.reference, 1.0),
                Column::new(&labels.measured, 1.0),
                Column::new(&labels.deviation, 1.0),
                Column::new(&labels.uncertainty, 1.0),
            ],
        };
        ColumnSpec { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Split `total` between the columns by weight
    pub fn widths(&self, total: Mm) -> Vec<Mm> {
        let weights: f32 = self.columns.iter().map(|c| c.weight).sum();
        if weights <= 0.0 {
            return vec![total / self.len().max(1) as f32; self.len()];
        }
        self.columns
            .iter()
            .map(|c| total * (c.weight / weights))
            .collect()
    }
}

/// A record that can be printed as one table row
pub trait TableRow {
    fn cells(&self) -> Vec<String>;
}

/// Print a measurement value as given, or the placeholder when it is missing
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

impl TableRow for Reading {
    fn cells(&self) -> Vec<String> {
        [self.reference, self.measured, self.deviation, self.uncertainty]
            .into_iter()
            .map(format_value)
            .collect()
    }
}

impl TableRow for OuterDiameterReading {
    fn cells(&self) -> Vec<String> {
        [
            self.reference,
            self.measured.inner,
            self.measured.mid,
            self.measured.outer,
            self.deviation.inner,
            self.deviation.mid,
            self.uncertainty,
        ]
        .into_iter()
        .map(format_value)
        .collect()
    }
}

/// Draws tables across the full usable width of the page
pub struct TableRenderer<'r> {
    policy: &'r PaginationPolicy,
    theme: &'r Theme,
}

impl<'r> TableRenderer<'r> {
    pub fn new(policy: &'r PaginationPolicy, theme: &'r Theme) -> TableRenderer<'r> {
        TableRenderer { policy, theme }
    }

    /// Draw the header row and then every record. An empty record list draws the header
    /// row only.
    pub fn render<R: TableRow>(&self, canvas: &mut Canvas<'_>, records: &[R], spec: &ColumnSpec) {
        let widths = spec.widths(canvas.usable_width());
        let header_height = self.header_height(canvas, spec, &widths);

        // keep the header together with at least the first row
        let first = if records.is_empty() {
            Mm(0.0)
        } else {
            self.theme.row_height
        };
        self.policy.ensure_room(canvas, header_height + first);
        self.draw_header(canvas, spec, &widths, header_height);

        for record in records {
            if self.policy.ensure_room(canvas, self.theme.row_height) {
                self.draw_header(canvas, spec, &widths, header_height);
            }
            let cells = record.cells();
            for (width, text) in widths.iter().zip(cells.iter()) {
                canvas.write_cell(
                    *width,
                    self.theme.row_height,
                    text,
                    &self.theme.table_body,
                    Border::ALL,
                    None,
                );
            }
            canvas.advance_vertical(self.theme.row_height);
        }
    }

    fn header_lines(&self, canvas: &Canvas<'_>, spec: &ColumnSpec, widths: &[Mm]) -> Vec<Vec<String>> {
        spec.columns
            .iter()
            .zip(widths)
            .map(|(column, width)| canvas.wrap(&column.header, &self.theme.table_header, *width))
            .collect()
    }

    fn header_height(&self, canvas: &Canvas<'_>, spec: &ColumnSpec, widths: &[Mm]) -> Mm {
        let lines = self
            .header_lines(canvas, spec, widths)
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(1);
        if lines <= 1 {
            self.theme.row_height
        } else {
            (HEADER_LINE_HEIGHT * lines as f32 + Mm(2.0)).max(self.theme.row_height)
        }
    }

    fn draw_header(&self, canvas: &mut Canvas<'_>, spec: &ColumnSpec, widths: &[Mm], height: Mm) {
        let style = &self.theme.table_header;
        let top = canvas.current_y();
        let mut left = canvas.margins().left;
        for (lines, width) in self.header_lines(canvas, spec, widths).iter().zip(widths) {
            canvas.draw_box(
                left,
                top,
                *width,
                height,
                Border::ALL,
                Some(self.theme.table_header_fill),
            );
            // centre the block of lines vertically in the header cell
            let line_height = if lines.len() <= 1 {
                height
            } else {
                HEADER_LINE_HEIGHT
            };
            let block = line_height * lines.len() as f32;
            canvas.set_y(top + (height - block) / 2.0);
            for line in lines {
                canvas.set_x(left);
                canvas.write_cell(*width, line_height, line, style, Border::NONE, None);
                canvas.set_y(canvas.current_y() + line_height);
            }
            left += *width;
        }
        canvas.set_y(top);
        canvas.advance_vertical(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PageSetup;
    use crate::colour::colours;
    use crate::document::Assets;
    use crate::layout::Margins;
    use crate::model::SubChannels;
    use crate::page::Stroke;
    use crate::pagesize::{Orientation, A4};
    use crate::units::Pt;

    fn canvas(assets: &Assets) -> Canvas<'_> {
        Canvas::new(
            assets,
            PageSetup {
                size: A4,
                orientation: Orientation::Landscape,
                margins: Margins::all(Mm(8.0)),
                footer_height: Mm(6.0),
            },
            Stroke {
                colour: colours::BLACK,
                width: Pt(0.5),
            },
        )
    }

    #[test]
    fn widths_follow_weights() {
        let spec = ColumnSpec::new(vec![Column::new("a", 1.0), Column::new("b", 3.0)]);
        assert_eq!(spec.widths(Mm(100.0)), vec![Mm(25.0), Mm(75.0)]);
    }

    #[test]
    fn column_counts_per_category() {
        let labels = Labels::default();
        assert_eq!(ColumnSpec::for_kind(MeasurementKind::OuterDiameter, &labels).len(), 7);
        for kind in [
            MeasurementKind::InnerDiameter,
            MeasurementKind::Depth,
            MeasurementKind::Step,
        ] {
            assert_eq!(ColumnSpec::for_kind(kind, &labels).len(), 4);
        }
    }

    #[test]
    fn missing_sub_channels_print_placeholders() {
        let reading = OuterDiameterReading {
            reference: Some(25.0),
            measured: SubChannels::default(),
            deviation: SubChannels::default(),
            uncertainty: Some(0.012),
        };
        assert_eq!(
            reading.cells(),
            vec!["25", "-", "-", "-", "-", "-", "0.012"]
        );
        assert_eq!(format_value(Some(-0.01)), "-0.01");
    }

    #[test]
    fn readings_print_the_deviation_they_were_given() {
        let reading = Reading::new(10.0, 10.01, 0.01, 0.02);
        assert_eq!(reading.cells(), vec!["10", "10.01", "0.01", "0.02"]);
    }

    #[test]
    fn empty_tables_still_print_headers() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let policy = PaginationPolicy::default();
        let theme = Theme::default();
        let labels = Labels::default();
        let spec = ColumnSpec::for_kind(MeasurementKind::Depth, &labels);
        TableRenderer::new(&policy, &theme).render::<Reading>(&mut canvas, &[], &spec);
        let page = &canvas.pages()[0];
        assert!(page.contains_text(&labels.reference));
        assert!(page.contains_text(&labels.uncertainty));
        assert_eq!(canvas.current_y(), Mm(8.0) + theme.row_height);
    }

    #[test]
    fn long_tables_repeat_headers_on_every_page() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let policy = PaginationPolicy::default();
        let theme = Theme::default();
        let labels = Labels::default();
        let spec = ColumnSpec::for_kind(MeasurementKind::Step, &labels);
        let rows: Vec<Reading> = (0..60)
            .map(|i| Reading::new(i as f64, i as f64 + 0.01, 0.01, 0.02))
            .collect();
        TableRenderer::new(&policy, &theme).render(&mut canvas, &rows, &spec);
        assert!(canvas.page_count() > 1);
        for page in canvas.pages() {
            assert!(page.contains_text(&labels.measured));
        }
        let bottom = canvas.bottom_limit();
        assert!(canvas.current_y() <= bottom);
    }
}

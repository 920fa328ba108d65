//! Putting a certificate together: the fixed list of sections a document produces, and the
//! renderer that draws them one after the other and serializes the result.

use crate::canvas::{Canvas, PageSetup};
use crate::config::RenderConfig;
use crate::document::{Assets, Document};
use crate::info::Info;
use crate::model::*;
use crate::page::Stroke;
use crate::pagination::{PaginationPolicy, Region};
use crate::sections::*;
use crate::style::Theme;
use crate::RenderError;
use chrono::{DateTime, FixedOffset, Local, TimeZone};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// One section of a certificate and the data it prints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section<'d> {
    Header(&'d CompanyInfo),
    Title(&'d CertificateTitle),
    Party(&'d PartyInfo),
    Device(&'d DeviceInfo),
    Environment(&'d EnvironmentalConditions),
    FunctionalCheck(&'d FunctionalCheckResult),
    OuterDiameter(&'d [OuterDiameterReading]),
    Readings(MeasurementKind, &'d [Reading]),
    Conformity(&'d ConformityAssessment),
    SignOff(&'d SignOff),
    Standards(&'d [ReferenceStandard]),
}

impl Section<'_> {
    /// Threshold checked before the section starts. The opening sections always share the
    /// first page.
    pub fn region(&self) -> Option<Region> {
        match self {
            Section::Header(_) | Section::Title(_) | Section::Party(_) => None,
            Section::Device(_) | Section::Environment(_) | Section::FunctionalCheck(_) => {
                Some(Region::PartyDevice)
            }
            Section::OuterDiameter(_) | Section::Readings(..) => Some(Region::MeasurementTable),
            Section::Conformity(_) => Some(Region::Conformity),
            Section::SignOff(_) => Some(Region::SignOff),
            Section::Standards(_) => Some(Region::Standards),
        }
    }
}

impl CertificateDocument {
    /// The sections to print, in print order. Optional sections without data are left out;
    /// a measurement category that is present but empty is kept.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections = vec![
            Section::Header(&self.company),
            Section::Title(&self.certificate),
            Section::Party(&self.party),
            Section::Device(&self.device),
            Section::Environment(&self.environment),
        ];
        if let Some(checks) = &self.functional_check {
            sections.push(Section::FunctionalCheck(checks));
        }
        if let Some(rows) = &self.measurements.outer_diameter {
            sections.push(Section::OuterDiameter(rows));
        }
        for (kind, rows) in self.measurements.simple_tables() {
            sections.push(Section::Readings(kind, rows));
        }
        if let Some(conformity) = &self.conformity {
            sections.push(Section::Conformity(conformity));
        }
        if let Some(sign_off) = &self.sign_off {
            sections.push(Section::SignOff(sign_off));
        }
        if let Some(standards) = &self.standards {
            sections.push(Section::Standards(standards));
        }
        sections
    }
}

/// A finished certificate, ready to be sent to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCertificate {
    pub bytes: Vec<u8>,
    /// `<prefix>_<YYYYMMDD_HHMMSS>.pdf`
    pub filename: String,
    pub content_type: &'static str,
}

/// File name for a certificate produced at `now`
pub fn suggested_filename<Tz: TimeZone>(prefix: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{prefix}_{}.pdf", now.format("%Y%m%d_%H%M%S"))
}

/// Renders certificates with one configuration. Fonts and the logo are loaded when the
/// renderer is built and shared by every render; each render draws on a canvas of its own,
/// so a renderer can be shared between threads.
pub struct CertificateRenderer {
    config: RenderConfig,
    setup: PageSetup,
    assets: Assets,
    policy: PaginationPolicy,
    theme: Theme,
}

impl CertificateRenderer {
    pub fn new(config: RenderConfig) -> Result<CertificateRenderer, RenderError> {
        let assets = config.load_assets()?;
        CertificateRenderer::with_assets(config, assets)
    }

    /// Use already loaded assets instead of the font and logo paths of `config`
    pub fn with_assets(
        config: RenderConfig,
        assets: Assets,
    ) -> Result<CertificateRenderer, RenderError> {
        let setup = config.page_setup()?;
        let policy = PaginationPolicy::new(config.thresholds);
        Ok(CertificateRenderer {
            config,
            setup,
            assets,
            policy,
            theme: Theme::default(),
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> CertificateRenderer {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render with the current local time as creation time
    pub fn render(
        &self,
        document: &CertificateDocument,
    ) -> Result<RenderedCertificate, RenderError> {
        self.render_at(document, Local::now().fixed_offset())
    }

    /// Render as if it were `now`. The same document rendered at the same time gives the
    /// same bytes.
    pub fn render_at(
        &self,
        document: &CertificateDocument,
        now: DateTime<FixedOffset>,
    ) -> Result<RenderedCertificate, RenderError> {
        let laid_out = self.layout_at(document, now);
        let bytes = laid_out.to_bytes()?;
        tracing::info!(
            certificate = document.certificate.certificate_number.display(),
            pages = laid_out.pages.len(),
            bytes = bytes.len(),
            "rendered certificate"
        );
        Ok(RenderedCertificate {
            bytes,
            filename: suggested_filename(&self.config.filename_prefix, &now),
            content_type: PDF_CONTENT_TYPE,
        })
    }

    /// Lay the certificate out without serializing it
    pub fn layout_at(
        &self,
        document: &CertificateDocument,
        now: DateTime<FixedOffset>,
    ) -> Document<'_> {
        let theme = &self.theme;
        let labels = &self.config.labels;
        let ctx = SectionContext {
            theme,
            labels,
            policy: &self.policy,
        };
        let stroke = Stroke {
            colour: theme.border,
            width: theme.border_width,
        };
        let mut canvas = Canvas::new(&self.assets, self.setup, stroke);

        for section in document.sections() {
            if let Some(region) = section.region() {
                self.policy.break_if_needed(&mut canvas, region);
            }
            self.draw_section(&mut canvas, section, &ctx);
            canvas.advance_vertical(theme.section_gap);
        }

        canvas.finish(&labels.page, &theme.small, self.info(document, now))
    }

    fn draw_section(&self, canvas: &mut Canvas<'_>, section: Section<'_>, ctx: &SectionContext<'_>) {
        match section {
            Section::Header(company) => render_header(canvas, company, self.assets.logo(), ctx),
            Section::Title(title) => render_title(canvas, title, ctx),
            Section::Party(party) => render_party(canvas, party, ctx),
            Section::Device(device) => render_device(canvas, device, ctx),
            Section::Environment(environment) => render_environment(canvas, environment, ctx),
            Section::FunctionalCheck(checks) => render_functional(canvas, checks, ctx),
            Section::OuterDiameter(rows) => {
                render_measurement_table(canvas, MeasurementKind::OuterDiameter, rows, ctx)
            }
            Section::Readings(kind, rows) => render_measurement_table(canvas, kind, rows, ctx),
            Section::Conformity(conformity) => render_conformity(canvas, conformity, ctx),
            Section::SignOff(sign_off) => render_sign_off(canvas, sign_off, ctx),
            Section::Standards(standards) => render_standards(canvas, standards, ctx),
        }
    }

    fn info(&self, document: &CertificateDocument, now: DateTime<FixedOffset>) -> Info {
        let labels = &self.config.labels;
        let mut info = Info::new();
        let title = match document.certificate.certificate_number.as_str() {
            Some(number) => format!("{} {number}", labels.default_title),
            None => labels.default_title.clone(),
        };
        info.title(title).subject(&labels.document_subject).created(now);
        if let Some(company) = document.company.name.as_str() {
            info.author(company);
        }
        if let Some(serial) = document.device.serial_number.as_str() {
            info.keywords(serial);
        }
        info
    }
}

/// Render with the default configuration and built-in fonts
pub fn render_certificate(document: &CertificateDocument) -> Result<Vec<u8>, RenderError> {
    let renderer = CertificateRenderer::with_assets(RenderConfig::default(), Assets::standard())?;
    Ok(renderer.render(document)?.bytes)
}

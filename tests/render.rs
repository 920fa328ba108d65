use calcert::*;
use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 12, 10, 15, 30)
        .unwrap()
}

fn renderer() -> CertificateRenderer {
    CertificateRenderer::with_assets(RenderConfig::default(), Assets::standard()).unwrap()
}

fn page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes)
        .expect("output is a readable PDF")
        .get_pages()
        .len()
}

fn texts(page: &Page) -> Vec<String> {
    page.spans().map(|span| span.text.clone()).collect()
}

fn all_texts(document: &Document<'_>) -> Vec<String> {
    document.pages.iter().flat_map(texts).collect()
}

fn outer_rows(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            let reference = 10.0 + i as f64 * 5.0;
            json!({
                "reference": reference,
                "measured": {"inner": reference + 0.01, "mid": reference, "outer": reference - 0.01},
                "deviation": {"inner": 0.01, "mid": 0.0, "outer": -0.01},
                "uncertainty": 0.012,
            })
        })
        .collect()
}

fn full_document(outer_row_count: usize) -> CertificateDocument {
    let disclaimers: Vec<String> = (0..6).map(|_| lipsum::lipsum(90)).collect();
    serde_json::from_value(json!({
        "company": {
            "name": "Hassas Metroloji Laboratuvarı",
            "address": "Atatürk Cad. No: 12, Bornova, İzmir",
            "contact": "+90 232 000 00 00",
            "accreditation_number": "AB-0456-K",
        },
        "certificate": {
            "certificate_number": "CAL-20240612-101530",
            "issue_date": "12.06.2024",
        },
        "party": {
            "customer_name": "Ege Makina San. A.Ş.",
            "address": "Kemalpaşa OSB, İzmir",
            "request_number": "REQ-117",
        },
        "device": {
            "device_class": "Digital caliper",
            "manufacturer": "Mitutoyo",
            "device_type": "500-196-30",
            "serial_number": "A20345",
            "calibration_date": "12.06.2024",
            "measurement_range": "0-150 mm",
            "resolution": "0.01 mm",
            "calibration_interval_months": 12,
        },
        "environment": {"temperature": "20 ± 1 °C", "humidity": "45 ± 10 %", "note": null},
        "functional_check": {"Zero reading": "pass", "Jaw parallelism": "ok", "Locking screw": "loose"},
        "measurements": {
            "outer_diameter": outer_rows(outer_row_count),
            "inner_diameter": [{"reference": 10, "measured": 10.01, "deviation": 0.01, "uncertainty": 0.015}],
            "depth": [{"reference": 25, "measured": "25,00", "deviation": 0, "uncertainty": 0.02}],
            "step": [],
        },
        "conformity": {
            "passed": true,
            "decision_rule": lipsum::lipsum(60),
            "disclaimers": disclaimers,
            "uncertainty_statement": lipsum::lipsum(50),
        },
        "sign_off": {
            "performer": {"name": "Ayşe Demir", "title": "Technician"},
            "approver": {"name": "Mehmet Kaya", "title": "Quality Manager", "date": "13.06.2024"},
        },
        "standards": [
            {"code": "ISO/IEC 17025", "title": "General requirements for the competence of testing and calibration laboratories", "organization": "ISO", "year": 2017},
            {"code": "EURAMET cg-21", "title": "Calibration of Vernier Callipers", "organization": "EURAMET"},
        ],
    }))
    .unwrap()
}

#[test]
fn only_mandatory_sections_without_optional_data() {
    init_tracing();
    let bytes = render_certificate(&CertificateDocument::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&bytes), 1);

    let labels = Labels::default();
    let renderer = renderer();
    let document = renderer.layout_at(&CertificateDocument::default(), now());
    let texts = all_texts(&document);
    let position = |needle: &str| texts.iter().position(|t| t == needle).unwrap();
    assert!(position(&labels.default_title) < position(&labels.party_section));
    assert!(position(&labels.party_section) < position(&labels.device_section));
    assert!(position(&labels.device_section) < position(&labels.environment_section));
    for absent in [
        &labels.functional_section,
        &labels.outer_diameter_section,
        &labels.conformity_section,
        &labels.sign_off_section,
        &labels.standards_section,
    ] {
        assert!(!texts.contains(absent), "{absent} should not be printed");
    }
    let titles: Vec<&str> = document
        .outline
        .entries
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            labels.default_title.as_str(),
            labels.party_section.as_str(),
            labels.device_section.as_str(),
            labels.environment_section.as_str(),
        ]
    );
}

#[test]
fn empty_category_prints_headers_then_moves_on() {
    let labels = Labels::default();
    let document = CertificateDocument {
        measurements: Measurements {
            depth: Some(vec![]),
            ..Default::default()
        },
        sign_off: Some(SignOff::default()),
        ..Default::default()
    };
    let texts = all_texts(&renderer().layout_at(&document, now()));
    let band = texts.iter().position(|t| *t == labels.depth_section).unwrap();
    assert_eq!(
        &texts[band + 1..band + 5],
        &[
            labels.reference.clone(),
            labels.measured.clone(),
            labels.deviation.clone(),
            labels.uncertainty.clone(),
        ]
    );
    assert_eq!(texts[band + 5], labels.sign_off_section);
}

#[test]
fn null_sub_channels_print_three_placeholders() {
    let document: CertificateDocument = serde_json::from_value(json!({
        "measurements": {"outer_diameter": [{
            "reference": 50,
            "measured": {"inner": null, "mid": null, "outer": null},
            "deviation": {"inner": null, "mid": null},
            "uncertainty": 0.012,
        }]}
    }))
    .unwrap();
    let labels = Labels::default();
    let texts = all_texts(&renderer().layout_at(&document, now()));
    let last_header = texts.iter().position(|t| *t == labels.uncertainty).unwrap();
    assert_eq!(
        &texts[last_header + 1..last_header + 8],
        &["50", "-", "-", "-", "-", "-", "0.012"]
    );
}

#[test]
fn same_input_same_time_same_bytes() {
    let document = full_document(8);
    let renderer = renderer();
    let first = renderer.render_at(&document, now()).unwrap();
    let second = renderer.render_at(&document.clone(), now()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.content_type, "application/pdf");
    assert_eq!(first.filename, "certificate_20240612_101530.pdf");

    let later = now() + chrono::Duration::seconds(5);
    let third = renderer.render_at(&document, later).unwrap();
    assert_ne!(third.bytes, first.bytes);
    assert_eq!(third.filename, "certificate_20240612_101535.pdf");
}

#[test]
fn fifty_outer_rows_span_pages_with_repeated_headers() {
    init_tracing();
    let labels = Labels::default();
    let renderer = renderer();
    let document = full_document(50);
    let laid_out = renderer.layout_at(&document, now());
    assert!(laid_out.pages.len() > 2);

    // every page carrying outer diameter rows starts them under a header row
    let mut pages_with_rows = 0;
    for page in &laid_out.pages {
        let texts = texts(page);
        if texts.iter().any(|t| t == "0.012") && texts.contains(&labels.deviation_mid) {
            pages_with_rows += 1;
            let header = texts.iter().position(|t| *t == labels.deviation_mid).unwrap();
            let row = texts.iter().position(|t| t == "0.012").unwrap();
            assert!(header < row);
        }
    }
    assert!(pages_with_rows >= 2);

    let rendered = renderer.render_at(&document, now()).unwrap();
    assert_eq!(page_count(&rendered.bytes), laid_out.pages.len());
}

#[test]
fn nothing_is_drawn_outside_the_margins() {
    let renderer = renderer();
    let setup = renderer.config().page_setup().unwrap();
    let document = full_document(50);
    let laid_out = renderer.layout_at(&document, now());
    let fonts = &laid_out.assets.fonts;
    for (index, page) in laid_out.pages.iter().enumerate() {
        assert_eq!(page.margins, setup.margins, "page {index}");
        assert_eq!(page.orientation, setup.orientation, "page {index}");
        let bottom: Pt = setup.margins.bottom.into();
        let top = page.media_box.y2 - Pt::from(setup.margins.top);
        for item in &page.contents {
            assert!(
                item.bottom(fonts) >= bottom - Pt(0.01),
                "page {index}: {item:?} runs into the bottom margin"
            );
            if let PageContents::Text(span) = item {
                assert!(span.coords.1 <= top, "page {index}: {span:?} above the top margin");
            }
        }
    }
}

#[test]
fn long_addresses_wrap_without_overlapping_the_next_row() {
    let labels = Labels::default();
    let address = "Kemalpaşa Organize Sanayi Bölgesi, 6. Sokak No: 14, Ansızca Mahallesi, \
                   Kemalpaşa, İzmir 35730, Türkiye, Kalite Kontrol Laboratuvarı Binası, Giriş Kat, \
                   Ölçüm Odası 3, Teslim alan: Metroloji Birimi Sorumlusu, Dahili: 4412";
    let document = CertificateDocument {
        party: PartyInfo {
            address: address.into(),
            request_number: "REQ-9".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    let renderer = renderer();
    let laid_out = renderer.layout_at(&document, now());
    let spans: Vec<&SpanLayout> = laid_out.pages[0].spans().collect();
    let address_label = spans.iter().position(|s| s.text == labels.address).unwrap();
    let request_label = spans
        .iter()
        .position(|s| s.text == labels.request_number)
        .unwrap();
    let address_lines = &spans[address_label + 1..request_label];
    assert!(address_lines.len() > 1);

    let printed: Vec<&str> = address_lines
        .iter()
        .flat_map(|s| s.text.split_whitespace())
        .collect();
    let expected: Vec<&str> = address.split_whitespace().collect();
    assert_eq!(printed, expected);

    let lowest_address_line = address_lines
        .iter()
        .map(|s| s.coords.1 .0)
        .fold(f32::MAX, f32::min);
    assert!(spans[request_label].coords.1 .0 < lowest_address_line);
}

#[test]
fn inspection_reports_render_as_certificates() {
    let report: InspectionReport = serde_json::from_value(json!({
        "muayene_turu": "Kalibrasyon Muayenesi",
        "tarih": "12.06.2024",
        "teknisyen": "Belirtilmemiş",
        "cihaz_bilgileri": {"marka": "Mitutoyo", "model": "CD-15", "seri_no": "88812"},
        "olcum_sonuclari": {"sıfır": "uygun", "çene": "uygun değil"},
        "notlar": "Çene yüzeyinde aşınma var.",
    }))
    .unwrap();
    let document = CertificateDocument::from(report);
    let renderer = renderer();
    let laid_out = renderer.layout_at(&document, now());
    let texts = all_texts(&laid_out);
    assert!(texts.contains(&"Kalibrasyon Muayenesi".to_string()));
    assert!(texts.contains(&"Pass".to_string()));
    assert!(texts.contains(&"Fail".to_string()));
    assert!(texts.contains(&"Belirtilmemiş".to_string()));
    let bytes = render_certificate(&document).unwrap();
    assert_eq!(page_count(&bytes), laid_out.pages.len());
}

#[test]
fn transcript_length_notes_stay_above_the_page_bottom() {
    let transcript = lipsum::lipsum(1000);
    assert!(transcript.len() > 5000);
    let report: InspectionReport = serde_json::from_value(json!({
        "muayene_turu": "Kalibrasyon Muayenesi",
        "teknisyen": "A. Yılmaz",
        "olcum_sonuclari": {"Durum": "okunamadı"},
        "notlar": transcript,
    }))
    .unwrap();
    let document = CertificateDocument::from(report);
    let renderer = renderer();
    let setup = renderer.config().page_setup().unwrap();
    let laid_out = renderer.layout_at(&document, now());
    assert!(laid_out.pages.len() > 1);

    let page_label = &renderer.config().labels.page;
    let fonts = &laid_out.assets.fonts;
    let lowest: Pt = Pt::from(setup.margins.bottom + setup.footer_height);
    for (index, page) in laid_out.pages.iter().enumerate() {
        for item in &page.contents {
            if matches!(item, PageContents::Text(span) if span.text.starts_with(page_label.as_str())) {
                continue;
            }
            assert!(
                item.bottom(fonts) >= lowest - Pt(0.01),
                "page {index}: {item:?} runs past the bottom limit"
            );
        }
    }
    let bytes = renderer.render_at(&document, now()).unwrap().bytes;
    assert_eq!(page_count(&bytes), laid_out.pages.len());
}

#[test]
fn logo_is_loaded_from_the_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    image::RgbImage::from_pixel(40, 20, image::Rgb([31, 56, 100]))
        .save(&path)
        .unwrap();
    let config = RenderConfig {
        logo: Some(path),
        ..Default::default()
    };
    let renderer = CertificateRenderer::new(config).unwrap();
    let laid_out = renderer.layout_at(&CertificateDocument::default(), now());
    assert!(laid_out.pages[0]
        .contents
        .iter()
        .any(|item| matches!(item, PageContents::Image(_))));
    let rendered = renderer.render_at(&CertificateDocument::default(), now()).unwrap();
    assert_eq!(page_count(&rendered.bytes), 1);
}

#[test]
fn unusable_fonts_fail_the_whole_render() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = dir.path().join("broken.ttf");
    std::fs::write(&garbage, b"definitely not a font").unwrap();
    let config = RenderConfig {
        font_regular: Some(garbage),
        ..Default::default()
    };
    assert!(matches!(
        CertificateRenderer::new(config),
        Err(RenderError::FontParsing(_))
    ));

    let config = RenderConfig {
        font_bold: Some(dir.path().join("missing.ttf")),
        ..Default::default()
    };
    assert!(matches!(
        CertificateRenderer::new(config),
        Err(RenderError::Io(_))
    ));
}

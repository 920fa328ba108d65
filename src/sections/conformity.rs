use super::{band, label_value_row_coloured, text_item, text_lines, SectionContext};
use crate::canvas::Canvas;
use crate::model::{ConformityAssessment, PLACEHOLDER};
use crate::pagination::Region;

/// Verdict, decision rule, remarks and uncertainty statement. The free-text items can be long
/// enough to run over a page, so the conformity threshold is checked again before each of
/// them and before each remark.
pub fn render_conformity(
    canvas: &mut Canvas<'_>,
    conformity: &ConformityAssessment,
    ctx: &SectionContext<'_>,
) {
    let theme = ctx.theme;
    let labels = ctx.labels;
    band(canvas, &labels.conformity_section, ctx);

    let (verdict, colour) = match conformity.passed {
        Some(true) => (labels.conforms.as_str(), Some(theme.pass)),
        Some(false) => (labels.does_not_conform.as_str(), Some(theme.fail)),
        None => (PLACEHOLDER, None),
    };
    label_value_row_coloured(canvas, &labels.verdict, verdict, colour, ctx);

    text_item(
        canvas,
        &labels.decision_rule,
        conformity.decision_rule.display(),
        Region::Conformity,
        ctx,
    );

    let remarks: Vec<&str> = conformity
        .disclaimers
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect();
    if let Some((first, rest)) = remarks.split_first() {
        text_item(
            canvas,
            &labels.disclaimers,
            &format!("1. {first}"),
            Region::Conformity,
            ctx,
        );
        for (index, remark) in rest.iter().enumerate() {
            ctx.policy.break_if_needed(canvas, Region::Conformity);
            text_lines(canvas, &format!("{}. {remark}", index + 2), ctx);
        }
    }

    text_item(
        canvas,
        &labels.uncertainty_statement,
        conformity.uncertainty_statement.display(),
        Region::Conformity,
        ctx,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Assets;
    use crate::labels::Labels;
    use crate::model::FieldValue;
    use crate::pagination::PaginationPolicy;
    use crate::sections::testing::*;
    use crate::style::Theme;
    use crate::units::Mm;

    #[test]
    fn remarks_are_numbered_and_blank_ones_dropped() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let (theme, labels, policy) = (Theme::default(), Labels::default(), PaginationPolicy::default());
        let ctx = SectionContext {
            theme: &theme,
            labels: &labels,
            policy: &policy,
        };
        let conformity = ConformityAssessment {
            passed: Some(true),
            decision_rule: "Simple acceptance, ILAC-G8:09/2019".into(),
            disclaimers: vec!["First remark.".into(), "  ".into(), "Second remark.".into()],
            uncertainty_statement: FieldValue::none(),
        };
        render_conformity(&mut canvas, &conformity, &ctx);
        let texts = all_text(&canvas);
        assert!(texts.contains(&"CONFORMS".to_string()));
        assert!(texts.contains(&"1. First remark.".to_string()));
        assert!(texts.contains(&"2. Second remark.".to_string()));
        assert_eq!(texts.last().map(String::as_str), Some("-"));
    }

    #[test]
    fn starts_a_page_when_entered_past_the_threshold() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let (theme, labels, policy) = (Theme::default(), Labels::default(), PaginationPolicy::default());
        let ctx = SectionContext {
            theme: &theme,
            labels: &labels,
            policy: &policy,
        };
        canvas.advance_vertical(Mm(172.0));
        render_conformity(&mut canvas, &ConformityAssessment::default(), &ctx);
        // band and verdict still fit, the decision rule starts past the threshold
        assert_eq!(canvas.page_count(), 2);
        assert!(canvas.pages()[1].contains_text(&labels.uncertainty_statement));
    }
}

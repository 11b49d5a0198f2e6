use api::StructuredSummary;
use dioxus::prelude::*;

pub const EMPTY_SUMMARY: &str = "No structured summary available.";

/// Headed sections of bullet points, in the order the backend sent them.
#[component]
pub fn SummarySections(
    summary: StructuredSummary,
    #[props(default = false)] show_title: bool,
) -> Element {
    let title = summary.title.clone().filter(|t| !t.is_empty() && show_title);

    rsx! {
        div { class: "summary-sections",
            if let Some(title) = title {
                h3 { class: "summary-title", "{title}" }
            }
            if summary.sections.is_empty() {
                p { class: "summary-empty", "{EMPTY_SUMMARY}" }
            }
            for (i, section) in summary.sections.iter().enumerate() {
                div { key: "{i}", class: "summary-section",
                    h5 { class: "summary-heading", "{section.heading}" }
                    for (j, point) in section.points.iter().enumerate() {
                        p { key: "{j}", class: "summary-point", "• {point}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Section;

    fn section(heading: &str, points: &[&str]) -> Section {
        Section {
            heading: heading.to_string(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn render(summary: StructuredSummary) -> String {
        dioxus_ssr::render_element(rsx! {
            SummarySections { summary }
        })
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render(StructuredSummary {
            title: None,
            sections: vec![
                section("Intro", &["what", "why"]),
                section("Body", &["how"]),
                section("Outro", &[]),
            ],
        });

        assert_eq!(html.matches("class=\"summary-section\"").count(), 3);
        assert_eq!(html.matches("class=\"summary-point\"").count(), 3);
        let intro = html.find("Intro").unwrap();
        let body = html.find("Body").unwrap();
        let outro = html.find("Outro").unwrap();
        assert!(intro < body && body < outro);
        assert!(!html.contains(EMPTY_SUMMARY));
    }

    #[test]
    fn test_empty_summary_shows_placeholder() {
        let html = render(StructuredSummary::default());
        assert!(html.contains(EMPTY_SUMMARY));
        assert_eq!(html.matches("class=\"summary-section\"").count(), 0);
    }
}

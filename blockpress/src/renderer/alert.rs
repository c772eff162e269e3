//! Alert blocks

use super::inline::{render_segments, InlineOptions};
use super::RenderContext;
use crate::block_model::{AlertKind, AlertProps, InlineSegment, TextAlignment};
use crate::style::{resolve_color, ClassList};

/// Icon and color classes of one alert kind
struct AlertScheme {
    name: &'static str,
    icon: &'static str,
    border: &'static str,
    background: &'static str,
    text: &'static str,
}

fn scheme(kind: AlertKind) -> AlertScheme {
    match kind {
        AlertKind::Warning => AlertScheme {
            name: "warning",
            icon: "&#9888;",
            border: "border-yellow-500",
            background: "bg-yellow-100",
            text: "text-yellow-800",
        },
        AlertKind::Danger => AlertScheme {
            name: "danger",
            icon: "&#9940;",
            border: "border-red-500",
            background: "bg-red-100",
            text: "text-red-800",
        },
        AlertKind::Info => AlertScheme {
            name: "info",
            icon: "&#8505;",
            border: "border-blue-500",
            background: "bg-blue-100",
            text: "text-blue-800",
        },
        AlertKind::Success => AlertScheme {
            name: "success",
            icon: "&#10003;",
            border: "border-green-500",
            background: "bg-green-100",
            text: "text-green-800",
        },
        AlertKind::Other => AlertScheme {
            name: "neutral",
            icon: "",
            border: "border-gray-300",
            background: "",
            text: "",
        },
    }
}

/// Write an alert block
///
/// A bordered, rounded flex row holding the kind's icon and the inline
/// content. Alignment maps onto flex justification (left by default). An
/// explicit background color replaces the kind's background. Unrecognized
/// kinds get a plain gray border and no icon.
pub fn render_alert(
    output: &mut String,
    props: &AlertProps,
    content: &[InlineSegment],
    ctx: &RenderContext,
) {
    let scheme = scheme(props.kind);

    let background = match resolve_color(props.background_color.as_deref(), true) {
        class if class.is_empty() => scheme.background.to_string(),
        class => class,
    };

    let container = ClassList::new()
        .with("alert")
        .with(format!("alert-{}", scheme.name))
        .with("flex")
        .with("items-center")
        .with("gap-2")
        .with("border")
        .with("rounded-lg")
        .with("p-3")
        .with("mb-4")
        .with(scheme.border)
        .with(background)
        .with(scheme.text)
        .with(TextAlignment::resolve(props.text_alignment, TextAlignment::Left).justify_class());
    let body = ClassList::new()
        .with("alert-body")
        .with(resolve_color(props.text_color.as_deref(), false));

    output.push_str(&format!("<div{} role=\"alert\">", container.attr()));
    if !scheme.icon.is_empty() {
        output.push_str(&format!(
            "<span class=\"alert-icon\" aria-hidden=\"true\">{}</span>",
            scheme.icon
        ));
    }
    output.push_str(&format!("<div{}>", body.attr()));
    render_segments(output, content, InlineOptions::new(ctx));
    output.push_str("</div></div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(props: &AlertProps) -> String {
        let mut output = String::new();
        render_alert(
            &mut output,
            props,
            &[InlineSegment::text("Careful")],
            &RenderContext::default(),
        );
        output
    }

    #[test]
    fn test_warning_is_default() {
        let html = render(&AlertProps::default());
        assert!(html.contains("alert-warning"));
        assert!(html.contains("border-yellow-500 bg-yellow-100 text-yellow-800 justify-start"));
        assert!(html.contains("&#9888;"));
        assert!(html.contains(">Careful</span>"));
    }

    #[test]
    fn test_each_kind_has_its_scheme() {
        for (kind, name, border) in [
            (AlertKind::Danger, "alert-danger", "border-red-500"),
            (AlertKind::Info, "alert-info", "border-blue-500"),
            (AlertKind::Success, "alert-success", "border-green-500"),
        ] {
            let html = render(&AlertProps {
                kind,
                ..AlertProps::default()
            });
            assert!(html.contains(name));
            assert!(html.contains(border));
        }
    }

    #[test]
    fn test_unrecognized_kind_is_neutral() {
        let html = render(&AlertProps {
            kind: AlertKind::Other,
            text_alignment: Some(TextAlignment::Unknown),
            ..AlertProps::default()
        });
        assert!(html.starts_with(
            "<div class=\"alert alert-neutral flex items-center gap-2 border rounded-lg p-3 mb-4 border-gray-300 justify-start\" role=\"alert\"><div"
        ));
        assert!(!html.contains("alert-icon"));
        assert!(html.contains(">Careful</span>"));
    }

    #[test]
    fn test_alignment_drives_justification() {
        let html = render(&AlertProps {
            text_alignment: Some(TextAlignment::Center),
            ..AlertProps::default()
        });
        assert!(html.contains("justify-center"));
    }

    #[test]
    fn test_explicit_colors() {
        let html = render(&AlertProps {
            text_color: Some("purple".to_string()),
            background_color: Some("pink".to_string()),
            ..AlertProps::default()
        });
        assert!(html.contains("bg-pink-100"));
        assert!(!html.contains("bg-yellow-100"));
        assert!(html.contains("<div class=\"alert-body text-purple-600\">"));
    }
}

//! Shipping label rendering stub.
//!
//! Renders the label as an SVG data URL with the tracking number as
//! literal text. No real barcode symbology is produced; a scanner
//! integration would replace this module wholesale.

use base64::{Engine, engine::general_purpose::STANDARD};

use postship_core::TrackingNumber;

/// Render a label for a tracking number as a `data:image/svg+xml;base64,`
/// URL.
#[must_use]
pub fn render_label(tracking_number: &TrackingNumber) -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="50">"#,
            r#"<rect width="200" height="50" fill="white"/>"#,
            r#"<text x="100" y="30" text-anchor="middle" font-family="monospace" font-size="14">{}</text>"#,
            "</svg>"
        ),
        tracking_number
    );
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_svg_data_url() {
        let label = render_label(&TrackingNumber::new("PS1A2B3C4D5"));
        assert!(label.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_label_embeds_tracking_number() {
        let label = render_label(&TrackingNumber::new("PS1A2B3C4D5"));
        let encoded = label
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("prefix");
        let svg = STANDARD.decode(encoded).expect("valid base64");
        let svg = String::from_utf8(svg).expect("utf8");
        assert!(svg.contains("PS1A2B3C4D5"));
        assert!(svg.starts_with("<svg"));
    }
}

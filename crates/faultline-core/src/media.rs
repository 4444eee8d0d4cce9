use serde::Deserialize;

use crate::message::ErrorMessage;

/// Wire format for error response bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
}

impl MediaType {
    /// Value for the `Content-Type` response header
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    /// Serialize an [`ErrorMessage`] into this format
    ///
    /// `ErrorMessage` is a flat struct of primitives, so serialization
    /// cannot fail for either backend.
    pub fn render(self, message: &ErrorMessage) -> String {
        match self {
            Self::Json => serde_json::to_string(message).expect("error body serializes as JSON"),
            Self::Xml => {
                quick_xml::se::to_string_with_root("error", message).expect("error body serializes as XML")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;

    #[test]
    fn json_body_carries_code_message_and_details() {
        let message = ErrorMessage::new(
            StatusCode::BAD_REQUEST,
            "Unable to process JSON",
            Some("Something went wrong here!".to_owned()),
        );

        assert_eq!(
            MediaType::Json.render(&message),
            r#"{"code":400,"message":"Unable to process JSON","details":"Something went wrong here!"}"#
        );
    }

    #[test]
    fn xml_body_nests_fields_under_error_root() {
        let message = ErrorMessage::new(
            StatusCode::BAD_REQUEST,
            "Unable to process JSON",
            Some("Something went wrong here!".to_owned()),
        );

        assert_eq!(
            MediaType::Xml.render(&message),
            "<error><code>400</code><message>Unable to process JSON</message>\
             <details>Something went wrong here!</details></error>"
        );
    }

    #[test]
    fn xml_body_omits_details_element_when_unset() {
        let message = ErrorMessage::new(StatusCode::INTERNAL_SERVER_ERROR, "Oops!", None);

        assert_eq!(
            MediaType::Xml.render(&message),
            "<error><code>500</code><message>Oops!</message></error>"
        );
    }

    #[test]
    fn xml_body_escapes_markup_in_text() {
        let message = ErrorMessage::new(StatusCode::BAD_REQUEST, "invalid type: <widget>", None);
        let body = MediaType::Xml.render(&message);

        assert!(body.contains("invalid type: &lt;widget&gt;"));
    }

    #[test]
    fn content_types_match_format() {
        assert_eq!(MediaType::Json.content_type(), "application/json");
        assert_eq!(MediaType::Xml.content_type(), "application/xml");
    }

    #[test]
    fn deserializes_from_lowercase_names() {
        assert_eq!(serde_json::from_str::<MediaType>(r#""json""#).unwrap(), MediaType::Json);
        assert_eq!(serde_json::from_str::<MediaType>(r#""xml""#).unwrap(), MediaType::Xml);
    }
}

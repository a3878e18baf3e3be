use std::borrow::Cow;

/// Wraps an operation-specific XML fragment in the fixed SOAP 1.1 envelope
///
/// The envelope is the same for every operation: XML declaration, the
/// standard `xsi`/`xsd`/`soap` namespace attributes, and a `soap:Body`
/// holding the fragment. The fragment is embedded as-is; callers escape
/// any interpolated text with [`escape_text`] before building it.
pub fn envelope(fragment: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope \
         xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <soap:Body>{fragment}</soap:Body>\
         </soap:Envelope>"
    )
}

/// Escapes a value for embedding as XML element text
///
/// Every caller-supplied value (usernames, passwords, search terms) goes
/// through this before interpolation, so reserved characters arrive at the
/// service as literal text instead of markup.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(value)
}

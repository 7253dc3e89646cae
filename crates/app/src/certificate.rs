use base64::Engine as _;

/// Hand fetched PDF bytes to the browser as a file download.
///
/// The bytes are wrapped in a data URL on a transient anchor element; there
/// is no server-side download route to link to, the API returns the body
/// directly.
pub fn trigger_download(filename: &str, bytes: &[u8]) {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let script = format!(
        "const link = document.createElement('a');\n\
         link.href = 'data:application/pdf;base64,{encoded}';\n\
         link.download = '{filename}';\n\
         document.body.appendChild(link);\n\
         link.click();\n\
         link.remove();"
    );
    // Fire-and-forget: the anchor click needs no result back.
    let _ = dioxus::document::eval(&script);
}

//! Request fixtures: file payloads and multipart bodies.

const BOUNDARY: &str = "imagedrop-test-boundary";

/// PNG-signature-prefixed payload padded to `len` bytes. The service
/// validates by declared name and type, not content, so the padding is
/// arbitrary.
pub fn png_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.resize(len, 0);
    data
}

/// Build a raw multipart/form-data body with a single field.
/// Returns (content-type header value, body bytes).
pub fn multipart_body(
    field_name: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", BOUNDARY),
        body,
    )
}

/// Multipart body carrying the upload under the expected `file` field.
pub fn file_upload_body(filename: &str, content_type: &str, data: &[u8]) -> (String, Vec<u8>) {
    multipart_body("file", filename, content_type, data)
}

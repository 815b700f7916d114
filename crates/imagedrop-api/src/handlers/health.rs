/// Liveness probe: plain-text greeting at the root path.
pub async fn health() -> &'static str {
    "hello world!"
}

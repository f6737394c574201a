/// Liveness probe.
pub async fn ping() -> &'static str {
    "it's working"
}

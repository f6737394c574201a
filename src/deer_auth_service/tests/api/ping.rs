use crate::helpers::TestApp;

#[tokio::test]
async fn ping_returns_200() {
    let app = TestApp::new().await;

    let response = app.get_ping().await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "it's working");
}

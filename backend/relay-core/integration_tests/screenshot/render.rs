use crate::helpers::{SCREENSHOT_PATH, screenshot_config};

use relay_core::error::ScreenshotError;
use relay_core::screenshot::ScreenshotClient;

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([20, 120, 220]));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Jpeg).unwrap();
    bytes.into_inner()
}

// ============================================================================
// ScreenshotClient::render_pdf() against a mocked screenshot service
// ============================================================================

/// **VALUE**: Verifies the target is requested under the service path and wrapped in a PDF.
///
/// **WHY THIS MATTERS**: The service returns JPEG; users receive a document.
///
/// **BUG THIS CATCHES**: Would catch the target URL being mangled, or raw image bytes being
/// sent as the document.
#[tokio::test]
async fn given_service_returns_jpeg_when_rendering_then_pdf_bytes() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{SCREENSHOT_PATH}https://example.com")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(jpeg(64, 256)))
        .expect(1)
        .mount(&server)
        .await;

    let client = ScreenshotClient::new(&screenshot_config(&server)).unwrap();

    // WHEN
    let pdf = client.render_pdf("https://example.com").await.unwrap();

    // THEN
    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(lopdf::Document::load_mem(&pdf).unwrap().get_pages().len(), 1);
}

/// **VALUE**: Verifies a non-200 status gives the user-facing status message.
///
/// **BUG THIS CATCHES**: Would catch an error page being fed to the image decoder.
#[tokio::test]
async fn given_service_returns_404_when_rendering_then_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ScreenshotClient::new(&screenshot_config(&server)).unwrap();

    let error = client.render_pdf("https://example.com").await.unwrap_err();

    assert!(matches!(error, ScreenshotError::UpstreamStatus { .. }));
    assert_eq!(error.description(), "Screenshot API returned status 404");
}

/// **VALUE**: Verifies a 202 (screenshot still queued) is reported as a status error.
///
/// **BUG THIS CATCHES**: Would catch an empty accepted response reaching the image decoder.
#[tokio::test]
async fn given_service_returns_202_when_rendering_then_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let client = ScreenshotClient::new(&screenshot_config(&server)).unwrap();

    let error = client.render_pdf("https://example.com").await.unwrap_err();

    assert_eq!(error.description(), "Screenshot API returned status 202");
}

/// **VALUE**: Verifies a 200 with a non-image body is a decode error.
///
/// **BUG THIS CATCHES**: Would catch a panic inside the PDF conversion.
#[tokio::test]
async fn given_service_returns_html_when_rendering_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>queued</html>"))
        .mount(&server)
        .await;

    let client = ScreenshotClient::new(&screenshot_config(&server)).unwrap();

    let result = client.render_pdf("https://example.com").await;

    assert!(matches!(result, Err(ScreenshotError::Decode { .. })));
}

use crate::helpers::{IMAGE_PATH, REFUSED_BASE, image_config};

use relay_core::error::ImageError;
use relay_core::image_gen::ImageGenerator;

use std::time::Duration;

use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FAKE_IMAGE: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

// ============================================================================
// ImageGenerator::generate() / download() against a mocked image service
// ============================================================================

/// **VALUE**: Verifies `generate()` returns one image per configured count, each from its own
/// request with the fixed parameters.
///
/// **WHY THIS MATTERS**: Users get a media group of exactly this many pictures.
///
/// **BUG THIS CATCHES**: Would catch a short batch, or the size and model parameters not
/// being sent.
#[tokio::test]
async fn given_healthy_service_when_generating_then_one_image_per_count() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(format!("^{IMAGE_PATH}sunset%20over%20dunes$")))
        .and(query_param("width", "1024"))
        .and(query_param("height", "1024"))
        .and(query_param("nologo", "true"))
        .and(query_param("model", "flux-pro"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(FAKE_IMAGE))
        .expect(3)
        .mount(&server)
        .await;

    let images = ImageGenerator::new(&image_config(&server.uri())).unwrap();

    // WHEN
    let batch = images.generate("sunset over dunes").await.unwrap();

    // THEN
    assert_eq!(batch.len(), 3);
    assert!(batch.iter().all(|bytes| bytes == FAKE_IMAGE));
}

/// **VALUE**: Verifies timeouts are retried up to the configured count.
///
/// **WHY THIS MATTERS**: The image service is slow under load; a single timeout should not
/// fail the command, but a dead service must not be retried forever.
///
/// **BUG THIS CATCHES**: Would catch retries being skipped, unbounded, or the attempt count
/// in the error being wrong.
#[tokio::test]
async fn given_service_always_times_out_when_downloading_then_retries_then_fails() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(FAKE_IMAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let mut config = image_config(&server.uri());
    config.retries = 2;
    let images = ImageGenerator::new(&config).unwrap();
    let url = images.prompt_url("cat", 1_234_567_890).unwrap();

    // WHEN
    let result = images.download(&url).await;

    // THEN
    match result {
        Err(ImageError::Download { attempts, .. }) => assert_eq!(attempts, 2),
        other => panic!("expected Download error, got {other:?}"),
    }
}

/// **VALUE**: Verifies connection failures are retried like timeouts.
///
/// **BUG THIS CATCHES**: Would catch `is_connect()` errors being treated as fatal.
#[tokio::test]
async fn given_unreachable_service_when_downloading_then_all_attempts_used() {
    let images = ImageGenerator::new(&image_config(REFUSED_BASE)).unwrap();
    let url = images.prompt_url("cat", 1_234_567_890).unwrap();

    let result = images.download(&url).await;

    match result {
        Err(ImageError::Download { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("expected Download error, got {other:?}"),
    }
}

/// **VALUE**: Verifies a status error is returned after a single request.
///
/// **WHY THIS MATTERS**: A 4xx means the prompt was rejected; asking again gives the same answer.
///
/// **BUG THIS CATCHES**: Would catch status errors being fed into the retry loop.
#[tokio::test]
async fn given_service_returns_404_when_downloading_then_no_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let images = ImageGenerator::new(&image_config(&server.uri())).unwrap();
    let url = images.prompt_url("cat", 1_234_567_890).unwrap();

    let result = images.download(&url).await;

    assert!(matches!(result, Err(ImageError::UpstreamStatus { .. })));
}

/// **VALUE**: Verifies one failed image fails the whole batch.
///
/// **BUG THIS CATCHES**: Would catch a partial media group being sent with holes.
#[tokio::test]
async fn given_one_request_fails_when_generating_then_batch_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(FAKE_IMAGE))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let images = ImageGenerator::new(&image_config(&server.uri())).unwrap();

    let result = images.generate("cat").await;

    assert!(matches!(result, Err(ImageError::UpstreamStatus { .. })));
}

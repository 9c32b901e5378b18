use crate::config::ImageConfig;
use crate::image_gen::{ImageGenerator, RetryBackoff, SEED_MAX, SEED_MIN};

use std::time::Duration;

use backoff::backoff::Backoff;

fn generator(endpoint: &str) -> ImageGenerator {
    ImageGenerator::new(&ImageConfig {
        endpoint: endpoint.to_string(),
        ..ImageConfig::default()
    })
    .unwrap()
}

/// **VALUE**: Verifies the prompt becomes an encoded path segment followed by the fixed
/// query parameters.
///
/// **WHY THIS MATTERS**: The image API reads the prompt from the path; an unencoded space or
/// `?` would truncate it.
///
/// **BUG THIS CATCHES**: Would catch the prompt being placed in the query or not encoded.
#[test]
fn given_prompt_with_spaces_when_url_built_then_encoded_with_parameters() {
    // GIVEN
    let images = generator("https://image.pollinations.ai/prompt/");

    // WHEN
    let url = images
        .prompt_url("a girl with rolex watch?", 1234567890)
        .unwrap();

    // THEN
    assert_eq!(url.path(), "/prompt/a%20girl%20with%20rolex%20watch%3F");
    assert_eq!(
        url.query(),
        Some("width=1024&height=1024&seed=1234567890&nologo=true&model=flux-pro")
    );
}

/// **VALUE**: Verifies a base path without a trailing slash keeps its last segment.
///
/// **BUG THIS CATCHES**: Would catch `/prompt` being replaced by the prompt itself.
#[test]
fn given_endpoint_without_trailing_slash_when_url_built_then_base_path_kept() {
    let images = generator("http://127.0.0.1:8080/prompt");

    let url = images.prompt_url("cat", 1_000_000_000).unwrap();

    assert_eq!(url.path(), "/prompt/cat");
}

/// **VALUE**: Verifies seeds stay within the 10-digit range.
///
/// **BUG THIS CATCHES**: Would catch an exclusive upper bound or a wrong lower bound.
#[test]
fn given_many_seeds_when_generated_then_all_have_ten_digits() {
    for _ in 0..1000 {
        let seed = ImageGenerator::random_seed();
        assert!((SEED_MIN..=SEED_MAX).contains(&seed));
        assert_eq!(seed.to_string().len(), 10);
    }
}

/// **VALUE**: Verifies the retry schedule allows `attempts - 1` waits of the configured delay.
///
/// **WHY THIS MATTERS**: The download loop stops as soon as the schedule is exhausted, so this
/// is what bounds the number of requests per image.
///
/// **BUG THIS CATCHES**: Would catch an unbounded schedule or one wait too many or too few.
#[test]
fn given_three_attempts_when_schedule_drained_then_two_delays_then_none() {
    let delay = Duration::from_millis(250);
    let mut backoff = RetryBackoff::new(delay, 3);

    assert_eq!(backoff.next_backoff(), Some(delay));
    assert_eq!(backoff.next_backoff(), Some(delay));
    assert_eq!(backoff.next_backoff(), None);
    assert_eq!(backoff.next_backoff(), None);
}

/// **VALUE**: Verifies a single allowed attempt means no retry at all.
///
/// **BUG THIS CATCHES**: Would catch an underflow when `attempts` is 1 or 0.
#[test]
fn given_single_attempt_when_schedule_drained_then_none_immediately() {
    assert_eq!(RetryBackoff::new(Duration::ZERO, 1).next_backoff(), None);
    assert_eq!(RetryBackoff::new(Duration::ZERO, 0).next_backoff(), None);
}

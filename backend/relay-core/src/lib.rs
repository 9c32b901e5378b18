pub mod bin_lookup;
pub mod config;
pub mod error;
pub mod image_gen;
pub mod screenshot;

mod http;
#[cfg(test)]
mod tests;

pub const DRLAB_API_BASE_URL: &str = "https://drlabapis.onrender.com/api";
pub const DEFAULT_CARD_ENDPOINT: &str = const_format::concatcp!(DRLAB_API_BASE_URL, "/ccgenerator");
pub const DEFAULT_BIN_ENDPOINT: &str = const_format::concatcp!(DRLAB_API_BASE_URL, "/bin");
pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://image.pollinations.ai/prompt/";
pub const DEFAULT_SCREENSHOT_ENDPOINT: &str = "https://image.thum.io/get/fullpage/noanimate/";

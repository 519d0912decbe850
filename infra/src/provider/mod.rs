//! Remote identity provider adapters

mod http_otp;
mod mock_otp;

pub use http_otp::HttpOtpProvider;
pub use mock_otp::{MockOtpProvider, MOCK_ACCEPTED_CODE};

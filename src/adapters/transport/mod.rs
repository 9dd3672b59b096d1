//! HTTP Transport Adapters
//!
//! - **ReqwestTransport** - Real HTTPS calls through `reqwest`
//! - **MockTransport** - Scripted replies and request recording (testing)

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::MockTransport;
pub use reqwest_transport::ReqwestTransport;

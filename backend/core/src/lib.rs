pub mod error;
pub mod units;
pub mod wire;

pub use error::RelayError;
pub use units::format_bytes;
pub use wire::{
    DownloadRequest, DownloadResponse, ErrorResponse, StartRequest, StartResponse,
};

use candle_core::Device;
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::warn;

use super::error::EmbeddingError;

/// Selects the compute device for encoder inference.
///
/// GPU backends are tried only when the matching feature is compiled in;
/// anything else falls back to CPU, which is always available.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            debug!("Encoder running on Metal");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            debug!("Encoder running on CUDA");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    debug!("Encoder running on CPU");
    Ok(Device::Cpu)
}

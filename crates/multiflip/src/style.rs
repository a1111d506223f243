//! Process-wide style installation
//!
//! The source effect injects a shared stylesheet on first use. Here
//! that is explicit initialization state: the first sequencer to
//! activate asks its surface to install styles, every later activation
//! is a no-op.

use std::sync::Once;

use crate::surface::Surface;

static STYLES_INSTALLED: Once = Once::new();

/// Install shared visual styles at most once per process
pub fn install_once<S: Surface>(surface: &S) {
    STYLES_INSTALLED.call_once(|| {
        tracing::debug!("installing shared multiflip styles");
        surface.install_styles();
    });
}

/// Check whether styles have been installed
pub fn styles_installed() -> bool {
    STYLES_INSTALLED.is_completed()
}

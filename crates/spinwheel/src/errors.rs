//! Error reporting and exit codes.

use spinwheel_core::{exit_codes, WheelError};

/// Exit code for a wheel error.
#[must_use]
pub fn handle_error(err: &WheelError) -> i32 {
    match err {
        WheelError::Interrupted => exit_codes::ERROR_CANCELED,
        err if err.is_config() => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
///
/// Looks through context layers for a [`WheelError`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<WheelError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// Print the error chain on stderr.
///
/// An interrupted spin gets a short notice instead of an error.
pub fn report(err: &anyhow::Error, code: i32) {
    if code == exit_codes::ERROR_CANCELED {
        spinwheel_cli::ui::print_notice("spin interrupted");
    } else {
        spinwheel_cli::ui::print_error(&format!("{err:#}"));
    }
}

//! Operation logging macros
//!
//! Console operations (catalog load, save, install) are bracketed by a
//! start event and either an end or an end-error event. Start and end are
//! `DEBUG` bookkeeping that the console's own log panel never shows; the
//! error event is `ERROR` and carries the rendered [`ExError`] as its
//! message so it reads well wherever it lands.
//!
//! [`ExError`]: crate::errors::ExError

/// Log the start of an operation and return the `Instant` it started at
///
/// # Example
///
/// ```
/// # use devcon_core::log_op_start;
/// let started = log_op_start!("catalog_load");
/// let _ = log_op_start!("catalog_load", path = "Commands.xml");
/// # let _ = started;
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {{
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
        ::std::time::Instant::now()
    }};
    ($op:expr, $($field:tt)*) => {{
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
        ::std::time::Instant::now()
    }};
}

/// Log the successful end of an operation started at `started`
///
/// # Example
///
/// ```
/// # use devcon_core::{log_op_end, log_op_start};
/// let started = log_op_start!("catalog_load");
/// log_op_end!("catalog_load", started, catalog_len = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, $started:expr) => {{
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $started.elapsed().as_millis() as u64,
        );
    }};
    ($op:expr, $started:expr, $($field:tt)*) => {{
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $started.elapsed().as_millis() as u64,
            $($field)*
        );
    }};
}

/// Log a failed operation started at `started`
///
/// `$err` is anything convertible into `ExError`.
///
/// # Example
///
/// ```
/// # use devcon_core::{log_op_error, log_op_start};
/// # use devcon_core::errors::ConsoleError;
/// let started = log_op_start!("catalog_load");
/// let err = ConsoleError::CatalogSourceMissing { path: "Commands.xml".to_string() };
/// log_op_error!("catalog_load", started, err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $started:expr, $err:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $started.elapsed().as_millis() as u64,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = %ex_err,
        );
    }};
    ($op:expr, $started:expr, $err:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $started.elapsed().as_millis() as u64,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = %ex_err,
            $($field)*
        );
    }};
}

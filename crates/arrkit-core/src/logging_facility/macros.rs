//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use arrkit_core::log_op_start;
/// log_op_start!("min_x");
/// log_op_start!("min_x", item_count = 4, limit = 2);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::__private::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::__private::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use arrkit_core::log_op_end;
/// log_op_end!("min_x", duration_ms = 0);
/// log_op_end!("min_x", duration_ms = 0, result_len = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::__private::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::__private::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
///
/// # Example
///
/// ```
/// # use arrkit_core::log_op_error;
/// # use arrkit_core::errors::ArrError;
/// let err = ArrError::EmptySource { op: "choose".to_string() };
/// log_op_error!("choose", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__private::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__private::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Time `$body`, logging start, then end or end_error.
///
/// `$body` must evaluate to `crate::errors::Result<T>`; the result is
/// returned unchanged.
macro_rules! logged_op {
    ($op:expr, { $($start:tt)* }, $body:expr) => {{
        let started = std::time::Instant::now();
        $crate::log_op_start!($op, $($start)*);
        let result: $crate::errors::Result<_> = $body;
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                $crate::log_op_end!($op, duration_ms = duration_ms);
            }
            Err(err) => {
                $crate::log_op_error!($op, err.clone(), duration_ms = duration_ms);
            }
        }
        result
    }};
}

pub(crate) use logged_op;

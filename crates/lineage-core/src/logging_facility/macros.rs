//! Operation lifecycle macros
//!
//! Every logged operation emits a `start` event, then exactly one of `end`
//! or `end_error`. Each event carries `component`, `op` and `event`; extra
//! `key = value` fields pass straight through to `tracing`.

#[doc(hidden)]
pub mod __private {
    pub use lineage_core_types::schema;
    pub use tracing;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        $crate::logging_facility::macros::__private::tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::macros::__private::schema::$event,
            $($($field)*)?
        )
    };
}

/// Operation started
///
/// ```
/// # use lineage_core::log_op_start;
/// log_op_start!("resolve");
/// log_op_start!("resolve", person = "Chit", relation = "Son");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Operation finished; `duration_ms` is required
///
/// ```
/// # use lineage_core::log_op_end;
/// log_op_end!("resolve", duration_ms = 3, result_len = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info, $op, EVENT_END, duration_ms = $duration $(, $($field)*)?
        )
    };
}

/// Operation failed
///
/// The error is converted into `ExError` so the event carries its stable
/// `err_kind` and `err_code`. Logged at warn: a rejected record is an
/// expected outcome of batch input.
///
/// ```
/// # use lineage_core::{log_op_error, errors::FamilyError};
/// let err = FamilyError::PersonNotFound { name: "Ghost".to_string() };
/// log_op_error!("resolve", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            warn,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = ex_err.message()
            $(, $($field)*)?
        )
    }};
}

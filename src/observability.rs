//! This module provides observability hooks for the codec.
//!
//! Each codec call reports a structured key-value line through the `log` facade
//! under the `huffpack::metric` target, so the host decides (via `env_logger`
//! filters such as `HUFFPACK_LOG=huffpack::metric=debug`) whether it is printed.

/// Logs a structured key-value metric string at debug level.
///
/// # Example
/// ```
/// use huffpack::log_metric;
/// let leaves = 3;
/// log_metric!("event"="encode", "leaves"=&leaves);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__log::log_enabled!(target: "huffpack::metric", $crate::__log::Level::Debug) {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            $crate::__log::debug!(target: "huffpack::metric", "HUFFPACK_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

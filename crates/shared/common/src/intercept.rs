//! Execution interceptor.
//!
//! Wraps a boundary call (handler, service, error translator), logs the
//! arguments on entry and the elapsed time with the result or error on exit.
//! The wrapped outcome is always returned untouched.

use std::fmt::{Debug, Display};
use std::future::Future;
use std::time::Instant;

use tracing::{error, info};

/// Run `call` under the interceptor.
///
/// Timing covers the whole await of `call`, including any store latency.
pub async fn intercept<A, T, E, Fut>(
    component: &str,
    operation: &str,
    args: &A,
    call: Fut,
) -> Result<T, E>
where
    A: Debug + ?Sized,
    T: Debug,
    E: Debug + Display,
    Fut: Future<Output = Result<T, E>>,
{
    log_entry(component, operation, args);
    let started = Instant::now();
    let outcome = call.await;
    log_exit(component, operation, started, &outcome);
    outcome
}

/// Synchronous variant of [`intercept`].
pub fn intercept_sync<A, T, E, F>(component: &str, operation: &str, args: &A, call: F) -> Result<T, E>
where
    A: Debug + ?Sized,
    T: Debug,
    E: Debug + Display,
    F: FnOnce() -> Result<T, E>,
{
    log_entry(component, operation, args);
    let started = Instant::now();
    let outcome = call();
    log_exit(component, operation, started, &outcome);
    outcome
}

/// Last path segment of a type name, without generic parameters.
///
/// `user_service_lib::service::UserManager` becomes `UserManager`.
pub fn simple_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn log_entry<A: Debug + ?Sized>(component: &str, operation: &str, args: &A) {
    info!(
        component,
        operation,
        arguments = ?args,
        ">>> {}.{}() called",
        component,
        operation
    );
}

fn log_exit<T: Debug, E: Debug + Display>(
    component: &str,
    operation: &str,
    started: Instant,
    outcome: &Result<T, E>,
) {
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match outcome {
        Ok(value) => info!(
            component,
            operation,
            elapsed_ms,
            result = ?value,
            "<<< {}.{}() completed in {} ms",
            component,
            operation,
            elapsed_ms
        ),
        Err(err) => error!(
            component,
            operation,
            elapsed_ms,
            error = %err,
            detail = ?err,
            "!!! {}.{}() failed after {} ms",
            component,
            operation,
            elapsed_ms
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedLogs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deliberately neither `Clone` nor `PartialEq`.
    #[derive(Debug)]
    struct Marker {
        token: u64,
    }

    impl Display for Marker {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "marker {}", self.token)
        }
    }

    #[tokio::test]
    async fn test_intercept_returns_value() {
        let result: Result<u32, Marker> =
            intercept("Component", "operation", &("a", 1), async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_intercept_returns_original_error() {
        let result: Result<(), Marker> =
            intercept("Component", "operation", &(), async { Err(Marker { token: 9 }) }).await;
        assert_eq!(result.unwrap_err().token, 9);
    }

    #[tokio::test]
    async fn test_intercept_awaits_call_once() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), Marker> = intercept("Component", "operation", "arg", async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;
        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_intercept_sync_preserves_outcome() {
        let ok: Result<&str, Marker> = intercept_sync("Component", "op", &1, || Ok("done"));
        assert_eq!(ok.unwrap(), "done");

        let err: Result<&str, Marker> =
            intercept_sync("Component", "op", &1, || Err(Marker { token: 3 }));
        assert_eq!(err.unwrap_err().token, 3);
    }

    #[test]
    fn test_intercept_in_blocking_context() {
        let result: Result<i32, Marker> =
            tokio_test::block_on(intercept("Component", "op", &[1, 2, 3], async { Ok(-1) }));
        assert_eq!(result.unwrap(), -1);
    }

    #[tokio::test]
    async fn test_success_logs_entry_and_exit_at_info() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let _: Result<u32, Marker> =
            intercept("Component", "operation", &("a", 1), async { Ok(42) }).await;

        let lines = logs.lines();
        assert_eq!(lines.len(), 2, "{:?}", lines);

        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains(">>> Component.operation() called"));
        assert!(lines[0].contains(r#"arguments=("a", 1)"#));

        assert!(lines[1].contains("INFO"));
        assert!(lines[1].contains("<<< Component.operation() completed in"));
        assert!(lines[1].contains("elapsed_ms="));
        assert!(lines[1].contains("result=42"));
    }

    #[tokio::test]
    async fn test_failure_logs_error_with_message_and_detail() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let _: Result<(), Marker> =
            intercept("Component", "operation", &7, async { Err(Marker { token: 9 }) }).await;

        let lines = logs.lines();
        assert_eq!(lines.len(), 2, "{:?}", lines);

        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("arguments=7"));

        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].contains("!!! Component.operation() failed after"));
        assert!(lines[1].contains("elapsed_ms="));
        assert!(lines[1].contains("error=marker 9"));
        assert!(lines[1].contains("detail=Marker { token: 9 }"));
        assert!(!lines.iter().any(|l| l.contains("<<<")));
    }

    #[test]
    fn test_intercept_sync_logs_same_events() {
        let logs = CapturedLogs::default();

        tracing::subscriber::with_default(logs.subscriber(), || {
            let _: Result<&str, Marker> = intercept_sync("Translator", "render", &1, || Ok("done"));
        });

        let lines = logs.lines();
        assert!(lines[0].contains(">>> Translator.render() called"));
        assert!(lines[1].contains("<<< Translator.render() completed in"));
        assert!(lines[1].contains(r#"result="done""#));
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name::<Marker>(), "Marker");
        assert_eq!(simple_name::<Vec<String>>(), "Vec");
        assert_eq!(simple_name::<u8>(), "u8");
    }
}

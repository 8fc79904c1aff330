//! Events emitted while dispatching, captured from a `fmt` subscriber.
#![cfg(feature = "tracing")]

use kroute::{
    Dispatcher, ObjectRef, RegistryBuilder, Request, Response, Scheme,
    handlers::TracingHandler,
    testing::{CallLog, EmittingHandler, FailingHandler, RecordingHandler, UnresolvableObject},
};
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, util::SubscriberInitExt};

mod common;
use common::{CountingHandler, object, pod};

/// Formatted log output shared with the subscriber's writer.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Install a subscriber writing here for the current thread.
    fn install(&self) -> DefaultGuard {
        let writer = self.clone();
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("kroute_std=trace"))
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(move || writer.clone())
            .set_default()
    }

    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_handler_failure_and_promotion_are_logged() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let log = CallLog::new();
    let registry = RegistryBuilder::new()
        .register(pod(), TracingHandler::new(CountingHandler, "counter"))
        .register(pod(), TracingHandler::new(FailingHandler::new("boom"), "failing"))
        .register(pod(), TracingHandler::new(CountingHandler, "counter"))
        .register(
            pod(),
            TracingHandler::new(RecordingHandler::new("recorder", &log), "recorder"),
        )
        .build();

    let dispatcher = Dispatcher::new(Arc::new(registry), Scheme::new());
    let mut resp = Response::new();
    let err = dispatcher
        .dispatch(Request::new(pod(), "default", "traced"), &mut resp)
        .await
        .unwrap_err();

    assert_eq!(err.handler_errors().len(), 1);
    assert_eq!(log.entries(), ["recorder"]);
    assert!(resp.is_empty());

    let output = logs.contents();
    assert!(output.contains("registering handler"), "{output}");
    assert!(output.contains("dispatching request"), "{output}");
    assert!(output.contains("handlers=4"), "{output}");
    assert!(output.contains("handler failed"), "{output}");
    assert!(output.contains("error=boom"), "{output}");
    assert!(output.contains("index=1"), "{output}");
    assert!(
        output.contains("promoting produced object into the request"),
        "{output}"
    );
    // Each wrapped handler runs inside its own span.
    assert!(output.contains("handler=failing"), "{output}");
    assert!(output.contains("handler=recorder"), "{output}");
}

#[tokio::test]
async fn test_several_matches_are_warned_about() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let registry = RegistryBuilder::new()
        .register(
            pod(),
            EmittingHandler::new(vec![
                object(pod(), "default", "x"),
                object(pod(), "default", "x"),
            ]),
        )
        .build();

    Dispatcher::new(Arc::new(registry), Scheme::new())
        .dispatch(Request::new(pod(), "default", "x"), &mut Response::new())
        .await
        .unwrap();

    let output = logs.contents();
    assert!(
        output.contains("several objects match the request, keeping the last"),
        "{output}"
    );
    assert!(output.contains("matches=2"), "{output}");
    assert!(output.contains("WARN"), "{output}");
}

#[tokio::test]
async fn test_abort_is_logged_as_an_error() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let registry = RegistryBuilder::new()
        .register(
            pod(),
            EmittingHandler::new(vec![
                Arc::new(UnresolvableObject::new("default", "broken")) as ObjectRef,
            ]),
        )
        .build();

    let err = Dispatcher::new(Arc::new(registry), Scheme::new())
        .dispatch(Request::new(pod(), "default", "x"), &mut Response::new())
        .await
        .unwrap_err();
    assert!(err.is_fatal());

    let output = logs.contents();
    assert!(output.contains("ERROR"), "{output}");
    assert!(output.contains("aborting dispatch"), "{output}");
    assert!(output.contains("object default/broken has no kind set"), "{output}");
}

#[test]
fn test_blocking_dispatch_without_handlers_is_traced() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();

    let dispatcher = Dispatcher::new(Arc::new(RegistryBuilder::new().build()), Scheme::new());
    let mut resp = Response::new();
    dispatcher
        .dispatch_blocking(Request::new(pod(), "default", "idle"), &mut resp)
        .unwrap();
    assert!(resp.is_empty());
    assert!(!dispatcher.registry().has_handlers(&pod()));

    let output = logs.contents();
    assert!(output.contains("no handlers registered"), "{output}");
    assert!(output.contains("key=default/idle"), "{output}");
    assert!(!output.contains("dispatching request"), "{output}");
}

//! Registration and dispatch from many threads at once.

use kroute::{
    Dispatcher, GroupVersionKind, HandlerRegistry, Request, Response, Scheme,
    testing::{CallLog, RecordingHandler},
};
use std::{sync::Arc, thread};

mod common;
use common::{ConfigMapHandler, CountingHandler, pod};

const WRITERS: usize = 4;
const READERS: usize = 4;
const ROUNDS: usize = 200;

fn writer_kind(writer: usize) -> GroupVersionKind {
    GroupVersionKind::new("stress.example.com", "v1", format!("Kind{writer}"))
}

#[test]
fn test_concurrent_registration_and_dispatch() {
    let registry = Arc::new(HandlerRegistry::new());
    registry.add_handler(pod(), CountingHandler);
    registry.add_handler(pod(), ConfigMapHandler);
    registry.add_handler(pod(), CountingHandler);

    let dispatcher = Arc::new(Dispatcher::new(registry.clone(), Scheme::new()));
    let log = CallLog::new();

    thread::scope(|scope| {
        for writer in 0..WRITERS {
            let registry = registry.clone();
            let log = log.clone();
            scope.spawn(move || {
                for round in 0..ROUNDS {
                    registry.add_handler(
                        writer_kind(writer),
                        RecordingHandler::new(format!("{writer}-{round}"), &log),
                    );
                }
            });
        }

        for reader in 0..READERS {
            let dispatcher = dispatcher.clone();
            scope.spawn(move || {
                for round in 0..ROUNDS {
                    let mut resp = Response::new();
                    let req = Request::new(pod(), "default", format!("{reader}-{round}"));
                    dispatcher.dispatch_blocking(req, &mut resp).unwrap();
                    // The pod handlers never change while we dispatch.
                    assert_eq!(resp.len(), 1);
                }
            });
        }
    });

    for writer in 0..WRITERS {
        assert_eq!(registry.handler_count(&writer_kind(writer)), ROUNDS);
    }
    assert_eq!(registry.group_version_kinds().len(), WRITERS + 1);
    // Registration alone never invokes a handler.
    assert!(log.entries().is_empty());
}

#[test]
fn test_dispatch_sees_a_complete_snapshot() {
    let registry = Arc::new(HandlerRegistry::new());
    let dispatcher = Arc::new(Dispatcher::new(registry.clone(), Scheme::new()));
    let kind = writer_kind(0);

    thread::scope(|scope| {
        let writer_registry = registry.clone();
        let writer_kind = kind.clone();
        scope.spawn(move || {
            let log = CallLog::new();
            for round in 0..ROUNDS {
                writer_registry.add_handler(
                    writer_kind.clone(),
                    RecordingHandler::new(round.to_string(), &log),
                );
            }
        });

        for _ in 0..READERS {
            let dispatcher = dispatcher.clone();
            let kind = kind.clone();
            scope.spawn(move || {
                let mut last_seen = 0;
                for _ in 0..ROUNDS {
                    let snapshot = dispatcher.registry().handlers_for(&kind);
                    // Append-only: a later snapshot is never shorter.
                    assert!(snapshot.len() >= last_seen);
                    last_seen = snapshot.len();

                    let req = Request::new(kind.clone(), "default", "x");
                    dispatcher
                        .dispatch_blocking(req, &mut Response::new())
                        .unwrap();
                }
            });
        }
    });

    assert_eq!(registry.handler_count(&kind), ROUNDS);
}

//! Event validation and dispatch from the engine to bound handlers.

use oriel_common::{Event, EventKind, EventNumber, Payload, WindowId};

use crate::bridge::Bridge;

/// What happened to one delivered event.
///
/// Dispatch never fails from the engine's point of view; the outcome
/// exists for adapters and tests that want to observe the path taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler ran. `responded` is false when it returned
    /// [`Reply::None`](oriel_common::Reply::None).
    Delivered { responded: bool },
    /// The raw kind is not part of the protocol.
    UnknownKind,
    /// No handler is bound for the element on this window.
    NoBinding,
    /// The handler's reply could not be serialized; no response was sent.
    SerializationFailed,
}

impl Bridge {
    /// Deliver one engine event to the handler bound for its element.
    ///
    /// Called by the engine adapter, from an engine-owned thread, whenever
    /// a bound element fires; dispatches for different elements may arrive
    /// concurrently. Never panics: malformed input is logged and dropped,
    /// and a handler that returns no value produces no response at all,
    /// which is distinct from an explicit JSON `null`.
    pub fn dispatch_event(
        &self,
        window: WindowId,
        raw_kind: u32,
        element: &str,
        payload: Payload,
        event: EventNumber,
    ) -> DispatchOutcome {
        let kind = match EventKind::from_raw(raw_kind) {
            Some(kind) => kind,
            None => {
                tracing::warn!(%window, element, raw_kind, %event, "event rejected: unknown kind");
                return DispatchOutcome::UnknownKind;
            }
        };

        let id = match self.engine().bound_id(window, element) {
            Some(id) => id,
            None => {
                tracing::warn!(%window, element, %event, "event rejected: element has no binding");
                return DispatchOutcome::NoBinding;
            }
        };

        let handler = match self.registry().lookup(window, id) {
            Some(handler) => handler,
            None => {
                tracing::warn!(
                    %window,
                    element,
                    %id,
                    %event,
                    "event rejected: engine reports a binding the registry never saw"
                );
                return DispatchOutcome::NoBinding;
            }
        };

        tracing::debug!(%window, element, kind = ?kind, %event, "event dispatched");

        let ui_event = Event {
            window,
            kind,
            element: element.to_string(),
            payload,
        };
        let reply = handler(&ui_event);

        match reply.into_response_body() {
            Ok(Some(body)) => {
                self.engine().set_event_response(window, event, &body);
                DispatchOutcome::Delivered { responded: true }
            }
            Ok(None) => DispatchOutcome::Delivered { responded: false },
            Err(e) => {
                tracing::error!(
                    %window,
                    element,
                    %event,
                    error = %e,
                    "reply serialization failed, response suppressed"
                );
                DispatchOutcome::SerializationFailed
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::testing::FakeEngine;
    use oriel_common::{EventKind, Reply};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const CALLBACK: u32 = EventKind::Callback as u32;

    fn bridge_with_engine() -> (Arc<FakeEngine>, Bridge) {
        let engine = FakeEngine::new();
        let bridge = Bridge::new(engine.clone());
        (engine, bridge)
    }

    #[test]
    fn value_reply_is_forwarded_as_json() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();
        window.bind("submit", |_| Reply::Text("done".into())).unwrap();

        let outcome = bridge.dispatch_event(
            window.id(),
            CALLBACK,
            "submit",
            Payload::new(""),
            EventNumber::from_raw(1),
        );

        assert_eq!(outcome, DispatchOutcome::Delivered { responded: true });
        let responses = engine.responses.lock();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].2, "\"done\"");
    }

    #[test]
    fn none_reply_sends_no_response() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();
        window.bind("fire", |_| Reply::None).unwrap();

        let outcome = bridge.dispatch_event(
            window.id(),
            CALLBACK,
            "fire",
            Payload::new(""),
            EventNumber::from_raw(1),
        );

        assert_eq!(outcome, DispatchOutcome::Delivered { responded: false });
        assert!(engine.responses.lock().is_empty());
    }

    #[test]
    fn json_null_reply_still_responds() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();
        window
            .bind("fire", |_| Reply::Json(serde_json::Value::Null))
            .unwrap();

        let outcome = bridge.dispatch_event(
            window.id(),
            CALLBACK,
            "fire",
            Payload::new(""),
            EventNumber::from_raw(1),
        );

        assert_eq!(outcome, DispatchOutcome::Delivered { responded: true });
        assert_eq!(engine.responses.lock()[0].2, "null");
    }

    #[test]
    fn unknown_kind_is_dropped_without_invoking() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();

        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        window
            .bind("submit", move |_| {
                h.fetch_add(1, Ordering::SeqCst);
                Reply::Bool(true)
            })
            .unwrap();

        let outcome = bridge.dispatch_event(
            window.id(),
            7,
            "submit",
            Payload::new(""),
            EventNumber::from_raw(1),
        );

        assert_eq!(outcome, DispatchOutcome::UnknownKind);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(engine.responses.lock().is_empty());
    }

    #[test]
    fn unbound_element_is_rejected() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();

        let outcome = bridge.dispatch_event(
            window.id(),
            CALLBACK,
            "ghost",
            Payload::new(""),
            EventNumber::from_raw(1),
        );

        assert_eq!(outcome, DispatchOutcome::NoBinding);
        assert!(engine.responses.lock().is_empty());
    }

    #[test]
    fn engine_binding_without_registration_is_rejected() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();
        // The engine knows the element but no handler was ever registered.
        engine.bind(window.id(), "half-bound").unwrap();

        let outcome = bridge.dispatch_event(
            window.id(),
            CALLBACK,
            "half-bound",
            Payload::new(""),
            EventNumber::from_raw(1),
        );

        assert_eq!(outcome, DispatchOutcome::NoBinding);
        assert!(engine.responses.lock().is_empty());
    }

    #[test]
    fn unserializable_reply_suppresses_the_response() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();
        window.bind("submit", |_| Reply::Float(f64::NAN)).unwrap();

        let outcome = bridge.dispatch_event(
            window.id(),
            CALLBACK,
            "submit",
            Payload::new(""),
            EventNumber::from_raw(1),
        );

        assert_eq!(outcome, DispatchOutcome::SerializationFailed);
        assert!(engine.responses.lock().is_empty());
    }

    #[test]
    fn callback_event_reaches_its_handler_intact() {
        let (engine, bridge) = bridge_with_engine();
        let window = bridge.create_window();
        let id = window.id();

        window
            .bind("submit", move |event| {
                assert_eq!(event.window, id);
                assert_eq!(event.kind, EventKind::Callback);
                assert_eq!(event.element, "submit");
                assert_eq!(event.payload.text(), "hello");
                Reply::Json(json!({ "ok": true }))
            })
            .unwrap();

        let outcome = bridge.dispatch_event(
            id,
            CALLBACK,
            "submit",
            Payload::new("hello"),
            EventNumber::from_raw(7),
        );

        assert_eq!(outcome, DispatchOutcome::Delivered { responded: true });
        let responses = engine.responses.lock();
        assert_eq!(responses[0].0, id);
        assert_eq!(responses[0].1, EventNumber::from_raw(7));
        assert_eq!(responses[0].2, r#"{"ok":true}"#);
    }

    #[test]
    fn same_element_on_two_windows_stays_separate() {
        let (engine, bridge) = bridge_with_engine();
        let first = bridge.create_window();
        let second = bridge.create_window();

        first.bind("go", |_| Reply::Text("first".into())).unwrap();
        second.bind("go", |_| Reply::Text("second".into())).unwrap();

        bridge.dispatch_event(
            second.id(),
            CALLBACK,
            "go",
            Payload::new(""),
            EventNumber::from_raw(1),
        );
        bridge.dispatch_event(
            first.id(),
            CALLBACK,
            "go",
            Payload::new(""),
            EventNumber::from_raw(2),
        );

        let responses = engine.responses.lock();
        assert_eq!(responses[0].2, "\"second\"");
        assert_eq!(responses[1].2, "\"first\"");
    }

    #[test]
    fn concurrent_dispatches_do_not_interfere() {
        let (engine, bridge) = bridge_with_engine();
        let window_a = bridge.create_window();
        let window_b = bridge.create_window();
        window_a.bind("tick", |_| Reply::Text("a".into())).unwrap();
        window_b.bind("tick", |_| Reply::Text("b".into())).unwrap();

        let mut threads = Vec::new();
        for (window, n) in [(window_a.id(), 0u64), (window_b.id(), 1000u64)] {
            let bridge = bridge.clone();
            threads.push(std::thread::spawn(move || {
                for i in 0..100 {
                    let outcome = bridge.dispatch_event(
                        window,
                        CALLBACK,
                        "tick",
                        Payload::new(""),
                        EventNumber::from_raw(n + i),
                    );
                    assert_eq!(outcome, DispatchOutcome::Delivered { responded: true });
                }
            }));
        }
        for thread in threads {
            thread.join().unwrap();
        }

        let responses = engine.responses.lock();
        assert_eq!(responses.len(), 200);
        for (window, _, body) in responses.iter() {
            let expected = if *window == window_a.id() { "\"a\"" } else { "\"b\"" };
            assert_eq!(body, expected);
        }
    }
}

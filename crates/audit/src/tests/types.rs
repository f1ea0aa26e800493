// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Action, Actor, AuditEvent, Cause, StateSnapshot};

fn create_test_event() -> AuditEvent {
    AuditEvent::new(
        Actor::new(String::from("officer-7"), String::from("officer")),
        Cause::new(String::from("req-1"), String::from("Intake desk")),
        Action::new(
            String::from("AdmitPrisoner"),
            Some(String::from("Admitted prisoner 4 to cell 2")),
        ),
        StateSnapshot::new(String::from("facilities=1,prisoners=0")),
        StateSnapshot::new(String::from("facilities=1,prisoners=1")),
    )
}

#[test]
fn test_actor_creation_requires_all_fields() {
    let actor: Actor = Actor::new(String::from("officer-7"), String::from("officer"));

    assert_eq!(actor.id, "officer-7");
    assert_eq!(actor.actor_type, "officer");
}

#[test]
fn test_new_event_has_no_id() {
    let event: AuditEvent = create_test_event();
    assert_eq!(event.event_id, None);
    assert_eq!(event.action.name, "AdmitPrisoner");
    assert_ne!(event.before, event.after);
}

#[test]
fn test_with_id_keeps_other_fields() {
    let event: AuditEvent = create_test_event();
    let stored: AuditEvent = event.clone().with_id(42);

    assert_eq!(stored.event_id, Some(42));
    assert_eq!(stored.actor, event.actor);
    assert_eq!(stored.action, event.action);
}

#[test]
fn test_event_survives_json() {
    let event: AuditEvent = create_test_event().with_id(3);

    let json: String = serde_json::to_string(&event).unwrap();
    let decoded: AuditEvent = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, event);
}

//! Publication behaviour tests for the observer registry.

use std::fs;

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use sevroute_sink::SinkError;
use tempfile::TempDir;

use super::*;

struct Workspace {
    _dir: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().expect("create temp dir");
    let path =
        Utf8PathBuf::from_path_buf(dir.path().join("DataFile.txt")).expect("utf8 temp path");
    Workspace { _dir: dir, path }
}

#[rstest]
fn warning_reaches_only_warning_subscriber(workspace: Workspace) {
    let mut registry = Registry::new();
    let console_observer = registry.add_observer(Subscriber::Console);
    let file_observer = registry.add_observer(Subscriber::file(workspace.path.clone()));
    let mut console = Vec::new();

    let notification = registry.warning("m", &mut console).expect("publish");

    assert_eq!(notification.event(), Event::Warning);
    assert_eq!(notification.delivered_to(), &[console_observer]);
    assert!(!notification.reached(file_observer));
    assert_eq!(console, b"m");
    assert!(!workspace.path.exists());
}

#[rstest]
fn error_reaches_only_error_subscriber(workspace: Workspace) {
    let mut registry = Registry::new();
    let console_observer = registry.add_observer(Subscriber::Console);
    let file_observer = registry.add_observer(Subscriber::file(workspace.path.clone()));
    let mut console = Vec::new();

    let notification = registry.error("My Error!", &mut console).expect("publish");

    assert_eq!(notification.delivered_to(), &[file_observer]);
    assert!(!notification.reached(console_observer));
    assert!(console.is_empty());
    assert_eq!(
        fs::read_to_string(&workspace.path).expect("read back"),
        "My Error!"
    );
}

#[rstest]
fn fatal_subscriber_writes_console_and_file(workspace: Workspace) {
    let mut registry = Registry::new();
    registry.add_observer(Subscriber::Console);
    let fatal_observer = registry.add_observer(Subscriber::fatal(workspace.path.clone()));
    let mut console = Vec::new();

    let notification = registry
        .fatal_error("My Fatal Error!", &mut console)
        .expect("publish");

    assert_eq!(notification.delivered_to(), &[fatal_observer]);
    assert_eq!(console, b"My Fatal Error!");
    assert_eq!(
        fs::read_to_string(&workspace.path).expect("read back"),
        "My Fatal Error!"
    );
}

#[test]
fn removed_subscriber_is_not_notified() {
    let mut registry = Registry::new();
    let removed = registry.add_observer(Subscriber::Console);
    assert_eq!(registry.remove_observer(removed), 1);
    let mut console = Vec::new();

    let notification = registry.warning("m", &mut console).expect("publish");

    assert!(notification.delivered_to().is_empty());
    assert!(console.is_empty());
    assert!(!registry.is_registered(removed));
    assert!(registry.subscriber(removed).is_some());
}

#[test]
fn repeated_registration_notifies_each_time_and_removes_together() {
    let mut registry = Registry::new();
    let id = registry.add_observer(Subscriber::Console);
    registry.attach(id).expect("attach again");
    let mut console = Vec::new();

    let notification = registry.warning("m", &mut console).expect("publish");
    assert_eq!(notification.delivered_to(), &[id, id]);
    assert_eq!(console, b"mm");

    assert_eq!(registry.remove_observer(id), 2);
    assert!(registry.is_empty());
}

#[test]
fn notifications_follow_registration_order() {
    let mut registry = Registry::new();
    let first = registry.add_observer(Subscriber::Console);
    let second = registry.add_observer(Subscriber::Console);
    let mut console = Vec::new();

    let notification = registry.warning("w", &mut console).expect("publish");

    assert_eq!(notification.delivered_to(), &[first, second]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn removed_subscriber_can_be_reattached() {
    let mut registry = Registry::new();
    let id = registry.add_observer(Subscriber::Console);
    registry.remove_observer(id);
    registry.attach(id).expect("reattach");
    assert!(registry.is_registered(id));
}

#[test]
fn attach_rejects_handles_from_another_registry() {
    let mut registry = Registry::new();
    let kept = registry.add_observer(Subscriber::Console);
    let mut other = Registry::new();
    let foreign = other.add_observer(Subscriber::Console);

    let error = registry.attach(foreign).expect_err("foreign handle");

    assert!(matches!(error, ObserverError::UnknownSubscriber { id } if id == foreign));
    assert_ne!(kept, foreign);
    assert_eq!(registry.len(), 1);
}

#[test]
fn removing_handle_from_another_registry_is_a_no_op() {
    let mut registry = Registry::new();
    let kept = registry.add_observer(Subscriber::Console);
    let mut other = Registry::new();
    let foreign = other.add_observer(Subscriber::Console);

    assert_eq!(registry.remove_observer(foreign), 0);
    assert!(registry.is_registered(kept));
    assert!(registry.subscriber(foreign).is_none());
}

#[test]
fn removal_keeps_ownership_until_forgotten() {
    let mut registry = Registry::new();
    let id = registry.add_observer(Subscriber::Console);
    registry.attach(id).expect("attach again");

    assert_eq!(registry.remove_observer(id), 2);
    assert_eq!(registry.owned(), 1);

    registry.attach(id).expect("reattach");
    assert_eq!(registry.forget(id), Some(Subscriber::Console));
    assert_eq!(registry.owned(), 0);
    assert!(registry.is_empty());
    assert!(matches!(
        registry.attach(id),
        Err(ObserverError::UnknownSubscriber { .. })
    ));
}

#[test]
fn forget_ignores_foreign_and_repeated_handles() {
    let mut registry = Registry::new();
    let kept = registry.add_observer(Subscriber::Console);
    let mut other = Registry::new();
    let foreign = other.add_observer(Subscriber::Console);

    assert!(registry.forget(foreign).is_none());
    assert!(registry.forget(kept).is_some());
    assert!(registry.forget(kept).is_none());
}

#[rstest]
fn delivery_failure_stops_publication(workspace: Workspace) {
    let mut registry = Registry::new();
    let broken =
        registry.add_observer(Subscriber::file(workspace.path.with_file_name("missing/x.txt")));
    registry.add_observer(Subscriber::file(workspace.path.clone()));
    let mut console = Vec::new();

    let error = registry.error("e", &mut console).expect_err("delivery fails");

    assert!(matches!(
        error,
        ObserverError::Delivery { id, source: SinkError::Open { .. } } if id == broken
    ));
    assert!(!workspace.path.exists());
}

#[rstest]
#[case(Event::Warning, 0)]
#[case(Event::Error, 1)]
#[case(Event::FatalError, 2)]
fn each_event_reaches_one_variant(
    workspace: Workspace,
    #[case] event: Event,
    #[case] expected: usize,
) {
    let mut registry = Registry::new();
    let ids = [
        registry.add_observer(Subscriber::Console),
        registry.add_observer(Subscriber::file(workspace.path.clone())),
        registry.add_observer(Subscriber::fatal(workspace.path.clone())),
    ];
    let mut console = Vec::new();

    let notification = registry
        .publish(event, "m", &mut console)
        .expect("publish");

    assert_eq!(notification.delivered_to(), &ids[expected..=expected]);
}

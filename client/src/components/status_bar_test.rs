use super::*;

#[test]
fn connection_status_classes_are_distinct() {
    let classes = [
        connection_status_class(ConnectionStatus::Disconnected),
        connection_status_class(ConnectionStatus::Connecting),
        connection_status_class(ConnectionStatus::Connected),
    ];
    assert_eq!(
        classes.len(),
        classes.iter().collect::<std::collections::HashSet<_>>().len()
    );
}

#[test]
fn connection_status_labels_read_as_expected() {
    assert_eq!(connection_status_label(ConnectionStatus::Connected), "Live");
    assert_eq!(connection_status_label(ConnectionStatus::Disconnected), "Offline");
}

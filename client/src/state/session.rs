//! Session identity and connection lifecycle state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Who this client is and where its websocket stands.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Code of the room this session is joined to, if any.
    pub room_code: Option<String>,
    /// Display name picked on the home page.
    pub display_name: Option<String>,
    /// Current websocket connection lifecycle state.
    pub connection_status: ConnectionStatus,
}

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open.
    Connected,
}

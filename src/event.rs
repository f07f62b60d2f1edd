//! Transfer-event classification.
//!
//! Maps the engine's debug-event tags to what the tracer does with the
//! payload: print it as informational text, dump it under a direction
//! label, note the label without a dump (encrypted payloads), or drop it.

/// Event tags reported by the transfer engine's debug hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    /// Informational text from the engine, unrelated to wire bytes
    Text,
    /// Header received from the peer
    HeaderIn,
    /// Header sent to the peer
    HeaderOut,
    /// Protocol data received from the peer
    DataIn,
    /// Protocol data sent to the peer
    DataOut,
    /// Encrypted payload received from the peer
    SslDataIn,
    /// Encrypted payload sent to the peer
    SslDataOut,
    /// Anything the engine introduces later
    Other,
}

/// What the tracer does with an event's payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    /// Print the payload as text, no dump
    Info,
    /// Dump the payload under the given label
    Dump(&'static str),
    /// Print the label only; the payload stays opaque
    LabelOnly(&'static str),
    /// Drop the event
    Ignore,
}

/// Fixed mapping from event tag to tracer action.
///
/// Encrypted payloads are labeled but never dumped; unrecognized events
/// are dropped so a newer engine cannot surprise the hook.
pub fn classify(kind: InfoKind) -> EventAction {
    match kind {
        InfoKind::Text => EventAction::Info,
        InfoKind::HeaderOut => EventAction::Dump("=> Send header"),
        InfoKind::DataOut => EventAction::Dump("=> Send data"),
        InfoKind::SslDataOut => EventAction::LabelOnly("=> Send SSL data"),
        InfoKind::HeaderIn => EventAction::Dump("<= Recv header"),
        InfoKind::DataIn => EventAction::Dump("<= Recv data"),
        InfoKind::SslDataIn => EventAction::LabelOnly("<= Recv SSL data"),
        InfoKind::Other => EventAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_info() {
        assert_eq!(classify(InfoKind::Text), EventAction::Info);
    }

    #[test]
    fn test_headers_and_data_are_dumped() {
        assert_eq!(
            classify(InfoKind::HeaderOut),
            EventAction::Dump("=> Send header")
        );
        assert_eq!(
            classify(InfoKind::DataOut),
            EventAction::Dump("=> Send data")
        );
        assert_eq!(
            classify(InfoKind::HeaderIn),
            EventAction::Dump("<= Recv header")
        );
        assert_eq!(classify(InfoKind::DataIn), EventAction::Dump("<= Recv data"));
    }

    #[test]
    fn test_encrypted_payloads_label_only() {
        assert_eq!(
            classify(InfoKind::SslDataOut),
            EventAction::LabelOnly("=> Send SSL data")
        );
        assert_eq!(
            classify(InfoKind::SslDataIn),
            EventAction::LabelOnly("<= Recv SSL data")
        );
    }

    #[test]
    fn test_unknown_is_ignored() {
        assert_eq!(classify(InfoKind::Other), EventAction::Ignore);
    }
}

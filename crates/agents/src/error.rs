use aarogya_core::CoreError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a reply is still pending; wait for it before sending again")]
    ReplyPending,
    #[error("reply ticket {0} is not the one in flight")]
    UnknownTicket(Uuid),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub mod error;
pub mod list;
pub mod normalize;
pub mod source;

pub use error::{Result, SourceError};
pub use list::{ListSource, MatchMode};
pub use normalize::{
    fold_for_match, normalize_nfkc, starts_with_ignore_case, strip_prefix_ignore_case,
};
pub use source::{
    DeferredHandle, DeferredSource, Delivery, FnSource, Mailbox, OptionSource, Reply, RequestId,
};

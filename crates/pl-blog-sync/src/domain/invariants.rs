//! # Domain Invariants
//!
//! Business rules checked by the lifecycle coordinator before any state
//! transition.

use super::entities::UpdatePostData;
use super::errors::BlogSyncError;
use super::value_objects::{DeliveryDeadline, PostId};

/// Invariant: an update message is structurally well-formed.
///
/// Creator and title must be non-empty, the post id must be numeric, and the
/// text fields must fit the configured bounds (0 disables a bound). Checked
/// before an acknowledgement is produced; a violation rejects the packet at
/// the protocol layer.
pub fn invariant_update_well_formed(
    data: &UpdatePostData,
    max_title_len: usize,
    max_content_len: usize,
) -> Result<(), BlogSyncError> {
    if data.creator.is_empty() {
        return Err(BlogSyncError::ValidationFailed(
            "creator cannot be empty".to_string(),
        ));
    }
    if data.title.is_empty() {
        return Err(BlogSyncError::ValidationFailed(
            "title cannot be empty".to_string(),
        ));
    }
    PostId::parse(&data.post_id)?;
    if max_title_len != 0 && data.title.len() > max_title_len {
        return Err(BlogSyncError::ValidationFailed(format!(
            "title exceeds {max_title_len} bytes"
        )));
    }
    if max_content_len != 0 && data.content.len() > max_content_len {
        return Err(BlogSyncError::ValidationFailed(format!(
            "content exceeds {max_content_len} bytes"
        )));
    }
    Ok(())
}

/// Invariant: a transmitted packet carries a deadline.
///
/// At least one of the height bound and the timestamp bound must be non-zero;
/// without a deadline the timeout path could never fire and a lost packet
/// would leave its shadow pending forever.
pub fn invariant_deadline_set(deadline: &DeliveryDeadline) -> Result<(), BlogSyncError> {
    if !deadline.is_set() {
        return Err(BlogSyncError::InvalidDeadline);
    }
    Ok(())
}

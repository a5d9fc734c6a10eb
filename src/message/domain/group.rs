//! Group control metadata carried by relayed messages.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::GroupId;

/// Group action code stored when a message is not a group control message.
pub const NO_GROUP_ACTION: i32 = -1;

/// Kind of group control action.
///
/// Numeric codes match the relayed transport's group context type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupActionType {
    /// Unrecognised action.
    Unknown,
    /// Membership, title or avatar change.
    Update,
    /// Ordinary message delivered to the group.
    Deliver,
    /// A member leaves the group.
    Quit,
}

impl GroupActionType {
    /// Returns the numeric action code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Update => 1,
            Self::Deliver => 2,
            Self::Quit => 3,
        }
    }

    /// Maps a numeric action code back to its type.
    ///
    /// Returns `None` for [`NO_GROUP_ACTION`] and unassigned codes.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::Update),
            2 => Some(Self::Deliver),
            3 => Some(Self::Quit),
            _ => None,
        }
    }

    /// Returns `true` if this action carries a serialized argument.
    #[must_use]
    pub const fn has_arguments(self) -> bool {
        matches!(self, Self::Update)
    }
}

/// Group context attached to a relayed message.
///
/// Supplied already parsed by the push transport.
///
/// # Examples
///
/// ```
/// use inbound_text::message::domain::{GroupActionType, GroupContext};
///
/// let context = GroupContext::new(vec![0x01, 0x02], GroupActionType::Update)
///     .with_title("Climbing")
///     .with_members(vec!["+15550001".to_owned(), "+15550002".to_owned()]);
///
/// assert_eq!(context.encoded_id().as_str(), "__textsecure_group__!0102");
/// assert_eq!(
///     context.serialized_arguments().as_deref(),
///     Some(r#"{"avatar":false,"members":["+15550001","+15550002"],"title":"Climbing"}"#),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupContext {
    id: Vec<u8>,
    action: GroupActionType,
    title: Option<String>,
    members: Vec<String>,
    has_avatar: bool,
}

impl GroupContext {
    /// Creates a context with no title, members or avatar.
    #[must_use]
    pub const fn new(id: Vec<u8>, action: GroupActionType) -> Self {
        Self {
            id,
            action,
            title: None,
            members: Vec::new(),
            has_avatar: false,
        }
    }

    /// Sets the group title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the member list.
    #[must_use]
    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }

    /// Marks the context as carrying an avatar attachment.
    #[must_use]
    pub const fn with_avatar(mut self) -> Self {
        self.has_avatar = true;
        self
    }

    /// Returns the raw identifier bytes.
    #[must_use]
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// Returns the action type.
    #[must_use]
    pub const fn action(&self) -> GroupActionType {
        self.action
    }

    /// Returns the group title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the member list.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Returns the text encoding of the raw identifier.
    #[must_use]
    pub fn encoded_id(&self) -> GroupId {
        GroupId::from_raw(&self.id)
    }

    /// Serializes the action-specific arguments.
    ///
    /// Only update actions carry arguments; every other action yields `None`.
    /// Keys are emitted in sorted order so the output is stable.
    #[must_use]
    pub fn serialized_arguments(&self) -> Option<String> {
        self.action.has_arguments().then(|| {
            json!({
                "title": self.title,
                "members": self.members,
                "avatar": self.has_avatar,
            })
            .to_string()
        })
    }
}

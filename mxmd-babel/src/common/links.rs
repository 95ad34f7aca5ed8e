//! Deep-link resolution for anchors found in message HTML.
//!
//! A link pointing at a Matrix user, room or event becomes a mention pill in
//! the editor; every other link stays a plain link. Resolution is behind the
//! [`LinkResolver`] trait so hosts can plug in their own permalink scheme.
//!
//! The default [`MatrixToResolver`] understands permalinks of the form
//!
//! ```text
//! https://matrix.to/#/@user:server
//! https://matrix.to/#/!room:server?via=a.org&via=b.org
//! https://matrix.to/#/#alias:server/$event?via=a.org
//! ```
//!
//! Path segments are percent-decoded; `via` parameters are routing servers.

use url::Url;

use crate::ir::nodes::Mention;

/// Permalink base used when none is configured.
pub const DEFAULT_PERMALINK_BASE: &str = "https://matrix.to";

/// A link target inside Matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    User {
        user_id: String,
    },
    Room {
        room_id_or_alias: String,
        via_servers: Vec<String>,
    },
    RoomEvent {
        room_id_or_alias: String,
        event_id: String,
        via_servers: Vec<String>,
    },
}

impl DeepLink {
    /// The user id, room id or room alias the link points at.
    pub fn target_id(&self) -> &str {
        match self {
            DeepLink::User { user_id } => user_id,
            DeepLink::Room {
                room_id_or_alias, ..
            }
            | DeepLink::RoomEvent {
                room_id_or_alias, ..
            } => room_id_or_alias,
        }
    }

    /// Builds a mention showing `label`, or the target id when it is empty.
    pub fn into_mention(self, label: &str) -> Mention {
        let label = if label.is_empty() {
            self.target_id().to_string()
        } else {
            label.to_string()
        };
        match self {
            DeepLink::User { user_id } => Mention {
                target_id: user_id,
                label,
                via_servers: Vec::new(),
                event_id: None,
            },
            DeepLink::Room {
                room_id_or_alias,
                via_servers,
            } => Mention {
                target_id: room_id_or_alias,
                label,
                via_servers,
                event_id: None,
            },
            DeepLink::RoomEvent {
                room_id_or_alias,
                event_id,
                via_servers,
            } => Mention {
                target_id: room_id_or_alias,
                label,
                via_servers,
                event_id: Some(event_id),
            },
        }
    }
}

/// Recognises deep links among arbitrary hrefs.
pub trait LinkResolver {
    fn resolve(&self, href: &str) -> Option<DeepLink>;
}

/// Resolver for `matrix.to` style permalinks under a configurable base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixToResolver {
    base: String,
}

impl MatrixToResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for MatrixToResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PERMALINK_BASE)
    }
}

impl LinkResolver for MatrixToResolver {
    fn resolve(&self, href: &str) -> Option<DeepLink> {
        let base = Url::parse(&self.base).ok()?;
        let url = Url::parse(href).ok()?;
        if url.origin() != base.origin()
            || url.path().trim_end_matches('/') != base.path().trim_end_matches('/')
        {
            return None;
        }

        let fragment = url.fragment()?.strip_prefix('/')?;
        let (path, query) = fragment.split_once('?').unwrap_or((fragment, ""));
        let mut segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::decode(segment).map(|s| s.into_owned()));

        let id = segments.next()?.ok()?;
        let event_id = match segments.next() {
            Some(segment) => Some(segment.ok()?).filter(|event| event.starts_with('$')),
            None => None,
        };
        let via_servers: Vec<String> = url::form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == "via")
            .map(|(_, value)| value.into_owned())
            .collect();

        if id.len() < 2 {
            return None;
        }
        match (id.chars().next()?, event_id) {
            ('@', _) => Some(DeepLink::User { user_id: id }),
            ('!' | '#', Some(event_id)) => Some(DeepLink::RoomEvent {
                room_id_or_alias: id,
                event_id,
                via_servers,
            }),
            ('!' | '#', None) => Some(DeepLink::Room {
                room_id_or_alias: id,
                via_servers,
            }),
            _ => None,
        }
    }
}

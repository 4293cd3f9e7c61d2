//! Action vocabulary dispatched through the application channel.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, IntoStaticStr};

use crate::area::Area;
use crate::profile::UserProfile;

/// A dispatched state-change request.
///
/// Actions travel through a single application-wide channel. Each state
/// slice recognizes its own subset and must treat everything else as a
/// no-op, so dispatching here is always harmless.
///
/// The serialized form keeps the dispatch discriminator as a tag:
///
/// ```json
/// { "type": "SET_SELECTED_AREA_INDEX", "payload": { "index": 2 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsRefStr, IntoStaticStr)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Action {
    /// Replace the area list wholesale.
    SetAreas {
        /// New ordered list of areas.
        areas: Vec<Area>,
    },
    /// Replace the selected index. [`NO_SELECTION`] clears the selection.
    ///
    /// [`NO_SELECTION`]: crate::NO_SELECTION
    SetSelectedAreaIndex {
        /// Index into the area list.
        index: i32,
    },
    /// Replace the selected area value.
    SetSelectedArea {
        /// Newly selected area.
        area: Area,
    },
    /// Append one area to the end of the list.
    AddArea {
        /// Area to append.
        area: Area,
    },
    /// Replace the signed-in user's profile.
    SetUserProfile {
        /// New profile value.
        profile: UserProfile,
    },
    /// Emitted by the upload flow once an image has landed in object
    /// storage. Not recognized by the user slice.
    ImageUploaded {
        /// Durable URL of the stored object.
        url: String,
    },
}

impl Action {
    /// Returns the action discriminator as a static string.
    pub fn discriminator(&self) -> &'static str {
        self.into()
    }
}

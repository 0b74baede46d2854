//! Wall update models.
//!
//! Every field of a wall update is optional: an absent field means "leave the
//! remote value unchanged". Absent fields serialize as `null`; the payload
//! sanitizer strips them before the request leaves the process.
//!
//! Field docs double as descriptions in the generated tool input schema.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::WallUpdaterError;

/// Id prefix marking a section or post that should be created, not updated.
pub const NEW_ID_PREFIX: &str = "new_";

/// Layout format of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WallFormat {
    Wall,
    Stream,
    Timeline,
    Grid,
    Canvas,
    Map,
}

impl WallFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Stream => "stream",
            Self::Timeline => "timeline",
            Self::Grid => "grid",
            Self::Canvas => "canvas",
            Self::Map => "map",
        }
    }
}

/// Reaction type enabled on posts. `None` disables reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    None,
    Like,
    Vote,
    Star,
    Grade,
    Emoji,
}

impl ReactionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Like => "like",
            Self::Vote => "vote",
            Self::Star => "star",
            Self::Grade => "grade",
            Self::Emoji => "emoji",
        }
    }
}

/// Post background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostColor {
    Red,
    Orange,
    Green,
    Blue,
    Purple,
    White,
}

impl PostColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::White => "white",
        }
    }
}

/// Media kind the server looks for when resolving `attachment_search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentType {
    Image,
    Video,
    Link,
}

impl AttachmentType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Link => "link",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(WallFormat, ReactionType, PostColor, AttachmentType);

/// A section to create or rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionUpdate {
    /// The id of the section. Prefix with "new_" to create a section.
    #[serde(rename = "section_id")]
    pub id: String,
    /// The title of the section.
    #[serde(rename = "section_title")]
    pub title: String,
}

impl SectionUpdate {
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.starts_with(NEW_ID_PREFIX)
    }
}

/// Value for one custom field of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomFieldValue {
    /// The name of the custom field.
    pub field_name: String,
    /// The value of the custom field.
    pub field_value: String,
}

/// Physical location pinned to a post on a map wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocationData {
    /// Latitude of the location. Required on every new post when the format is "map".
    pub latitude: f64,
    /// Longitude of the location. Required on every new post when the format is "map".
    pub longitude: f64,
    /// The name of this specific location.
    pub location_name: String,
}

/// A post to create or edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PostUpdate {
    /// The id of the post. Prefix with "new_" to create a post.
    #[serde(rename = "post_id")]
    pub id: String,
    /// The id of the section. Required when creating a post inside a section.
    pub section_id: Option<String>,
    /// The title of the post.
    pub subject: Option<String>,
    /// The content of the post. May embed custom field content.
    pub body: Option<String>,
    /// Values of custom fields. Only include if the wall has custom fields.
    pub custom_field_values: Option<Vec<CustomFieldValue>>,
    /// The color of the post.
    pub color: Option<PostColor>,
    /// Search query the server uses to find an attachment. The media kind is set by `attachment_type`.
    pub attachment_search: Option<String>,
    /// The kind of media to search for with `attachment_search`.
    pub attachment_type: Option<AttachmentType>,
    /// Physical location of the post. Must be included when the format is "map".
    pub location_data: Option<LocationData>,
}

impl PostUpdate {
    /// Create a post update that only carries an id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.starts_with(NEW_ID_PREFIX)
    }
}

/// A custom field to add to every post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CustomFieldDefinition {
    /// The name of the custom field.
    pub field_name: String,
}

/// Wall-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SettingsUpdate {
    /// The format of the wall.
    pub format: Option<WallFormat>,
    /// Whether sections are visible.
    pub sections_enabled: Option<bool>,
    /// Whether comments on posts are enabled.
    pub comments_enabled: Option<bool>,
    /// Reactions on posts. "none" disables reactions.
    pub reactions: Option<ReactionType>,
    /// Custom fields shown as named sub-sections in the body of each post.
    pub add_custom_fields: Option<Vec<CustomFieldDefinition>>,
}

/// Partial update of a wall. Include only the fields that should change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct WallUpdate {
    /// The title of the wall.
    #[serde(rename = "padlet_title")]
    pub title: Option<String>,
    /// The description of the wall.
    #[serde(rename = "padlet_description")]
    pub description: Option<String>,
    /// Description of the ideal wallpaper. Used to search for and set the wallpaper.
    pub wallpaper_description: Option<String>,
    /// The sections that contain posts.
    pub sections: Option<Vec<SectionUpdate>>,
    /// Section ids in the order they should appear.
    pub section_order: Option<Vec<String>>,
    /// The posts that may belong to sections.
    pub posts: Option<Vec<PostUpdate>>,
    /// Post ids in the order they should appear.
    pub post_order: Option<Vec<String>>,
    /// Wall settings.
    pub settings: Option<SettingsUpdate>,
}

impl WallUpdate {
    /// Build an update from raw JSON, checking types and enum membership.
    ///
    /// # Errors
    /// Returns [`WallUpdaterError::Validation`] if a field has the wrong type
    /// or an enum field holds an unknown value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, WallUpdaterError> {
        serde_json::from_value(value).map_err(|e| WallUpdaterError::validation(e.to_string()))
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Ids of new posts without `location_data` when this update switches
    /// the wall to the map format. Empty in every other case.
    #[must_use]
    pub fn posts_missing_location(&self) -> Vec<&str> {
        let switches_to_map = self
            .settings
            .as_ref()
            .and_then(|s| s.format)
            .is_some_and(|f| f == WallFormat::Map);
        if !switches_to_map {
            return Vec::new();
        }

        self.posts
            .iter()
            .flatten()
            .filter(|p| p.is_new() && p.location_data.is_none())
            .map(|p| p.id.as_str())
            .collect()
    }
}

/// Arguments of the `update_padlet` tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateWallArgs {
    /// The id of the wall to update.
    pub wall_id: i64,
    /// The data to update the wall with. Include only parameters relevant to the requested changes.
    pub wall_data: WallUpdate,
}

impl UpdateWallArgs {
    /// Parse tool-call arguments.
    ///
    /// # Errors
    /// Returns [`WallUpdaterError::Validation`] when the arguments do not
    /// match the schema.
    pub fn from_value(value: serde_json::Value) -> Result<Self, WallUpdaterError> {
        serde_json::from_value(value).map_err(|e| WallUpdaterError::validation(e.to_string()))
    }
}

/// Arguments of the `search_helpdocs` tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchHelpDocsArgs {
    /// The search query.
    pub query: String,
}

/// Acknowledgement returned after the remote service accepted an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallUpdateAck {
    pub success: bool,
    pub wall_id: i64,
}

impl WallUpdateAck {
    #[must_use]
    pub fn succeeded(wall_id: i64) -> Self {
        Self {
            success: true,
            wall_id,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_serialize_as_null() {
        let update = WallUpdate {
            title: Some("New".to_owned()),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["padlet_title"], "New");
        assert!(value["posts"].is_null());
        assert!(value.as_object().unwrap().contains_key("settings"));
    }

    #[test]
    fn parses_nested_update_with_wire_names() {
        let update = WallUpdate::from_value(json!({
            "padlet_title": "Trip",
            "sections": [{"section_id": "new_1", "section_title": "Day 1"}],
            "posts": [{
                "post_id": "new_p1",
                "section_id": "new_1",
                "color": "blue",
                "attachment_type": "image",
                "location_data": {"latitude": 48.85, "longitude": 2.35, "location_name": "Paris"}
            }],
            "settings": {"format": "map", "reactions": "star"}
        }))
        .unwrap();

        assert_eq!(update.title.as_deref(), Some("Trip"));
        let sections = update.sections.as_ref().unwrap();
        assert!(sections[0].is_new());
        let post = &update.posts.as_ref().unwrap()[0];
        assert_eq!(post.color, Some(PostColor::Blue));
        assert_eq!(post.attachment_type, Some(AttachmentType::Image));
        assert_eq!(
            update.settings.as_ref().unwrap().reactions,
            Some(ReactionType::Star)
        );
    }

    #[test]
    fn unknown_enum_value_is_a_validation_error() {
        let err = WallUpdate::from_value(json!({
            "posts": [{"post_id": "1", "color": "pink"}]
        }))
        .unwrap_err();

        assert!(matches!(err, WallUpdaterError::Validation { .. }));
        assert!(err.to_string().contains("pink"));
    }

    #[test]
    fn wrong_type_is_a_validation_error() {
        let err = WallUpdate::from_value(json!({
            "settings": {"sections_enabled": "yes"}
        }))
        .unwrap_err();
        assert!(matches!(err, WallUpdaterError::Validation { .. }));
    }

    #[test]
    fn section_requires_id_and_title() {
        let err = WallUpdate::from_value(json!({
            "sections": [{"section_title": "No id"}]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("section_id"));
    }

    #[test]
    fn empty_object_is_an_empty_update() {
        let update = WallUpdate::from_value(json!({})).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn posts_missing_location_only_applies_when_switching_to_map() {
        let mut update = WallUpdate {
            posts: Some(vec![
                PostUpdate::with_id("new_a"),
                PostUpdate::with_id("existing"),
            ]),
            ..Default::default()
        };
        assert!(update.posts_missing_location().is_empty());

        update.settings = Some(SettingsUpdate {
            format: Some(WallFormat::Map),
            ..Default::default()
        });
        assert_eq!(update.posts_missing_location(), vec!["new_a"]);
    }

    #[test]
    fn update_args_parse_wall_id_and_data() {
        let args = UpdateWallArgs::from_value(json!({
            "wall_id": 42,
            "wall_data": {"padlet_title": "New", "posts": null}
        }))
        .unwrap();

        assert_eq!(args.wall_id, 42);
        assert_eq!(args.wall_data.title.as_deref(), Some("New"));
        assert!(args.wall_data.posts.is_none());
    }

    #[test]
    fn update_args_reject_non_integer_wall_id() {
        let err = UpdateWallArgs::from_value(json!({
            "wall_id": "forty-two",
            "wall_data": {}
        }))
        .unwrap_err();
        assert!(matches!(err, WallUpdaterError::Validation { .. }));
    }

    #[test]
    fn enums_display_their_wire_value() {
        assert_eq!(WallFormat::Timeline.to_string(), "timeline");
        assert_eq!(ReactionType::None.to_string(), "none");
        assert_eq!(PostColor::Purple.to_string(), "purple");
        assert_eq!(AttachmentType::Link.to_string(), "link");
    }

    #[test]
    fn ack_serializes_success_and_wall_id() {
        let ack = WallUpdateAck::succeeded(42);
        assert_eq!(
            serde_json::to_value(ack).unwrap(),
            json!({"success": true, "wall_id": 42})
        );
    }
}

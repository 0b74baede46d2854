//! Tool descriptors handed to an agent runtime.
//!
//! Input schemas are generated from the SDK argument types so the runtime
//! validates tool calls against the same shapes the updater parses.

use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::Serialize;
use serde_json::Value;
use wall_updater_sdk::{SearchHelpDocsArgs, UpdateWallArgs};

pub const UPDATE_WALL_TOOL: &str = "update_padlet";
pub const SEARCH_HELPDOCS_TOOL: &str = "search_helpdocs";

const UPDATE_WALL_DESCRIPTION: &str = "Update the padlet's title, description, wallpaper, \
sections, posts and settings. Include only parameters relevant to the requested changes. \
Prepend \"id\" with \"new_\" for new posts or sections. Include the \"id\" to update existing \
posts and sections; include \"section_id\" to create a post in a section. \"location_data\" \
must be included when creating posts on a padlet whose format is \"map\".";

const SEARCH_HELPDOCS_DESCRIPTION: &str =
    "Search the helpdocs for padlet features related to the given query.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[must_use]
pub fn update_wall_tool() -> ToolDescriptor {
    ToolDescriptor {
        name: UPDATE_WALL_TOOL,
        description: UPDATE_WALL_DESCRIPTION,
        input_schema: input_schema(schema_for!(UpdateWallArgs)),
    }
}

#[must_use]
pub fn search_helpdocs_tool() -> ToolDescriptor {
    ToolDescriptor {
        name: SEARCH_HELPDOCS_TOOL,
        description: SEARCH_HELPDOCS_DESCRIPTION,
        input_schema: input_schema(schema_for!(SearchHelpDocsArgs)),
    }
}

fn input_schema(schema: RootSchema) -> Value {
    #[allow(clippy::expect_used)]
    // Safe: a generated schema only holds string-keyed maps and finite numbers
    serde_json::to_value(schema).expect("generated schema serializes to JSON")
}

/// Every tool this crate can serve, in registration order.
#[must_use]
pub fn all_tools() -> Vec<ToolDescriptor> {
    vec![update_wall_tool(), search_helpdocs_tool()]
}

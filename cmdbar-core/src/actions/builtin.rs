//! Built-in action set for the project console.

use super::types::{Action, ActionId, Perform};

const DOCS_URL: &str = "https://cmdbar.dev/docs";
const COMMUNITY_URL: &str = "https://slack.cmdbar.dev";

/// The default console actions: section navigation, project switching
/// and help links.
pub fn builtin_actions() -> Vec<Action> {
    vec![
        Action {
            id: ActionId("schema"),
            name: "Schema",
            shortcut: &["s"],
            keywords: "schema",
            section: "Developers",
            perform: Perform::RewritePath { section: "schema" },
            ..Default::default()
        },
        Action {
            id: ActionId("content"),
            name: "Content",
            shortcut: &["c"],
            keywords: "content",
            section: "General",
            perform: Perform::RewritePath { section: "content" },
            ..Default::default()
        },
        Action {
            id: ActionId("assets"),
            name: "Assets",
            keywords: "assets",
            section: "General",
            perform: Perform::RewritePath { section: "assets" },
            ..Default::default()
        },
        Action {
            id: ActionId("api-playground"),
            name: "API Playground",
            shortcut: &["a", "p", "i"],
            keywords: "api-playground",
            section: "Developers",
            perform: Perform::RewritePath { section: "graphiql" },
            ..Default::default()
        },
        Action {
            id: ActionId("webhooks"),
            name: "Webhooks",
            shortcut: &["w"],
            keywords: "webhooks",
            section: "Webhooks",
            perform: Perform::RewritePath { section: "webhooks" },
            ..Default::default()
        },
        Action {
            id: ActionId("create-webhook"),
            name: "Create Webhook",
            keywords: "create",
            section: "Webhooks",
            parent: Some(ActionId("webhooks")),
            perform: Perform::RewritePath { section: "webhooks/create" },
            ..Default::default()
        },
        Action {
            id: ActionId("settings"),
            name: "Settings",
            keywords: "settings",
            section: "Admin",
            perform: Perform::RewritePath { section: "settings" },
            ..Default::default()
        },
        Action {
            id: ActionId("my-projects"),
            name: "My Projects",
            keywords: "projects",
            section: "Projects",
            perform: Perform::NavigateAbsolute { path: "/" },
            ..Default::default()
        },
        Action {
            id: ActionId("new-project"),
            name: "New Project",
            shortcut: &["+"],
            keywords: "new +",
            section: "Projects",
            perform: Perform::NavigateAbsolute { path: "/create" },
            ..Default::default()
        },
        Action {
            id: ActionId("read-docs"),
            name: "Read Documentation",
            keywords: "read docs",
            section: "Help",
            perform: Perform::NavigateExternal { url: DOCS_URL },
            ..Default::default()
        },
        Action {
            id: ActionId("slack-community"),
            name: "Join Slack Community",
            keywords: "slack community",
            section: "Help",
            perform: Perform::NavigateExternal { url: COMMUNITY_URL },
            ..Default::default()
        },
    ]
}

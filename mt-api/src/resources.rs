//! Declarative resource table.
//!
//! Each remote resource is one `Resource` row: a collection path template
//! whose `{}` placeholders take scope ids in order, the form field its
//! structured body travels in, and the verbs the server accepts. The
//! table-driven operations below build every CRUD call from a row.

use reqwest::Method;
use serde_json::Value;
use tracing::warn;

use mt_core::error::{MtError, MtResult};

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;

/// Operation kinds a resource may allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Verb {
    /// HTTP method the verb maps to.
    pub fn method(self) -> Method {
        match self {
            Verb::List | Verb::Get => Method::GET,
            Verb::Create => Method::POST,
            Verb::Update => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Verb::List => "list",
            Verb::Get => "get",
            Verb::Create => "create",
            Verb::Update => "update",
            Verb::Delete => "delete",
        }
    }
}

const CRUD: &[Verb] = &[Verb::List, Verb::Get, Verb::Create, Verb::Update, Verb::Delete];
const NO_CREATE: &[Verb] = &[Verb::List, Verb::Get, Verb::Update, Verb::Delete];
const READ_DELETE: &[Verb] = &[Verb::List, Verb::Get, Verb::Delete];
const READ_ONLY: &[Verb] = &[Verb::List, Verb::Get];
const LIST_ONLY: &[Verb] = &[Verb::List];

/// One row of the resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    /// Collection path, e.g. "/sites/{}/entries".
    pub path: &'static str,
    /// Form field holding the JSON body on create and update.
    pub payload_key: &'static str,
    pub verbs: &'static [Verb],
}

pub const SITE: Resource = Resource {
    name: "site",
    path: "/sites",
    payload_key: "website",
    verbs: CRUD,
};

pub const BLOG: Resource = Resource {
    name: "blog",
    path: "/sites",
    payload_key: "blog",
    verbs: CRUD,
};

pub const ENTRY: Resource = Resource {
    name: "entry",
    path: "/sites/{}/entries",
    payload_key: "entry",
    verbs: CRUD,
};

pub const PAGE: Resource = Resource {
    name: "page",
    path: "/sites/{}/pages",
    payload_key: "page",
    verbs: CRUD,
};

pub const CATEGORY: Resource = Resource {
    name: "category",
    path: "/sites/{}/categories",
    payload_key: "category",
    verbs: CRUD,
};

pub const FOLDER: Resource = Resource {
    name: "folder",
    path: "/sites/{}/folders",
    payload_key: "folder",
    verbs: CRUD,
};

pub const TAG: Resource = Resource {
    name: "tag",
    path: "/sites/{}/tags",
    payload_key: "tag",
    verbs: NO_CREATE,
};

pub const USER: Resource = Resource {
    name: "user",
    path: "/users",
    payload_key: "user",
    verbs: CRUD,
};

/// Assets are created through the upload endpoints.
pub const ASSET: Resource = Resource {
    name: "asset",
    path: "/sites/{}/assets",
    payload_key: "asset",
    verbs: NO_CREATE,
};

/// Comments are created against an entry or a page.
pub const COMMENT: Resource = Resource {
    name: "comment",
    path: "/sites/{}/comments",
    payload_key: "comment",
    verbs: NO_CREATE,
};

pub const TRACKBACK: Resource = Resource {
    name: "trackback",
    path: "/sites/{}/trackbacks",
    payload_key: "trackback",
    verbs: NO_CREATE,
};

pub const FIELD: Resource = Resource {
    name: "field",
    path: "/sites/{}/fields",
    payload_key: "field",
    verbs: CRUD,
};

pub const TEMPLATE: Resource = Resource {
    name: "template",
    path: "/sites/{}/templates",
    payload_key: "template",
    verbs: CRUD,
};

pub const TEMPLATE_MAP: Resource = Resource {
    name: "template map",
    path: "/sites/{}/templates/{}/templatemaps",
    payload_key: "templatemap",
    verbs: CRUD,
};

pub const WIDGET: Resource = Resource {
    name: "widget",
    path: "/sites/{}/widgets",
    payload_key: "widget",
    verbs: CRUD,
};

pub const WIDGET_SET: Resource = Resource {
    name: "widget set",
    path: "/sites/{}/widgetsets",
    payload_key: "widgetset",
    verbs: CRUD,
};

pub const THEME: Resource = Resource {
    name: "theme",
    path: "/themes",
    payload_key: "",
    verbs: READ_DELETE,
};

pub const ROLE: Resource = Resource {
    name: "role",
    path: "/roles",
    payload_key: "role",
    verbs: CRUD,
};

pub const PERMISSION: Resource = Resource {
    name: "permission",
    path: "/permissions",
    payload_key: "",
    verbs: LIST_ONLY,
};

pub const LOG: Resource = Resource {
    name: "log",
    path: "/sites/{}/logs",
    payload_key: "log",
    verbs: CRUD,
};

pub const FORMATTED_TEXT: Resource = Resource {
    name: "formatted text",
    path: "/sites/{}/formatted_texts",
    payload_key: "formatted_text",
    verbs: CRUD,
};

pub const PLUGIN: Resource = Resource {
    name: "plugin",
    path: "/plugins",
    payload_key: "",
    verbs: READ_ONLY,
};

/// Every row, in table order.
pub const ALL: &[&Resource] = &[
    &SITE,
    &BLOG,
    &ENTRY,
    &PAGE,
    &CATEGORY,
    &FOLDER,
    &TAG,
    &USER,
    &ASSET,
    &COMMENT,
    &TRACKBACK,
    &FIELD,
    &TEMPLATE,
    &TEMPLATE_MAP,
    &WIDGET,
    &WIDGET_SET,
    &THEME,
    &ROLE,
    &PERMISSION,
    &LOG,
    &FORMATTED_TEXT,
    &PLUGIN,
];

impl Resource {
    /// Find a row by name.
    pub fn lookup(name: &str) -> Option<&'static Resource> {
        ALL.iter().copied().find(|r| r.name == name)
    }

    pub fn allows(&self, verb: Verb) -> bool {
        self.verbs.contains(&verb)
    }

    /// Fail with `UnsupportedOperation` when the server has no such call.
    pub fn check(&self, verb: Verb) -> MtResult<()> {
        if self.allows(verb) {
            Ok(())
        } else {
            warn!("{} is not supported for {}", verb.name(), self.name);
            Err(MtError::UnsupportedOperation(format!(
                "cannot {} a {}",
                verb.name(),
                self.name
            )))
        }
    }

    /// Fill the path template with scope ids.
    pub fn collection_path(&self, scope: &[&str]) -> MtResult<String> {
        let pieces: Vec<&str> = self.path.split("{}").collect();
        if pieces.len() != scope.len() + 1 {
            return Err(MtError::Internal(format!(
                "{} path takes {} scope ids, got {}",
                self.name,
                pieces.len() - 1,
                scope.len()
            )));
        }

        let mut path = String::from(pieces[0]);
        for (id, piece) in scope.iter().zip(&pieces[1..]) {
            path.push_str(id);
            path.push_str(piece);
        }
        Ok(path)
    }

    /// Path for `verb`. The id is appended for every verb except list and create.
    pub fn path_for(&self, verb: Verb, scope: &[&str], id: Option<&str>) -> MtResult<String> {
        let mut path = self.collection_path(scope)?;
        match (verb, id) {
            (Verb::List | Verb::Create, _) => {}
            (_, Some(id)) => {
                path.push('/');
                path.push_str(id);
            }
            (_, None) => {
                return Err(MtError::Internal(format!(
                    "{} of a {} needs an id",
                    verb.name(),
                    self.name
                )))
            }
        }
        Ok(path)
    }
}

impl DataApi {
    /// List a collection.
    pub async fn list_resource(
        &self,
        resource: &Resource,
        scope: &[&str],
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        resource.check(Verb::List)?;
        let url = self.url(&resource.collection_path(scope)?).await;
        self.fetch_list(&url, options).await
    }

    pub async fn get_resource(
        &self,
        resource: &Resource,
        scope: &[&str],
        id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.resource_action(resource, Verb::Get, scope, Some(id), None, options)
            .await
    }

    pub async fn create_resource(
        &self,
        resource: &Resource,
        scope: &[&str],
        body: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.resource_action(resource, Verb::Create, scope, None, Some(body), options)
            .await
    }

    pub async fn update_resource(
        &self,
        resource: &Resource,
        scope: &[&str],
        id: &str,
        body: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.resource_action(resource, Verb::Update, scope, Some(id), Some(body), options)
            .await
    }

    pub async fn delete_resource(
        &self,
        resource: &Resource,
        scope: &[&str],
        id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.resource_action(resource, Verb::Delete, scope, Some(id), None, options)
            .await
    }

    async fn resource_action(
        &self,
        resource: &Resource,
        verb: Verb,
        scope: &[&str],
        id: Option<&str>,
        body: Option<&Value>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        resource.check(verb)?;
        let url = self.url(&resource.path_for(verb, scope, id)?).await;
        self.action(resource.payload_key, verb.method(), &url, body, options)
            .await
    }
}

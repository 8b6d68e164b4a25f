//! Category endpoints.
//!
//! Categories and folders form trees with the same navigation calls; the
//! shared helpers here serve both.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::{Resource, CATEGORY};

/// Direction to walk from a node in a category or folder tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relation {
    Parents,
    Siblings,
    Children,
}

impl Relation {
    fn segment(self) -> &'static str {
        match self {
            Relation::Parents => "parents",
            Relation::Siblings => "siblings",
            Relation::Children => "children",
        }
    }
}

impl DataApi {
    /// `<collection>/<id>/<relation>`
    pub(crate) async fn list_related(
        &self,
        resource: &Resource,
        site_id: &str,
        id: &str,
        relation: Relation,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let path = format!(
            "{}/{id}/{}",
            resource.collection_path(&[site_id])?,
            relation.segment()
        );
        let url = self.url(&path).await;
        self.fetch_list(&url, options).await
    }

    /// Reorder a whole tree. `order` is sent as a JSON array in the form
    /// field named after the collection.
    pub(crate) async fn permutate(
        &self,
        resource: &Resource,
        field: &str,
        site_id: &str,
        order: Option<&[Value]>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("{}/permutate", resource.collection_path(&[site_id])?))
            .await;
        let mut params = Params::from_options(options);
        if let Some(order) = order {
            params.insert_json(field, order)?;
        }
        self.post(&url, Some(&params)).await
    }

    /// List categories of a site.
    pub async fn list_categories(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_resource(&CATEGORY, &[site_id], options).await
    }

    /// Create a category.
    pub async fn create_category(
        &self,
        site_id: &str,
        category: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&CATEGORY, &[site_id], category, options)
            .await
    }

    /// Get a category by id.
    pub async fn get_category(
        &self,
        site_id: &str,
        category_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&CATEGORY, &[site_id], category_id, options)
            .await
    }

    /// Update a category.
    pub async fn update_category(
        &self,
        site_id: &str,
        category_id: &str,
        category: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&CATEGORY, &[site_id], category_id, category, options)
            .await
    }

    /// Delete a category.
    pub async fn delete_category(
        &self,
        site_id: &str,
        category_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&CATEGORY, &[site_id], category_id, options)
            .await
    }

    /// Categories assigned to an entry.
    pub async fn list_categories_for_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&format!("/sites/{site_id}/entries/{entry_id}/categories"))
            .await;
        self.fetch_list(&url, options).await
    }

    /// List the ancestors of a category.
    pub async fn list_parent_categories(
        &self,
        site_id: &str,
        category_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_related(&CATEGORY, site_id, category_id, Relation::Parents, options)
            .await
    }

    /// List categories sharing a parent with this one.
    pub async fn list_sibling_categories(
        &self,
        site_id: &str,
        category_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_related(&CATEGORY, site_id, category_id, Relation::Siblings, options)
            .await
    }

    /// List the direct children of a category.
    pub async fn list_child_categories(
        &self,
        site_id: &str,
        category_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_related(&CATEGORY, site_id, category_id, Relation::Children, options)
            .await
    }

    /// Rewrite the category tree of a site in the given order.
    pub async fn permutate_categories(
        &self,
        site_id: &str,
        categories: Option<&[Value]>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.permutate(&CATEGORY, "categories", site_id, categories, options)
            .await
    }
}

//! Comment endpoints.
//!
//! Comments are created under the entry or page they belong to, and replies
//! under the comment they answer.

use reqwest::Method;
use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::COMMENT;

impl DataApi {
    /// List comments of a site.
    pub async fn list_comments(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&COMMENT, &[site_id], options).await
    }

    /// Get a comment by id.
    pub async fn get_comment(
        &self,
        site_id: &str,
        comment_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&COMMENT, &[site_id], comment_id, options)
            .await
    }

    /// Update a comment.
    pub async fn update_comment(
        &self,
        site_id: &str,
        comment_id: &str,
        comment: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&COMMENT, &[site_id], comment_id, comment, options)
            .await
    }

    /// Delete a comment.
    pub async fn delete_comment(
        &self,
        site_id: &str,
        comment_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&COMMENT, &[site_id], comment_id, options)
            .await
    }

    fn comments_path(site_id: &str, owner: &str, owner_id: &str) -> String {
        format!("/sites/{site_id}/{owner}/{owner_id}/comments")
    }

    /// List comments attached to an entry.
    pub async fn list_comments_for_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&Self::comments_path(site_id, "entries", entry_id))
            .await;
        self.fetch_list(&url, options).await
    }

    /// List comments attached to a page.
    pub async fn list_comments_for_page(
        &self,
        site_id: &str,
        page_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&Self::comments_path(site_id, "pages", page_id))
            .await;
        self.fetch_list(&url, options).await
    }

    /// Post a comment on an entry.
    pub async fn create_comment_for_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        comment: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&Self::comments_path(site_id, "entries", entry_id))
            .await;
        self.action(COMMENT.payload_key, Method::POST, &url, Some(comment), options)
            .await
    }

    /// Post a comment on a page.
    pub async fn create_comment_for_page(
        &self,
        site_id: &str,
        page_id: &str,
        comment: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&Self::comments_path(site_id, "pages", page_id))
            .await;
        self.action(COMMENT.payload_key, Method::POST, &url, Some(comment), options)
            .await
    }

    /// Reply to a comment on an entry.
    pub async fn create_reply_comment_for_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        comment_id: &str,
        reply: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let path = format!(
            "{}/{comment_id}/replies",
            Self::comments_path(site_id, "entries", entry_id)
        );
        let url = self.url(&path).await;
        self.action(COMMENT.payload_key, Method::POST, &url, Some(reply), options)
            .await
    }

    /// Reply to a comment on a page.
    pub async fn create_reply_comment_for_page(
        &self,
        site_id: &str,
        page_id: &str,
        comment_id: &str,
        reply: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let path = format!(
            "{}/{comment_id}/replies",
            Self::comments_path(site_id, "pages", page_id)
        );
        let url = self.url(&path).await;
        self.action(COMMENT.payload_key, Method::POST, &url, Some(reply), options)
            .await
    }
}

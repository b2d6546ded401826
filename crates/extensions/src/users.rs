//! Built-in extension: list the tenant's users.

use async_trait::async_trait;
use serde_json::Value;

use cloudguard::{Extension, ExtensionDescriptor, Method, OperationResult, PostureApi};

/// Lists every user of the tenant via `GET /user`.
pub struct ListUsers;

#[async_trait]
impl Extension for ListUsers {
    fn describe(&self) -> ExtensionDescriptor {
        ExtensionDescriptor::new(
            "list-users",
            "Lists the users of the tenant (GET /user). Takes no input fields.",
        )
    }

    async fn execute(&self, api: &dyn PostureApi, _input: Value) -> OperationResult {
        match api.send("/user", Method::Get, None).await {
            Ok(result) => OperationResult::success(result.body),
            Err(err) => OperationResult::failure(err.to_string()),
        }
    }
}

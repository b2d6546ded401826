//! Built-in extension: list onboarded cloud accounts.

use async_trait::async_trait;
use serde_json::Value;

use cloudguard::{Extension, ExtensionDescriptor, Method, OperationResult, PostureApi};

/// Lists onboarded cloud accounts via `GET /CloudAccounts`.
///
/// An optional `vendor` input field (e.g. `"aws"`, `"azure"`) narrows the
/// result to accounts of that vendor.
pub struct CloudAccounts;

#[async_trait]
impl Extension for CloudAccounts {
    fn describe(&self) -> ExtensionDescriptor {
        ExtensionDescriptor::new(
            "cloud-accounts",
            "Lists onboarded cloud accounts (GET /CloudAccounts). Optional input field \
             'vendor' narrows the result to one vendor.",
        )
    }

    async fn execute(&self, api: &dyn PostureApi, input: Value) -> OperationResult {
        let vendor = input
            .get("vendor")
            .and_then(Value::as_str)
            .map(str::to_owned);
        match api.send("/CloudAccounts", Method::Get, None).await {
            Ok(result) => OperationResult::success(narrow_to_vendor(result.body, vendor)),
            Err(err) => OperationResult::failure(err.to_string()),
        }
    }
}

/// Keeps only the accounts of the requested vendor. Non-array bodies and
/// absent filters pass through untouched.
fn narrow_to_vendor(body: Value, vendor: Option<String>) -> Value {
    match (body, vendor) {
        (Value::Array(accounts), Some(vendor)) => Value::Array(
            accounts
                .into_iter()
                .filter(|account| {
                    account.get("vendor").and_then(Value::as_str) == Some(vendor.as_str())
                })
                .collect(),
        ),
        (body, _) => body,
    }
}

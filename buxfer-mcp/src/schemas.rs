//! MCP tool parameter schemas
//!
//! Defines the input parameter structures for all MCP tools.
//! All structs derive `Debug`, `Deserialize`, and `JsonSchema` as required
//! by rmcp. Every field is string-typed: the caller contract is named string
//! arguments only, and an absent or empty string means "not supplied".

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `add_transaction` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct AddTransactionParams {
    /// Transaction description.
    #[serde(default)]
    #[schemars(description = "Transaction description (required)")]
    pub description: String,

    /// Transaction amount.
    #[serde(default)]
    #[schemars(description = "Transaction amount (required, passed through as-is)")]
    pub amount: String,

    /// Target account ID.
    #[serde(default)]
    #[schemars(description = "Account ID (either account_id or account_name is required)")]
    pub account_id: String,

    /// Target account name.
    #[serde(default)]
    #[schemars(description = "Account name (either account_id or account_name is required)")]
    pub account_name: String,

    /// Transaction date.
    #[serde(default)]
    #[schemars(description = "Transaction date (optional)")]
    pub date: String,

    /// Comma-separated tags.
    #[serde(default)]
    #[schemars(description = "Comma-separated tags (optional)")]
    pub tags: String,

    /// Transaction type.
    #[serde(default)]
    #[schemars(
        description = "Transaction type: expense/income/transfer/loan/etc (default: expense)"
    )]
    pub transaction_type: String,

    /// Transaction status.
    #[serde(default)]
    #[schemars(description = "Transaction status: cleared/pending (default: cleared)")]
    pub status: String,
}

/// Parameters for the `list_accounts` tool.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListAccountsParams {}

/// Parameters for the `list_transactions` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListTransactionsParams {
    /// Filter by account ID.
    #[serde(default)]
    #[schemars(description = "Filter by account ID")]
    pub account_id: String,

    /// Filter by account name.
    #[serde(default)]
    #[schemars(description = "Filter by account name")]
    pub account_name: String,

    /// Filter by tag name.
    #[serde(default)]
    #[schemars(description = "Filter by tag name")]
    pub tag_name: String,

    /// Start of an explicit date range.
    #[serde(default)]
    #[schemars(description = "Start date (YYYY-MM-DD)")]
    pub start_date: String,

    /// End of an explicit date range.
    #[serde(default)]
    #[schemars(description = "End date (YYYY-MM-DD)")]
    pub end_date: String,

    /// Month token, an alternative to the explicit date range.
    #[serde(default)]
    #[schemars(description = "Month (e.g. 'jan 2024')")]
    pub month: String,

    /// Filter by status.
    #[serde(default)]
    #[schemars(description = "Filter by status (pending/cleared/reconciled)")]
    pub status: String,

    /// 1-based page number.
    #[serde(default)]
    #[schemars(description = "Page number for pagination (1-indexed, default: 1)")]
    pub page: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use schemars::schema_for;

    #[test]
    fn add_transaction_defaults_every_field_to_empty() {
        let params: AddTransactionParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(params.description.is_empty());
        assert!(params.transaction_type.is_empty());
        assert!(params.status.is_empty());
    }

    #[test]
    fn add_transaction_deserializes_supplied_fields() {
        let json = serde_json::json!({
            "description": "Coffee",
            "amount": "4.50",
            "account_name": "Checking",
            "transaction_type": "expense"
        });

        let params: AddTransactionParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.description, "Coffee");
        assert_eq!(params.amount, "4.50");
        assert_eq!(params.account_name, "Checking");
        assert!(params.account_id.is_empty());
    }

    #[test]
    fn list_transactions_accepts_partial_filters() {
        let json = serde_json::json!({ "tag_name": "rent", "page": "2" });
        let params: ListTransactionsParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.tag_name, "rent");
        assert_eq!(params.page, "2");
        assert!(params.month.is_empty());
    }

    #[test]
    fn list_accounts_accepts_empty_object() {
        let params: ListAccountsParams = serde_json::from_value(serde_json::json!({})).unwrap();
        let _ = params;
    }

    #[test]
    fn schema_has_no_required_fields() {
        let schema = schema_for!(ListTransactionsParams);
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("required").is_none());
    }
}

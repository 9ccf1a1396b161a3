//! Text rendering for tool results.
//!
//! Pure functions turning upstream records into fixed multi-line blocks and
//! list-level summaries. Missing fields render as explicit placeholders,
//! never as a formatter failure. Dates are echoed verbatim; they are never
//! parsed here.

use buxfer_client::{Account, Transaction, TransactionQuery, TransactionsPage};

/// Upstream page size used to compute the pagination footer.
const PAGE_SIZE: u32 = 100;

/// Format a currency amount: `$` prefix, two decimal places, thousands
/// separators. The sign stays with the digits (`$-25.50`).
pub(crate) fn format_money(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (sign, digits) = fixed
        .strip_prefix('-')
        .map_or(("", fixed.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${sign}{grouped}.{frac_part}")
}

/// Format a single account for display.
pub(crate) fn format_account(account: &Account) -> String {
    let name = account.name.as_deref().unwrap_or("Unknown");
    let bank = account.bank.as_deref().unwrap_or("N/A");
    let id = account
        .id
        .map_or_else(|| "N/A".to_string(), |id| id.to_string());
    let balance = format_money(account.balance.unwrap_or(0.0));
    let last_synced = account.last_synced.as_deref().unwrap_or("Never");

    format!("• {name} ({bank})\n  ID: {id}\n  Balance: {balance}\n  Last Synced: {last_synced}")
}

/// Format a single transaction for display.
pub(crate) fn format_transaction(txn: &Transaction) -> String {
    let description = txn.description.as_deref().unwrap_or("No description");
    let date = txn.date.as_deref().unwrap_or("No date");
    let id = txn.id.map_or_else(|| "N/A".to_string(), |id| id.to_string());
    let kind = txn.kind.as_deref().unwrap_or("unknown");
    let amount = format_money(txn.amount.unwrap_or(0.0));
    let account = txn.account_name.as_deref().unwrap_or("Unknown");

    let mut block = format!(
        "• {description} ({date})\n  ID: {id}\n  Type: {kind} | Amount: {amount}\n  Account: {account}"
    );

    if let Some(status) = txn.status.as_deref().filter(|s| !s.is_empty()) {
        block.push_str(&format!(" | Status: {status}"));
    }
    if let Some(tags) = txn.tags.as_deref().filter(|t| !t.is_empty()) {
        block.push_str(&format!(" | Tags: {tags}"));
    }
    if let Some(extra) = txn.extra_info.as_deref().filter(|e| !e.is_empty()) {
        block.push_str(&format!("\n  Info: {extra}"));
    }

    block
}

/// Render the full account listing: header, one block per account in
/// upstream order, and the computed grand total. Missing balances count as
/// zero for the total.
pub(crate) fn render_accounts(accounts: &[Account]) -> String {
    let mut text = format!("📊 **Buxfer Accounts** ({} total)\n\n", accounts.len());

    for account in accounts {
        text.push_str(&format_account(account));
        text.push_str("\n\n");
    }

    let total: f64 = accounts.iter().filter_map(|a| a.balance).sum();
    text.push_str(&format!("**Total Balance: {}**", format_money(total)));
    text
}

/// Render the confirmation block for a created transaction, in fixed field
/// order. Tags appear only when the upstream echoed them back non-empty.
pub(crate) fn render_added(txn: &Transaction) -> String {
    let mut text = "✅ Transaction added successfully!\n\n".to_string();
    text.push_str(&format!(
        "ID: {}\n",
        txn.id.map_or_else(|| "N/A".to_string(), |id| id.to_string())
    ));
    text.push_str(&format!(
        "Description: {}\n",
        txn.description.as_deref().unwrap_or("N/A")
    ));
    text.push_str(&format!(
        "Amount: {}\n",
        format_money(txn.amount.unwrap_or(0.0))
    ));
    text.push_str(&format!("Type: {}\n", txn.kind.as_deref().unwrap_or("N/A")));
    text.push_str(&format!("Date: {}\n", txn.date.as_deref().unwrap_or("N/A")));
    text.push_str(&format!(
        "Account: {}\n",
        txn.account_name.as_deref().unwrap_or("N/A")
    ));
    text.push_str(&format!(
        "Status: {}",
        txn.status.as_deref().unwrap_or("N/A")
    ));

    if let Some(tags) = txn.tags.as_deref().filter(|t| !t.is_empty()) {
        text.push_str(&format!("\nTags: {tags}"));
    }

    text
}

/// Human-readable echo of the active filters, in fixed precedence: account
/// name over account id, explicit date range over month.
fn filter_echo(query: &TransactionQuery) -> Vec<String> {
    let mut filters = Vec::new();

    if !query.account_name.is_empty() {
        filters.push(format!("Account: {}", query.account_name));
    } else if !query.account_id.is_empty() {
        filters.push(format!("Account ID: {}", query.account_id));
    }
    if !query.tag_name.is_empty() {
        filters.push(format!("Tag: {}", query.tag_name));
    }
    if !query.start_date.is_empty() && !query.end_date.is_empty() {
        filters.push(format!("Date: {} to {}", query.start_date, query.end_date));
    } else if !query.month.is_empty() {
        filters.push(format!("Month: {}", query.month));
    }
    if !query.status.is_empty() {
        filters.push(format!("Status: {}", query.status));
    }

    filters
}

/// Render one page of transactions: header, filter echo, one block per
/// transaction in upstream order, and a pagination footer when more pages
/// exist.
pub(crate) fn render_transactions(query: &TransactionQuery, page: &TransactionsPage) -> String {
    let current_page = query.page_number();
    let count = u32::try_from(page.transactions.len()).unwrap_or(u32::MAX);
    let total = page.num_transactions;

    let mut text = format!(
        "📋 **Buxfer Transactions** (Page {current_page}, {count} of {total} total)\n\n"
    );

    let filters = filter_echo(query);
    if !filters.is_empty() {
        text.push_str(&format!("**Filters:** {}\n\n", filters.join(", ")));
    }

    for txn in &page.transactions {
        text.push_str(&format_transaction(txn));
        text.push_str("\n\n");
    }

    if total > count {
        let total_pages = total.div_ceil(PAGE_SIZE);
        text.push_str(&format!(
            "**Page {current_page} of {total_pages}** (Use page parameter to view more)"
        ));
    }

    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn full_account() -> Account {
        Account {
            id: Some(42),
            name: Some("Checking".to_string()),
            bank: Some("First National".to_string()),
            balance: Some(1234.5),
            last_synced: Some("2024-03-01 08:00".to_string()),
        }
    }

    fn full_transaction() -> Transaction {
        Transaction {
            id: Some(9001),
            description: Some("Weekly groceries".to_string()),
            amount: Some(82.1),
            kind: Some("expense".to_string()),
            status: Some("cleared".to_string()),
            tags: Some("food,household".to_string()),
            account_name: Some("Checking".to_string()),
            extra_info: Some("paid by card".to_string()),
            date: Some("2024-03-02".to_string()),
        }
    }

    #[test]
    fn money_uses_two_decimals_and_separators() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(74.5), "$74.50");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_money(-25.5), "$-25.50");
        assert_eq!(format_money(-1234.5), "$-1,234.50");
    }

    #[test]
    fn account_block_positions_every_field() {
        let lines: Vec<String> = format_account(&full_account())
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(lines[0], "• Checking (First National)");
        assert_eq!(lines[1], "  ID: 42");
        assert_eq!(lines[2], "  Balance: $1,234.50");
        assert_eq!(lines[3], "  Last Synced: 2024-03-01 08:00");
    }

    #[test]
    fn account_block_uses_placeholders_for_missing_fields() {
        let lines: Vec<String> = format_account(&Account::default())
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(lines[0], "• Unknown (N/A)");
        assert_eq!(lines[1], "  ID: N/A");
        assert_eq!(lines[2], "  Balance: $0.00");
        assert_eq!(lines[3], "  Last Synced: Never");
    }

    #[test]
    fn transaction_block_positions_every_field() {
        let lines: Vec<String> = format_transaction(&full_transaction())
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(lines[0], "• Weekly groceries (2024-03-02)");
        assert_eq!(lines[1], "  ID: 9001");
        assert_eq!(lines[2], "  Type: expense | Amount: $82.10");
        assert_eq!(
            lines[3],
            "  Account: Checking | Status: cleared | Tags: food,household"
        );
        assert_eq!(lines[4], "  Info: paid by card");
    }

    #[test]
    fn transaction_block_omits_empty_segments() {
        let block = format_transaction(&Transaction::default());
        assert!(!block.contains("Status:"));
        assert!(!block.contains("Tags:"));
        assert!(!block.contains("Info:"));
        assert!(block.contains("• No description (No date)"));
        assert!(block.ends_with("Account: Unknown"));
    }

    #[test]
    fn accounts_summary_totals_balances() {
        let accounts = vec![
            Account {
                balance: Some(100.0),
                ..Account::default()
            },
            Account {
                balance: Some(-25.5),
                ..Account::default()
            },
            Account {
                balance: None,
                ..Account::default()
            },
        ];

        let text = render_accounts(&accounts);
        assert!(text.starts_with("📊 **Buxfer Accounts** (3 total)"));
        assert!(text.ends_with("**Total Balance: $74.50**"));
    }

    #[test]
    fn added_confirmation_has_fixed_field_order() {
        let lines: Vec<String> = render_added(&full_transaction())
            .lines()
            .map(str::to_string)
            .collect();

        assert_eq!(lines[0], "✅ Transaction added successfully!");
        assert_eq!(lines[2], "ID: 9001");
        assert_eq!(lines[3], "Description: Weekly groceries");
        assert_eq!(lines[4], "Amount: $82.10");
        assert_eq!(lines[5], "Type: expense");
        assert_eq!(lines[6], "Date: 2024-03-02");
        assert_eq!(lines[7], "Account: Checking");
        assert_eq!(lines[8], "Status: cleared");
        assert_eq!(lines[9], "Tags: food,household");
    }

    #[test]
    fn added_confirmation_skips_tags_when_absent() {
        let mut txn = full_transaction();
        txn.tags = None;
        assert!(!render_added(&txn).contains("Tags:"));
    }

    #[test]
    fn filter_echo_prefers_name_and_date_range() {
        let query = TransactionQuery {
            account_id: "42".to_string(),
            account_name: "Checking".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
            month: "jan 2024".to_string(),
            ..TransactionQuery::default()
        };

        let filters = filter_echo(&query);
        assert_eq!(
            filters,
            vec![
                "Account: Checking".to_string(),
                "Date: 2024-01-01 to 2024-01-31".to_string()
            ]
        );
    }

    #[test]
    fn filter_echo_falls_back_to_id_and_month() {
        let query = TransactionQuery {
            account_id: "42".to_string(),
            month: "jan 2024".to_string(),
            status: "pending".to_string(),
            ..TransactionQuery::default()
        };

        assert_eq!(
            filter_echo(&query),
            vec![
                "Account ID: 42".to_string(),
                "Month: jan 2024".to_string(),
                "Status: pending".to_string()
            ]
        );
    }

    #[test]
    fn transactions_page_footer_rounds_up() {
        let page = TransactionsPage {
            transactions: vec![Transaction::default(); 100],
            num_transactions: 250,
        };

        let text = render_transactions(&TransactionQuery::default(), &page);
        assert!(text.contains("(Page 1, 100 of 250 total)"));
        assert!(text.contains("**Page 1 of 3** (Use page parameter to view more)"));
    }

    #[test]
    fn transactions_page_footer_absent_when_total_fits() {
        let page = TransactionsPage {
            transactions: vec![Transaction::default(); 5],
            num_transactions: 5,
        };

        let text = render_transactions(&TransactionQuery::default(), &page);
        assert!(!text.contains("Use page parameter"));
    }

    #[test]
    fn unparseable_page_argument_renders_page_one() {
        let query = TransactionQuery {
            page: "abc".to_string(),
            ..TransactionQuery::default()
        };
        let page = TransactionsPage {
            transactions: vec![Transaction::default()],
            num_transactions: 1,
        };

        let text = render_transactions(&query, &page);
        assert!(text.contains("(Page 1, 1 of 1 total)"));
    }
}

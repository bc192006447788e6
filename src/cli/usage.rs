//! Usage and guide text
//!
//! Printed on stdout whenever an invocation is rejected, so the user sees the
//! exact forms each command accepts.

/// Binary name shown in usage lines
pub const BIN_NAME: &str = "expense-tracker";

const USAGE_PREFIX: &str = "Invalid command. Usage: ";

fn forms(command: &str) -> Option<&'static [&'static str]> {
    let forms: &'static [&'static str] = match command {
        "add" => &[r#"add --description "<name>" --amount <value>"#],
        "update" => &[
            r#"update --id <id> --description "<name>" --amount <value>"#,
            r#"update --id <id> --description "<name>""#,
            "update --id <id> --amount <value>",
        ],
        "delete" => &["delete --id <id>"],
        "list" => &["list"],
        "summary" => &["summary", "summary --month <number>"],
        _ => return None,
    };
    Some(forms)
}

/// Usage message for one command, falling back to the full guide for
/// anything that is not a command
pub fn usage(command: &str) -> String {
    let Some(lines) = forms(command) else {
        return guide();
    };

    let indent = " ".repeat(USAGE_PREFIX.len());
    lines
        .iter()
        .enumerate()
        .map(|(i, form)| {
            let lead = if i == 0 { USAGE_PREFIX } else { indent.as_str() };
            format!("{}{} {}\n", lead, BIN_NAME, form)
        })
        .collect()
}

/// Overview of every command
pub fn guide() -> String {
    let sections = [
        ("Add an expense", "add"),
        ("Update an expense", "update"),
        ("Delete an expense", "delete"),
        ("View all expenses", "list"),
        ("View a summary of expenses", "summary"),
    ];

    let mut output = String::from("=== Expense Tracker Guide ===\n\n");
    for (title, command) in sections {
        let lead = format!("- {}: ", title);
        let indent = " ".repeat(lead.len());
        for (i, form) in forms(command).unwrap_or_default().iter().enumerate() {
            let prefix = if i == 0 { lead.as_str() } else { indent.as_str() };
            output.push_str(&format!("{}{} {}\n", prefix, BIN_NAME, form));
        }
    }
    output.push_str("\nGlobal options: --file <path> (default: expenses.json), --log-level <level>\n");
    output
}

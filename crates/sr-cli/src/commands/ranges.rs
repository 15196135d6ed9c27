use comfy_table::{ContentArrangement, Table};
use sr_core::{Difficulty, TIME_LIMIT};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Difficulty", "Operands", "Largest sum"]);

    for d in Difficulty::ALL {
        let range = d.operand_range();
        table.add_row(vec![
            d.to_string(),
            format!("{}-{}", range.start(), range.end()),
            (range.end() * 2).to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  Rounds last {} seconds by default; `play --time-limit` changes that.",
        TIME_LIMIT.as_secs()
    );

    Ok(())
}

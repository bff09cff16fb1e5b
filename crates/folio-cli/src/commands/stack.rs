use anyhow::Result;

use folio_core::Portfolio;

pub fn run(portfolio: &Portfolio, json: bool) -> Result<()> {
    if json {
        println!("{}", portfolio.stack_rows_json()?);
        return Ok(());
    }

    let rows = portfolio.stack_rows();

    if rows.is_empty() {
        println!("No tech stack configured.");
        return Ok(());
    }

    let lengths: Vec<String> = rows.iter().map(|row| row.len().to_string()).collect();
    println!(
        "Tech stack: {} items in rows of [{}]\n",
        portfolio.stack.len(),
        lengths.join(", ")
    );

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|item| format!("[{} {}]", item.icon, item.name))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for line in lines {
        let pad = (widest - line.chars().count()) / 2;
        println!("{}{}", " ".repeat(pad), line);
    }

    Ok(())
}

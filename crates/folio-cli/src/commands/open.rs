use anyhow::Result;

use folio_core::Portfolio;
use folio_tui::links::open_link;

pub fn run(portfolio: &Portfolio, label: &str) -> Result<()> {
    let link = match portfolio.find_link(label) {
        Ok(link) => link,
        Err(e) => {
            let labels: Vec<&str> = portfolio.links.iter().map(|l| l.label.as_str()).collect();
            println!("Available links: {}", labels.join(", "));
            return Err(e.into());
        }
    };

    open_link(link)?;
    println!("Opened {} ({})", link.label, link.href);
    Ok(())
}

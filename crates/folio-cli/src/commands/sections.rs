use anyhow::Result;

use folio_core::NAV_ITEMS;

pub fn run() -> Result<()> {
    println!("Sections ({}):\n", NAV_ITEMS.len());
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        println!("  {}  {:<12} {}", i + 1, item.label, item.section.anchor());
    }
    Ok(())
}

use anyhow::Result;
use dine_catalog::{CategoryFilter, FilterState};
use dine_config::DineConfig;

pub fn print_menu(cfg: &DineConfig, category: &str, query: &str) -> Result<()> {
    let catalog = dine_session::open_catalog(cfg)?;

    let mut filter = FilterState::new();
    filter.set_category(&catalog, CategoryFilter::parse(category))?;
    filter.set_query(query);

    println!("{}", cfg.venue.name);
    let mut shown = 0usize;
    for item in filter.visible_items(&catalog) {
        let marker = if item.flags.is_featured { "*" } else { " " };
        println!(
            "{marker}{:>4}  {:<24} {:>10}  {:<10} {:>3} min",
            item.id.0, item.name, item.price, item.category, item.prep_time
        );
        shown += 1;
    }
    if shown == 0 {
        println!("(no items match)");
    }
    Ok(())
}

//! Scales command for printing grade equivalence tables.

use anyhow::Result;
use cragbook::export::format_scale_table;
use cragbook::{Category, GradeRegistry};
use strum::IntoEnumIterator;

pub fn run(category: Option<Category>) -> Result<()> {
    let registry = GradeRegistry::standard();
    let categories: Vec<Category> = match category {
        Some(category) => vec![category],
        None => Category::iter().collect(),
    };

    for (i, category) in categories.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", category);
        println!("{}", format_scale_table(registry, category));
    }
    Ok(())
}

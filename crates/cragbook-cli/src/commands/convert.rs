//! Convert command for translating a grade between systems.

use anyhow::Result;
use cragbook::{Category, Conversion, GradeRegistry, GradingSystem, UnchangedReason};
use serde_json::json;

pub fn run(grade: &str, category: Category, to: &str, json: bool) -> Result<()> {
    let target = GradingSystem::parse(category, to)?;
    let registry = GradeRegistry::standard();
    let conversion = registry.convert(grade, target);

    if json {
        let value = match conversion {
            Conversion::Converted { grade: converted, from, index } => json!({
                "input": grade,
                "category": category.name(),
                "target": target.name(),
                "grade": converted,
                "from": from.name(),
                "difficulty": index,
                "converted": true,
            }),
            Conversion::Unchanged { original, .. } => json!({
                "input": grade,
                "category": category.name(),
                "target": target.name(),
                "grade": original,
                "converted": false,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match conversion {
        Conversion::Converted { grade: converted, from, .. } => {
            println!("{} ({}) = {} ({})", grade, from, converted, target);
        }
        Conversion::Unchanged { original, reason } => {
            let why = match reason {
                UnchangedReason::UnrecognizedGrade => "not a known grade",
                UnchangedReason::UnknownSystem => "no such system",
            };
            println!("{}", original);
            eprintln!("{:?} left unchanged: {} in {} systems", original, why, category);
        }
    }
    Ok(())
}

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use dt_core::{ActivityRecord, DiceFormula};

use crate::store;

pub fn run(file: &Path) -> Result<(), String> {
    let record = store::load(file)?;

    let status = if record.is_complete {
        "complete".green()
    } else {
        "in progress".dimmed()
    };
    println!("  {} [{}]", record.name.bold(), status);
    println!();

    if !record.description.is_empty() {
        for line in record.description.lines() {
            println!("  {}", line.trim());
        }
        println!();
    }

    if !record.duration.is_empty() {
        println!("  duration: {}", record.duration);
    }
    if !record.cost.is_empty() {
        println!("  cost:     {}", record.cost);
    }
    let roll = if record.roll_expression.is_empty() {
        "(none)"
    } else {
        record.roll_expression.as_str()
    };
    println!("  roll:     {roll}");
    if let Some(total) = record.last_roll {
        println!("  last:     {total}: {}", record.current_outcome);
    }
    println!();

    if record.outcomes.is_empty() {
        println!("  No outcome ranges.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Min", "Max", "Outcome"]);
        for (i, range) in record.outcomes.iter().enumerate() {
            let text = if range.description.is_empty() {
                "—".to_string()
            } else {
                range.description.clone()
            };
            table.add_row(vec![
                i.to_string(),
                range.min_roll.to_string(),
                range.max_roll.to_string(),
                text,
            ]);
        }
        println!("{table}");
    }

    for warning in warnings(&record) {
        println!("  {}", warning.yellow());
    }

    Ok(())
}

/// Advisory checks: unreachable ranges and rolls no range covers.
fn warnings(record: &ActivityRecord) -> Vec<String> {
    let mut out: Vec<String> = record
        .inverted_ranges()
        .into_iter()
        .map(|i| format!("outcome {i} has its minimum above its maximum and can never match"))
        .collect();

    if let Ok(formula) = DiceFormula::parse(&record.roll_expression) {
        for (low, high) in record.coverage_gaps(formula.min_roll(), formula.max_roll()) {
            let span = if low == high {
                low.to_string()
            } else {
                format!("{low}-{high}")
            };
            out.push(format!("no outcome covers a roll of {span} on {formula}"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_core::OutcomeRange;

    #[test]
    fn default_activity_has_no_warnings() {
        assert!(warnings(&ActivityRecord::new("Fine")).is_empty());
    }

    #[test]
    fn warns_about_gaps_and_inversions() {
        let mut r = ActivityRecord::new("Patchy");
        r.roll_expression = "1d6".to_string();
        r.outcomes = vec![
            OutcomeRange::new(1, 2, "low").unwrap(),
            OutcomeRange::new(5, 3, "flipped").unwrap(),
            OutcomeRange::new(4, 5, "mid").unwrap(),
        ];
        let w = warnings(&r);
        assert_eq!(
            w,
            vec![
                "outcome 1 has its minimum above its maximum and can never match".to_string(),
                "no outcome covers a roll of 3 on 1d6".to_string(),
                "no outcome covers a roll of 6 on 1d6".to_string(),
            ]
        );
    }

    #[test]
    fn unparseable_roll_skips_gap_check() {
        let mut r = ActivityRecord::new("Odd");
        r.roll_expression = "custom".to_string();
        r.outcomes.clear();
        assert!(warnings(&r).is_empty());
    }
}

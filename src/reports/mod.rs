use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use differential::scorer::bounds::{AreaDistribution, Bounds};
use differential::scorer::interpret::percent;
use differential::scorer::{PointLabel, ScoringResult};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_breakdown(result: &ScoringResult) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Action"),
        Cell::new("Tile"),
        Cell::new("Cost"),
        Cell::new("Info"),
        Cell::new("Info/Cost"),
        Cell::new("Total Cost"),
        Cell::new("Total Info"),
        Cell::new("Area").fg(Color::Cyan),
    ]);
    align_right(&mut table, 3..=8);

    for step in &result.breakdown {
        let color = match step.label {
            PointLabel::WrongGuess => Color::Red,
            PointLabel::CorrectGuess => Color::Green,
            PointLabel::Start | PointLabel::Flip(_) => Color::Reset,
        };
        table.add_row(vec![
            Cell::new(step.step),
            Cell::new(step.label.to_string()).fg(color),
            Cell::new(step.tile_index.map(|i| i.to_string()).unwrap_or_default()),
            Cell::new(format!("{:.1}", step.cost)),
            Cell::new(format!("{:.1}", step.info)),
            Cell::new(format!("{:.2}", step.efficiency)),
            Cell::new(format!("{:.1}", step.total_cost)),
            Cell::new(format!("{:.1}", step.total_info)),
            Cell::new(format!("{:.2}", step.area)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_bounds(bounds: &Bounds) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Method").add_attribute(Attribute::Bold),
        Cell::new("Best").fg(Color::Green),
        Cell::new("Worst").fg(Color::Red),
        Cell::new("P10"),
        Cell::new("Median"),
        Cell::new("P90"),
    ]);
    align_right(&mut table, 1..=5);

    let dist = |f: fn(&AreaDistribution) -> f64| {
        bounds
            .distribution
            .as_ref()
            .map(|d| format!("{:.2}", f(d)))
            .unwrap_or_else(|| "-".to_string())
    };

    table.add_row(vec![
        Cell::new(bounds.method.to_string()),
        Cell::new(format!("{:.2}", bounds.best)).fg(Color::Green),
        Cell::new(format!("{:.2}", bounds.worst)).fg(Color::Red),
        Cell::new(dist(|d| d.p10)),
        Cell::new(dist(|d| d.median)),
        Cell::new(dist(|d| d.p90)),
    ]);
    println!("\n{}", table);

    if !bounds.is_exact() {
        println!("(sampled bounds are an estimate, not a guaranteed extreme)");
    }
}

pub fn print_score(result: &ScoringResult) {
    let interp = &result.interpretation;
    println!("\nRaw Area: {:.2}", result.raw_area);
    println!(
        "Score: {:.4} ({}%)",
        result.normalized_score,
        percent(result.normalized_score)
    );
    println!("\n{}", interp.headline);
    println!("{}", interp.explanation);
    println!("{}", interp.advice);
}

pub fn print_batch_summary(rows: &[(String, ScoringResult)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Game").add_attribute(Attribute::Bold),
        Cell::new("Won"),
        Cell::new("Cost"),
        Cell::new("Info"),
        Cell::new("Area"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Tier"),
    ]);
    align_right(&mut table, 2..=5);

    for (name, r) in rows {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(if r.game_won { "yes" } else { "no" }),
            Cell::new(format!("{:.1}", r.curve.total_cost())),
            Cell::new(format!("{:.1}", r.curve.total_info())),
            Cell::new(format!("{:.2}", r.raw_area)),
            Cell::new(format!("{}%", percent(r.normalized_score))).fg(Color::Cyan),
            Cell::new(
                r.interpretation
                    .tier
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }
    println!("\n{}", table);
}

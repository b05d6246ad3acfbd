use meldex_core::lookup::LookupHit;
use meldex_core::model::DailyReportRow;

pub fn print_rows(rows: &[DailyReportRow]) {
    if rows.is_empty() {
        println!("No rows.");
        return;
    }

    let refs: Vec<&str> = rows
        .iter()
        .map(|r| r.mel_ref.as_ref().map(|c| c.as_str()).unwrap_or("-"))
        .collect();
    let tail_w = rows.iter().map(|r| r.tail.len()).max().unwrap_or(4).max(4);
    let wo_w = rows.iter().map(|r| r.wo.len()).max().unwrap_or(2).max(2);
    let ref_w = refs.iter().map(|r| r.len()).max().unwrap_or(3).max(3);

    println!(
        "  {:<tail_w$}  {:<wo_w$}  {:<ref_w$}  DESCRIPTION",
        "TAIL", "WO", "MEL"
    );
    println!(
        "  {}",
        "-".repeat(tail_w + wo_w + ref_w + 6 + "DESCRIPTION".len())
    );
    for (row, mel_ref) in rows.iter().zip(&refs) {
        println!(
            "  {:<tail_w$}  {:<wo_w$}  {:<ref_w$}  {}",
            row.tail, row.wo, mel_ref, row.desc
        );
    }
    println!("\n  {} row(s)", rows.len());
}

pub fn print_hit(hit: &LookupHit<'_>) {
    if !hit.is_found() {
        println!("{}: not in index", hit.code);
        return;
    }

    println!("=== {} ===\n", hit.code);
    if let Some(entry) = hit.entry {
        println!("  Page:     {}", entry.page);
        println!("  Snippet:  {}", entry.snippet);
    }
    if let Some(cats) = hit.categories {
        let labels: Vec<&str> = cats.cats.iter().map(|c| c.label()).collect();
        println!("  CAT:      {} (page {})", labels.join(", "), cats.page);
        if hit.entry.map(|e| e.snippet != cats.snippet).unwrap_or(true) {
            println!("  Context:  {}", cats.snippet);
        }
    }
}

// Audits the built-in AllWISE layout: prints the byte table and proves the
// 354-byte tiling. Pass a path to also write a YAML copy of the layout.
//
//   cargo run --bin layout_check -- [OUT_YAML]

use anyhow::Result;
use wisecat::schema::{allwise, dump_schema, write_atomic, DumpFormat};

fn main() -> Result<()> {
    let out = std::env::args().nth(1);

    let schema = allwise::layout();
    schema.validate()?;

    println!("record length: {} bytes\n", schema.record_len);
    println!(
        "{:<8} {:>5} {:>5}  {:<6} {:<7} {}",
        "label", "start", "end", "format", "unit", "description"
    );
    for col in &schema.columns {
        println!(
            "{:<8} {:>5} {:>5}  {:<6} {:<7} {}{}",
            col.label,
            col.start,
            col.end,
            col.format.code(),
            col.unit.as_deref().unwrap_or(""),
            col.description,
            if col.nullable { " [nullable]" } else { "" },
        );
    }

    let column_bytes: usize = schema.columns.iter().map(|c| c.width()).sum();
    let spare_bytes: usize = schema.spares.iter().map(|&(a, b)| b + 1 - a).sum();
    println!(
        "\n{} columns ({} bytes) + {} separators ({} bytes) = {} bytes",
        schema.columns.len(),
        column_bytes,
        schema.spares.len(),
        spare_bytes,
        column_bytes + spare_bytes,
    );

    if let Some(path) = out {
        let text = dump_schema(schema, DumpFormat::Yaml)?;
        write_atomic(path.as_ref(), &text)?;
        println!("layout written to {}", path);
    }
    Ok(())
}

use anyhow::{Result, anyhow};
use comfy_table::Table;
use tracing::debug;

use catalog_model::{CourseRecord, ModuleRecord, course_colors, course_emoji};
use catalog_store::CatalogStore;

use crate::cli::{ModulesArgs, SearchArgs, ShowArgs, YearArgs};
use crate::tables::{apply_table_style, header_cell};

pub fn run_list(store: &CatalogStore) -> Result<()> {
    print_course_table(store.all_courses().iter());
    println!("{} courses", store.course_count());
    Ok(())
}

pub fn run_show(store: &CatalogStore, args: &ShowArgs) -> Result<()> {
    let course = store
        .course_by_acronym(&args.acronym)
        .ok_or_else(|| anyhow!("no course with acronym {:?}", args.acronym))?;

    let colors = course_colors(&course.acronym);
    println!("{} {} ({})", course_emoji(&course.acronym), course.course_name, course.acronym);
    if !course.short_overview.is_empty() {
        println!("{}", course.short_overview);
    }
    if !course.overview.is_empty() {
        println!();
        println!("{}", course.overview);
    }
    println!();
    println!("Theme: {} / {} / {}", colors.primary, colors.secondary, colors.accent);

    let radar = course.radar_points();
    if !radar.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Aspect"), header_cell("Score")]);
        apply_table_style(&mut table);
        for point in radar {
            let score = if point.value.is_nan() {
                "-".to_string()
            } else {
                point.value.to_string()
            };
            table.add_row(vec![point.label, score]);
        }
        println!("{table}");
    }

    if !course.modules.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Year"), header_cell("Modules")]);
        apply_table_style(&mut table);
        for (label, modules) in &course.modules {
            let year = label.strip_prefix("year_").unwrap_or(label);
            table.add_row(vec![year.to_string(), modules.len().to_string()]);
        }
        println!("{table}");
    }
    Ok(())
}

pub fn run_search(store: &CatalogStore, args: &SearchArgs) -> Result<()> {
    let matches = store.search(&args.query);
    debug!(query = %args.query, match_count = matches.len(), "search complete");
    if matches.is_empty() {
        println!("no courses match {:?}", args.query);
        return Ok(());
    }
    print_course_table(matches.into_iter());
    Ok(())
}

pub fn run_year(store: &CatalogStore, args: &YearArgs) -> Result<()> {
    let matches = store.courses_by_year(args.year);
    if matches.is_empty() {
        println!("no courses offer modules in year {}", args.year);
        return Ok(());
    }
    print_course_table(matches.into_iter());
    Ok(())
}

pub fn run_modules(store: &CatalogStore, args: &ModulesArgs) -> Result<()> {
    let course = store
        .course_by_acronym(&args.acronym)
        .ok_or_else(|| anyhow!("no course with acronym {:?}", args.acronym))?;

    let rows: Vec<(String, String)> = match args.year {
        Some(year) => course
            .modules_for_year(year)
            .iter()
            .map(|module| (year.to_string(), module_label(module)))
            .collect(),
        None => course
            .flattened_modules()
            .iter()
            .map(|module| (module.year.clone(), module_label(&module.fields)))
            .collect(),
    };
    if rows.is_empty() {
        println!("no modules to list for {:?}", args.acronym);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Year"), header_cell("Module")]);
    apply_table_style(&mut table);
    for (year, label) in rows {
        table.add_row(vec![year, label]);
    }
    println!("{table}");
    Ok(())
}

fn print_course_table<'a>(courses: impl Iterator<Item = &'a CourseRecord>) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Acronym"),
        header_cell(""),
        header_cell("Course"),
        header_cell("Years"),
        header_cell("Modules"),
    ]);
    apply_table_style(&mut table);
    for course in courses {
        let years: Vec<&str> = course
            .modules
            .keys()
            .map(|label| label.strip_prefix("year_").unwrap_or(label))
            .collect();
        let module_count: usize = course.modules.values().map(Vec::len).sum();
        table.add_row(vec![
            course.acronym.clone(),
            course_emoji(&course.acronym).to_string(),
            course.course_name.clone(),
            years.join(", "),
            module_count.to_string(),
        ]);
    }
    println!("{table}");
}

/// Best-effort one-line label for an opaque module record.
fn module_label(module: &ModuleRecord) -> String {
    for key in ["name", "title", "module_name"] {
        if let Some(label) = module.0.get(key).and_then(serde_json::Value::as_str) {
            return label.to_string();
        }
    }
    serde_json::to_string(&module.0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> ModuleRecord {
        match json {
            serde_json::Value::Object(fields) => ModuleRecord(fields),
            other => panic!("module fixtures must be objects, got {other}"),
        }
    }

    #[test]
    fn module_label_prefers_name_then_title() {
        let named = record(serde_json::json!({ "name": "Databases", "title": "ignored" }));
        assert_eq!(module_label(&named), "Databases");

        let titled = record(serde_json::json!({ "title": "Compilers" }));
        assert_eq!(module_label(&titled), "Compilers");
    }

    #[test]
    fn module_label_falls_back_to_raw_json() {
        let opaque = record(serde_json::json!({ "id": 7 }));
        assert_eq!(module_label(&opaque), r#"{"id":7}"#);
    }
}

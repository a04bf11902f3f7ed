use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{AgeGroup, Food, Nutrient};
use crate::scoring::{nutrient_score, overall_score};

/// Write a per-nutrient ranking to CSV.
pub fn write_nutrient_ranking_csv(
    path: &Path,
    catalog: &Catalog,
    nutrient: &Nutrient,
    foods: &[&Food],
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["rank", "id", "name", "amount_per_100g", "unit", "rda_pct"])?;

    for (i, food) in foods.iter().enumerate() {
        let score = nutrient_score(catalog, food, &nutrient.id, AgeGroup::Adults);
        wtr.write_record([
            (i + 1).to_string(),
            food.id.clone(),
            food.name().to_string(),
            format!("{}", food.nutrient(&nutrient.id)),
            nutrient.unit.clone(),
            score.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write an overall-score ranking to CSV.
pub fn write_overall_ranking_csv(path: &Path, catalog: &Catalog, foods: &[&Food]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["rank", "id", "name", "category", "calories", "overall_score"])?;

    for (i, food) in foods.iter().enumerate() {
        let score = overall_score(catalog, food, AgeGroup::Adults);
        wtr.write_record([
            (i + 1).to_string(),
            food.id.clone(),
            food.name().to_string(),
            food.category.as_str().to_string(),
            format!("{}", food.calories),
            score.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::sample_catalog;
    use crate::scoring::top_for_nutrient;
    use tempfile::TempDir;

    #[test]
    fn test_nutrient_ranking_csv_roundtrip() {
        let catalog = sample_catalog();
        let iron = catalog.nutrient("iron").unwrap();
        let top = top_for_nutrient(catalog.foods(), "iron", 3);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("iron.csv");
        write_nutrient_ranking_csv(&path, &catalog, iron, &top).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "oats");
        assert_eq!(&rows[0][4], "mg");
    }
}

use crate::domain::entities::{Favorites, Recipe, normalize_recipes};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct WishlistExport {
    pub export_date: Option<String>,
    pub recipes: Vec<Recipe>,
}

pub struct ExportWishlist;

impl ExportWishlist {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, favorites: &Favorites, path: &Path) -> Result<WishlistExport> {
        let export = WishlistExport {
            export_date: Some(Utc::now().to_rfc3339()),
            recipes: favorites.as_slice().to_vec(),
        };

        let json = serde_json::to_string_pretty(&export)
            .context("Failed to serialize wishlist to JSON")?;

        tokio::fs::write(path, json)
            .await
            .context("Failed to write wishlist file")?;

        tracing::info!("Exported {} recipes to {}", export.recipes.len(), path.display());
        Ok(export)
    }
}

pub struct ImportWishlist;

impl ImportWishlist {
    pub fn new() -> Self {
        Self
    }

    /// Reads the recipes from a wishlist file. Merging them into the
    /// favorites is left to the caller.
    pub async fn execute(&self, path: &Path) -> Result<Vec<Recipe>> {
        let json = tokio::fs::read_to_string(path)
            .await
            .context("Failed to read wishlist file")?;

        let file: Value = serde_json::from_str(&json)
            .context("Failed to parse wishlist JSON")?;

        // Our own export file or a bare array, which is what the favorites
        // store itself contains.
        let records = match file {
            Value::Array(records) => records,
            Value::Object(mut export) => match export.remove("recipes") {
                Some(Value::Array(records)) => records,
                _ => bail!("Wishlist file has no list of recipes"),
            },
            _ => bail!("Wishlist file is neither a list nor an export"),
        };

        let (recipes, skipped) = normalize_recipes(records);
        if skipped > 0 {
            tracing::warn!("Skipped {} unusable recipes in {}", skipped, path.display());
        }

        tracing::info!("Read {} recipes from {}", recipes.len(), path.display());
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RecipeId;

    #[tokio::test]
    async fn export_then_import_returns_same_recipes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wishlist.json");
        let favorites = Favorites::from_recipes(vec![
            Recipe::new(1, "Pizza").with_servings(4),
            Recipe::new("b", "Bread"),
        ]);

        let export = ExportWishlist::new().execute(&favorites, &path).await.unwrap();
        let imported = ImportWishlist::new().execute(&path).await.unwrap();

        assert!(export.export_date.is_some());
        assert_eq!(imported, favorites.as_slice().to_vec());
    }

    #[tokio::test]
    async fn bare_array_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        tokio::fs::write(&path, r#"[{"id":12,"name":"Biryani"}]"#).await.unwrap();

        let imported = ImportWishlist::new().execute(&path).await.unwrap();

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].id, RecipeId::Number(12));
    }

    #[tokio::test]
    async fn odd_records_do_not_fail_the_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wishlist.json");
        tokio::fs::write(
            &path,
            r#"{"export_date":null,"recipes":[{"id":1,"name":"Soup","ingredients":null},{"name":"no id"}]}"#,
        )
        .await
        .unwrap();

        let imported = ImportWishlist::new().execute(&path).await.unwrap();

        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].name, "Soup");
    }

    #[tokio::test]
    async fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(ImportWishlist::new().execute(&dir.path().join("missing.json")).await.is_err());

        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "{\"recipes\": 3}").await.unwrap();
        assert!(ImportWishlist::new().execute(&path).await.is_err());

        tokio::fs::write(&path, "\"pizza\"").await.unwrap();
        assert!(ImportWishlist::new().execute(&path).await.is_err());
    }
}

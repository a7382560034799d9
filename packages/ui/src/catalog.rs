//! Client-side narrowing of a loaded product page.

use api::Product;

/// Products whose name contains `search` (case-insensitive) and, when a
/// category is given, whose category name matches it exactly.
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    category: Option<&str>,
) -> Vec<&'a Product> {
    let needle = search.trim().to_lowercase();
    products
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| match category {
            Some(category) => p.category_name.as_deref() == Some(category),
            None => true,
        })
        .collect()
}

use artistly_core::Catalog;

/// Print the category list with the number of artists in each.
pub fn list_categories(catalog: &Catalog) {
    println!("Artist Categories\n");
    for (info, count) in catalog.category_counts() {
        let icon = info.icon.as_deref().unwrap_or(" ");
        println!("  {icon} {:<10} {:<9} {count} artist(s)", info.name, info.id.id());
        if let Some(description) = &info.description {
            println!("      {description}");
        }
    }
}

//! Content Module
//!
//! Built-in label content, used when no translation rows file is configured.

use serde_json::json;

use crate::translations::{Language, TranslationTable};

/// Sections shipped with the binary
pub const BUILTIN_SECTIONS: [&str; 3] = ["common", "categories", "products"];

/// Builds the table of bundled labels.
pub fn builtin_table() -> TranslationTable {
    let mut table = TranslationTable::new();

    table.insert_section(
        "common",
        Language::Id,
        json!({
            "search": "Cari",
            "filter": "Filter",
            "reset": "Reset",
            "cart": "Keranjang",
            "add": "Tambah",
            "total": "Total",
            "checkout": "Checkout",
            "home": "Beranda",
            "catalog": "Katalog",
            "about": "Tentang Kami",
            "consultation": "Konsultasi Gratis",
        }),
    );
    table.insert_section(
        "common",
        Language::En,
        json!({
            "search": "Search",
            "filter": "Filter",
            "reset": "Reset",
            "cart": "Cart",
            "add": "Add",
            "total": "Total",
            "checkout": "Checkout",
            "home": "Home",
            "catalog": "Catalog",
            "about": "About Us",
            "consultation": "Free Consultation",
        }),
    );

    table.insert_section(
        "categories",
        Language::Id,
        json!({
            "Ruang Tamu": "Ruang Tamu",
            "Kamar Tidur": "Kamar Tidur",
            "Ruang Makan": "Ruang Makan",
            "Ruang Kerja": "Ruang Kerja",
            "Storage": "Penyimpanan",
        }),
    );
    table.insert_section(
        "categories",
        Language::En,
        json!({
            "Ruang Tamu": "Living Room",
            "Kamar Tidur": "Bedroom",
            "Ruang Makan": "Dining Room",
            "Ruang Kerja": "Office",
            "Storage": "Storage",
        }),
    );

    table.insert_section(
        "products",
        Language::Id,
        json!({
            "searchPlaceholder": "Cari furniture...",
            "noResults": "Tidak ada furniture yang ditemukan",
            "resetFilter": "Reset Filter",
            "brand": "Merek",
            "sort": {
                "popularity": "Popularitas",
                "rating": "Rating Tertinggi",
                "priceLow": "Harga: Rendah ke Tinggi",
                "priceHigh": "Harga: Tinggi ke Rendah",
            },
        }),
    );
    table.insert_section(
        "products",
        Language::En,
        json!({
            "searchPlaceholder": "Search furniture...",
            "noResults": "No furniture found",
            "resetFilter": "Reset Filter",
            "brand": "Brand",
            "sort": {
                "popularity": "Popularity",
                "rating": "Highest Rating",
                "priceLow": "Price: Low to High",
                "priceHigh": "Price: High to Low",
            },
        }),
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sections() {
        let table = builtin_table();
        for section in BUILTIN_SECTIONS {
            assert!(table.has_section(section), "missing section {section}");
        }
    }

    #[test]
    fn test_builtin_lookups() {
        let table = builtin_table();

        assert_eq!(table.lookup("common", Language::Id, "home").unwrap(), "Beranda");
        assert_eq!(table.lookup("common", Language::En, "home").unwrap(), "Home");
        assert_eq!(table.lookup("categories", Language::En, "Kamar Tidur").unwrap(), "Bedroom");
        assert_eq!(
            table.lookup("products", Language::Id, "sort.priceLow").unwrap(),
            "Harga: Rendah ke Tinggi"
        );
    }

    #[test]
    fn test_builtin_languages_have_same_keys() {
        let table = builtin_table();
        let id = table.fetch_language(Language::Id);
        let en = table.fetch_language(Language::En);

        for section in BUILTIN_SECTIONS {
            let id_keys: Vec<_> = id[section].as_object().unwrap().keys().collect();
            let en_keys: Vec<_> = en[section].as_object().unwrap().keys().collect();
            assert_eq!(id_keys, en_keys, "key mismatch in {section}");
        }
    }
}

//! Output formatting for the CLI.

use console::{pad_str, style, Alignment};
use cosmetica_catalog::catalog::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row. Cells are padded or cut to their column width.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print the product table.
    pub fn product_table(&self, products: &[&Product], currency: &str) {
        const WIDTHS: [usize; 6] = [18, 30, 16, 14, 10, 12];

        self.table_row(
            &["ID", "NAME", "BRAND", "CATEGORY", "PRICE", "STOCK"],
            &WIDTHS,
        );
        self.info(&"-".repeat(WIDTHS.iter().sum::<usize>() + 2 * (WIDTHS.len() - 1)));

        for product in products {
            let price = format_price(currency, product.price);
            let stock = stock_badge(product.in_stock);
            self.table_row(
                &[
                    product.id.as_str(),
                    &product.name,
                    &product.brand,
                    product.category.as_str(),
                    &price,
                    &stock,
                ],
                &WIDTHS,
            );
        }
    }

    /// Print every field of one product.
    pub fn product_detail(&self, product: &Product, currency: &str) {
        self.header(&product.name);
        self.kv("ID", product.id.as_str());
        self.kv("Brand", &product.brand);
        self.kv("Category", product.category.as_str());
        self.kv("Price", &format_price(currency, product.price));
        self.kv("Stock", &stock_badge(product.in_stock));
        if let Some(rating) = product.rating {
            let reviews = product
                .reviews
                .map(|n| format!(" ({} reviews)", n))
                .unwrap_or_default();
            self.kv("Rating", &format!("{:.1}/5{}", rating, reviews));
        }
        if let Some(volume) = &product.volume {
            self.kv("Volume", volume);
        }
        if !product.skin_types().is_empty() {
            let names: Vec<&str> = product.skin_types().iter().map(|s| s.as_str()).collect();
            self.kv("Skin types", &names.join(", "));
        }
        self.kv("Image", &product.image_url);

        self.info("");
        self.info(&product.description);

        self.bullet_section("Ingredients", product.ingredients.as_deref());
        self.bullet_section("Benefits", product.benefits.as_deref());
        if let Some(usage) = &product.usage {
            self.header("How to use");
            self.info(usage);
        }
    }

    fn bullet_section(&self, title: &str, items: Option<&[String]>) {
        let Some(items) = items.filter(|items| !items.is_empty()) else {
            return;
        };
        self.header(title);
        for item in items {
            self.list_item(item);
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths.iter())
        .map(|(col, width)| pad_str(col, *width, Alignment::Left, Some("…")).into_owned())
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a price with the configured currency symbol.
pub fn format_price(symbol: &str, price: f64) -> String {
    format!("{}{:.2}", symbol, price)
}

/// Stock badge for availability.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("In Stock").green().to_string()
    } else {
        style("Out of Stock").red().to_string()
    }
}

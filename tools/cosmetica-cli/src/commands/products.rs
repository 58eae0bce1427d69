//! Product browsing and admin editing commands.

use anyhow::{bail, Context as _, Result};
use cosmetica_catalog::catalog::{parse_list, ProductDraft};
use cosmetica_catalog::search::Criteria;
use cosmetica_catalog::ProductId;
use dialoguer::Confirm;

use super::{AddArgs, ListArgs, OptionalFields, ProductsArgs, ProductsCommand, UpdateArgs};
use crate::context::Context;
use crate::output::format_price;

const ADMIN_HINT: &str = "This command needs an admin session (`cosmetica login --email <EMAIL> --role admin`)";

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List(list) => list_products(list, ctx),
        ProductsCommand::Show { id } => show_product(&id, ctx),
        ProductsCommand::Add(add) => add_product(add, ctx),
        ProductsCommand::Update(update) => update_product(update, ctx),
        ProductsCommand::Delete { id, yes } => delete_product(&id, yes, ctx),
        ProductsCommand::Stats => show_stats(ctx),
    }
}

fn list_products(args: ListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let criteria = criteria_from(args);
    let outcome = store.search(&criteria);

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    ctx.output.header("Products");
    for label in criteria.active_filters() {
        ctx.output.list_item(&label);
    }

    if outcome.is_empty() {
        ctx.output.info("No products found. Try adjusting your search or filters.");
    } else {
        ctx.output
            .product_table(&outcome.products, &ctx.config.display.currency_symbol);
    }

    ctx.output.info("");
    ctx.output.info(&outcome.summary());

    Ok(())
}

fn show_product(id: &str, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let Some(product) = store.get(&ProductId::new(id)) else {
        bail!("Product '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
    } else {
        ctx.output
            .product_detail(product, &ctx.config.display.currency_symbol);
    }

    Ok(())
}

fn add_product(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let gate = ctx.open_session()?;
    let mut admin = gate.admin(&mut store).context(ADMIN_HINT)?;

    let mut draft = ProductDraft {
        name: args.name,
        description: args.description,
        brand: args.brand,
        price: args.price,
        ..ProductDraft::default()
    };
    apply_fields(&mut draft, args.fields);

    let product = admin.add(draft).context("Failed to add product")?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
    } else {
        ctx.output
            .success(&format!("Added {} ({})", product.name, product.id));
    }

    Ok(())
}

fn update_product(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let gate = ctx.open_session()?;
    gate.require_admin().context(ADMIN_HINT)?;

    let id = ProductId::new(args.id);
    let Some(existing) = store.get(&id) else {
        bail!("Product '{}' not found", id);
    };

    let mut draft = ProductDraft::from_product(existing);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(brand) = args.brand {
        draft.brand = brand;
    }
    if let Some(price) = args.price {
        draft.price = price;
    }
    apply_fields(&mut draft, args.fields);

    let mut admin = gate.admin(&mut store).context(ADMIN_HINT)?;
    let Some(product) = admin.update(&id, draft).context("Failed to update product")? else {
        bail!("Product '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
    } else {
        ctx.output
            .success(&format!("Updated {} ({})", product.name, product.id));
    }

    Ok(())
}

fn delete_product(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    let gate = ctx.open_session()?;
    gate.require_admin().context(ADMIN_HINT)?;

    let id = ProductId::new(id);
    let Some(name) = store.get(&id).map(|p| p.name.clone()) else {
        ctx.output.warn(&format!("No product with ID '{}'", id));
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} ({})?", name, id))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Delete cancelled");
            return Ok(());
        }
    }

    let removed = gate
        .admin(&mut store)
        .context(ADMIN_HINT)?
        .delete(&id)
        .context("Failed to delete product")?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "id": id, "deleted": removed }));
    } else if removed {
        ctx.output.success(&format!("Deleted {} ({})", name, id));
    }

    Ok(())
}

fn show_stats(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let stats = store.stats();

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    let currency = &ctx.config.display.currency_symbol;
    let value: f64 = store.list().iter().map(|p| p.price).sum();

    ctx.output.header("Catalog");
    ctx.output.kv("Total products", &stats.total.to_string());
    ctx.output.kv("In stock", &stats.in_stock.to_string());
    ctx.output.kv("Out of stock", &stats.out_of_stock.to_string());
    ctx.output.kv("Categories", &stats.categories.to_string());
    ctx.output.kv("Sum of prices", &format_price(currency, value));

    Ok(())
}

fn criteria_from(args: ListArgs) -> Criteria {
    let mut criteria = Criteria::new();
    if let Some(text) = args.search {
        criteria = criteria.with_text(text);
    }
    if let Some(category) = args.category {
        criteria = criteria.with_category(category);
    }
    if let Some(skin_type) = args.skin_type {
        criteria = criteria.with_skin_type(skin_type);
    }
    criteria
}

/// Copy every field given on the command line into the draft.
fn apply_fields(draft: &mut ProductDraft, fields: OptionalFields) {
    if let Some(category) = fields.category {
        draft.category = category;
    }
    if let Some(image_url) = fields.image_url {
        draft.image_url = image_url;
    }
    if fields.in_stock {
        draft.in_stock = true;
    }
    if fields.out_of_stock {
        draft.in_stock = false;
    }
    if let Some(ingredients) = fields.ingredients {
        draft.ingredients = Some(parse_list(&ingredients));
    }
    if let Some(benefits) = fields.benefits {
        draft.benefits = Some(parse_list(&benefits));
    }
    if let Some(skin_types) = fields.skin_types {
        draft.skin_type = Some(skin_types);
    }
    if let Some(usage) = fields.usage {
        draft.usage = Some(usage);
    }
    if let Some(volume) = fields.volume {
        draft.volume = Some(volume);
    }
    if let Some(rating) = fields.rating {
        draft.rating = Some(rating);
    }
    if let Some(reviews) = fields.reviews {
        draft.reviews = Some(reviews);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmetica_catalog::catalog::{ProductCategory, SkinType};
    use cosmetica_catalog::search::Facet;

    #[test]
    fn test_criteria_from_empty_args() {
        let criteria = criteria_from(ListArgs {
            search: None,
            category: None,
            skin_type: None,
        });
        assert!(criteria.is_unfiltered());
    }

    #[test]
    fn test_criteria_from_args() {
        let criteria = criteria_from(ListArgs {
            search: Some("vitamin c".to_string()),
            category: Some(ProductCategory::Serums),
            skin_type: Some(SkinType::Dry),
        });
        assert_eq!(criteria.text, "vitamin c");
        assert_eq!(criteria.category, Facet::Only(ProductCategory::Serums));
        assert_eq!(criteria.skin_type, Facet::Only(SkinType::Dry));
    }

    #[test]
    fn test_apply_fields_keeps_unset_values() {
        let mut draft = ProductDraft {
            name: "Night Cream".to_string(),
            usage: Some("Apply at night".to_string()),
            rating: Some(4.2),
            ..ProductDraft::default()
        };

        apply_fields(
            &mut draft,
            OptionalFields {
                out_of_stock: true,
                ingredients: Some("Retinol, Squalane,".to_string()),
                skin_types: Some(vec![SkinType::Mature]),
                ..OptionalFields::default()
            },
        );

        assert!(!draft.in_stock);
        assert_eq!(
            draft.ingredients,
            Some(vec!["Retinol".to_string(), "Squalane".to_string()])
        );
        assert_eq!(draft.skin_type, Some(vec![SkinType::Mature]));
        assert_eq!(draft.usage.as_deref(), Some("Apply at night"));
        assert_eq!(draft.rating, Some(4.2));
        assert_eq!(draft.category, ProductCategory::Skincare);
        assert_eq!(draft.benefits, None);
    }

    #[test]
    fn test_apply_fields_in_stock_flag() {
        let mut draft = ProductDraft {
            in_stock: false,
            ..ProductDraft::default()
        };
        apply_fields(
            &mut draft,
            OptionalFields {
                in_stock: true,
                ..OptionalFields::default()
            },
        );
        assert!(draft.in_stock);
    }
}

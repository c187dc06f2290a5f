use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const SPECIES: [Species; 7] = [
    Species::Dog,
    Species::Cat,
    Species::Bird,
    Species::Fish,
    Species::SmallPet,
    Species::Reptile,
    Species::Any,
];

const CATEGORIES: [ProductCategory; 6] = [
    ProductCategory::Food,
    ProductCategory::Toys,
    ProductCategory::Accessories,
    ProductCategory::Health,
    ProductCategory::Grooming,
    ProductCategory::Habitat,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Species::Enum)
                    .values(SPECIES)
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(ProductCategory::Enum)
                    .values(CATEGORIES)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_uuid(Products::Id))
                    .col(string_len(Products::Name, 120))
                    .col(text(Products::Description).default(""))
                    .col(
                        ColumnDef::new(Products::Species)
                            .enumeration(Species::Enum, SPECIES)
                            .not_null()
                            .default("any"),
                    )
                    .col(
                        ColumnDef::new(Products::Category)
                            .enumeration(ProductCategory::Enum, CATEGORIES)
                            .not_null(),
                    )
                    .col(big_integer(Products::PriceCents))
                    .col(integer(Products::Stock).default(0))
                    .col(string_len_uniq(Products::Sku, 64))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_species")
                    .table(Products::Table)
                    .col(Products::Species)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_name")
                    .table(Products::Table)
                    .col(Products::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE products
                    ADD CONSTRAINT products_price_cents_non_negative CHECK (price_cents >= 0),
                    ADD CONSTRAINT products_stock_non_negative CHECK (stock >= 0)
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER products_touch_updated_at
                    BEFORE UPDATE ON products
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS products_touch_updated_at ON products")
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProductCategory::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Species::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Species,
    Category,
    PriceCents,
    Stock,
    Sku,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Clone, Copy)]
enum Species {
    #[sea_orm(iden = "species")]
    Enum,
    #[sea_orm(iden = "dog")]
    Dog,
    #[sea_orm(iden = "cat")]
    Cat,
    #[sea_orm(iden = "bird")]
    Bird,
    #[sea_orm(iden = "fish")]
    Fish,
    #[sea_orm(iden = "small_pet")]
    SmallPet,
    #[sea_orm(iden = "reptile")]
    Reptile,
    #[sea_orm(iden = "any")]
    Any,
}

#[derive(DeriveIden, Clone, Copy)]
enum ProductCategory {
    #[sea_orm(iden = "product_category")]
    Enum,
    #[sea_orm(iden = "food")]
    Food,
    #[sea_orm(iden = "toys")]
    Toys,
    #[sea_orm(iden = "accessories")]
    Accessories,
    #[sea_orm(iden = "health")]
    Health,
    #[sea_orm(iden = "grooming")]
    Grooming,
    #[sea_orm(iden = "habitat")]
    Habitat,
}

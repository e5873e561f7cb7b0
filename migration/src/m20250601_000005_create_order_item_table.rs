use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_book_table::Book;
use super::m20250601_000004_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer_null(OrderItem::BookId))
                    .col(string(OrderItem::Title))
                    .col(integer(OrderItem::Quantity))
                    .col(double(OrderItem::UnitPrice))
                    .col(double(OrderItem::LineTotal))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // Deleting a book keeps the purchase history; the snapshot columns
                    // still describe the line.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_book_id")
                            .from(OrderItem::Table, OrderItem::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    Id,
    OrderId,
    BookId,
    Title,
    Quantity,
    UnitPrice,
    LineTotal,
}

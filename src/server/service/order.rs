//! Order placement and lookup.
//!
//! Placement reserves stock for every line and records the order inside one database
//! transaction. Each reservation is a compare-and-swap on the book's stock, so concurrent
//! orders can never both consume the same copies; returning early with an error drops the
//! transaction, which rolls back every reservation made so far.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{book::BookRepository, order::OrderRepository},
    error::AppError,
    model::{
        book::Book,
        order::{NewOrderItem, Order, OrderLine, PlaceOrderParams},
    },
};

/// Attempts at reserving stock for one line before giving up with 409.
const MAX_STOCK_ATTEMPTS: usize = 3;

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places an order for the caller.
    ///
    /// Lines are processed in request order. For each line the book is loaded, its stock
    /// checked and decremented, and `price * quantity` added to the total. The order and
    /// its item snapshots are then inserted and the transaction committed.
    ///
    /// # Returns
    /// - `Ok(Order)` - The placed order with its items
    /// - `Err(AppError::NotFound)` - `"Book not found: {id}"`; nothing was changed
    /// - `Err(AppError::BadRequest)` - `"Insufficient stock for book: {id}"`; nothing was changed
    /// - `Err(AppError::Conflict)` - Stock kept changing underneath the reservation
    pub async fn place(&self, user_id: i32, params: PlaceOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let book_repo = BookRepository::new(&txn);
        let mut total_price = 0.0;
        let mut items = Vec::with_capacity(params.lines.len());

        for line in &params.lines {
            let book = reserve_stock(&book_repo, line).await?;

            let line_total = book.price * f64::from(line.quantity);
            total_price += line_total;

            items.push(NewOrderItem {
                book_id: book.id,
                title: book.title,
                quantity: line.quantity,
                unit_price: book.price,
                line_total,
            });
        }

        let order = OrderRepository::new(&txn)
            .create(user_id, total_price, items)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} placed order {} with {} item(s), total {:.2}",
            user_id,
            order.id,
            order.items.len(),
            order.total_price
        );

        Ok(order)
    }

    /// Gets the caller's orders, newest first.
    pub async fn get_orders(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        let orders = OrderRepository::new(self.db).find_by_user(user_id).await?;
        Ok(orders)
    }

    /// Gets one of the caller's orders.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order belongs to the caller
    /// - `Err(AppError::NotFound)` - No order with that id
    /// - `Err(AppError::Forbidden)` - The order belongs to someone else
    pub async fn get_order(&self, user_id: i32, order_id: i32) -> Result<Order, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if order.user_id != user_id {
            tracing::debug!(
                "User {} attempted to view order {} of user {}",
                user_id,
                order.id,
                order.user_id
            );
            return Err(AppError::Forbidden(
                "You are not authorized to view this order".to_string(),
            ));
        }

        Ok(order)
    }
}

/// Decrements a book's stock by the line's quantity.
///
/// Re-reads the book after a lost race and checks the stock again.
///
/// # Returns
/// - `Ok(Book)` - The book as read before the successful decrement
async fn reserve_stock<C: ConnectionTrait>(
    book_repo: &BookRepository<'_, C>,
    line: &OrderLine,
) -> Result<Book, AppError> {
    for _ in 0..MAX_STOCK_ATTEMPTS {
        let book = book_repo
            .find_by_id(line.book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book not found: {}", line.book_id)))?;

        if book.stock < line.quantity {
            return Err(AppError::BadRequest(format!(
                "Insufficient stock for book: {}",
                line.book_id
            )));
        }

        if book_repo
            .compare_and_set_stock(book.id, book.stock, book.stock - line.quantity)
            .await?
        {
            return Ok(book);
        }

        tracing::debug!("Stock of book {} changed during reservation, retrying", book.id);
    }

    Err(AppError::Conflict(format!(
        "Stock for book {} changed while placing the order, please retry",
        line.book_id
    )))
}

mod book;
mod cart_item;
mod order;
mod review;
mod user;

pub mod create_product;
pub mod get_product;
pub mod list_products;

#[cfg(test)]
pub mod test_support;
